use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use stockpile_common::models::{Branch, Franchise, Product};
use tracing::{error, info};
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "stockpile::print";

const KEY_WIDTH: usize = 9;

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

/// Routes program output through the subscriber so it interleaves with logs.
pub fn print(msg: &str) {
    info!(target: "stockpile::print", raw_msg = msg);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    let output: String = format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
    print(&output);
}

pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(KEY_WIDTH.saturating_sub(key.len())).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

fn stock_value(stock: i32) -> ColoredString {
    let color = if stock == 0 { colors::EMPTY_STOCK } else { colors::STOCK };
    stock.to_string().color(color).bold()
}

pub fn franchise(franchise: &Franchise) {
    aligned_line("ID", franchise.id.as_str().color(colors::ACCENT));
    aligned_line("Name", franchise.name.as_str());
}

pub fn branch(branch: &Branch) {
    aligned_line("ID", branch.id.as_str().color(colors::ACCENT));
    aligned_line("Franchise", branch.franchise_id.as_str());
    aligned_line("Name", branch.name.as_str());
}

pub fn product(product: &Product) {
    aligned_line("ID", product.id.as_str().color(colors::ACCENT));
    aligned_line("Franchise", product.franchise_id.as_str());
    aligned_line("Branch", product.branch_id.as_str());
    aligned_line("Name", product.name.as_str());
    aligned_line("Stock", stock_value(product.stock));
}

pub fn top_products(products: &[Product]) {
    for (idx, product) in products.iter().enumerate() {
        tree_head(idx, &product.name);
        as_tree_one_level(vec![
            ("Branch".to_string(), product.branch_id.normal()),
            ("Product".to_string(), product.id.color(colors::ACCENT)),
            ("Stock".to_string(), stock_value(product.stock)),
        ]);
    }
}

pub fn exists(what: &str, exists: bool) {
    let verdict: ColoredString = if exists {
        "yes".green().bold()
    } else {
        "no".red().bold()
    };
    aligned_line(what, verdict);
}

pub fn done(msg: &str) {
    print_status(msg.green().to_string());
}

pub fn not_found(what: &str) {
    print_status(format!("{} {}", what, "not found".yellow().bold()));
}

pub fn no_results() {
    print_status("No products stocked in this franchise".yellow().to_string());
}

/// Logged at error level so it survives `-qq`.
pub fn rejected(reason: &str) {
    error!("Request rejected: {}", reason);
}
