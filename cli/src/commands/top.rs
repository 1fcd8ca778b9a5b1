use stockpile_common::config::Config;
use stockpile_common::error::ServiceResult;
use stockpile_common::ports::ProductPort;

use crate::terminal::print;

pub async fn top(
    franchise_id: String,
    products: &dyn ProductPort,
    cfg: &Config,
) -> ServiceResult<()> {
    print::header("top products", cfg.quiet);

    let top = products.get_top_products_by_franchise(&franchise_id).await?;
    if top.is_empty() {
        print::no_results();
        return Ok(());
    }

    print::top_products(&top);
    if cfg.quiet == 0 {
        print::fat_separator();
        print::print_status(format!("{} branches with stock on record", top.len()));
    }
    Ok(())
}
