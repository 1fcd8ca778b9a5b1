pub mod branch;
pub mod franchise;
pub mod product;
pub mod top;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use stockpile_common::config::{Config, DEFAULT_DATA_FILE};
use stockpile_core::store::DocumentStore;
use stockpile_core::wiring::Services;
use tracing::debug;

#[derive(Parser)]
#[command(name = "stockpile")]
#[command(about = "Stock keeping for franchises, their branches and products.")]
pub struct CommandLine {
    /// JSON file holding the store
    #[arg(short, long, global = true, env = "STOCKPILE_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Print less (-q results only, -qq errors only)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create, rename or look up franchises
    #[command(alias = "f", subcommand)]
    Franchise(FranchiseAction),
    /// Create, rename or look up branches of a franchise
    #[command(alias = "b", subcommand)]
    Branch(BranchAction),
    /// Add, remove, restock or rename products of a branch
    #[command(alias = "p", subcommand)]
    Product(ProductAction),
    /// Show the highest-stocked product of every branch of a franchise
    #[command(alias = "t")]
    Top { franchise_id: String },
}

#[derive(Subcommand)]
pub enum FranchiseAction {
    Create {
        name: String,
    },
    Rename {
        franchise_id: String,
        name: String,
    },
    Exists {
        franchise_id: String,
    },
}

#[derive(Subcommand)]
pub enum BranchAction {
    Create {
        franchise_id: String,
        name: String,
    },
    Rename {
        franchise_id: String,
        branch_id: String,
        name: String,
    },
    Exists {
        franchise_id: String,
        branch_id: String,
    },
}

#[derive(Subcommand)]
pub enum ProductAction {
    Add {
        franchise_id: String,
        branch_id: String,
        name: String,
        #[arg(allow_negative_numbers = true)]
        stock: i32,
    },
    Remove {
        franchise_id: String,
        branch_id: String,
        product_id: String,
    },
    Stock {
        franchise_id: String,
        branch_id: String,
        product_id: String,
        #[arg(allow_negative_numbers = true)]
        stock: i32,
    },
    Rename {
        franchise_id: String,
        branch_id: String,
        product_id: String,
        name: String,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            data_file: self.data.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

pub async fn open_services(cfg: &Config) -> anyhow::Result<Services> {
    debug!("Opening document store at {}", cfg.data_file.display());
    let store = DocumentStore::open(&cfg.data_file)
        .await
        .with_context(|| format!("cannot open {}", cfg.data_file.display()))?;
    Ok(Services::over(Arc::new(store)))
}
