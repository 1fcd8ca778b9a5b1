mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, branch, franchise, product, top};
use stockpile_common::error::ServiceError;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg)?;
    let services = commands::open_services(&cfg).await?;

    let outcome = match commands.command {
        Commands::Franchise(action) => {
            franchise::franchise(action, &*services.franchises, &cfg).await
        }
        Commands::Branch(action) => branch::branch(action, &*services.branches, &cfg).await,
        Commands::Product(action) => {
            product::product(action, &*services.products, &cfg).await
        }
        Commands::Top { franchise_id } => {
            top::top(franchise_id, &*services.products, &cfg).await
        }
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(ServiceError::InvalidArgument(reason)) => {
            print::rejected(&reason);
            Ok(ExitCode::from(2))
        }
        Err(ServiceError::Unexpected(source)) => {
            Err(anyhow::Error::new(source).context("document store failed"))
        }
    }
}
