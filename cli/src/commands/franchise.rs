use stockpile_common::config::Config;
use stockpile_common::error::ServiceResult;
use stockpile_common::ports::FranchisePort;

use super::FranchiseAction;
use crate::terminal::print;

pub async fn franchise(
    action: FranchiseAction,
    franchises: &dyn FranchisePort,
    cfg: &Config,
) -> ServiceResult<()> {
    match action {
        FranchiseAction::Create { name } => {
            print::header("creating franchise", cfg.quiet);
            let franchise = franchises.create_franchise(&name).await?;
            print::franchise(&franchise);
        }
        FranchiseAction::Rename { franchise_id, name } => {
            print::header("renaming franchise", cfg.quiet);
            match franchises.update_franchise_name(&franchise_id, &name).await? {
                Some(franchise) => print::franchise(&franchise),
                None => print::not_found(&format!("Franchise {}", franchise_id)),
            }
        }
        FranchiseAction::Exists { franchise_id } => {
            print::header("franchise lookup", cfg.quiet);
            let exists = franchises.exists_franchise(&franchise_id).await?;
            print::exists("Exists", exists);
        }
    }
    Ok(())
}
