use stockpile_common::config::Config;
use stockpile_common::error::ServiceResult;
use stockpile_common::ports::BranchPort;

use super::BranchAction;
use crate::terminal::print;

pub async fn branch(
    action: BranchAction,
    branches: &dyn BranchPort,
    cfg: &Config,
) -> ServiceResult<()> {
    match action {
        BranchAction::Create { franchise_id, name } => {
            print::header("creating branch", cfg.quiet);
            let branch = branches.create_branch(&franchise_id, &name).await?;
            print::branch(&branch);
        }
        BranchAction::Rename {
            franchise_id,
            branch_id,
            name,
        } => {
            print::header("renaming branch", cfg.quiet);
            match branches
                .update_branch_name(&franchise_id, &branch_id, &name)
                .await?
            {
                Some(branch) => print::branch(&branch),
                None => print::not_found(&format!(
                    "Branch {} of franchise {}",
                    branch_id, franchise_id
                )),
            }
        }
        BranchAction::Exists {
            franchise_id,
            branch_id,
        } => {
            print::header("branch lookup", cfg.quiet);
            let exists = branches.exists_branch(&franchise_id, &branch_id).await?;
            print::exists("Exists", exists);
        }
    }
    Ok(())
}
