use stockpile_common::config::Config;
use stockpile_common::error::ServiceResult;
use stockpile_common::models::NewProduct;
use stockpile_common::ports::ProductPort;

use super::ProductAction;
use crate::terminal::print;

pub async fn product(
    action: ProductAction,
    products: &dyn ProductPort,
    cfg: &Config,
) -> ServiceResult<()> {
    match action {
        ProductAction::Add {
            franchise_id,
            branch_id,
            name,
            stock,
        } => {
            print::header("adding product", cfg.quiet);
            let product = products
                .create_product(&franchise_id, &branch_id, NewProduct::new(name, stock))
                .await?;
            print::product(&product);
        }
        ProductAction::Remove {
            franchise_id,
            branch_id,
            product_id,
        } => {
            print::header("removing product", cfg.quiet);
            products
                .delete_product(&franchise_id, &branch_id, &product_id)
                .await?;
            print::done(&format!("Product {} removed", product_id));
        }
        ProductAction::Stock {
            franchise_id,
            branch_id,
            product_id,
            stock,
        } => {
            print::header("updating stock", cfg.quiet);
            let product = products
                .update_product_stock(&franchise_id, &branch_id, &product_id, stock)
                .await?;
            print::product(&product);
        }
        ProductAction::Rename {
            franchise_id,
            branch_id,
            product_id,
            name,
        } => {
            print::header("renaming product", cfg.quiet);
            let product = products
                .update_product_name(&franchise_id, &branch_id, &product_id, &name)
                .await?;
            print::product(&product);
        }
    }
    Ok(())
}
