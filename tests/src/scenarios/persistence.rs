use std::sync::Arc;

use stockpile_common::models::NewProduct;
use stockpile_core::store::DocumentStore;
use stockpile_core::wiring::Services;

#[tokio::test]
async fn catalog_survives_restart() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("stockpile.json");

    let (franchise_id, branch_id, product_id) = {
        let services = Services::over(Arc::new(DocumentStore::open(&path).await?));
        let franchise = services.franchises.create_franchise("Pizzeria").await?;
        let branch = services.branches.create_branch(&franchise.id, "North").await?;
        let pizza = services
            .products
            .create_product(&franchise.id, &branch.id, NewProduct::new("Pizza", 5))
            .await?;
        services
            .products
            .update_product_stock(&franchise.id, &branch.id, &pizza.id, 8)
            .await?;
        (franchise.id, branch.id, pizza.id)
    };

    let services = Services::over(Arc::new(DocumentStore::open(&path).await?));

    assert!(services.franchises.exists_franchise(&franchise_id).await?);
    assert!(services.branches.exists_branch(&franchise_id, &branch_id).await?);

    let top = services
        .products
        .get_top_products_by_franchise(&franchise_id)
        .await?;
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id, product_id);
    assert_eq!(top[0].stock, 8);
    Ok(())
}

#[tokio::test]
async fn deletions_are_persisted() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("stockpile.json");

    let franchise_id = {
        let services = Services::over(Arc::new(DocumentStore::open(&path).await?));
        let franchise = services.franchises.create_franchise("Pizzeria").await?;
        let branch = services.branches.create_branch(&franchise.id, "North").await?;
        let pizza = services
            .products
            .create_product(&franchise.id, &branch.id, NewProduct::new("Pizza", 5))
            .await?;
        services
            .products
            .delete_product(&franchise.id, &branch.id, &pizza.id)
            .await?;
        franchise.id
    };

    let services = Services::over(Arc::new(DocumentStore::open(&path).await?));
    let top = services
        .products
        .get_top_products_by_franchise(&franchise_id)
        .await?;
    assert!(top.is_empty());
    Ok(())
}
