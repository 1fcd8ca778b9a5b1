use stockpile_common::models::NewProduct;

use super::{in_memory_services, rejection};

#[tokio::test]
async fn franchise_creation_returns_generated_id() -> anyhow::Result<()> {
    let services = in_memory_services();

    let franchise = services.franchises.create_franchise("Pizzeria").await?;

    assert!(!franchise.id.is_empty());
    assert_eq!(franchise.name, "Pizzeria");
    assert!(services.franchises.exists_franchise(&franchise.id).await?);
    Ok(())
}

#[tokio::test]
async fn branch_needs_existing_franchise() -> anyhow::Result<()> {
    let services = in_memory_services();
    let franchise = services.franchises.create_franchise("Pizzeria").await?;

    let branch = services.branches.create_branch(&franchise.id, "North").await?;
    assert_eq!(branch.name, "North");
    assert_eq!(branch.franchise_id, franchise.id);

    let err = services
        .branches
        .create_branch("does-not-exist", "North")
        .await
        .unwrap_err();
    assert_eq!(rejection(err), "Franchise does not exist");
    Ok(())
}

#[tokio::test]
async fn rejected_stock_update_leaves_stock_alone() -> anyhow::Result<()> {
    let services = in_memory_services();
    let franchise = services.franchises.create_franchise("Pizzeria").await?;
    let branch = services.branches.create_branch(&franchise.id, "North").await?;

    let pizza = services
        .products
        .create_product(&franchise.id, &branch.id, NewProduct::new("Pizza", 5))
        .await?;
    assert_eq!(pizza.stock, 5);

    let updated = services
        .products
        .update_product_stock(&franchise.id, &branch.id, &pizza.id, 3)
        .await?;
    assert_eq!(updated.stock, 3);

    let err = services
        .products
        .update_product_stock(&franchise.id, &branch.id, &pizza.id, -1)
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    let top = services
        .products
        .get_top_products_by_franchise(&franchise.id)
        .await?;
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].stock, 3);
    Ok(())
}

#[tokio::test]
async fn top_product_per_branch() -> anyhow::Result<()> {
    let services = in_memory_services();
    let franchise = services.franchises.create_franchise("Pizzeria").await?;
    let branch_a = services.branches.create_branch(&franchise.id, "A").await?;
    let branch_b = services.branches.create_branch(&franchise.id, "B").await?;

    for (branch_id, name, stock) in [
        (&branch_a.id, "Margherita", 5),
        (&branch_a.id, "Marinara", 10),
        (&branch_b.id, "Calzone", 20),
    ] {
        services
            .products
            .create_product(&franchise.id, branch_id, NewProduct::new(name, stock))
            .await?;
    }

    let top = services
        .products
        .get_top_products_by_franchise(&franchise.id)
        .await?;

    assert_eq!(top.len(), 2);
    assert!(
        top.iter()
            .any(|p| p.branch_id == branch_a.id && p.stock == 10 && p.name == "Marinara")
    );
    assert!(
        top.iter()
            .any(|p| p.branch_id == branch_b.id && p.stock == 20 && p.name == "Calzone")
    );
    Ok(())
}

#[tokio::test]
async fn deleting_twice_is_not_found() -> anyhow::Result<()> {
    let services = in_memory_services();
    let franchise = services.franchises.create_franchise("Pizzeria").await?;
    let branch = services.branches.create_branch(&franchise.id, "North").await?;
    let pizza = services
        .products
        .create_product(&franchise.id, &branch.id, NewProduct::new("Pizza", 1))
        .await?;

    services
        .products
        .delete_product(&franchise.id, &branch.id, &pizza.id)
        .await?;

    let err = services
        .products
        .delete_product(&franchise.id, &branch.id, &pizza.id)
        .await
        .unwrap_err();
    assert_eq!(rejection(err), "Product not found");
    Ok(())
}

#[tokio::test]
async fn product_scope_follows_its_branch() -> anyhow::Result<()> {
    let services = in_memory_services();
    let pizzeria = services.franchises.create_franchise("Pizzeria").await?;
    let burgers = services.franchises.create_franchise("Burgers").await?;
    let north = services.branches.create_branch(&pizzeria.id, "North").await?;
    let south = services.branches.create_branch(&pizzeria.id, "South").await?;

    let err = services
        .products
        .create_product(&burgers.id, &north.id, NewProduct::new("Pizza", 1))
        .await
        .unwrap_err();
    assert_eq!(rejection(err), "Branch does not exist");

    let pizza = services
        .products
        .create_product(&pizzeria.id, &north.id, NewProduct::new("Pizza", 1))
        .await?;

    let err = services
        .products
        .update_product_name(&pizzeria.id, &south.id, &pizza.id, "Calzone")
        .await
        .unwrap_err();
    assert_eq!(rejection(err), "Product not found");

    let renamed = services
        .products
        .update_product_name(&pizzeria.id, &north.id, &pizza.id, " Calzone ")
        .await?;
    assert_eq!(renamed.name, "Calzone");
    Ok(())
}

#[tokio::test]
async fn renames_complete_empty_on_miss() -> anyhow::Result<()> {
    let services = in_memory_services();
    let franchise = services.franchises.create_franchise("Pizzeria").await?;

    let missing_franchise = services
        .franchises
        .update_franchise_name("missing", "Trattoria")
        .await?;
    assert!(missing_franchise.is_none());

    let missing_branch = services
        .branches
        .update_branch_name(&franchise.id, "missing", "North")
        .await?;
    assert!(missing_branch.is_none());

    let renamed = services
        .franchises
        .update_franchise_name(&franchise.id, "Trattoria")
        .await?
        .expect("franchise exists");
    assert_eq!(renamed.name, "Trattoria");
    Ok(())
}

#[tokio::test]
async fn existence_checks_are_repeatable() -> anyhow::Result<()> {
    let services = in_memory_services();
    let franchise = services.franchises.create_franchise("Pizzeria").await?;
    let branch = services.branches.create_branch(&franchise.id, "North").await?;

    for _ in 0..3 {
        assert!(services.franchises.exists_franchise(&franchise.id).await?);
        assert!(services.branches.exists_branch(&franchise.id, &branch.id).await?);
        assert!(!services.branches.exists_branch(&franchise.id, "other").await?);
    }
    Ok(())
}
