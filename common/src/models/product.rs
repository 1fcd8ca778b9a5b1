use serde::{Deserialize, Serialize};

/// A stocked item scoped to one (franchise, branch) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub franchise_id: String,
    pub branch_id: String,
    pub name: String,
    pub stock: i32,
}

/// Product fields as supplied by a caller.
///
/// Both fields are optional because inbound adapters may omit them; the
/// product service rejects a missing value the same way it rejects a blank one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: Option<String>,
    pub stock: Option<i32>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, stock: i32) -> Self {
        Self {
            name: Some(name.into()),
            stock: Some(stock),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDocument {
    pub id: Option<String>,
    pub franchise_id: String,
    pub branch_id: String,
    pub name: String,
    pub stock: i32,
}

impl ProductDocument {
    pub fn new(franchise_id: String, branch_id: String, name: String, stock: i32) -> Self {
        Self {
            id: None,
            franchise_id,
            branch_id,
            name,
            stock,
        }
    }

    pub fn with_name(self, name: String) -> Self {
        Self { name, ..self }
    }

    pub fn with_stock(self, stock: i32) -> Self {
        Self { stock, ..self }
    }
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id.unwrap_or_default(),
            franchise_id: doc.franchise_id,
            branch_id: doc.branch_id,
            name: doc.name,
            stock: doc.stock,
        }
    }
}
