use serde::{Deserialize, Serialize};

/// A location belonging to exactly one franchise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub id: String,
    pub franchise_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchDocument {
    pub id: Option<String>,
    pub franchise_id: String,
    pub name: String,
}

impl BranchDocument {
    pub fn new(franchise_id: String, name: String) -> Self {
        Self {
            id: None,
            franchise_id,
            name,
        }
    }

    pub fn with_name(self, name: String) -> Self {
        Self { name, ..self }
    }
}

impl From<BranchDocument> for Branch {
    fn from(doc: BranchDocument) -> Self {
        Self {
            id: doc.id.unwrap_or_default(),
            franchise_id: doc.franchise_id,
            name: doc.name,
        }
    }
}
