use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Franchise {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseDocument {
    pub id: Option<String>,
    pub name: String,
}

impl FranchiseDocument {
    pub fn new(name: String) -> Self {
        Self { id: None, name }
    }

    pub fn with_name(self, name: String) -> Self {
        Self { name, ..self }
    }
}

impl From<FranchiseDocument> for Franchise {
    fn from(doc: FranchiseDocument) -> Self {
        Self {
            id: doc.id.unwrap_or_default(),
            name: doc.name,
        }
    }
}
