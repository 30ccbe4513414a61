//! Product categories.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::types::CategoryId;

/// A category; names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Body for creating or renaming a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

impl Resource for Category {
    type Id = CategoryId;
    type Payload = NewCategory;

    const PATH: &'static str = "categories";
    const NAME: &'static str = "category";

    fn id(&self) -> CategoryId {
        self.id
    }
}
