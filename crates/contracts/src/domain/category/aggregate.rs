use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Категория каталога верхнего уровня (справочник, только чтение на фронте)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    #[serde(default)]
    pub code: String,

    pub name: String,

    #[serde(rename = "sortOrder", default)]
    pub sort_order: i32,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,
}

impl Category {
    pub fn to_string_id(&self) -> String {
        self.id.0.to_string()
    }
}
