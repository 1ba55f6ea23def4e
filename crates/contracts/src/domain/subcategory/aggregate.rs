use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubcategoryId(pub Uuid);

impl SubcategoryId {
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
/// Подкатегория каталога. Создаётся и редактируется в админке.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: SubcategoryId,

    #[serde(default)]
    pub code: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Родительская категория (обязательна)
    #[serde(rename = "categoryId")]
    pub category_id: String,

    #[serde(rename = "sortOrder", default)]
    pub sort_order: i32,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,

    #[serde(rename = "productCount", default)]
    pub product_count: i32,

    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Subcategory {
    pub fn new_for_insert(code: String, name: String, category_id: String) -> Self {
        Self {
            id: SubcategoryId::new_v4(),
            code,
            name,
            description: String::new(),
            category_id,
            sort_order: 0,
            is_active: true,
            product_count: 0,
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.0.to_string()
    }

    pub fn touch_updated(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    pub fn update(&mut self, dto: &SubcategoryDto) {
        self.code = dto.code.clone().unwrap_or_default();
        self.name = dto.name.clone();
        self.description = dto.description.clone().unwrap_or_default();
        if let Some(category_id) = &dto.category_id {
            self.category_id = category_id.clone();
        }
        if let Some(sort_order) = dto.sort_order {
            self.sort_order = sort_order;
        }
        if let Some(is_active) = dto.is_active {
            self.is_active = is_active;
        }
        // product_count обновляется только бэкендом при пересчёте каталога
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if self.name.len() > 80 {
            return Err("Наименование не должно превышать 80 символов".into());
        }
        if self.code.len() > 20 {
            return Err("Код не должен превышать 20 символов".into());
        }
        if self.description.len() > 250 {
            return Err("Описание не должно превышать 250 символов".into());
        }
        if self.category_id.trim().is_empty() {
            return Err("Необходимо выбрать родительскую категорию".into());
        }

        Ok(())
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SubcategoryDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,

    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,

    #[serde(rename = "sortOrder")]
    pub sort_order: Option<i32>,

    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_subcategory() -> Subcategory {
        Subcategory::new_for_insert(
            "SC-01".to_string(),
            "Смесители".to_string(),
            Uuid::new_v4().to_string(),
        )
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid_subcategory().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        let mut s = valid_subcategory();
        s.name = "   ".to_string();
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_missing_category() {
        let mut s = valid_subcategory();
        s.category_id = String::new();
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_length_limits() {
        let mut s = valid_subcategory();
        s.name = "x".repeat(81);
        assert!(s.validate().is_err());

        let mut s = valid_subcategory();
        s.code = "x".repeat(21);
        assert!(s.validate().is_err());

        let mut s = valid_subcategory();
        s.description = "x".repeat(251);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_update_from_dto() {
        let mut s = valid_subcategory();
        let dto = SubcategoryDto {
            id: Some(s.to_string_id()),
            code: Some("SC-02".to_string()),
            name: "Душевые кабины".to_string(),
            description: Some("Кабины и ограждения".to_string()),
            category_id: None,
            sort_order: Some(5),
            is_active: Some(false),
        };
        let category_before = s.category_id.clone();

        s.update(&dto);

        assert_eq!(s.code, "SC-02");
        assert_eq!(s.name, "Душевые кабины");
        assert_eq!(s.description, "Кабины и ограждения");
        assert_eq!(s.sort_order, 5);
        assert!(!s.is_active);
        // Отсутствующая в DTO категория остаётся прежней
        assert_eq!(s.category_id, category_before);
    }

    #[test]
    fn test_touch_updated() {
        let mut s = valid_subcategory();
        assert!(s.updated_at.is_none());
        s.touch_updated();
        assert!(s.updated_at.is_some());
    }
}
