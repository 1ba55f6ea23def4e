use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
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
/// Товар витрины. Фронтенд его не изменяет — карточки каталога только читают.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(default)]
    pub sku: String,

    pub name: String,

    /// Текущая цена, руб.
    pub price: f64,

    /// Цена до скидки (если товар участвует в акции)
    #[serde(rename = "oldPrice")]
    pub old_price: Option<f64>,

    #[serde(rename = "imageUrl", default)]
    pub image_url: String,

    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,

    #[serde(rename = "subcategoryId")]
    pub subcategory_id: Option<String>,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,

    #[serde(rename = "inStock", default)]
    pub in_stock: bool,

    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn to_string_id(&self) -> String {
        self.id.0.to_string()
    }

    /// Размер скидки в процентах, если old_price задана и больше текущей цены
    pub fn discount_percent(&self) -> Option<u32> {
        let old = self.old_price?;
        if old <= 0.0 || old <= self.price {
            return None;
        }
        Some(((1.0 - self.price / old) * 100.0).round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64, old_price: Option<f64>) -> Product {
        Product {
            id: ProductId::new_v4(),
            sku: "SKU-1".to_string(),
            name: "Тестовый товар".to_string(),
            price,
            old_price,
            image_url: String::new(),
            category_id: None,
            subcategory_id: None,
            is_active: true,
            in_stock: true,
            created_at: None,
        }
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(product(750.0, Some(1000.0)).discount_percent(), Some(25));
        assert_eq!(product(900.0, Some(1000.0)).discount_percent(), Some(10));
    }

    #[test]
    fn test_discount_percent_absent() {
        // Нет старой цены — нет скидки
        assert_eq!(product(100.0, None).discount_percent(), None);
        // Старая цена не выше текущей — скидки нет
        assert_eq!(product(100.0, Some(100.0)).discount_percent(), None);
        assert_eq!(product(100.0, Some(90.0)).discount_percent(), None);
        assert_eq!(product(100.0, Some(0.0)).discount_percent(), None);
    }
}
