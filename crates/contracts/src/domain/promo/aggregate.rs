use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromoBannerId(pub Uuid);

impl PromoBannerId {
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
/// Промо-баннер главной страницы витрины
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoBanner {
    pub id: PromoBannerId,

    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    #[serde(rename = "imageUrl", default)]
    pub image_url: String,

    /// Куда ведёт клик по баннеру
    #[serde(rename = "linkUrl", default)]
    pub link_url: String,

    #[serde(rename = "startsAt")]
    pub starts_at: Option<DateTime<Utc>>,

    #[serde(rename = "endsAt")]
    pub ends_at: Option<DateTime<Utc>>,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,

    #[serde(rename = "sortOrder", default)]
    pub sort_order: i32,
}

impl PromoBanner {
    pub fn to_string_id(&self) -> String {
        self.id.0.to_string()
    }

    /// Показывать ли баннер в момент `now`.
    ///
    /// Открытая граница (None) означает "без ограничения" с этой стороны.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        if !self.is_active {
            return false;
        }
        if let Some(starts_at) = self.starts_at {
            if now < starts_at {
                return false;
            }
        }
        if let Some(ends_at) = self.ends_at {
            if now >= ends_at {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn banner(starts_at: Option<DateTime<Utc>>, ends_at: Option<DateTime<Utc>>) -> PromoBanner {
        PromoBanner {
            id: PromoBannerId::new_v4(),
            title: "Распродажа".to_string(),
            subtitle: String::new(),
            image_url: String::new(),
            link_url: String::new(),
            starts_at,
            ends_at,
            is_active: true,
            sort_order: 0,
        }
    }

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_is_live_within_window() {
        let b = banner(Some(ts(1)), Some(ts(10)));
        assert!(b.is_live(ts(5)));
        assert!(!b.is_live(ts(11)));
    }

    #[test]
    fn test_is_live_boundaries() {
        let b = banner(Some(ts(1)), Some(ts(10)));
        // Начало включительно, конец исключительно
        assert!(b.is_live(ts(1)));
        assert!(!b.is_live(ts(10)));
    }

    #[test]
    fn test_is_live_open_ended() {
        assert!(banner(None, None).is_live(ts(5)));
        assert!(banner(Some(ts(1)), None).is_live(ts(20)));
        assert!(!banner(None, Some(ts(3))).is_live(ts(5)));
    }

    #[test]
    fn test_inactive_banner_never_live() {
        let mut b = banner(None, None);
        b.is_active = false;
        assert!(!b.is_live(ts(5)));
    }
}
