use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncidentId(pub Uuid);

impl IncidentId {
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
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentStatus {
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "inProgress")]
    InProgress,
    #[serde(rename = "resolved")]
    Resolved,
    #[serde(rename = "closed")]
    Closed,
}

impl IncidentStatus {
    pub fn display_text(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "Открыт",
            IncidentStatus::InProgress => "В работе",
            IncidentStatus::Resolved => "Решён",
            IncidentStatus::Closed => "Закрыт",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "status-open",
            IncidentStatus::InProgress => "status-in-progress",
            IncidentStatus::Resolved => "status-resolved",
            IncidentStatus::Closed => "status-closed",
        }
    }

    /// Строковый ключ статуса; совпадает с именем на проводе (serde)
    pub fn key(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::InProgress => "inProgress",
            IncidentStatus::Resolved => "resolved",
            IncidentStatus::Closed => "closed",
        }
    }

    pub fn from_key(key: &str) -> Option<IncidentStatus> {
        match key {
            "open" => Some(IncidentStatus::Open),
            "inProgress" => Some(IncidentStatus::InProgress),
            "resolved" => Some(IncidentStatus::Resolved),
            "closed" => Some(IncidentStatus::Closed),
            _ => None,
        }
    }

    pub fn all() -> [IncidentStatus; 4] {
        [
            IncidentStatus::Open,
            IncidentStatus::InProgress,
            IncidentStatus::Resolved,
            IncidentStatus::Closed,
        ]
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Инцидент витрины (жалоба покупателя, сбой интеграции и т.п.)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: IncidentId,

    /// Человекочитаемый номер вида INC-000123
    pub number: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    pub status: IncidentStatus,

    /// Источник: заказ, оплата, доставка, каталог...
    #[serde(default)]
    pub source: String,

    pub assignee: Option<String>,

    #[serde(rename = "reportedAt")]
    pub reported_at: DateTime<Utc>,

    #[serde(rename = "resolvedAt")]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Incident {
    pub fn to_string_id(&self) -> String {
        self.id.0.to_string()
    }

    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            IncidentStatus::Open | IncidentStatus::InProgress
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&IncidentStatus::InProgress).unwrap(),
            "\"inProgress\""
        );
        let parsed: IncidentStatus = serde_json::from_str("\"resolved\"").unwrap();
        assert_eq!(parsed, IncidentStatus::Resolved);
    }

    #[test]
    fn test_key_matches_wire_name() {
        for status in IncidentStatus::all() {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status.key()));
            assert_eq!(IncidentStatus::from_key(status.key()), Some(status));
        }
    }

    #[test]
    fn test_is_open() {
        let mut incident = Incident {
            id: IncidentId::new_v4(),
            number: "INC-000001".to_string(),
            title: "Не прошла оплата".to_string(),
            description: String::new(),
            status: IncidentStatus::Open,
            source: "payments".to_string(),
            assignee: None,
            reported_at: Utc::now(),
            resolved_at: None,
        };
        assert!(incident.is_open());

        incident.status = IncidentStatus::InProgress;
        assert!(incident.is_open());

        incident.status = IncidentStatus::Closed;
        assert!(!incident.is_open());
    }
}
