//! Форматирование дат для таблиц и карточек

use chrono::{DateTime, Utc};

/// Дата и время в формате "31.08.2026 14:05"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// Дата в формате "31.08.2026"
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}

/// Опциональная дата; None отображается прочерком
pub fn format_datetime_opt(value: &Option<DateTime<Utc>>) -> String {
    match value {
        Some(v) => format_datetime(v),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2026, 8, 31, 14, 5, 0).unwrap();
        assert_eq!(format_datetime(&dt), "31.08.2026 14:05");
        assert_eq!(format_date(&dt), "31.08.2026");
    }

    #[test]
    fn test_format_datetime_opt() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 0).unwrap();
        assert_eq!(format_datetime_opt(&Some(dt)), "02.01.2026 03:04");
        assert_eq!(format_datetime_opt(&None), "—");
    }
}
