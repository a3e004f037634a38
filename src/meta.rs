use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::database::Database;
use crate::error::Result;

/// A value from the store's metadata table.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Text(String),
    Timestamp(NaiveDateTime),
}

impl Database {
    /// All store metadata. Values under `date_*` keys are parsed to
    /// timestamps; unparseable ones stay text.
    pub fn metadata(&self) -> Result<BTreeMap<String, MetadataValue>> {
        let mut stmt = self.conn().prepare("SELECT key, value FROM metadata")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut metadata = BTreeMap::new();
        for row in rows {
            let (key, value) = row?;
            let parsed = if key.starts_with("date_") {
                match parse_timestamp(&value) {
                    Some(ts) => MetadataValue::Timestamp(ts),
                    None => MetadataValue::Text(value),
                }
            } else {
                MetadataValue::Text(value)
            };
            metadata.insert(key, parsed);
        }
        Ok(metadata)
    }
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    value.parse::<NaiveDateTime>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::test_database;
    use chrono::NaiveDate;

    #[test]
    fn date_keys_parse_to_timestamps() {
        let db = test_database();
        let metadata = db.metadata().unwrap();

        let created = NaiveDate::from_ymd_opt(2025, 6, 30)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap();
        assert_eq!(
            metadata.get("date_created"),
            Some(&MetadataValue::Timestamp(created))
        );
        // Unparseable date values stay text rather than failing the call.
        assert_eq!(
            metadata.get("date_updated"),
            Some(&MetadataValue::Text("unknown".to_string()))
        );
        assert_eq!(
            metadata.get("data_source"),
            Some(&MetadataValue::Text("Þjóðskrá Íslands".to_string()))
        );
    }

    #[test]
    fn offset_timestamps_are_accepted() {
        let parsed = parse_timestamp("2024-01-05T12:00:00+00:00").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2024, 1, 5)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        );
    }
}
