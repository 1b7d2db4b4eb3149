//! JSON export and import of the whole store.
//!
//! The document shape is `{ "opponents": [...], "profile": {...} }`, the same
//! shape the browser version of the ledger writes.

use crate::error::{LedgerError, Result};
use crate::store::RecordStore;
use crate::types::{OpponentRecord, ProfileRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backup {
    pub opponents: Vec<OpponentRecord>,
    pub profile: ProfileRecord,
}

impl Backup {
    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a backup document.
    ///
    /// Only the top-level shape is checked: `opponents` must be a list and
    /// `profile` an object. A `null` profile reads as an empty one.
    pub fn from_json(data: &str) -> Result<Self> {
        let mut doc: Value = serde_json::from_str(data)
            .map_err(|e| LedgerError::InvalidBackup(format!("not valid JSON: {e}")))?;

        if !doc.get("opponents").is_some_and(Value::is_array) {
            return Err(LedgerError::InvalidBackup(
                "'opponents' must be a list".to_string(),
            ));
        }
        let profile_is_null = match doc.get("profile") {
            Some(Value::Object(_)) => false,
            Some(Value::Null) => true,
            _ => {
                return Err(LedgerError::InvalidBackup(
                    "'profile' must be an object".to_string(),
                ))
            }
        };
        if profile_is_null {
            doc["profile"] = serde_json::to_value(ProfileRecord::default())?;
        }

        serde_json::from_value(doc).map_err(|e| LedgerError::InvalidBackup(e.to_string()))
    }
}

/// Snapshot the store. Refuses when there are no opponents to export.
pub fn export<S: RecordStore>(store: &S) -> Result<Backup> {
    let opponents = store.read_opponents()?;
    if opponents.is_empty() {
        return Err(LedgerError::NoDataToExport);
    }
    let profile = store.read_profile()?;
    Ok(Backup { opponents, profile })
}

/// Replace the store's contents wholesale with `backup`.
pub fn import<S: RecordStore>(store: &S, backup: &Backup) -> Result<()> {
    store.write_opponents(&backup.opponents)?;
    store.write_profile(&backup.profile)?;
    tracing::info!(opponents = backup.opponents.len(), "imported backup");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::store::MemoryStore;
    use crate::types::OpponentFields;

    fn populated() -> MemoryStore {
        let ledger = Ledger::new(MemoryStore::new());
        let opp = ledger
            .add(OpponentFields::from_form(
                "Morgan",
                Some("All-court"),
                "slice, serve",
                "high balls",
                Some("hates wind"),
            ))
            .unwrap();
        ledger.add_match(opp.id, "2024-07-14", "7-5 6-7 10-8").unwrap();
        ledger
            .set_tactics(opp.id, "<h3>Plan</h3>".to_string())
            .unwrap();
        ledger
            .save_profile(&ProfileRecord {
                strengths: "fitness".to_string(),
                weaknesses: "overhead".to_string(),
            })
            .unwrap();
        let opponents = ledger.store().read_opponents().unwrap();
        let profile = ledger.store().read_profile().unwrap();
        MemoryStore::with_data(opponents, profile)
    }

    #[test]
    fn export_import_roundtrip() {
        let source = populated();
        let json = export(&source).unwrap().to_json().unwrap();

        let target = MemoryStore::new();
        import(&target, &Backup::from_json(&json).unwrap()).unwrap();

        assert_eq!(
            target.read_opponents().unwrap(),
            source.read_opponents().unwrap()
        );
        assert_eq!(target.read_profile().unwrap(), source.read_profile().unwrap());
        assert_eq!(export(&target).unwrap().to_json().unwrap(), json);
    }

    #[test]
    fn export_empty_store_is_refused() {
        assert!(matches!(
            export(&MemoryStore::new()),
            Err(LedgerError::NoDataToExport)
        ));
    }

    #[test]
    fn json_uses_browser_field_names() {
        let json = export(&populated()).unwrap().to_json().unwrap();
        assert!(json.contains("\"mentalNotes\": \"hates wind\""));
        assert!(json.contains("\"date\": \"2024-07-14\""));
    }

    #[test]
    fn rejects_non_list_opponents() {
        let err = Backup::from_json(r#"{"opponents": {}, "profile": {}}"#).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidBackup(_)));
    }

    #[test]
    fn rejects_missing_profile() {
        let err = Backup::from_json(r#"{"opponents": []}"#).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidBackup(_)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Backup::from_json("not json").is_err());
    }

    #[test]
    fn null_profile_reads_as_empty() {
        let backup = Backup::from_json(r#"{"opponents": [], "profile": null}"#).unwrap();
        assert_eq!(backup.profile, ProfileRecord::default());
    }

    #[test]
    fn failed_import_leaves_store_untouched() {
        let store = populated();
        let before = store.read_opponents().unwrap();
        let parsed = Backup::from_json(r#"{"opponents": [{"name": 5}], "profile": {}}"#);
        assert!(parsed.is_err());
        assert_eq!(store.read_opponents().unwrap(), before);
    }
}
