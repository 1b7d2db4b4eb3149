use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// OpponentId
// ---------------------------------------------------------------------------

/// Opaque opponent identifier, derived from the creation time in epoch
/// milliseconds. Serialized as a bare number so backups written by the
/// browser version of the ledger import unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpponentId(u64);

impl OpponentId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// A fresh id for a record created at `now_millis`, strictly greater than
    /// every id already in `existing`.
    pub fn fresh<'a>(now_millis: i64, existing: impl IntoIterator<Item = &'a OpponentId>) -> Self {
        let now = u64::try_from(now_millis).unwrap_or(0);
        let floor = existing
            .into_iter()
            .map(|id| id.0 + 1)
            .max()
            .unwrap_or(0);
        Self(now.max(floor))
    }
}

impl fmt::Display for OpponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OpponentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

// ---------------------------------------------------------------------------
// MatchRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub score: String,
}

impl MatchRecord {
    /// Date as shown in the history table (`dd.mm.yyyy`).
    pub fn display_date(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }
}

// ---------------------------------------------------------------------------
// OpponentRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpponentRecord {
    pub id: OpponentId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mental_notes: Option<String>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
    /// Rendered game plan. Cleared whenever the scouting fields change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tactics: Option<String>,
}

impl OpponentRecord {
    pub fn new(id: OpponentId, fields: OpponentFields) -> Self {
        Self {
            id,
            name: fields.name,
            style: fields.style,
            strengths: fields.strengths,
            weaknesses: fields.weaknesses,
            mental_notes: fields.mental_notes,
            matches: Vec::new(),
            tactics: None,
        }
    }

    pub fn style_str(&self) -> &str {
        self.style.as_deref().unwrap_or("")
    }

    pub fn mental_notes_str(&self) -> &str {
        self.mental_notes.as_deref().unwrap_or("")
    }

    /// Cached tactics markup, if a non-empty game plan is stored.
    pub fn cached_tactics(&self) -> Option<&str> {
        self.tactics.as_deref().filter(|t| !t.is_empty())
    }
}

// ---------------------------------------------------------------------------
// OpponentFields
// ---------------------------------------------------------------------------

/// The user-editable fields of an opponent, as submitted from the add/edit
/// form. Build with [`OpponentFields::from_form`] to get the same trimming
/// and list splitting the form applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpponentFields {
    pub name: String,
    pub style: Option<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub mental_notes: Option<String>,
}

impl OpponentFields {
    pub fn from_form(
        name: &str,
        style: Option<&str>,
        strengths: &str,
        weaknesses: &str,
        mental_notes: Option<&str>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            style: style.map(str::to_string),
            strengths: split_list(strengths),
            weaknesses: split_list(weaknesses),
            mental_notes: mental_notes.map(|n| n.trim().to_string()),
        }
    }
}

/// Split comma-separated form text into trimmed, non-empty entries.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// ProfileRecord
// ---------------------------------------------------------------------------

/// The player's own profile. One per installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub strengths: String,
    #[serde(default)]
    pub weaknesses: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_drops_empty() {
        assert_eq!(
            split_list(" serve , forehand,, ,drop shot "),
            vec!["serve", "forehand", "drop shot"]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn fresh_id_is_unique_past_existing() {
        let existing = [OpponentId::new(500), OpponentId::new(1_000)];
        assert_eq!(OpponentId::fresh(2_000, &existing), OpponentId::new(2_000));
        assert_eq!(OpponentId::fresh(1_000, &existing), OpponentId::new(1_001));
    }

    #[test]
    fn opponent_reads_browser_backup_shape() {
        let json = r#"{
            "id": 1718000000000,
            "name": "Alex",
            "style": "Baseliner",
            "strengths": ["serve"],
            "weaknesses": [],
            "mentalNotes": "",
            "matches": [{"date": "2024-06-01", "score": "6-4 6-3"}],
            "tactics": ""
        }"#;
        let opp: OpponentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(opp.id.as_u64(), 1_718_000_000_000);
        assert_eq!(opp.mental_notes.as_deref(), Some(""));
        assert_eq!(opp.matches[0].display_date(), "01.06.2024");
        assert!(opp.cached_tactics().is_none());
    }

    #[test]
    fn new_opponent_starts_without_matches_or_tactics() {
        let fields = OpponentFields::from_form("  Sam ", None, "lob", "", Some(" nervy "));
        let opp = OpponentRecord::new(OpponentId::new(7), fields);
        assert_eq!(opp.name, "Sam");
        assert_eq!(opp.mental_notes_str(), "nervy");
        assert!(opp.matches.is_empty());
        assert!(opp.tactics.is_none());
    }

    #[test]
    fn id_parses_from_text() {
        let id: OpponentId = " 42 ".parse().unwrap();
        assert_eq!(id, OpponentId::new(42));
        assert_eq!(id.to_string(), "42");
    }
}
