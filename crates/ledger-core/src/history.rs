use crate::error::{LedgerError, Result};
use crate::types::MatchRecord;
use chrono::NaiveDate;
use serde::Serialize;

pub const NO_MATCHES_PLACEHOLDER: &str = "No matches recorded yet.";

// ---------------------------------------------------------------------------
// Match entry
// ---------------------------------------------------------------------------

/// Validate the add-match form. Both fields are required; the score is
/// trimmed, the date must be `YYYY-MM-DD`.
pub fn parse_match(date: &str, score: &str) -> Result<MatchRecord> {
    let date = date.trim();
    let score = score.trim();
    if date.is_empty() || score.is_empty() {
        return Err(LedgerError::MatchFieldsRequired);
    }
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(date.to_string()))?;
    Ok(MatchRecord {
        date,
        score: score.to_string(),
    })
}

/// Newest first. Stable, so same-day matches keep their entry order.
pub fn sort_newest_first(matches: &mut [MatchRecord]) {
    matches.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Remove the match at `position` in display order (newest first).
///
/// The sequence is left sorted in display order, so positions shown to the
/// user stay valid for the next delete.
pub fn remove_at(matches: &mut Vec<MatchRecord>, position: usize) -> Option<MatchRecord> {
    sort_newest_first(matches);
    (position < matches.len()).then(|| matches.remove(position))
}

// ---------------------------------------------------------------------------
// History display
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryRow {
    Match {
        position: usize,
        date: String,
        score: String,
    },
    Placeholder {
        message: &'static str,
    },
}

/// Rows for the match history table. An empty history yields exactly one
/// placeholder row rather than an empty body.
pub fn history_rows(matches: &[MatchRecord]) -> Vec<HistoryRow> {
    if matches.is_empty() {
        return vec![HistoryRow::Placeholder {
            message: NO_MATCHES_PLACEHOLDER,
        }];
    }
    let mut sorted = matches.to_vec();
    sort_newest_first(&mut sorted);
    sorted
        .into_iter()
        .enumerate()
        .map(|(position, m)| HistoryRow::Match {
            position,
            date: m.display_date(),
            score: m.score,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn m(date: &str, score: &str) -> MatchRecord {
        parse_match(date, score).unwrap()
    }

    #[test]
    fn empty_history_is_one_placeholder_row() {
        assert_eq!(
            history_rows(&[]),
            vec![HistoryRow::Placeholder {
                message: "No matches recorded yet."
            }]
        );
    }

    #[test]
    fn rows_are_newest_first() {
        let rows = history_rows(&[m("2024-01-05", "6-1 6-1"), m("2024-03-10", "4-6 3-6")]);
        assert_eq!(
            rows[0],
            HistoryRow::Match {
                position: 0,
                date: "10.03.2024".to_string(),
                score: "4-6 3-6".to_string(),
            }
        );
        assert!(matches!(&rows[1], HistoryRow::Match { position: 1, .. }));
    }

    #[test]
    fn parse_match_requires_both_fields() {
        assert!(matches!(
            parse_match("", "6-0"),
            Err(LedgerError::MatchFieldsRequired)
        ));
        assert!(matches!(
            parse_match("2024-02-02", "   "),
            Err(LedgerError::MatchFieldsRequired)
        ));
    }

    #[test]
    fn parse_match_rejects_bad_date() {
        assert!(matches!(
            parse_match("02/02/2024", "6-0"),
            Err(LedgerError::InvalidDate(_))
        ));
    }

    #[test]
    fn remove_at_uses_display_order() {
        let mut matches = vec![
            m("2024-01-05", "old"),
            m("2024-03-10", "new"),
            m("2024-02-01", "mid"),
        ];
        let removed = remove_at(&mut matches, 1).unwrap();
        assert_eq!(removed.score, "mid");
        let left: Vec<_> = matches.iter().map(|m| m.score.as_str()).collect();
        assert_eq!(left, ["new", "old"]);
    }

    #[test]
    fn remove_at_out_of_range_is_none() {
        let mut matches = vec![m("2024-01-05", "only")];
        assert!(remove_at(&mut matches, 3).is_none());
        assert_eq!(matches.len(), 1);
    }
}
