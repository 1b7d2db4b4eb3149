//! Tactics cache invalidation for opponent edits.
//!
//! A cached game plan is derived from four scouting fields: style, strengths,
//! weaknesses and mental notes. Editing any of them makes the plan stale.
//! The name is not part of the plan's inputs and never invalidates it.

use crate::types::{OpponentFields, OpponentRecord};

/// Returns `true` when applying `edit` to `previous` must clear the cached
/// tactics.
///
/// `previous` must be the record as last saved, taken before any field of the
/// edit has been applied to it.
pub fn scouting_changed(previous: &OpponentRecord, edit: &OpponentFields) -> bool {
    previous.mental_notes_str() != edit.mental_notes.as_deref().unwrap_or("")
        || previous.style_str() != edit.style.as_deref().unwrap_or("")
        || !same_entries(&previous.strengths, &edit.strengths)
        || !same_entries(&previous.weaknesses, &edit.weaknesses)
}

/// Order-insensitive comparison: each side is sorted independently.
fn same_entries(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a: Vec<&str> = a.iter().map(String::as_str).collect();
    let mut b: Vec<&str> = b.iter().map(String::as_str).collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OpponentId;

    fn baseliner() -> OpponentRecord {
        let mut opp = OpponentRecord::new(
            OpponentId::new(1),
            OpponentFields {
                name: "Casey".to_string(),
                style: Some("Baseliner".to_string()),
                strengths: vec!["serve".to_string(), "forehand".to_string()],
                weaknesses: vec!["volley".to_string()],
                mental_notes: Some("tense on break points".to_string()),
            },
        );
        opp.tactics = Some("<h3>Plan</h3>".to_string());
        opp
    }

    fn same_as(opp: &OpponentRecord) -> OpponentFields {
        OpponentFields {
            name: opp.name.clone(),
            style: opp.style.clone(),
            strengths: opp.strengths.clone(),
            weaknesses: opp.weaknesses.clone(),
            mental_notes: opp.mental_notes.clone(),
        }
    }

    #[test]
    fn reordered_strengths_are_unchanged() {
        let prev = baseliner();
        let mut edit = same_as(&prev);
        edit.strengths = vec!["forehand".to_string(), "serve".to_string()];
        assert!(!scouting_changed(&prev, &edit));
    }

    #[test]
    fn cleared_mental_notes_is_a_change() {
        let prev = baseliner();
        let mut edit = same_as(&prev);
        edit.mental_notes = Some(String::new());
        assert!(scouting_changed(&prev, &edit));
    }

    #[test]
    fn style_change_is_a_change() {
        let prev = baseliner();
        let mut edit = same_as(&prev);
        edit.style = Some("Serve and volley".to_string());
        assert!(scouting_changed(&prev, &edit));
    }

    #[test]
    fn added_weakness_is_a_change() {
        let prev = baseliner();
        let mut edit = same_as(&prev);
        edit.weaknesses.push("high balls".to_string());
        assert!(scouting_changed(&prev, &edit));
    }

    #[test]
    fn rename_alone_keeps_tactics() {
        let prev = baseliner();
        let mut edit = same_as(&prev);
        edit.name = "Casey J.".to_string();
        assert!(!scouting_changed(&prev, &edit));
    }

    #[test]
    fn absent_and_empty_text_compare_equal() {
        let mut prev = baseliner();
        prev.style = None;
        let mut edit = same_as(&prev);
        edit.style = Some(String::new());
        assert!(!scouting_changed(&prev, &edit));
    }

    #[test]
    fn duplicate_entries_count() {
        let mut prev = baseliner();
        prev.strengths = vec!["serve".to_string(), "serve".to_string()];
        let mut edit = same_as(&prev);
        edit.strengths = vec!["serve".to_string(), "lob".to_string()];
        assert!(scouting_changed(&prev, &edit));
    }
}
