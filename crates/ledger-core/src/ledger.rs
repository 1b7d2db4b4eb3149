//! Opponent, match and profile operations over an injected [`RecordStore`].
//!
//! Every mutation reads the collection, changes one record and writes the
//! whole collection back. A failed validation returns before any write.

use crate::change::scouting_changed;
use crate::error::{LedgerError, Result};
use crate::history;
use crate::store::RecordStore;
use crate::types::{MatchRecord, OpponentFields, OpponentId, OpponentRecord, ProfileRecord};
use chrono::Utc;

/// Result of an edit-form save.
#[derive(Debug, Clone)]
pub struct EditOutcome {
    pub opponent: OpponentRecord,
    /// The scouting fields changed and the cached game plan was dropped.
    pub tactics_cleared: bool,
}

pub struct Ledger<S> {
    store: S,
}

impl<S: RecordStore> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// All opponents, sorted by name (case-insensitive).
    pub fn list(&self) -> Result<Vec<OpponentRecord>> {
        let mut opponents = self.store.read_opponents()?;
        opponents.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(opponents)
    }

    pub fn get(&self, id: OpponentId) -> Result<OpponentRecord> {
        self.store
            .read_opponents()?
            .into_iter()
            .find(|o| o.id == id)
            .ok_or(LedgerError::OpponentNotFound(id))
    }

    pub fn profile(&self) -> Result<ProfileRecord> {
        self.store.read_profile()
    }

    // -----------------------------------------------------------------------
    // Opponents
    // -----------------------------------------------------------------------

    pub fn add(&self, fields: OpponentFields) -> Result<OpponentRecord> {
        if fields.name.trim().is_empty() {
            return Err(LedgerError::NameRequired);
        }
        let mut opponents = self.store.read_opponents()?;
        let id = OpponentId::fresh(
            Utc::now().timestamp_millis(),
            opponents.iter().map(|o| &o.id),
        );
        let opponent = OpponentRecord::new(id, fields);
        opponents.push(opponent.clone());
        self.store.write_opponents(&opponents)?;
        tracing::info!(id = %id, name = %opponent.name, "added opponent");
        Ok(opponent)
    }

    /// Replace the editable fields of one opponent.
    ///
    /// The pre-edit record is captured from the freshly read collection before
    /// any field is replaced, and the change check runs against that copy.
    pub fn edit(&self, id: OpponentId, fields: OpponentFields) -> Result<EditOutcome> {
        if fields.name.trim().is_empty() {
            return Err(LedgerError::NameRequired);
        }
        let mut opponents = self.store.read_opponents()?;
        let slot = opponents
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(LedgerError::OpponentNotFound(id))?;

        let previous = slot.clone();
        let tactics_cleared = scouting_changed(&previous, &fields);

        slot.name = fields.name;
        slot.style = fields.style;
        slot.strengths = fields.strengths;
        slot.weaknesses = fields.weaknesses;
        slot.mental_notes = fields.mental_notes;
        if tactics_cleared {
            slot.tactics = None;
        }
        let opponent = slot.clone();

        self.store.write_opponents(&opponents)?;
        tracing::info!(id = %id, tactics_cleared, "edited opponent");
        Ok(EditOutcome {
            opponent,
            tactics_cleared,
        })
    }

    pub fn delete(&self, id: OpponentId) -> Result<OpponentRecord> {
        let mut opponents = self.store.read_opponents()?;
        let pos = opponents
            .iter()
            .position(|o| o.id == id)
            .ok_or(LedgerError::OpponentNotFound(id))?;
        let removed = opponents.remove(pos);
        self.store.write_opponents(&opponents)?;
        tracing::info!(id = %id, "deleted opponent");
        Ok(removed)
    }

    /// Store freshly rendered game-plan markup as the opponent's tactics cache.
    pub fn set_tactics(&self, id: OpponentId, markup: String) -> Result<OpponentRecord> {
        self.update(id, |opp| {
            opp.tactics = Some(markup);
            Ok(())
        })
    }

    // -----------------------------------------------------------------------
    // Matches
    // -----------------------------------------------------------------------

    pub fn add_match(&self, id: OpponentId, date: &str, score: &str) -> Result<MatchRecord> {
        let record = history::parse_match(date, score)?;
        let added = record.clone();
        self.update(id, move |opp| {
            opp.matches.push(record);
            Ok(())
        })?;
        tracing::info!(id = %id, date = %added.date, "recorded match");
        Ok(added)
    }

    /// Delete the match at `position` in history display order.
    pub fn delete_match(&self, id: OpponentId, position: usize) -> Result<MatchRecord> {
        let mut removed = None;
        self.update(id, |opp| {
            removed = history::remove_at(&mut opp.matches, position);
            if removed.is_none() {
                return Err(LedgerError::MatchNotFound {
                    opponent: id,
                    index: position,
                });
            }
            Ok(())
        })?;
        removed.ok_or(LedgerError::MatchNotFound {
            opponent: id,
            index: position,
        })
    }

    // -----------------------------------------------------------------------
    // Profile
    // -----------------------------------------------------------------------

    pub fn save_profile(&self, profile: &ProfileRecord) -> Result<()> {
        self.store.write_profile(profile)?;
        tracing::info!("saved profile");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn update<F>(&self, id: OpponentId, f: F) -> Result<OpponentRecord>
    where
        F: FnOnce(&mut OpponentRecord) -> Result<()>,
    {
        let mut opponents = self.store.read_opponents()?;
        let slot = opponents
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(LedgerError::OpponentNotFound(id))?;
        f(slot)?;
        let updated = slot.clone();
        self.store.write_opponents(&opponents)?;
        Ok(updated)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
