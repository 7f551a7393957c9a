//! Move records and the bounded undo log.
//!
//! The log stores one `MoveRecord` per committed move rather than board
//! snapshots. When it is full, pushing evicts the oldest record, which can
//! then never be undone.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::entity::{CardId, StackId};

/// One committed relocation of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The card that moved.
    pub card: CardId,

    /// Stack the card was dragged out of.
    pub from: StackId,

    /// Stack the card was dropped onto.
    pub to: StackId,
}

impl MoveRecord {
    #[must_use]
    pub fn new(card: CardId, from: StackId, to: StackId) -> Self {
        Self { card, from, to }
    }
}

/// Bounded FIFO of move records.
///
/// ## Example
///
/// ```
/// use card_stacks::core::{CardId, StackId};
/// use card_stacks::history::{MoveRecord, UndoLog};
///
/// let mut log = UndoLog::new(2);
/// let first = MoveRecord::new(CardId(0), StackId(0), StackId(1));
/// let second = MoveRecord::new(CardId(1), StackId(1), StackId(2));
/// let third = MoveRecord::new(CardId(2), StackId(2), StackId(0));
///
/// assert_eq!(log.push(first), None);
/// assert_eq!(log.push(second), None);
/// assert_eq!(log.push(third), Some(first)); // evicted
///
/// assert_eq!(log.pop_last(), Some(third));
/// assert_eq!(log.pop_last(), Some(second));
/// assert_eq!(log.pop_last(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UndoLogData")]
pub struct UndoLog {
    capacity: usize,
    records: Vector<MoveRecord>,
}

/// Reasons a deserialized `UndoLog` is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UndoLogError {
    #[error("undo log capacity must be at least 1")]
    NoCapacity,

    #[error("undo log holds {len} records but its capacity is {capacity}")]
    OverCapacity { len: usize, capacity: usize },
}

/// Unchecked wire form of `UndoLog`.
#[derive(Deserialize)]
struct UndoLogData {
    capacity: usize,
    records: Vector<MoveRecord>,
}

impl TryFrom<UndoLogData> for UndoLog {
    type Error = UndoLogError;

    fn try_from(data: UndoLogData) -> Result<Self, Self::Error> {
        if data.capacity == 0 {
            return Err(UndoLogError::NoCapacity);
        }
        if data.records.len() > data.capacity {
            return Err(UndoLogError::OverCapacity {
                len: data.records.len(),
                capacity: data.capacity,
            });
        }
        Ok(Self {
            capacity: data.capacity,
            records: data.records,
        })
    }
}

impl UndoLog {
    /// Create an empty log.
    ///
    /// Panics if `capacity` is zero. Board configs are validated before a
    /// log is built, so this only fires on direct misuse.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Undo log capacity must be at least 1");
        Self {
            capacity,
            records: Vector::new(),
        }
    }

    /// Append a record, evicting and returning the oldest one if over capacity.
    pub fn push(&mut self, record: MoveRecord) -> Option<MoveRecord> {
        self.records.push_back(record);
        if self.records.len() > self.capacity {
            self.records.pop_front()
        } else {
            None
        }
    }

    /// Remove and return the most recent record.
    pub fn pop_last(&mut self) -> Option<MoveRecord> {
        self.records.pop_back()
    }

    /// Most recent record without removing it.
    #[must_use]
    pub fn peek_last(&self) -> Option<&MoveRecord> {
        self.records.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(card: u32) -> MoveRecord {
        MoveRecord::new(CardId(card), StackId(0), StackId(1))
    }

    #[test]
    fn test_push_and_pop() {
        let mut log = UndoLog::new(3);
        assert!(log.is_empty());

        log.push(record(1));
        log.push(record(2));

        assert_eq!(log.len(), 2);
        assert_eq!(log.peek_last(), Some(&record(2)));
        assert_eq!(log.pop_last(), Some(record(2)));
        assert_eq!(log.pop_last(), Some(record(1)));
        assert_eq!(log.pop_last(), None);
    }

    #[test]
    fn test_eviction_keeps_most_recent() {
        let mut log = UndoLog::new(3);

        for card in 1..=3 {
            assert_eq!(log.push(record(card)), None);
        }
        assert_eq!(log.push(record(4)), Some(record(1)));
        assert_eq!(log.push(record(5)), Some(record(2)));

        assert_eq!(log.len(), 3);
        let cards: Vec<_> = log.iter().map(|r| r.card).collect();
        assert_eq!(cards, vec![CardId(3), CardId(4), CardId(5)]);
    }

    #[test]
    fn test_capacity_one() {
        let mut log = UndoLog::new(1);
        log.push(record(1));
        assert_eq!(log.push(record(2)), Some(record(1)));
        assert_eq!(log.len(), 1);
        assert_eq!(log.capacity(), 1);
    }

    #[test]
    fn test_clear() {
        let mut log = UndoLog::new(2);
        log.push(record(1));
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.peek_last(), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut log = UndoLog::new(4);
        log.push(record(1));
        let snapshot = log.clone();

        log.push(record(2));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    #[should_panic(expected = "capacity must be at least 1")]
    fn test_zero_capacity_panics() {
        let _ = UndoLog::new(0);
    }

    #[test]
    fn test_deserialize_keeps_records() {
        let mut log = UndoLog::new(2);
        log.push(record(1));
        log.push(record(2));

        let json = serde_json::to_string(&log).unwrap();
        let back: UndoLog = serde_json::from_str(&json).unwrap();

        assert_eq!(back, log);
        assert_eq!(back.peek_last(), Some(&record(2)));
    }

    #[test]
    fn test_deserialize_rejects_zero_capacity() {
        let json = r#"{"capacity":0,"records":[]}"#;
        let err = serde_json::from_str::<UndoLog>(json).unwrap_err();
        assert!(err.to_string().contains("capacity must be at least 1"));
    }

    #[test]
    fn test_deserialize_rejects_overfull_log() {
        let json = r#"{"capacity":1,"records":[
            {"card":1,"from":0,"to":1},
            {"card":2,"from":0,"to":1}
        ]}"#;
        let err = serde_json::from_str::<UndoLog>(json).unwrap_err();
        assert!(err
            .to_string()
            .contains("holds 2 records but its capacity is 1"));
    }

    #[test]
    fn test_record_serialization() {
        let r = MoveRecord::new(CardId(3), StackId(0), StackId(1));
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"card":3,"from":0,"to":1}"#);
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
