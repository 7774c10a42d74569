use crate::CardRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decides the order cards are shown in during the next study round.
pub trait CardOrganizer {
    /// Presentation order as positions into `records`. Every position appears
    /// exactly once.
    fn order(&self, records: &[CardRecord]) -> Vec<usize>;

    fn reorganize<'a>(&self, records: &'a [CardRecord]) -> Vec<&'a CardRecord> {
        self.order(records).into_iter().map(|i| &records[i]).collect()
    }
}

/// Stable descending sort of positions by `key`.
fn order_by_key_desc<K: Ord>(records: &[CardRecord], key: impl Fn(&CardRecord) -> K) -> Vec<usize> {
    let mut keyed: Vec<(usize, K)> = records.iter().map(&key).enumerate().collect();
    keyed.sort_by(|a, b| b.1.cmp(&a.1));
    keyed.into_iter().map(|(i, _)| i).collect()
}

/// Cards with the most failed attempts come first.
#[derive(Clone, Copy, Debug, Default)]
pub struct MostMistakesFirstSorter;

impl CardOrganizer for MostMistakesFirstSorter {
    fn order(&self, records: &[CardRecord]) -> Vec<usize> {
        tracing::debug!(records = records.len(), "ordering by mistake count");
        order_by_key_desc(records, CardRecord::mistake_count)
    }
}

/// Cards missed most recently come first; cards never missed go last.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecentMistakeFirstSorter;

impl CardOrganizer for RecentMistakeFirstSorter {
    fn order(&self, records: &[CardRecord]) -> Vec<usize> {
        tracing::debug!(records = records.len(), "ordering by latest mistake");
        // None < Some(_), so never-missed cards sink to the end.
        order_by_key_desc(records, CardRecord::latest_mistake)
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    MostMistakes,
    RecentMistakes,
}

impl Strategy {
    pub fn organizer(&self) -> Box<dyn CardOrganizer> {
        match self {
            Strategy::MostMistakes => Box::new(MostMistakesFirstSorter),
            Strategy::RecentMistakes => Box::new(RecentMistakeFirstSorter),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::MostMistakes => f.write_str("most mistakes first"),
            Strategy::RecentMistakes => f.write_str("most recent mistake first"),
        }
    }
}
