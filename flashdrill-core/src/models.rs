use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::CoreError;

pub const CARD_SEPARATOR: &str = "::";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FlashCard {
    question: String,
    answer: String,
}

impl FlashCard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Lenient match: surrounding whitespace and letter case are ignored.
    pub fn check_success(&self, response: &str) -> bool {
        response.trim().to_lowercase() == self.answer.trim().to_lowercase()
    }
}

impl fmt::Display for FlashCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlashCard[{}, {}]", self.question, self.answer)
    }
}

impl FromStr for FlashCard {
    type Err = CoreError;

    /// Parses `question::answer`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (q, a) = s
            .split_once(CARD_SEPARATOR)
            .ok_or(CoreError::Invalid("card must look like question::answer"))?;
        let (q, a) = (q.trim(), a.trim());
        if q.is_empty() {
            return Err(CoreError::Invalid("card question is empty"));
        }
        if a.is_empty() {
            return Err(CoreError::Invalid("card answer is empty"));
        }
        Ok(FlashCard::new(q, a))
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub timestamp: DateTime<Utc>,
}

impl Outcome {
    pub fn new(success: bool, timestamp: DateTime<Utc>) -> Self {
        Self { success, timestamp }
    }

    pub fn is_mistake(&self) -> bool {
        !self.success
    }
}

/// A flashcard together with its answer history.
///
/// The history only ever grows at the end or is cleared as a whole; readers
/// get a copy, never a handle into it.
#[derive(Clone, Debug)]
pub struct CardRecord {
    card: Arc<FlashCard>,
    results: Vec<Outcome>,
}

impl CardRecord {
    pub fn new(card: Arc<FlashCard>) -> Self {
        Self {
            card,
            results: Vec::new(),
        }
    }

    pub fn card(&self) -> &Arc<FlashCard> {
        &self.card
    }

    /// Snapshot of the recorded outcomes, oldest first.
    pub fn results(&self) -> Vec<Outcome> {
        self.results.clone()
    }

    pub fn record_result(&mut self, success: bool) {
        self.record_result_at(success, Utc::now());
    }

    /// Appends an outcome stamped with `timestamp` instead of the current time.
    pub fn record_result_at(&mut self, success: bool, timestamp: DateTime<Utc>) {
        tracing::trace!(card = %self.card, success, "recording result");
        self.results.push(Outcome::new(success, timestamp));
    }

    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    pub fn mistake_count(&self) -> usize {
        self.results.iter().filter(|o| o.is_mistake()).count()
    }

    /// Time of the latest failed attempt, `None` if the card was never missed.
    pub fn latest_mistake(&self) -> Option<DateTime<Utc>> {
        self.results
            .iter()
            .filter(|o| o.is_mistake())
            .map(|o| o.timestamp)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn latest_mistake_ignores_later_successes() {
        let mut r = CardRecord::new(Arc::new(FlashCard::new("q", "a")));
        let t0 = Utc::now();
        r.record_result_at(false, t0);
        r.record_result_at(true, t0 + Duration::seconds(5));
        assert_eq!(r.latest_mistake(), Some(t0));
        assert_eq!(r.mistake_count(), 1);
    }

    #[test]
    fn empty_history_has_no_keys() {
        let r = CardRecord::new(Arc::new(FlashCard::new("q", "a")));
        assert_eq!(r.latest_mistake(), None);
        assert_eq!(r.mistake_count(), 0);
    }
}
