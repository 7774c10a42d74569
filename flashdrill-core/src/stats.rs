use crate::{CardRecord, Outcome};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub attempts: u32,
    pub successes: u32,
    pub mistakes: u32,
}

impl Totals {
    pub fn record(&mut self, o: &Outcome) {
        self.attempts += 1;
        if o.success {
            self.successes += 1;
        } else {
            self.mistakes += 1;
        }
    }

    pub fn merge(&mut self, other: &Totals) {
        self.attempts += other.attempts;
        self.successes += other.successes;
        self.mistakes += other.mistakes;
    }

    pub fn accuracy(&self) -> f32 {
        if self.attempts == 0 {
            0.0
        } else {
            self.successes as f32 / self.attempts as f32
        }
    }
}

pub fn summarize(record: &CardRecord) -> Totals {
    let mut totals = Totals::default();
    for o in record.results() {
        totals.record(&o);
    }
    totals
}

pub fn deck_totals(records: &[CardRecord]) -> Totals {
    let mut totals = Totals::default();
    for r in records {
        totals.merge(&summarize(r));
    }
    totals
}

/// Consecutive successes at the end of the history.
pub fn current_streak(record: &CardRecord) -> u32 {
    record
        .results()
        .iter()
        .rev()
        .take_while(|o| o.success)
        .count() as u32
}
