use crate::cli::opts::Cli;

use anyhow::{bail, Result};
use flashdrill_core::{current_streak, deck_totals, summarize, CardRecord, Strategy};
use std::io::{stdin, stdout, BufRead, Write};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub rounds_completed: u32,
    pub quit: bool,
}

pub fn run(args: Cli) -> Result<()> {
    if args.rounds == 0 {
        bail!("--rounds must be at least 1");
    }
    let mut records: Vec<CardRecord> = args
        .cards
        .into_iter()
        .map(|c| CardRecord::new(Arc::new(c)))
        .collect();

    let stdin = stdin();
    let mut input = stdin.lock();
    let mut output = stdout();
    let report = study(
        &mut records,
        args.order.into(),
        args.rounds,
        args.repeat_until_clean,
        &mut input,
        &mut output,
    )?;
    print_summary(&records, &mut output)?;
    info!(rounds = report.rounds_completed, quit = report.quit, "session finished");
    Ok(())
}

/// Runs up to `rounds` study rounds, reordering `records` before each one.
pub fn study<R: BufRead, W: Write>(
    records: &mut [CardRecord],
    strategy: Strategy,
    rounds: u32,
    repeat_until_clean: bool,
    input: &mut R,
    out: &mut W,
) -> Result<SessionReport> {
    if records.is_empty() {
        bail!("no cards to study");
    }
    let organizer = strategy.organizer();
    let mut report = SessionReport { rounds_completed: 0, quit: false };

    for round in 1..=rounds {
        let order = organizer.order(records);
        writeln!(out, "\n== round {}/{} ({}) ==", round, rounds, strategy)?;
        writeln!(out, "[q=quit]")?;

        let mut mistakes = 0usize;
        let total = order.len();
        for (n, idx) in order.into_iter().enumerate() {
            let record = &mut records[idx];
            writeln!(out, "\n[{}/{}] Q: {}", n + 1, total, record.card().question())?;
            let Some(line) = read_line(input, out, "answer> ")? else {
                report.quit = true;
                return Ok(report);
            };
            if line.trim().eq_ignore_ascii_case("q") {
                report.quit = true;
                return Ok(report);
            }

            let ok = record.card().check_success(&line);
            record.record_result(ok);
            if ok {
                writeln!(out, "correct")?;
            } else {
                mistakes += 1;
                writeln!(out, "incorrect, answer: {}", record.card().answer())?;
            }
        }

        report.rounds_completed = round;
        info!(round, mistakes, "round complete");
        if repeat_until_clean && mistakes == 0 {
            writeln!(out, "\nclean round, stopping early")?;
            break;
        }
    }
    Ok(report)
}

pub fn print_summary<W: Write>(records: &[CardRecord], out: &mut W) -> Result<()> {
    writeln!(out, "\n== summary ==")?;
    for r in records {
        let t = summarize(r);
        writeln!(
            out,
            "{}\tattempts={}\tmistakes={}\tstreak={}",
            r.card().question(),
            t.attempts,
            t.mistakes,
            current_streak(r)
        )?;
    }
    let deck = deck_totals(records);
    writeln!(out, "accuracy {:.0}%", deck.accuracy() * 100.0)?;
    Ok(())
}

// None on end of input.
fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush().ok();
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashdrill_core::FlashCard;
    use std::io::Cursor;

    fn deck() -> Vec<CardRecord> {
        vec![
            CardRecord::new(Arc::new(FlashCard::new("hola", "hello"))),
            CardRecord::new(Arc::new(FlashCard::new("adios", "goodbye"))),
        ]
    }

    #[test]
    fn records_outcomes_and_reorders_missed_cards_first() {
        let mut records = deck();
        // round 1: miss "adios"; round 2 should ask it first
        let mut input = Cursor::new("hello\nwrong\ngoodbye\nhello\n");
        let mut out: Vec<u8> = Vec::new();
        let report = study(&mut records, Strategy::MostMistakes, 2, false, &mut input, &mut out)
            .unwrap();

        assert_eq!(report, SessionReport { rounds_completed: 2, quit: false });
        assert_eq!(records[0].results().len(), 2);
        assert_eq!(records[1].mistake_count(), 1);

        let text = String::from_utf8(out).unwrap();
        let round2 = text.split("round 2/2").nth(1).unwrap();
        assert!(round2.find("adios").unwrap() < round2.find("hola").unwrap());
        assert!(text.contains("incorrect, answer: goodbye"));
    }

    #[test]
    fn quits_on_q_and_on_eof() {
        let mut records = deck();
        let mut out: Vec<u8> = Vec::new();
        let report = study(
            &mut records,
            Strategy::RecentMistakes,
            3,
            false,
            &mut Cursor::new("hello\nq\n"),
            &mut out,
        )
        .unwrap();
        assert_eq!(report, SessionReport { rounds_completed: 0, quit: true });
        assert_eq!(records[0].results().len(), 1);
        assert!(records[1].results().is_empty());

        let report = study(&mut records, Strategy::RecentMistakes, 3, false, &mut Cursor::new(""), &mut out)
            .unwrap();
        assert!(report.quit);
    }

    #[test]
    fn stops_after_clean_round() {
        let mut records = deck();
        let mut out: Vec<u8> = Vec::new();
        let report = study(
            &mut records,
            Strategy::MostMistakes,
            5,
            true,
            &mut Cursor::new(" HELLO\ngoodbye\n"),
            &mut out,
        )
        .unwrap();
        assert_eq!(report.rounds_completed, 1);
        assert!(!report.quit);

        let mut summary = Vec::new();
        print_summary(&records, &mut summary).unwrap();
        let summary = String::from_utf8(summary).unwrap();
        assert!(summary.contains("hola\tattempts=1\tmistakes=0\tstreak=1"));
        assert!(summary.contains("accuracy 100%"));
    }

    #[test]
    fn empty_deck_is_rejected() {
        let mut records: Vec<CardRecord> = Vec::new();
        let err = study(&mut records, Strategy::MostMistakes, 1, false, &mut Cursor::new(""), &mut Vec::<u8>::new());
        assert!(err.is_err());
    }
}
