use clap::{Parser, ValueEnum};
use flashdrill_core::{FlashCard, Strategy};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderKind {
    MostMistakes,
    RecentMistakes,
}

impl From<OrderKind> for Strategy {
    fn from(k: OrderKind) -> Self {
        match k {
            OrderKind::MostMistakes => Strategy::MostMistakes,
            OrderKind::RecentMistakes => Strategy::RecentMistakes,
        }
    }
}

#[derive(Debug, Parser, Clone)]
#[command(name = "flashdrill", version, about = "FlashDrill study rounds")]
pub struct Cli {
    /// How cards are reordered before each round
    #[arg(long, value_enum, default_value_t = OrderKind::MostMistakes)]
    pub order: OrderKind,

    /// Number of study rounds
    #[arg(long, default_value_t = 3)]
    pub rounds: u32,

    /// Card as question::answer (repeatable)
    #[arg(long = "card", required = true)]
    pub cards: Vec<FlashCard>,

    /// Stop once a round finishes without mistakes
    #[arg(long)]
    pub repeat_until_clean: bool,
}
