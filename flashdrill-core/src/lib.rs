pub mod errors;
pub mod models;
pub mod prioritization;
pub mod stats;

pub use errors::*;
pub use models::*;
pub use prioritization::*;
pub use stats::*;
