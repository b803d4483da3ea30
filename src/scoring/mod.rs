// Strategy abstraction and the ranking policy shared by every strategy.

pub mod ranking;
pub mod traits;

pub use ranking::{rank, RankedOutcome};
pub use traits::{ResultDetail, ScoreDirection, SimilarityResult, SimilarityStrategy};
