// Attribution pipeline: runs the selected strategies over one questioned
// document and a suspect set, and ranks each strategy's results.

pub mod attribution;

pub use attribution::{AttributionReport, Attributor, DocumentProfile, StrategyKind, StrategyReport};
