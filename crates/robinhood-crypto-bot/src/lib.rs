/*
[INPUT]:  Public API exports for robinhood-crypto-bot crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod driver;

// Re-export main types for convenience
pub use driver::{HoldingsOutcome, OrderOutcome, RunOptions, RunReport, run};
