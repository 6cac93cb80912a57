//! Crawl pipeline: window computation and the per-cycle orchestrator.
//!
//! - `PollState`: when the feed was last asked (the only cross-cycle state)
//! - `StampCrawler`: one poll cycle from feed fetch to aggregated report

pub mod poll;
pub mod window;

pub use poll::StampCrawler;
pub use window::PollState;
