//! # Autobuy Core Library
//!
//! The engine behind the automated buy-trigger system: a simulated price
//! feed, one-shot conditional buy triggers, and the orchestration that runs
//! a full auto-buy cycle.
//!
//! ## Modules
//! - `feed`: Publish/subscribe price distribution and the bounded tick loop.
//! - `trigger`: One-shot conditional buy listeners.
//! - `strategy`: The auto-buy orchestration entry point.
//! - `execution`: A paper execution service for demos and tests.

pub mod execution;
pub mod feed;
pub mod strategy;
pub mod trigger;

pub use execution::PaperExecutionService;
pub use feed::random::RandomTickSource;
pub use feed::{FeedError, FeedHandle, PriceFeed};
pub use strategy::TradingStrategy;
pub use trigger::BuyTrigger;
