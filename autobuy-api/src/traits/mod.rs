pub mod execution;
pub mod price_listener;
pub mod tick_source;
