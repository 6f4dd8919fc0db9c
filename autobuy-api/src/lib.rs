pub mod model;
pub mod traits;

pub use model::execution::Fill;
pub use model::market_data::PriceUpdate;
pub use model::trigger_spec::TriggerSpec;
pub use traits::execution::{ExecutionError, ExecutionService};
pub use traits::price_listener::PriceListener;
pub use traits::tick_source::TickSource;
