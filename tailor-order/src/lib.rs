pub mod option;
pub mod models;
pub mod configuration;
pub mod pricing;
pub mod equality;
pub mod factory;
pub mod modifier;

pub use option::{OptionValueRef, OrderItemOption};
pub use models::{Order, OrderItem, PlainOrderItem};
pub use configuration::ConfigurationEntry;
pub use equality::OrderLine;
pub use factory::{ConfigurationError, OrderItemOptionFactory};
pub use modifier::{OrderError, OrderModifier};
