pub mod option;
pub mod pricing;
pub mod product;

pub use option::{CustomerOption, CustomerOptionType, CustomerOptionValue};
pub use pricing::{CustomerOptionValuePrice, PriceType};
pub use product::Product;
