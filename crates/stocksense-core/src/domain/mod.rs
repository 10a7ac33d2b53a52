mod news;
mod price;
mod symbol;
mod timestamp;

pub use news::NewsItem;
pub use price::{PricePoint, PriceSeries};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
