pub mod health;
pub mod quote;
pub mod list;
pub mod fallback;

pub use health::health_handler;
pub use quote::quote_handler;
pub use list::list_handler;
pub use fallback::fallback_handler;
