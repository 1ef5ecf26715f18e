//! Command implementations.

pub mod config;
pub mod days;
pub mod now;
pub mod span;
pub mod window;

pub use self::config::execute_config;
pub use self::days::execute_days;
pub use self::now::execute_now;
pub use self::span::{execute_contains, execute_overlaps, execute_subtract};
pub use self::window::execute_window;
