mod api;
pub mod conn;
mod core;
mod util;

pub use api::make_app;
pub use conn::{Hub, Room};
pub use crate::core::Error;
pub use util::config::Config;
