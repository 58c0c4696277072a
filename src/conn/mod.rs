//! Management of connections for the chat room

mod bridge;
mod client;
mod hub;
mod room;
pub mod tracer;
pub mod transport;

pub use client::Client;
pub use hub::Hub;
pub use room::Room;
