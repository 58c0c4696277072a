mod router;
mod websocket;

pub use router::make_app;

use crate::conn::{
    tracer::{LogTracer, Silent, Tracer},
    Hub, Room,
};
use crate::Config;
use std::sync::Arc;

/// State shared by every handler
pub struct AppState {
    pub config: Config,
    pub hub: Hub,
}

impl AppState {
    /// Create the state and spawn the room it serves
    pub fn new(config: Config) -> Arc<Self> {
        let tracer: Arc<dyn Tracer> = if config.trace {
            Arc::new(LogTracer)
        } else {
            Arc::new(Silent)
        };

        let (room, hub) = Room::new(&config, tracer);
        tokio::spawn(room.run());

        Arc::new(Self { config, hub })
    }
}
