//! Observers of the room lifecycle

use std::fmt;
use uuid::Uuid;

/// Lifecycle events reported by the room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomEvent {
    /// A participant was admitted
    Joined(Uuid),
    /// A participant departed
    Left(Uuid),
    /// A message was queued for a participant
    Delivered(Uuid),
    /// A participant's outbound queue was saturated and it was dropped
    Evicted(Uuid),
}

impl fmt::Display for RoomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomEvent::Joined(id) => write!(f, "New client joined: {}", id),
            RoomEvent::Left(id) => write!(f, "Client left: {}", id),
            RoomEvent::Delivered(id) => write!(f, "-- sent to client {}", id),
            RoomEvent::Evicted(id) => write!(f, "-- failed to send, cleaned up client {}", id),
        }
    }
}

pub trait Tracer: Send + Sync {
    fn trace(&self, event: RoomEvent);
}

/// Drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Tracer for Silent {
    fn trace(&self, _: RoomEvent) {}
}

/// Writes events to the `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace(&self, event: RoomEvent) {
        tracing::debug!("{}", event);
    }
}

/// Keeps every event for later inspection
#[cfg(test)]
#[derive(Default)]
pub(crate) struct Recorder {
    events: std::sync::Mutex<Vec<RoomEvent>>,
}

#[cfg(test)]
impl Recorder {
    pub fn events(&self) -> Vec<RoomEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Poll until `pred` holds for the recorded events, panics after a second
    pub async fn wait_until<F>(&self, pred: F)
    where
        F: Fn(&[RoomEvent]) -> bool,
    {
        let poll = async {
            while !pred(&self.events()) {
                tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            }
        };
        tokio::time::timeout(std::time::Duration::from_secs(1), poll)
            .await
            .expect("timed out waiting for room events");
    }
}

#[cfg(test)]
impl Tracer for Recorder {
    fn trace(&self, event: RoomEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_read_as_text() {
        let id = Uuid::nil();
        assert_eq!(
            RoomEvent::Joined(id).to_string(),
            "New client joined: 00000000-0000-0000-0000-000000000000"
        );
        assert!(RoomEvent::Evicted(id)
            .to_string()
            .starts_with("-- failed to send"));
    }
}
