use super::{
    client::Client,
    hub::Hub,
    tracer::{RoomEvent, Tracer},
};
use crate::Config;
use bytes::Bytes;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::mpsc;
use uuid::Uuid;

/// The room owns the active participants and serializes every change to them.
///
/// Participants never touch the set directly, they go through a [`Hub`].
pub struct Room {
    join_rx: mpsc::UnboundedReceiver<Client>,
    leave_rx: mpsc::UnboundedReceiver<Uuid>,
    forward_rx: mpsc::Receiver<Bytes>,
    clients: HashMap<Uuid, Client>,
    tracer: Arc<dyn Tracer>,
}

impl Room {
    /// Create a room and the first handle to it
    pub fn new(config: &Config, tracer: Arc<dyn Tracer>) -> (Self, Hub) {
        let (join_tx, join_rx) = mpsc::unbounded_channel();
        let (leave_tx, leave_rx) = mpsc::unbounded_channel();
        let (forward_tx, forward_rx) = mpsc::channel(config.room_channel_capacity);

        let hub = Hub::new(join_tx, leave_tx, forward_tx, config.message_buffer_size);

        let room = Self {
            join_rx,
            leave_rx,
            forward_rx,
            clients: HashMap::new(),
            tracer,
        };
        (room, hub)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.clients.contains_key(id)
    }

    /// Run the control loop until every hub handle has been dropped
    pub async fn run(mut self) {
        loop {
            // admissions first, so a participant is active before its messages arrive
            tokio::select! {
                biased;
                Some(client) = self.join_rx.recv() => self.admit(client),
                Some(id) = self.leave_rx.recv() => self.depart(&id),
                Some(msg) = self.forward_rx.recv() => self.forward(msg),
                else => break,
            }
        }
        tracing::debug!("Room closed");
    }

    fn admit(&mut self, client: Client) {
        let id = client.id();
        self.clients.insert(id, client);
        self.tracer.trace(RoomEvent::Joined(id));
    }

    fn depart(&mut self, id: &Uuid) {
        // dropping the client closes its outbound queue
        if self.clients.remove(id).is_some() {
            self.tracer.trace(RoomEvent::Left(*id));
        }
    }

    fn forward(&mut self, msg: Bytes) {
        let tracer = &self.tracer;
        self.clients.retain(|id, client| {
            if client.try_send(msg.clone()) {
                tracer.trace(RoomEvent::Delivered(*id));
                true
            } else {
                tracer.trace(RoomEvent::Evicted(*id));
                false
            }
        });
    }
}

// ========================// tests //======================== //
