use super::{bridge, client::Client, transport::Transport};
use crate::core::Error;
use bytes::Bytes;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Cloneable handle to a running [`Room`](super::Room)
#[derive(Clone)]
pub struct Hub {
    join_tx: mpsc::UnboundedSender<Client>,
    leave_tx: mpsc::UnboundedSender<Uuid>,
    forward_tx: mpsc::Sender<Bytes>,
    message_buffer_size: usize,
}

impl Hub {
    pub(super) fn new(
        join_tx: mpsc::UnboundedSender<Client>,
        leave_tx: mpsc::UnboundedSender<Uuid>,
        forward_tx: mpsc::Sender<Bytes>,
        message_buffer_size: usize,
    ) -> Self {
        Self {
            join_tx,
            leave_tx,
            forward_tx,
            message_buffer_size,
        }
    }

    /// Ask the room to admit a client
    pub fn join(&self, client: Client) -> Result<(), Error> {
        self.join_tx.send(client)?;
        Ok(())
    }

    /// Ask the room to remove a client, a no-op if it already left
    pub fn leave(&self, id: Uuid) {
        let _ = self.leave_tx.send(id);
    }

    /// Queue a message for every active client
    pub async fn forward(&self, msg: Bytes) -> Result<(), Error> {
        self.forward_tx.send(msg).await?;
        Ok(())
    }

    /// Serve one connection until either direction ends.
    ///
    /// The client is admitted before its outbound direction starts, and it
    /// is asked to leave exactly once however the connection ends.
    pub async fn handle_connection<T: Transport>(&self, transport: T) {
        let (client, rx) = Client::new(self.message_buffer_size);
        let id = client.id();
        let (writer, reader) = transport.split();

        if let Err(e) = self.join(client) {
            tracing::error!("Failed to join the room: {}", e);
            return;
        }
        let departure = Departure { hub: self, id };

        // this task will receive message from the outbound queue and send to client
        let mut send_task = tokio::spawn(bridge::write(id, writer, rx));

        // reading runs here; a finished writer (error or eviction) ends it too
        let send_done = tokio::select! {
            _ = bridge::read(id, reader, self.forward_tx.clone()) => false,
            _ = &mut send_task => true,
        };

        // leaving closes the outbound queue, so the writer drains and stops
        drop(departure);
        if !send_done {
            let _ = send_task.await;
        }
        tracing::debug!("Disconnect WebSocket {}", id);
    }
}

/// Sends the leave request when dropped
struct Departure<'a> {
    hub: &'a Hub,
    id: Uuid,
}

impl Drop for Departure<'_> {
    fn drop(&mut self) {
        self.hub.leave(self.id);
    }
}

// ========================// tests //======================== //
