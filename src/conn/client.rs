use bytes::Bytes;
use tokio::sync::mpsc;
use uuid::Uuid;

/// A participant as seen by the room
///
/// The room holds the only sender of the outbound queue, so dropping the
/// client closes the queue for its writer.
pub struct Client {
    id: Uuid,
    tx: mpsc::Sender<Bytes>,
}

impl Client {
    /// Create a client together with the receiving end of its outbound queue
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Bytes>) {
        let (tx, rx) = mpsc::channel(capacity);
        let client = Self {
            id: Uuid::new_v4(),
            tx,
        };
        (client, rx)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Queue a message without waiting for capacity
    pub fn try_send(&self, msg: Bytes) -> bool {
        self.tx.try_send(msg).is_ok()
    }
}
