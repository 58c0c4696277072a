//! The two directions that tie a transport to the room

use super::transport::{MessageReader, MessageWriter};
use bytes::Bytes;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Read messages from the transport and pass them to the room's forward queue.
///
/// Returns when the transport fails or closes, or when the room is gone.
pub async fn read<R: MessageReader>(id: Uuid, mut reader: R, forward: mpsc::Sender<Bytes>) {
    loop {
        match reader.read_message().await {
            Ok(msg) => {
                if forward.send(msg).await.is_err() {
                    tracing::debug!("Room is gone, stop reading {}", id);
                    break;
                }
            }
            Err(e) => {
                tracing::debug!("Stop reading {}: {}", id, e);
                break;
            }
        }
    }
}

/// Write every message of the outbound queue to the transport, in order.
///
/// Returns when the queue is closed and drained or a write fails. The
/// transport is closed in both cases.
pub async fn write<W: MessageWriter>(id: Uuid, mut writer: W, mut rx: mpsc::Receiver<Bytes>) {
    while let Some(msg) = rx.recv().await {
        if let Err(e) = writer.write_message(msg).await {
            tracing::debug!("Failed to write to {}: {}", id, e);
            break;
        }
    }
    rx.close();

    if let Err(e) = writer.close().await {
        tracing::debug!("Failed to close {}: {}", id, e);
    }
    tracing::debug!("Close socket from send task {}", id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conn::transport::{memory, Transport};

    #[tokio::test]
    async fn read_forwards_in_order() {
        let (transport, mut peer) = memory::pair();
        let (_writer, reader) = transport.split();
        let (forward_tx, mut forward_rx) = mpsc::channel(8);

        let incoming = peer.incoming.take().unwrap();
        incoming.send(Bytes::from_static(b"one")).unwrap();
        incoming.send(Bytes::from_static(b"two")).unwrap();
        drop(incoming);

        read(Uuid::new_v4(), reader, forward_tx).await;

        assert_eq!(forward_rx.recv().await.unwrap(), "one");
        assert_eq!(forward_rx.recv().await.unwrap(), "two");
        assert!(forward_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn write_drains_then_closes() {
        let (transport, mut peer) = memory::pair();
        let (writer, _reader) = transport.split();
        let (tx, rx) = mpsc::channel(8);

        tx.send(Bytes::from_static(b"a")).await.unwrap();
        tx.send(Bytes::from_static(b"b")).await.unwrap();
        drop(tx);

        write(Uuid::new_v4(), writer, rx).await;

        assert_eq!(peer.outgoing.recv().await.unwrap(), "a");
        assert_eq!(peer.outgoing.recv().await.unwrap(), "b");
        // closed transport ends the stream
        assert!(peer.outgoing.recv().await.is_none());
    }

    #[tokio::test]
    async fn write_stops_on_transport_error() {
        let (transport, peer) = memory::pair();
        let (writer, _reader) = transport.split();
        let (tx, rx) = mpsc::channel(8);
        drop(peer);

        tx.send(Bytes::from_static(b"lost")).await.unwrap();
        write(Uuid::new_v4(), writer, rx).await;

        // the queue no longer accepts messages
        assert!(tx.try_send(Bytes::from_static(b"late")).is_err());
    }
}
