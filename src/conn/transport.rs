//! Message-framed duplex transports

use crate::core::Error;
use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use bytes::Bytes;
use futures::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};

/// Receiving half of a transport
#[async_trait]
pub trait MessageReader: Send + 'static {
    /// Read the next message, `Error::Closed` once the peer has gone
    async fn read_message(&mut self) -> Result<Bytes, Error>;
}

/// Sending half of a transport
#[async_trait]
pub trait MessageWriter: Send + 'static {
    async fn write_message(&mut self, msg: Bytes) -> Result<(), Error>;

    async fn close(&mut self) -> Result<(), Error>;
}

/// A connection that can be split so reads and writes run concurrently
pub trait Transport: Send + 'static {
    type Writer: MessageWriter;
    type Reader: MessageReader;

    fn split(self) -> (Self::Writer, Self::Reader);
}

// ========================// WebSocket //======================== //

impl Transport for WebSocket {
    type Writer = SplitSink<WebSocket, Message>;
    type Reader = SplitStream<WebSocket>;

    fn split(self) -> (Self::Writer, Self::Reader) {
        StreamExt::split(self)
    }
}

#[async_trait]
impl MessageReader for SplitStream<WebSocket> {
    async fn read_message(&mut self) -> Result<Bytes, Error> {
        while let Some(msg) = self.next().await {
            match msg? {
                Message::Text(text) => return Ok(Bytes::copy_from_slice(text.as_str().as_bytes())),
                Message::Binary(data) => return Ok(data),
                Message::Close(_) => {
                    tracing::debug!("Receive close message from client");
                    break;
                }
                // pings are answered by the protocol layer
                Message::Ping(_) | Message::Pong(_) => {}
            }
        }
        Err(Error::Closed)
    }
}

#[async_trait]
impl MessageWriter for SplitSink<WebSocket, Message> {
    async fn write_message(&mut self, msg: Bytes) -> Result<(), Error> {
        let msg = match String::from_utf8(msg.to_vec()) {
            Ok(text) => Message::Text(text.into()),
            Err(_) => Message::Binary(msg),
        };
        self.send(msg).await?;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), Error> {
        SinkExt::close(self).await?;
        Ok(())
    }
}

// ========================// Memory //======================== //
