//! Message-oriented connections to the game authority.

use crate::protocol::Message;

pub mod in_memory;
pub mod tcp;

/// A bidirectional, message-framed connection. Implementations own the wire
/// format; the session layer only ever sees whole [`Message`] values.
#[async_trait::async_trait]
pub trait Transport: Send {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<Message>;
}
