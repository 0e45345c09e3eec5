//! Chat message repository port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::trip::ChatMessage;

/// Repository port for the planning conversation.
#[async_trait]
pub trait ChatMessageRepository: Send + Sync {
    /// Appends a message.
    async fn append(&self, message: ChatMessage) -> Result<ChatMessage, DomainError>;

    /// Lists all messages, oldest first.
    async fn list(&self) -> Result<Vec<ChatMessage>, DomainError>;
}
