//! Chat route group - conversation, trip generation, adaptation, care mode.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatMessageResponse, ChatSendResponse};
pub use routes::chat_router;
