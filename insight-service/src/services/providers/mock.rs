//! Mock provider implementation for testing.

use super::{ChatCompletion, ChatMessage, ChatProvider, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock chat provider: returns a canned reply or a forced failure, and records
/// the messages of the most recent call for assertions.
pub struct MockChatProvider {
    reply: Option<String>,
    failure: Option<ProviderError>,
    last_messages: Mutex<Option<Vec<ChatMessage>>>,
}

impl MockChatProvider {
    /// Provider that answers every call with `reply`, verbatim.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            failure: None,
            last_messages: Mutex::new(None),
        }
    }

    /// Provider that fails every call with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            reply: None,
            failure: Some(error),
            last_messages: Mutex::new(None),
        }
    }

    /// Messages from the most recent `complete` call, if any.
    pub fn last_messages(&self) -> Option<Vec<ChatMessage>> {
        self.last_messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatCompletion, ProviderError> {
        *self.last_messages.lock().unwrap() = Some(messages.to_vec());

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let content = self
            .reply
            .clone()
            .unwrap_or_else(|| "Mock insight".to_string());

        Ok(ChatCompletion {
            content,
            input_tokens: messages.iter().map(|m| m.content.len() as i32 / 4).sum(),
            output_tokens: 10,
        })
    }
}
