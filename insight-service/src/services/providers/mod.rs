//! Chat-completion provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction for completion providers,
//! allowing easy swapping between backends (OpenAI, mock).

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use serde::Serialize;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        let msg = err.to_string();
        match err {
            ProviderError::NotConfigured(_) => AppError::ConfigError(anyhow::anyhow!(msg)),
            ProviderError::Auth(_) => AppError::BadGateway(msg),
            ProviderError::RateLimited => AppError::TooManyRequests(msg, None),
            ProviderError::Api(_) => AppError::BadGateway(msg),
            ProviderError::Network(_) => AppError::BadGateway(msg),
        }
    }
}

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message of a chat-completion prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Result of a completion call.
#[derive(Debug, Clone)]
pub struct ChatCompletion {
    /// First choice's message content, verbatim.
    pub content: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,
}

/// Trait for chat-completion providers (e.g., OpenAI).
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Run one completion over the given messages.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatCompletion, ProviderError>;
}
