//! Prompt construction and insight generation.

use crate::services::providers::{ChatMessage, ChatProvider, ProviderError};

/// System instruction sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are an AI project analyst. Provide concise insights and recommendations based on project summaries.";

/// Build the two-message prompt for a project summary: the fixed system
/// instruction followed by the summary, verbatim.
pub fn build_messages(project_summary: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(project_summary),
    ]
}

/// Generate an insight for the given summary. Surrounding whitespace in the
/// provider's reply is stripped.
pub async fn generate_insight(
    provider: &dyn ChatProvider,
    project_summary: &str,
) -> Result<String, ProviderError> {
    let messages = build_messages(project_summary);
    let completion = provider.complete(&messages).await?;

    tracing::debug!(
        input_tokens = completion.input_tokens,
        output_tokens = completion.output_tokens,
        "Completion received"
    );

    Ok(completion.content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::Role;

    #[test]
    fn prompt_is_exactly_two_messages() {
        let messages = build_messages("Ship the beta.");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "Ship the beta.");
    }

    #[test]
    fn summary_is_passed_through_verbatim() {
        let summary = "  odd  spacing\nand newlines\t";
        let messages = build_messages(summary);
        assert_eq!(messages[1].content, summary);
    }
}
