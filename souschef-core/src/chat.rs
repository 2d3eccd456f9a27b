//! Conversation completion adapter
//!
//! The single operation this crate exists for: take a conversation
//! history, make sure it is anchored by the recipe-assistant system
//! prompt, ask the model for the next turn, and hand back the history
//! extended by the assistant's reply.

use crate::config::Config;
use crate::models::{Message, Role};
use crate::openai::{self, ChatRequest};
use crate::prompt::SYSTEM_PROMPT;
use anyhow::Result;
use tracing::info;

/// Get the assistant's next reply for a conversation history.
///
/// The input history may be empty and may or may not start with a
/// system message; either way the sequence sent to the model carries
/// exactly one leading system message. The full history is resubmitted
/// on every call since the backing service is stateless between calls.
///
/// Returns a new history: the effective sequence plus the assistant's
/// trimmed reply appended. The caller's slice is never modified.
/// Transport failures and malformed responses propagate unchanged;
/// there is no retry or fallback here.
pub async fn get_agent_response(history: &[Message], config: &Config) -> Result<Vec<Message>> {
    let effective = ensure_system_prompt(history);

    info!(
        model = %config.model_name,
        turns = effective.len(),
        "Requesting completion"
    );

    let request = ChatRequest::new(&config.model_name, effective.clone());
    let response = openai::chat_completion(&request, config).await?;
    let reply = response.content_or_err()?;

    Ok(append_reply(effective, reply))
}

/// Build the effective sequence to send: prepend the constant system
/// prompt unless the history already starts with a system message.
fn ensure_system_prompt(history: &[Message]) -> Vec<Message> {
    match history.first() {
        Some(first) if first.role == Role::System => history.to_vec(),
        _ => {
            let mut messages = Vec::with_capacity(history.len() + 1);
            messages.push(Message::system(SYSTEM_PROMPT));
            messages.extend_from_slice(history);
            messages
        }
    }
}

/// Append the assistant's reply, stripped of surrounding whitespace.
fn append_reply(mut effective: Vec<Message>, reply: &str) -> Vec<Message> {
    effective.push(Message::assistant(reply.trim()));
    effective
}
