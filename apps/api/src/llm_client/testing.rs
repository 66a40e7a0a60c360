//! Substitute `ChatCompleter` for router and handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatCompleter, ChatMessage, LlmError};

enum Reply {
    Text(String),
    Upstream { status: u16, body: String },
    Transport(String),
}

/// Returns a canned reply and records every call.
pub struct MockCompleter {
    reply: Reply,
    calls: AtomicUsize,
    seen: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockCompleter {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::with_reply(Reply::Text(text.to_string()))
    }

    pub fn upstream_error(status: u16, body: &str) -> Self {
        Self::with_reply(Reply::Upstream {
            status,
            body: body.to_string(),
        })
    }

    pub fn transport_error(message: &str) -> Self {
        Self::with_reply(Reply::Transport(message.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Content of the first message of the most recent call.
    pub fn last_prompt(&self) -> Option<String> {
        self.seen
            .lock()
            .unwrap()
            .last()
            .and_then(|messages| messages.first())
            .map(|m| m.content.clone())
    }

    pub fn last_messages(&self) -> Vec<ChatMessage> {
        self.seen.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl ChatCompleter for MockCompleter {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _temperature: f32,
    ) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(messages.to_vec());

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Upstream { status, body } => Err(LlmError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            Reply::Transport(message) => Err(LlmError::Transport(message.clone())),
        }
    }
}
