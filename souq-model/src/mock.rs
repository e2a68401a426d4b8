//! Mock chat model for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ModelError, Result};
use crate::model::{ChatModel, ModelRequest, Turn};

/// A recorded call to [`MockChatModel::reply`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// The history passed to the call.
    pub history: Vec<Turn>,
    /// The request passed to the call.
    pub request: ModelRequest,
}

/// A [`ChatModel`] that returns a canned reply and records every call.
///
/// # Example
///
/// ```rust,ignore
/// use souq_model::{ChatModel, MockChatModel};
///
/// let model = MockChatModel::new("تفضل، هذه خياراتنا");
/// let reply = model.reply(&[], &request).await?;
/// assert_eq!(model.calls().len(), 1);
/// ```
pub struct MockChatModel {
    reply: String,
    fail: bool,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockChatModel {
    /// Create a mock that always answers with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self { reply: reply.into(), fail: false, calls: Mutex::new(Vec::new()) }
    }

    /// Create a mock whose every call fails with [`ModelError::EmptyReply`].
    pub fn failing() -> Self {
        Self { reply: String::new(), fail: true, calls: Mutex::new(Vec::new()) }
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn reply(&self, history: &[Turn], request: &ModelRequest) -> Result<String> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(RecordedCall { history: history.to_vec(), request: request.clone() });

        if self.fail {
            return Err(ModelError::EmptyReply);
        }
        Ok(self.reply.clone())
    }
}
