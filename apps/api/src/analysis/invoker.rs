//! Model invocation boundary.

use async_trait::async_trait;

use crate::llm_client::LlmError;

/// Sends one prompt to a language model and returns its raw text.
///
/// `Ok(None)` means the model answered without any text. Implementations make a
/// single attempt; retry and timeout policy, if any, belongs to the implementation.
///
/// Carried in `AppState` as `Arc<dyn ModelInvoker>`.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn invoke(&self, prompt: &str) -> Result<Option<String>, LlmError>;
}
