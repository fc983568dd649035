//! Invoke transports
//!
//! A transport carries one named call with a JSON argument object and
//! returns the JSON answer.

use async_trait::async_trait;
use serde_json::Value;
use shared::Command;

use crate::ClientResult;

#[async_trait]
pub trait InvokeTransport: Send + Sync {
    async fn invoke(&self, command: Command, args: Value) -> ClientResult<Value>;
}

/// Transport to a [`clip_store::CommandHandler`] in the same process
#[cfg(feature = "in-process")]
#[derive(Clone)]
pub struct InProcessTransport {
    handler: clip_store::CommandHandler,
}

#[cfg(feature = "in-process")]
impl InProcessTransport {
    pub fn new(handler: clip_store::CommandHandler) -> Self {
        Self { handler }
    }
}

#[cfg(feature = "in-process")]
#[async_trait]
impl InvokeTransport for InProcessTransport {
    async fn invoke(&self, command: Command, args: Value) -> ClientResult<Value> {
        Ok(self.handler.invoke(command.as_str(), args).await?)
    }
}
