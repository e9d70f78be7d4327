//! Tokio runtime delay implementation.

use std::time::Duration;

use async_trait::async_trait;

use crate::core::Delay;

/// Waits on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

impl TokioDelay {
    /// Create a new tokio-backed delay.
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
