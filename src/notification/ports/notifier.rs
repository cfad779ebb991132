//! Outbound gateway port for notice delivery.

use crate::notification::domain::Notice;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notifier operations.
pub type NotifierResult<T> = Result<T, NotifierError>;

/// Notice delivery contract.
///
/// Delivery is best-effort: a single attempt with no retry and no timeout
/// beyond the transport default.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends one notice.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::Send`] when the gateway rejects the notice
    /// or the transport fails.
    async fn send(&self, notice: &Notice) -> NotifierResult<()>;
}

/// Errors returned by notifier implementations.
#[derive(Debug, Clone, Error)]
pub enum NotifierError {
    /// The gateway rejected the notice or the transport failed.
    #[error("notice delivery failed: {0}")]
    Send(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotifierError {
    /// Wraps a transport error.
    pub fn send(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Send(Arc::new(err))
    }
}
