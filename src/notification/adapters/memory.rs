//! Recording in-memory notifier.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::notification::{
    domain::Notice,
    ports::{Notifier, NotifierError, NotifierResult},
};

/// Thread-safe notifier that records every notice instead of sending it.
///
/// Intended for tests and local runs without a mail gateway.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<RwLock<Vec<Notice>>>,
}

impl RecordingNotifier {
    /// Creates a notifier with an empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notice recorded so far, in send order.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::Send`] when the outbox lock is poisoned.
    pub fn sent(&self) -> NotifierResult<Vec<Notice>> {
        let outbox = self
            .sent
            .read()
            .map_err(|err| NotifierError::send(std::io::Error::other(err.to_string())))?;
        Ok(outbox.clone())
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, notice: &Notice) -> NotifierResult<()> {
        let mut outbox = self
            .sent
            .write()
            .map_err(|err| NotifierError::send(std::io::Error::other(err.to_string())))?;
        outbox.push(notice.clone());
        Ok(())
    }
}
