//! Deadline shared by every network call of a single bridge operation

use std::future::Future;
use std::time::Duration;

use tokio::time::{timeout_at, Instant};
use tracing::error;

use crate::error::{BridgeError, Result};
use crate::spans;

/// Absolute point in time by which an operation must finish, if any
#[derive(Debug, Clone, Copy)]
pub(crate) struct Deadline(Option<Instant>);

impl Deadline {
    /// Starts the clock for an operation
    pub(crate) fn after(timeout: Option<Duration>) -> Self {
        Self(timeout.map(|timeout| Instant::now() + timeout))
    }

    /// Awaits `call`, failing with [`BridgeError::Timeout`] once the deadline passes
    ///
    /// Expiry drops the future. A wallet submission already handed to the
    /// network may still be mined.
    pub(crate) async fn run<T, F>(self, operation: &'static str, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let Some(at) = self.0 else {
            return call.await;
        };

        match timeout_at(at, call).await {
            Ok(result) => result,
            Err(_) => {
                spans::record_error_with_context(
                    "Timeout",
                    &format!("Deadline exceeded while waiting for {operation}"),
                    None,
                );
                error!(operation = operation, event = "operation_deadline_exceeded");
                Err(BridgeError::Timeout {
                    operation: operation.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_deadline_expires_on_hung_call() {
        let deadline = Deadline::after(Some(Duration::from_secs(5)));
        let result: Result<()> = deadline
            .run("hung_call", std::future::pending::<Result<()>>())
            .await;

        assert!(matches!(
            result,
            Err(BridgeError::Timeout { ref operation }) if operation == "hung_call"
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_deadline_passes_result_through() {
        let deadline = Deadline::after(None);
        let value = deadline.run("ready_call", async { Ok(7u8) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_is_shared_across_calls() {
        let deadline = Deadline::after(Some(Duration::from_secs(10)));

        deadline
            .run("first_call", async {
                tokio::time::sleep(Duration::from_secs(6)).await;
                Ok(())
            })
            .await
            .unwrap();

        let second = deadline
            .run("second_call", async {
                tokio::time::sleep(Duration::from_secs(6)).await;
                Ok(())
            })
            .await;

        assert!(matches!(second, Err(BridgeError::Timeout { .. })));
    }
}
