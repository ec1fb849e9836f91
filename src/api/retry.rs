//! Bounded retry for requests whose connection could not be established.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// Default number of attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Default pause between attempts.
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(2);

/// How often and how patiently to retry a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one. Always at least 1.
    pub max_attempts: u32,
    /// Fixed pause after each connection failure.
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

/// Errors that can tell a connection failure apart from other failures.
pub trait ConnectFailure {
    /// Returns `true` if no connection to the peer could be established.
    fn is_connection_failure(&self) -> bool;
}

impl ConnectFailure for reqwest::Error {
    fn is_connection_failure(&self) -> bool {
        self.is_connect()
    }
}

/// Why a retried request produced no response.
#[derive(Debug, Error)]
pub enum RetryError<E> {
    /// Every attempt failed to connect.
    #[error("no connection after {attempts} attempts")]
    Exhausted { attempts: u32 },
    /// A failure that is not retried (timeout after connect, body error, ...).
    #[error("{0}")]
    Failed(E),
}

/// Sends a request until a response arrives, retrying only connection failures.
///
/// `send` is called with the 1-based attempt number and must build a fresh
/// request each time. A response of any status ends the loop. After a
/// connection failure the loop sleeps for `policy.backoff`, for at most
/// `policy.max_attempts` attempts in total.
pub async fn retrying_post<T, E, F, Fut>(
    policy: RetryPolicy,
    mut send: F,
) -> Result<T, RetryError<E>>
where
    E: ConnectFailure + std::fmt::Display,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = policy.max_attempts.max(1);

    for attempt in 1..=max_attempts {
        match send(attempt).await {
            Ok(response) => return Ok(response),
            Err(e) if e.is_connection_failure() => {
                log::info!("Connection failed (attempt {attempt}/{max_attempts}): {e}");
                tokio::time::sleep(policy.backoff).await;
            }
            Err(e) => return Err(RetryError::Failed(e)),
        }
    }

    Err(RetryError::Exhausted {
        attempts: max_attempts,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    #[derive(Debug)]
    enum FakeError {
        Refused,
        Timeout,
    }

    impl std::fmt::Display for FakeError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::Refused => f.write_str("connection refused"),
                Self::Timeout => f.write_str("timed out"),
            }
        }
    }

    impl ConnectFailure for FakeError {
        fn is_connection_failure(&self) -> bool {
            matches!(self, Self::Refused)
        }
    }

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 10);
        assert_eq!(policy.backoff, Duration::from_secs(2));
    }

    #[test]
    fn test_policy_clamps_zero_attempts() {
        let policy = RetryPolicy::new(0, Duration::ZERO);
        assert_eq!(policy.max_attempts, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausts_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let started = Mutex::new(Vec::new());
        let calls = &calls;
        let started = &started;

        let result: Result<(), _> = retrying_post(RetryPolicy::default(), move |_| async move {
            calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut times) = started.lock() {
                times.push(Instant::now());
            }
            Err(FakeError::Refused)
        })
        .await;

        assert!(matches!(result, Err(RetryError::Exhausted { attempts: 10 })));
        assert_eq!(calls.load(Ordering::SeqCst), 10);

        let times = started.lock().unwrap();
        assert_eq!(times.len(), 10);
        for pair in times.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_secs(2));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_returns_first_response_without_retry() {
        let calls = AtomicU32::new(0);
        let calls = &calls;

        let result: Result<u16, RetryError<FakeError>> =
            retrying_post(RetryPolicy::default(), move |_| async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(500)
            })
            .await;

        assert_eq!(result.unwrap(), 500);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_after_transient_failures() {
        let result: Result<&str, RetryError<FakeError>> =
            retrying_post(RetryPolicy::default(), |attempt| async move {
                if attempt < 3 {
                    Err(FakeError::Refused)
                } else {
                    Ok("ok")
                }
            })
            .await;

        assert_eq!(result.unwrap(), "ok");
    }

    #[tokio::test(start_paused = true)]
    async fn test_other_failures_are_not_retried() {
        let calls = AtomicU32::new(0);
        let calls = &calls;

        let result: Result<(), _> = retrying_post(RetryPolicy::default(), move |_| async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(FakeError::Timeout)
        })
        .await;

        assert!(matches!(result, Err(RetryError::Failed(FakeError::Timeout))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_policy_bounds_attempts() {
        let calls = AtomicU32::new(0);
        let calls = &calls;
        let policy = RetryPolicy::new(3, Duration::from_millis(10));

        let result: Result<(), _> = retrying_post(policy, move |_| async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(FakeError::Refused)
        })
        .await;

        assert!(matches!(result, Err(RetryError::Exhausted { attempts: 3 })));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    struct RecordingLogger(Mutex<Vec<(log::Level, String)>>);

    impl log::Log for RecordingLogger {
        fn enabled(&self, _: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            if record.target() != "docqa_cli::api::retry" {
                return;
            }
            if let Ok(mut records) = self.0.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: RecordingLogger = RecordingLogger(Mutex::new(Vec::new()));

    #[tokio::test(start_paused = true)]
    async fn test_attempt_failures_stay_below_default_filter() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        let result: Result<(), _> =
            retrying_post(RetryPolicy::new(2, Duration::from_millis(10)), |_| async {
                Err(FakeError::Refused)
            })
            .await;
        assert!(result.is_err());

        let records = LOGGER.0.lock().unwrap();
        assert!(
            records
                .iter()
                .any(|(_, msg)| msg.starts_with("Connection failed (attempt 2/2)"))
        );
        assert!(records.iter().all(|(level, _)| *level > log::Level::Warn));
    }
}
