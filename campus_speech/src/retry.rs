//! Retry with exponential backoff for the cloud recognizer.

use std::fmt::Display;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Retry an async operation with backoff.
///
/// The first attempts wait `base_delays` seconds between them; after the
/// delay table is exhausted, up to `final_retries` more attempts run at a
/// fixed 10 second interval.
///
/// # Returns
/// The first successful result, or the last error once every attempt fails.
pub async fn retry_with_backoff<F, Fut, T, E>(
    mut operation: F,
    base_delays: &[u64],
    final_retries: usize,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let total = base_delays.len() + final_retries;
    let mut last_error = None;

    for attempt in 1..=total.max(1) {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                if attempt < total {
                    let delay = base_delays.get(attempt - 1).copied().unwrap_or(10);
                    warn!(
                        "Request failed (attempt {attempt}/{total}): {e}. Retrying after {delay}s..."
                    );
                    sleep(Duration::from_secs(delay)).await;
                }
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => Err(e),
        None => unreachable!("at least one attempt always runs"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn succeeds_on_first_attempt() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let result = retry_with_backoff(
            || {
                let attempts = attempts.clone();
                async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Ok::<(), String>(())
                }
            },
            &[1, 2],
            2,
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn succeeds_after_failures() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let result: Result<(), String> = retry_with_backoff(
            || {
                let attempts = attempts.clone();
                async move {
                    let count = attempts.fetch_add(1, Ordering::SeqCst) + 1;
                    if count < 3 { Err(String::from("fail")) } else { Ok(()) }
                }
            },
            &[1, 2],
            2,
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn fails_after_all_attempts() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let result: Result<(), String> = retry_with_backoff(
            || {
                let attempts = attempts.clone();
                async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err(String::from("fail"))
                }
            },
            &[1, 2],
            2,
        )
        .await;
        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 4); // 2 base + 2 final
    }
}
