//! Homogeneous sequential and concurrent runners.

use std::future::IntoFuture;

use futures::future;

use super::step::Step;

/// One step of a homogeneous chain.
///
/// The first task receives `None`; every later task receives the previous
/// task's result.
pub type Task<T, E> = Box<dyn FnOnce(Option<T>) -> Step<T, E> + Send>;

/// Box a closure as a [`Task`].
pub fn task<T, E, F>(f: F) -> Task<T, E>
where
    F: FnOnce(Option<T>) -> Step<T, E> + Send + 'static,
{
    Box::new(f)
}

/// Run `tasks` one after another, feeding each result into the next task.
///
/// Task `i + 1` is not invoked until task `i` has fully resolved. The first
/// error stops the chain and is returned unchanged. An empty list resolves
/// to `Ok(None)`.
pub async fn run_in_sequence<T, E>(tasks: Vec<Task<T, E>>) -> Result<Option<T>, E> {
    let total = tasks.len();
    let mut previous = None;

    for (index, task) in tasks.into_iter().enumerate() {
        tracing::debug!("Running task {}/{}", index + 1, total);
        match task(previous.take()).await {
            Ok(value) => previous = Some(value),
            Err(error) => {
                tracing::warn!("Task {}/{} failed, stopping sequence", index + 1, total);
                return Err(error);
            }
        }
    }

    Ok(previous)
}

/// Drive all `steps` concurrently and collect their results in input order.
///
/// Fails with the first error observed; remaining steps are dropped.
pub async fn run_all<T, E>(steps: Vec<Step<T, E>>) -> Result<Vec<T>, E> {
    tracing::debug!("Running {} steps concurrently", steps.len());
    future::try_join_all(steps.into_iter().map(IntoFuture::into_future)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[tokio::test]
    async fn test_empty_sequence() {
        let result: Result<Option<i32>, String> = run_in_sequence(Vec::new()).await;
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn test_results_thread_through_in_order() {
        let tasks: Vec<Task<i32, String>> = vec![
            task(|_| Step::ready(1)),
            task(|x: Option<i32>| Step::ready(x.unwrap_or_default() + 1)),
            task(|x: Option<i32>| Step::ready(x.unwrap_or_default() * 10)),
        ];

        assert_eq!(run_in_sequence(tasks).await, Ok(Some(20)));
    }

    #[tokio::test]
    async fn test_first_task_receives_none() {
        let tasks: Vec<Task<bool, String>> = vec![task(|seed: Option<bool>| Step::ready(seed.is_none()))];
        assert_eq!(run_in_sequence(tasks).await, Ok(Some(true)));
    }

    #[tokio::test]
    async fn test_mixed_ready_and_pending() {
        let tasks: Vec<Task<i32, String>> = vec![
            task(|_| Step::ready(1)),
            task(|x: Option<i32>| Step::pending(async move { Ok(x.unwrap_or_default() + 1) })),
            task(|x: Option<i32>| Step::ready(x.unwrap_or_default() * 2)),
        ];

        assert_eq!(run_in_sequence(tasks).await, Ok(Some(4)));
    }

    #[tokio::test]
    async fn test_string_chain() {
        let tasks: Vec<Task<String, String>> = vec![
            task(|_| Step::pending(async { Ok("result".to_string()) })),
            task(|prev: Option<String>| Step::pending(async move { Ok(format!("{}2", prev.unwrap_or_default())) })),
            task(|prev: Option<String>| Step::ready(prev.unwrap_or_default().replace('2', "3"))),
        ];

        assert_eq!(run_in_sequence(tasks).await, Ok(Some("result3".to_string())));
    }

    #[tokio::test]
    async fn test_failure_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let tasks: Vec<Task<String, String>> = vec![
            task(|_| Step::pending(async { Err("E1".to_string()) })),
            task(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Step::ready("never".to_string())
            }),
        ];

        assert_eq!(run_in_sequence(tasks).await, Err("E1".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_next_task_waits_for_pending_result() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (first_log, second_log) = (Arc::clone(&log), Arc::clone(&log));

        let tasks: Vec<Task<u32, String>> = vec![
            task(move |_| {
                Step::pending(async move {
                    first_log.lock().unwrap().push("first started");
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    first_log.lock().unwrap().push("first finished");
                    Ok(1)
                })
            }),
            task(move |x: Option<u32>| {
                second_log.lock().unwrap().push("second started");
                Step::ready(x.unwrap_or_default() + 1)
            }),
        ];

        assert_eq!(run_in_sequence(tasks).await, Ok(Some(2)));
        assert_eq!(
            *log.lock().unwrap(),
            vec!["first started", "first finished", "second started"]
        );
    }

    #[tokio::test]
    async fn test_run_all_preserves_order() {
        let steps: Vec<Step<i32, String>> = vec![
            Step::pending(async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                Ok(10)
            }),
            Step::ready(20),
            Step::pending(async { Ok(30) }),
        ];

        assert_eq!(run_all(steps).await, Ok(vec![10, 20, 30]));
    }

    #[tokio::test]
    async fn test_run_all_empty() {
        let steps: Vec<Step<i32, String>> = Vec::new();
        assert_eq!(run_all(steps).await, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn test_run_all_rejects_with_first_failure() {
        let steps: Vec<Step<&str, &str>> = vec![
            Step::ready("success1"),
            Step::fail("error2"),
            Step::ready("success3"),
        ];
        assert_eq!(run_all(steps).await, Err("error2"));

        let steps: Vec<Step<&str, &str>> = vec![Step::fail("error1"), Step::fail("error2")];
        assert_eq!(run_all(steps).await, Err("error1"));
    }
}
