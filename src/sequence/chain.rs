//! Typed sequential chains.
//!
//! Each `then` fixes the next task's input type to the previous task's output
//! type, so a mismatched chain fails to compile. The final result type is the
//! last task's output type.

use futures::future::{self, BoxFuture, FutureExt};

use super::step::Step;

type Runner<T, E> = Box<dyn FnOnce() -> BoxFuture<'static, Result<T, E>> + Send>;

/// A sequence of heterogeneous tasks built one step at a time.
///
/// ```
/// use utilkit::{Chain, Step};
///
/// # tokio_test::block_on(async {
/// let result = Chain::<(), String>::new()
///     .then(|()| Step::ready(1))
///     .then(|n| Step::pending(async move { Ok(if n == 1 { "result" } else { "" }) }))
///     .then(|s| Step::ready(!s.is_empty()))
///     .run()
///     .await;
/// assert_eq!(result, Ok(true));
/// # });
/// ```
pub struct Chain<T, E> {
    runner: Runner<T, E>,
    len: usize,
}

impl<E: Send + 'static> Chain<(), E> {
    /// Start an empty chain seeded with the `()` absence marker.
    pub fn new() -> Self {
        Self {
            runner: Box::new(|| future::ready(Ok(())).boxed()),
            len: 0,
        }
    }
}

impl<E: Send + 'static> Default for Chain<(), E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Chain<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Append a task that receives this chain's result.
    pub fn then<U, F>(self, task: F) -> Chain<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Step<U, E> + Send + 'static,
    {
        let previous = self.runner;
        let position = self.len + 1;

        let runner: Runner<U, E> = Box::new(move || {
            async move {
                let input = previous().await?;
                tracing::debug!("Running chained task {}", position);
                let output: Result<U, E> = task(input).await;
                if output.is_err() {
                    tracing::warn!("Chained task {} failed, stopping chain", position);
                }
                output
            }
            .boxed()
        });

        Chain {
            runner,
            len: position,
        }
    }

    /// Number of tasks in the chain.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Execute every task in order and return the last result.
    pub async fn run(self) -> Result<T, E> {
        (self.runner)().await
    }
}
