//! Immediate-or-pending task results.

use std::future::{Future, IntoFuture};

use futures::future::{self, BoxFuture, Either, FutureExt};

/// The outcome of invoking one task: either already known or still running.
///
/// Both forms are awaited through the same [`IntoFuture`] path, so callers
/// never branch on which one a task returned.
pub enum Step<T, E> {
    Ready(Result<T, E>),
    Pending(BoxFuture<'static, Result<T, E>>),
}

impl<T, E> Step<T, E> {
    pub fn ready(value: T) -> Self {
        Self::Ready(Ok(value))
    }

    pub fn fail(error: E) -> Self {
        Self::Ready(Err(error))
    }

    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::Pending(future.boxed())
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

impl<T, E> From<Result<T, E>> for Step<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self::Ready(result)
    }
}

impl<T, E> IntoFuture for Step<T, E> {
    type Output = Result<T, E>;
    type IntoFuture = Either<future::Ready<Result<T, E>>, BoxFuture<'static, Result<T, E>>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Self::Ready(result) => Either::Left(future::ready(result)),
            Self::Pending(future) => Either::Right(future),
        }
    }
}
