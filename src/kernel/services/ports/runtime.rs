use std::future::Future;
use std::pin::Pin;

pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Runs detached background work (file IO, assistant requests).
pub trait AsyncExecutor: Send + Sync {
    fn spawn(&self, task: BoxFuture);
}
