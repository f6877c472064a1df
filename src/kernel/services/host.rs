use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use crate::core::service::Result as ServiceResult;
use crate::core::{Service, ServiceRegistry};

use super::bus::{kernel_bus, KernelBusReceiver, KernelBusSender, KernelMessage};
use super::ports::AsyncExecutor;

pub struct KernelServiceHost {
    registry: ServiceRegistry,
    bus: KernelBusSender,
    rx: KernelBusReceiver,
    executor: Arc<dyn AsyncExecutor>,
    pending: Arc<AtomicUsize>,
}

#[derive(Clone)]
pub struct KernelServiceContext {
    bus: KernelBusSender,
    executor: Arc<dyn AsyncExecutor>,
    pending: Arc<AtomicUsize>,
}

impl KernelServiceHost {
    pub fn new(executor: Arc<dyn AsyncExecutor>) -> Self {
        let (bus, rx) = kernel_bus();
        Self {
            registry: ServiceRegistry::new(),
            bus,
            rx,
            executor,
            pending: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn context(&self) -> KernelServiceContext {
        KernelServiceContext {
            bus: self.bus.clone(),
            executor: Arc::clone(&self.executor),
            pending: Arc::clone(&self.pending),
        }
    }

    pub fn register<S: Service + 'static>(&mut self, service: S) -> ServiceResult<()> {
        self.registry.register(service)
    }

    pub fn get<S: Service + 'static>(&self) -> Option<&S> {
        self.registry.get::<S>()
    }

    /// Number of spawned tasks that have not completed yet.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    pub fn try_recv(&mut self) -> Result<KernelMessage, TryRecvError> {
        self.rx.try_recv()
    }

    pub fn recv_timeout(&mut self, timeout: Duration) -> Result<KernelMessage, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Decrements the pending counter when the task finishes or unwinds.
struct PendingGuard(Arc<AtomicUsize>);

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl KernelServiceContext {
    pub fn dispatch(&self, action: crate::kernel::Action) {
        if self.bus.send_action(action).is_err() {
            tracing::warn!("kernel bus closed, dropping action");
        }
    }

    pub fn spawn_future<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.pending.fetch_add(1, Ordering::SeqCst);
        let guard = PendingGuard(Arc::clone(&self.pending));
        self.executor.spawn(Box::pin(async move {
            let _guard = guard;
            task.await;
        }));
    }
}
