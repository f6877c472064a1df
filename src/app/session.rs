//! Owns the store and the services, executes effects and feeds async results
//! back into the store.

use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core::ServiceError;
use crate::kernel::services::adapters::{
    read_archive, write_archive, AssistantService, SettingsService,
};
use crate::kernel::services::ports::AsyncExecutor;
use crate::kernel::services::{KernelMessage, KernelServiceHost};
use crate::kernel::{Action, AppState, Effect, ProjectError, Store};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct Session {
    store: Store,
    services: KernelServiceHost,
}

impl Session {
    pub fn new(
        settings: SettingsService,
        executor: Arc<dyn AsyncExecutor>,
    ) -> Result<Self, ServiceError> {
        let assistant = AssistantService::new(&settings.settings().assistant)
            .map_err(|e| ServiceError::InitializationFailed(e.to_string()))?;
        let store = Store::new(AppState::new(settings.settings().catalog()));

        let mut services = KernelServiceHost::new(executor);
        services.register(assistant)?;
        services.register(settings)?;

        Ok(Self { store, services })
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn settings(&self) -> Option<&SettingsService> {
        self.services.get::<SettingsService>()
    }

    pub fn assistant(&self) -> Option<&AssistantService> {
        self.services.get::<AssistantService>()
    }

    /// Background tasks still running.
    pub fn pending(&self) -> usize {
        self.services.pending()
    }

    /// Applies `action` and starts its effects. `Ok` carries whether state changed.
    pub fn dispatch(&mut self, action: Action) -> Result<bool, ProjectError> {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        match result.error {
            Some(error) => Err(error),
            None => Ok(result.state_changed),
        }
    }

    /// Dispatches every action already posted by background tasks.
    pub fn poll_kernel_bus(&mut self) -> Vec<ProjectError> {
        let mut errors = Vec::new();
        while let Ok(KernelMessage::Action(action)) = self.services.try_recv() {
            if let Err(e) = self.dispatch(action) {
                errors.push(e);
            }
        }
        errors
    }

    /// Blocks until no background task is left and their results have been
    /// dispatched, or until `timeout` elapses.
    pub fn wait_idle(&mut self, timeout: Option<Duration>) -> Vec<ProjectError> {
        let deadline = timeout.map(|t| Instant::now() + t);
        let mut errors = Vec::new();

        loop {
            let idle = self.services.pending() == 0;
            errors.extend(self.poll_kernel_bus());
            if idle && self.services.pending() == 0 {
                break;
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                tracing::warn!(pending = self.services.pending(), "gave up waiting for tasks");
                break;
            }
            if idle {
                continue;
            }

            match self.services.recv_timeout(POLL_INTERVAL) {
                Ok(KernelMessage::Action(action)) => {
                    if let Err(e) = self.dispatch(action) {
                        errors.push(e);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        errors
    }

    fn run_effect(&mut self, effect: Effect) {
        let ctx = self.services.context();
        match effect {
            Effect::ReadArchive(path) => read_archive(&ctx, path),
            Effect::WriteArchive { path, bytes } => write_archive(&ctx, path, bytes),
            Effect::RequestAssistant { ticket_id, request } => {
                match self.services.get::<AssistantService>() {
                    Some(assistant) => assistant.spawn_request(&ctx, ticket_id, request),
                    None => ctx.dispatch(Action::AssistantFailed {
                        ticket_id,
                        error: "assistant service not registered".to_string(),
                    }),
                }
            }
        }
    }
}
