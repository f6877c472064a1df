use std::any::{Any, TypeId};

use rustc_hash::FxHashMap;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Service not found: {0}")]
    NotFound(String),

    #[error("Service initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Service already registered: {0}")]
    AlreadyRegistered(String),
}

pub trait Service: Any {
    fn name(&self) -> &'static str;
}

impl dyn Service {
    #[inline]
    pub fn downcast_ref<T: Service>(&self) -> Option<&T> {
        if self.type_id() == TypeId::of::<T>() {
            // SAFETY: the concrete type was just checked; the cast only drops the vtable.
            unsafe { Some(&*(self as *const dyn Service as *const T)) }
        } else {
            None
        }
    }
}

/// One instance per service type.
#[derive(Default)]
pub struct ServiceRegistry {
    services: FxHashMap<TypeId, Box<dyn Service>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<S: Service + 'static>(&mut self, service: S) -> Result<()> {
        let type_id = TypeId::of::<S>();
        if self.services.contains_key(&type_id) {
            return Err(ServiceError::AlreadyRegistered(service.name().to_string()));
        }
        tracing::debug!(service = service.name(), "service registered");
        self.services.insert(type_id, Box::new(service));
        Ok(())
    }

    pub fn get<S: Service + 'static>(&self) -> Option<&S> {
        self.services
            .get(&TypeId::of::<S>())
            .and_then(|s| s.downcast_ref::<S>())
    }

    /// Like [`get`](Self::get) but reports which service is missing.
    pub fn require<S: Service + 'static>(&self) -> Result<&S> {
        self.get::<S>()
            .ok_or_else(|| ServiceError::NotFound(std::any::type_name::<S>().to_string()))
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/service.rs"]
mod tests;
