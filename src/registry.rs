//! Device registry: owns the id -> device mapping
//!
//! The registry is shared behind an `Arc` and may be driven concurrently by
//! many tasks. All mapping mutations and existence checks happen under a
//! single write guard per operation; device I/O (`connect`, `disconnect`,
//! `send`) always runs outside the lock so a slow device cannot stall other
//! callers.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::device::Device;
use crate::error::RegistryError;
use crate::ident::{DeviceId, IdGenerator, RandomIdGenerator};
use crate::limits;

/// Manages all registered devices
pub struct DeviceRegistry {
    inner: RwLock<RegistryInner>,
}

struct RegistryInner {
    /// Map of device id -> device handle
    devices: HashMap<DeviceId, Arc<dyn Device>>,
    /// Candidate id source; lives under the same lock as the map so a
    /// contains-check plus insert is one atomic unit
    id_gen: Box<dyn IdGenerator>,
}

impl DeviceRegistry {
    /// Create a registry with an entropy-seeded identifier generator
    pub fn new() -> Self {
        Self::with_generator(Box::new(RandomIdGenerator::new()))
    }

    /// Create a registry with a caller-supplied identifier generator
    pub fn with_generator(id_gen: Box<dyn IdGenerator>) -> Self {
        Self {
            inner: RwLock::new(RegistryInner {
                devices: HashMap::new(),
                id_gen,
            }),
        }
    }

    /// Register a device and return its minted identifier.
    ///
    /// Connects the device first; a connect failure aborts the registration
    /// before any id is minted. Colliding candidate ids are redrawn up to
    /// [`limits::ID_RETRY_ATTEMPTS`] times, after which registration fails
    /// with [`RegistryError::IdExhausted`] and the device is disconnected
    /// again on a best-effort basis.
    pub async fn register(&self, device: Arc<dyn Device>) -> Result<DeviceId, RegistryError> {
        device.connect().await.map_err(RegistryError::Connect)?;

        let mut inner = self.inner.write().await;
        let mut attempts_left = limits::ID_RETRY_ATTEMPTS;
        let mut candidate = inner.id_gen.next_id();

        while inner.devices.contains_key(&candidate) {
            attempts_left -= 1;
            warn!(
                "Device id {} already registered, drawing a new one ({} attempts left)",
                candidate, attempts_left
            );
            if attempts_left == 0 {
                drop(inner);
                if let Err(e) = device.disconnect().await {
                    warn!("Disconnect after exhausted registration failed: {}", e);
                }
                return Err(RegistryError::IdExhausted {
                    attempts: limits::ID_RETRY_ATTEMPTS,
                });
            }
            candidate = inner.id_gen.next_id();
        }

        inner.devices.insert(candidate.clone(), device);
        let count = inner.devices.len();
        drop(inner);

        info!("Device {} registered ({} total)", candidate, count);
        Ok(candidate)
    }

    /// Unregister a device and disconnect it.
    ///
    /// An unknown id returns [`RegistryError::NotFound`] and leaves the
    /// mapping unchanged. The entry is removed before `disconnect` runs and
    /// stays removed even if the disconnect fails; that failure surfaces as
    /// [`RegistryError::Disconnect`].
    pub async fn unregister(&self, id: &DeviceId) -> Result<(), RegistryError> {
        let device = self.inner.write().await.devices.remove(id);

        let Some(device) = device else {
            warn!("Device {} not found", id);
            return Err(RegistryError::NotFound(id.clone()));
        };

        device.disconnect().await.map_err(RegistryError::Disconnect)?;
        info!("Device {} unregistered", id);
        Ok(())
    }

    /// Get the device registered under `id`, if any. No side effects.
    pub async fn get(&self, id: &DeviceId) -> Option<Arc<dyn Device>> {
        self.inner.read().await.devices.get(id).cloned()
    }

    /// List the ids of all registered devices
    pub async fn device_ids(&self) -> Vec<DeviceId> {
        self.inner.read().await.devices.keys().cloned().collect()
    }

    /// Get the number of registered devices
    pub async fn count(&self) -> usize {
        self.inner.read().await.devices.len()
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
