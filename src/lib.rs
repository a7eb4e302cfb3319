//! Devicehub Core
//!
//! A registry and command dispatcher for heterogeneous remote devices.
//! Callers register device handles satisfying the [`Device`] capability
//! trait; the registry mints a unique [`DeviceId`] for each and a program
//! (an ordered list of addressed [`Command`]s) can then be replayed against
//! the registered devices with per-command failure isolation.

pub mod device;
pub mod dispatcher;
pub mod error;
pub mod ident;
pub mod registry;

// Re-export commonly used types at crate root
pub use device::{Command, CommandKind, Device, Program};
pub use dispatcher::{CommandFailure, ProgramDispatcher, ProgramReport};
pub use error::RegistryError;
pub use ident::{DeviceId, IdGenerator, RandomIdGenerator, DEVICE_ID_LENGTH};
pub use registry::DeviceRegistry;

/// Operational limits for the registry
pub mod limits {
    /// Maximum attempts to mint a unique device id before registration fails
    pub const ID_RETRY_ATTEMPTS: u32 = 7;
}
