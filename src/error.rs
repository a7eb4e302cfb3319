//! Error types for registry and dispatch operations

use thiserror::Error;

use crate::ident::DeviceId;

/// Errors that can occur while registering, unregistering, or addressing
/// devices.
///
/// Device implementations report their own failures as `anyhow::Error`; the
/// registry wraps them so callers can tell which operation failed without
/// inspecting the underlying device error.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The device refused or failed to establish its connection.
    /// Registration aborts: no id is minted and nothing is stored.
    #[error("device connect failed: {0}")]
    Connect(#[source] anyhow::Error),

    /// The device failed to tear down its connection during unregistration.
    /// The registry entry is removed regardless.
    #[error("device disconnect failed: {0}")]
    Disconnect(#[source] anyhow::Error),

    /// A command delivery failed. Recorded per command by the dispatcher,
    /// never aborts the rest of a program.
    #[error("send failed: {0}")]
    Send(#[source] anyhow::Error),

    /// No device is registered under the given id. A normal, soft outcome.
    #[error("device {0} not found")]
    NotFound(DeviceId),

    /// The unique-id retry budget was spent without finding a free id.
    #[error("unable to mint a unique device id after {attempts} attempts")]
    IdExhausted { attempts: u32 },
}
