//! Device capability trait and command types
//!
//! The registry never interprets device internals; anything that can
//! connect, disconnect, and accept a typed command qualifies.

use anyhow::Result;
use async_trait::async_trait;

use crate::ident::DeviceId;

/// Categories of commands a device may be asked to accept.
///
/// The core never interprets these; a device's `send` decides what each
/// kind means (or rejects kinds it does not understand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    SwitchOn,
    SwitchOff,
    ChangeColor,
    PlaySong,
    Open,
    Close,
    Flush,
    Clean,
}

/// Capability contract every registered device must satisfy
#[async_trait]
pub trait Device: Send + Sync {
    /// Establish the device connection. May block on I/O and may fail.
    async fn connect(&self) -> Result<()>;

    /// Tear down the device connection
    async fn disconnect(&self) -> Result<()>;

    /// Accept a typed command with an opaque payload. May suspend.
    async fn send(&self, kind: CommandKind, payload: &str) -> Result<()>;
}

/// One addressed command within a program. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Command {
    /// Identifier of the device this command targets
    pub target: DeviceId,
    /// Command category
    pub kind: CommandKind,
    /// Opaque payload forwarded to the device untouched
    pub payload: String,
}

impl Command {
    /// Create a new command addressed to `target`
    pub fn new(target: DeviceId, kind: CommandKind, payload: impl Into<String>) -> Self {
        Self {
            target,
            kind,
            payload: payload.into(),
        }
    }
}

/// An ordered sequence of commands. Order is significant: the dispatcher
/// executes commands strictly in sequence.
pub type Program = Vec<Command>;
