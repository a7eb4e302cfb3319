//! Program dispatcher: replays addressed commands against the registry
//!
//! Commands execute strictly in sequence, each fully awaited before the
//! next. A failed or misaddressed command is reported and skipped; it never
//! aborts the rest of the program.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::device::Command;
use crate::error::RegistryError;
use crate::ident::DeviceId;
use crate::registry::DeviceRegistry;

/// One command that could not be delivered
#[derive(Debug)]
pub struct CommandFailure {
    /// Position of the command within the program
    pub index: usize,
    /// The device the command was addressed to
    pub target: DeviceId,
    /// Why delivery failed
    pub error: RegistryError,
}

/// Outcome of one program run
#[derive(Debug, Default)]
pub struct ProgramReport {
    /// Commands attempted (always the full program length)
    pub attempted: usize,
    /// Commands the target device accepted
    pub delivered: usize,
    /// Per-command failures, in program order
    pub failures: Vec<CommandFailure>,
}

impl ProgramReport {
    /// True if every attempted command was delivered
    pub fn all_delivered(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Dispatches programs to registered devices
pub struct ProgramDispatcher {
    registry: Arc<DeviceRegistry>,
}

impl ProgramDispatcher {
    /// Create a dispatcher over a shared registry
    pub fn new(registry: Arc<DeviceRegistry>) -> Self {
        Self { registry }
    }

    /// Run a program to completion.
    ///
    /// Every command is attempted exactly once, in order, with no retry,
    /// rollback, or reordering. The run itself never fails; individual
    /// failures are logged and collected in the returned report.
    pub async fn run(&self, program: &[Command]) -> ProgramReport {
        info!("Running program with {} commands", program.len());
        let mut report = ProgramReport::default();

        for (index, command) in program.iter().enumerate() {
            report.attempted += 1;

            let Some(device) = self.registry.get(&command.target).await else {
                warn!(
                    "Device {} not found (command {} of {})",
                    command.target,
                    index + 1,
                    program.len()
                );
                report.failures.push(CommandFailure {
                    index,
                    target: command.target.clone(),
                    error: RegistryError::NotFound(command.target.clone()),
                });
                continue;
            };

            match device.send(command.kind, &command.payload).await {
                Ok(()) => {
                    debug!("Delivered {:?} to {}", command.kind, command.target);
                    report.delivered += 1;
                }
                Err(e) => {
                    warn!("Send {:?} to {} failed: {}", command.kind, command.target, e);
                    report.failures.push(CommandFailure {
                        index,
                        target: command.target.clone(),
                        error: RegistryError::Send(e),
                    });
                }
            }
        }

        info!(
            "Program finished: {}/{} delivered",
            report.delivered, report.attempted
        );
        report
    }
}
