use crate::core::command::Invocation;
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// Runs one assembled invocation to completion.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ExitStatus>;
}

/// Spawns the invocation as a child process and blocks until it exits.
///
/// Standard streams are inherited so the launcher's output appears live. The
/// child stays in the dispatcher's process group, so a terminal interrupt
/// reaches both processes; no signal handling is installed here.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ExitStatus> {
        debug!("Spawning {:?}", invocation.program());
        Command::new(invocation.program())
            .args(invocation.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
    }
}
