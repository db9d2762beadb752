use af2batch::engine::progress::{Progress, ProgressCallback};
use std::io::{self, Write};
use tracing::trace;

/// Renders dispatcher progress events as plain console lines on stdout.
///
/// Lines are flushed immediately so they interleave correctly with the
/// launcher's own output, which shares the same terminal.
#[derive(Debug, Default)]
pub struct CliProgressHandler;

impl CliProgressHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        Box::new(|progress: Progress| {
            let mut out = io::stdout().lock();
            if let Err(e) = Self::write_line(&mut out, &progress) {
                trace!("Dropped progress line: {}", e);
            }
        })
    }

    fn write_line(out: &mut impl Write, progress: &Progress) -> io::Result<()> {
        writeln!(out, "{}", Self::render(progress))?;
        out.flush()
    }

    pub fn render(progress: &Progress) -> String {
        match progress {
            Progress::EmptyBatch { root } => {
                format!("[info] No task directories found under {}", root.display())
            }
            Progress::BatchStart { root, total } => format!(
                "[info] Processing {} task directories under {}\n",
                total,
                root.display()
            ),
            Progress::TaskSkipped { task, missing } => {
                format!("[skip] {}: {} not found", task, missing.display())
            }
            Progress::TaskCommand { command, .. } => format!("[cmd] {}", command),
            Progress::TaskSucceeded { task } => format!("[done] {}\n", task),
            Progress::TaskFailed { task, reason } => {
                format!("[fail] {} ({}), continuing with the next task.\n", task, reason)
            }
            Progress::BatchFinish(summary) => format!(
                "[info] Finished {} tasks: {} succeeded, {} failed, {} skipped, {} dry-run",
                summary.total, summary.succeeded, summary.failed, summary.skipped, summary.planned
            ),
        }
    }
}
