use crate::core::command::Invocation;
use crate::core::task::{TaskDir, discover_tasks};
use crate::engine::config::{DispatchConfig, resolve_root};
use crate::engine::error::{DispatchError, TaskError};
use crate::engine::progress::{BatchSummary, Progress, ProgressReporter};
use crate::engine::runner::CommandRunner;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

#[derive(Debug)]
pub enum TaskOutcome {
    /// `only_existing_output` was set and the output directory was absent.
    Skipped,
    /// Dry run: the command was assembled and logged but not executed.
    Planned,
    Succeeded,
    Failed(TaskError),
}

#[derive(Debug)]
pub struct TaskResult {
    pub task: TaskDir,
    pub invocation: Option<Invocation>,
    pub outcome: TaskOutcome,
}

#[derive(Debug)]
pub struct BatchReport {
    pub root: PathBuf,
    pub results: Vec<TaskResult>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary {
            total: self.total(),
            ..Default::default()
        };
        for result in &self.results {
            match result.outcome {
                TaskOutcome::Skipped => summary.skipped += 1,
                TaskOutcome::Planned => summary.planned += 1,
                TaskOutcome::Succeeded => summary.succeeded += 1,
                TaskOutcome::Failed(_) => summary.failed += 1,
            }
        }
        summary
    }
}

/// Runs the launcher once per task directory under `config.root`.
///
/// Only an unusable root is fatal. Every per-task problem (directory creation,
/// launch failure, non-zero exit) is recorded in the returned report and the
/// batch moves on to the next task.
#[instrument(skip_all, name = "dispatch_workflow")]
pub fn run(
    config: &DispatchConfig,
    runner: &dyn CommandRunner,
    reporter: &ProgressReporter,
) -> Result<BatchReport, DispatchError> {
    let root = resolve_root(&config.root)?;
    debug!("Resolved batch root to {:?}", &root);

    let tasks = discover_tasks(&root).map_err(|source| DispatchError::Enumerate {
        path: root.clone(),
        source,
    })?;

    if tasks.is_empty() {
        info!("No task directories found under {:?}", &root);
        reporter.report(Progress::EmptyBatch { root: root.clone() });
        return Ok(BatchReport {
            root,
            results: Vec::new(),
        });
    }

    info!("Processing {} task directories.", tasks.len());
    reporter.report(Progress::BatchStart {
        root: root.clone(),
        total: tasks.len(),
    });

    let results: Vec<_> = tasks
        .into_iter()
        .map(|task| process_task(task, config, runner, reporter))
        .collect();

    let report = BatchReport { root, results };
    let summary = report.summary();
    info!(
        "Batch finished: {} succeeded, {} failed, {} skipped, {} planned.",
        summary.succeeded, summary.failed, summary.skipped, summary.planned
    );
    reporter.report(Progress::BatchFinish(summary));

    Ok(report)
}

fn process_task(
    task: TaskDir,
    config: &DispatchConfig,
    runner: &dyn CommandRunner,
    reporter: &ProgressReporter,
) -> TaskResult {
    let output_dir = task.output_dir();

    if config.only_existing_output && !task.has_output_dir() {
        info!("Skipping {}: {:?} does not exist.", task.name(), &output_dir);
        reporter.report(Progress::TaskSkipped {
            task: task.name().to_string(),
            missing: output_dir,
        });
        return TaskResult {
            task,
            invocation: None,
            outcome: TaskOutcome::Skipped,
        };
    }

    if let Err(source) = fs::create_dir_all(&output_dir) {
        let error = TaskError::CreateOutputDir {
            path: output_dir,
            source,
        };
        return failed(task, None, error, reporter);
    }

    let invocation = Invocation::for_task(&config.launcher, &config.prediction, &output_dir);
    let command = invocation.to_string();
    info!("[{}] {}", task.name(), &command);
    reporter.report(Progress::TaskCommand {
        task: task.name().to_string(),
        command,
    });

    if config.dry_run {
        return TaskResult {
            task,
            invocation: Some(invocation),
            outcome: TaskOutcome::Planned,
        };
    }

    let error = match runner.run(&invocation) {
        Ok(status) => TaskError::from_status(status),
        Err(source) => Some(TaskError::Launch {
            program: invocation.program().to_string_lossy().into_owned(),
            source,
        }),
    };

    match error {
        None => {
            info!("Task {} completed.", task.name());
            reporter.report(Progress::TaskSucceeded {
                task: task.name().to_string(),
            });
            TaskResult {
                task,
                invocation: Some(invocation),
                outcome: TaskOutcome::Succeeded,
            }
        }
        Some(error) => failed(task, Some(invocation), error, reporter),
    }
}

fn failed(
    task: TaskDir,
    invocation: Option<Invocation>,
    error: TaskError,
    reporter: &ProgressReporter,
) -> TaskResult {
    warn!("Task {} failed: {}", task.name(), &error);
    reporter.report(Progress::TaskFailed {
        task: task.name().to_string(),
        reason: error.to_string(),
    });
    TaskResult {
        task,
        invocation,
        outcome: TaskOutcome::Failed(error),
    }
}
