use std::path::PathBuf;

/// Events emitted by the dispatch workflow, in the order they happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    EmptyBatch { root: PathBuf },
    BatchStart { root: PathBuf, total: usize },

    TaskSkipped { task: String, missing: PathBuf },
    TaskCommand { task: String, command: String },
    TaskSucceeded { task: String },
    TaskFailed { task: String, reason: String },

    BatchFinish(BatchSummary),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub planned: usize,
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
