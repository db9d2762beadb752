use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Name of the per-task directory the launcher writes its results into.
pub const OUTPUT_DIR_NAME: &str = "af2output";

/// One unit of work: an immediate child directory of the batch root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDir {
    name: String,
    path: PathBuf,
}

impl TaskDir {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { name, path }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path.join(OUTPUT_DIR_NAME)
    }

    pub fn has_output_dir(&self) -> bool {
        self.output_dir().exists()
    }
}

/// Lists the immediate child directories of `root`, sorted by file name.
///
/// Plain files are ignored. Symlinks are followed, so a link pointing at a
/// directory counts as a task. The result is a snapshot; directories created
/// afterwards are not picked up.
pub fn discover_tasks(root: &Path) -> io::Result<Vec<TaskDir>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        } else {
            trace!("Ignoring non-directory entry {:?}", path);
        }
    }

    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Discovered {} task directories under {:?}", dirs.len(), root);

    Ok(dirs.into_iter().map(TaskDir::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_returns_only_directories_in_name_order() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        for name in ["T1104", "T1027", "T1099"] {
            fs::create_dir(root.join(name)).unwrap();
        }
        fs::write(root.join("README.txt"), "not a task").unwrap();

        let tasks = discover_tasks(root).unwrap();
        let names: Vec<_> = tasks.iter().map(TaskDir::name).collect();

        assert_eq!(names, vec!["T1027", "T1099", "T1104"]);
        assert_eq!(tasks[0].path(), root.join("T1027"));
    }

    #[test]
    fn discover_on_empty_root_yields_nothing() {
        let temp = tempdir().unwrap();
        assert!(discover_tasks(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn discover_fails_for_missing_root() {
        let temp = tempdir().unwrap();
        let result = discover_tasks(&temp.path().join("nope"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn output_dir_is_fixed_child_of_task() {
        let temp = tempdir().unwrap();
        let task = TaskDir::new(temp.path().join("T1050"));

        assert_eq!(task.name(), "T1050");
        assert_eq!(task.output_dir(), temp.path().join("T1050").join("af2output"));
        assert!(!task.has_output_dir());

        fs::create_dir_all(task.output_dir()).unwrap();
        assert!(task.has_output_dir());
    }
}
