use crate::core::command::{Launcher, PredictionArgs};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Root directory does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Root path is not a directory: {}", .0.display())]
    RootNotADirectory(PathBuf),

    #[error("Cannot resolve launcher path '{path}': {source}", path = path.display())]
    LauncherPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    pub root: PathBuf,
    pub launcher: Launcher,
    pub prediction: PredictionArgs,
    pub dry_run: bool,
    pub only_existing_output: bool,
}

#[derive(Default)]
pub struct DispatchConfigBuilder {
    root: Option<PathBuf>,
    script: Option<PathBuf>,
    interpreter: Option<String>,
    prediction: Option<PredictionArgs>,
    dry_run: bool,
    only_existing_output: bool,
}

impl DispatchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, path: PathBuf) -> Self {
        self.root = Some(path);
        self
    }
    pub fn script(mut self, path: PathBuf) -> Self {
        self.script = Some(path);
        self
    }
    pub fn interpreter(mut self, interpreter: Option<String>) -> Self {
        self.interpreter = interpreter;
        self
    }
    pub fn prediction(mut self, args: PredictionArgs) -> Self {
        self.prediction = Some(args);
        self
    }
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }
    pub fn only_existing_output(mut self, enabled: bool) -> Self {
        self.only_existing_output = enabled;
        self
    }

    /// Assembles the configuration, making the launcher script path absolute.
    ///
    /// An existing script is canonicalized. A missing one is still accepted,
    /// since launch failures are per-task, and only has `.` and `..` removed.
    ///
    /// The root is only checked for presence here; whether it exists is
    /// decided when the batch starts (see [`resolve_root`]).
    pub fn build(self) -> Result<DispatchConfig, ConfigError> {
        let root = self.root.ok_or(ConfigError::MissingParameter("root"))?;
        let script = self
            .script
            .ok_or(ConfigError::MissingParameter("script"))?;
        let prediction = self
            .prediction
            .ok_or(ConfigError::MissingParameter("prediction"))?;

        let script = resolve_script(&script)?;

        Ok(DispatchConfig {
            root,
            launcher: Launcher {
                interpreter: self.interpreter.filter(|i| !i.trim().is_empty()),
                script,
            },
            prediction,
            dry_run: self.dry_run,
            only_existing_output: self.only_existing_output,
        })
    }
}

fn resolve_script(script: &Path) -> Result<PathBuf, ConfigError> {
    if let Ok(canonical) = script.canonicalize() {
        return Ok(canonical);
    }
    let absolute = std::path::absolute(script).map_err(|source| ConfigError::LauncherPath {
        path: script.to_path_buf(),
        source,
    })?;
    Ok(normalize_lexically(&absolute))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Resolves the batch root to a canonical absolute path that is a directory.
pub fn resolve_root(root: &Path) -> Result<PathBuf, ConfigError> {
    let resolved = root.canonicalize().map_err(|_| {
        let shown = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        ConfigError::RootNotFound(shown)
    })?;
    if !resolved.is_dir() {
        return Err(ConfigError::RootNotADirectory(resolved));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn prediction() -> PredictionArgs {
        PredictionArgs {
            fasta_paths: "/fasta".to_string(),
            max_template_date: "2021-11-01".to_string(),
            model_preset: "monomer".to_string(),
            data_dir: "/af2data".to_string(),
            use_precomputed_msas: true,
            extra_args: Vec::new(),
        }
    }

    #[test]
    fn build_reports_first_missing_parameter() {
        let err = DispatchConfigBuilder::new().build().unwrap_err();
        assert!(matches!(err, ConfigError::MissingParameter("root")));

        let err = DispatchConfigBuilder::new()
            .root(PathBuf::from("/batch"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingParameter("script")));
    }

    #[test]
    fn build_makes_relative_script_absolute() {
        let config = DispatchConfigBuilder::new()
            .root(PathBuf::from("/batch"))
            .script(PathBuf::from("docker/run_docker.py"))
            .interpreter(Some("python3".to_string()))
            .prediction(prediction())
            .dry_run(true)
            .build()
            .unwrap();

        assert!(config.launcher.script.is_absolute());
        assert!(config.launcher.script.ends_with("docker/run_docker.py"));
        assert_eq!(config.launcher.interpreter.as_deref(), Some("python3"));
        assert!(config.dry_run);
        assert!(!config.only_existing_output);
    }

    #[test]
    fn parent_segments_are_removed_from_missing_script() {
        let config = DispatchConfigBuilder::new()
            .root(PathBuf::from("/batch"))
            .script(PathBuf::from("/opt/alphafold/x/../docker/./run_docker.py"))
            .prediction(prediction())
            .build()
            .unwrap();

        assert_eq!(
            config.launcher.script,
            PathBuf::from("/opt/alphafold/docker/run_docker.py")
        );
    }

    #[test]
    fn existing_script_is_canonicalized() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("docker")).unwrap();
        fs::create_dir_all(temp.path().join("x")).unwrap();
        fs::write(temp.path().join("docker/run_docker.py"), "").unwrap();

        let config = DispatchConfigBuilder::new()
            .root(PathBuf::from("/batch"))
            .script(temp.path().join("x/../docker/run_docker.py"))
            .prediction(prediction())
            .build()
            .unwrap();

        assert_eq!(
            config.launcher.script,
            temp.path().join("docker/run_docker.py").canonicalize().unwrap()
        );
    }

    #[test]
    fn blank_interpreter_means_direct_execution() {
        let config = DispatchConfigBuilder::new()
            .root(PathBuf::from("/batch"))
            .script(PathBuf::from("/opt/run.sh"))
            .interpreter(Some("  ".to_string()))
            .prediction(prediction())
            .build()
            .unwrap();

        assert_eq!(config.launcher, Launcher::direct("/opt/run.sh"));
    }

    #[test]
    fn resolve_root_accepts_directory() {
        let temp = tempdir().unwrap();
        let resolved = resolve_root(temp.path()).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.is_dir());
    }

    #[test]
    fn resolve_root_rejects_missing_path() {
        let temp = tempdir().unwrap();
        let err = resolve_root(&temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, ConfigError::RootNotFound(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn resolve_root_rejects_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("tasks.txt");
        std::fs::write(&file, "").unwrap();

        let err = resolve_root(&file).unwrap_err();
        assert!(matches!(err, ConfigError::RootNotADirectory(_)));
    }
}
