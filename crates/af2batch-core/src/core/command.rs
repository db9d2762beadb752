use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Pass-through parameters forwarded unchanged to every launcher invocation.
///
/// The dispatcher never interprets these values; they are rendered as
/// `--key=value` pairs in a fixed order, followed by `extra_args` verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionArgs {
    pub fasta_paths: String,
    pub max_template_date: String,
    pub model_preset: String,
    pub data_dir: String,
    pub use_precomputed_msas: bool,
    pub extra_args: Vec<String>,
}

impl PredictionArgs {
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            format!("--fasta_paths={}", self.fasta_paths),
            format!("--max_template_date={}", self.max_template_date),
            format!("--model_preset={}", self.model_preset),
            format!("--data_dir={}", self.data_dir),
            format!("--use_precomputed_msas={}", self.use_precomputed_msas),
        ];
        args.extend(self.extra_args.iter().cloned());
        args
    }
}

/// How the external launcher is started.
///
/// With an interpreter the spawned program is the interpreter and the script
/// becomes its first argument (`python3 run_docker.py ...`); without one the
/// script is executed directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    pub interpreter: Option<String>,
    pub script: PathBuf,
}

impl Launcher {
    pub fn direct(script: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: None,
            script: script.into(),
        }
    }

    pub fn interpreted(interpreter: impl Into<String>, script: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: Some(interpreter.into()),
            script: script.into(),
        }
    }
}

/// The fully assembled command line for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    args: Vec<OsString>,
}

impl Invocation {
    /// Builds `<launcher> <pass-through args...> --output_dir=<output_dir>`.
    pub fn for_task(launcher: &Launcher, prediction: &PredictionArgs, output_dir: &Path) -> Self {
        let (program, mut args) = match &launcher.interpreter {
            Some(interpreter) => (
                OsString::from(interpreter),
                vec![launcher.script.clone().into_os_string()],
            ),
            None => (launcher.script.clone().into_os_string(), Vec::new()),
        };

        args.extend(prediction.to_args().into_iter().map(OsString::from));

        let mut output_arg = OsString::from("--output_dir=");
        output_arg.push(output_dir.as_os_str());
        args.push(output_arg);

        Self { program, args }
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_args() -> PredictionArgs {
        PredictionArgs {
            fasta_paths: "/data/casp15/fasta".to_string(),
            max_template_date: "2021-11-01".to_string(),
            model_preset: "monomer".to_string(),
            data_dir: "/data/af2".to_string(),
            use_precomputed_msas: true,
            extra_args: Vec::new(),
        }
    }

    #[test]
    fn prediction_args_render_in_fixed_order() {
        assert_eq!(
            sample_args().to_args(),
            vec![
                "--fasta_paths=/data/casp15/fasta",
                "--max_template_date=2021-11-01",
                "--model_preset=monomer",
                "--data_dir=/data/af2",
                "--use_precomputed_msas=true",
            ]
        );
    }

    #[test]
    fn extra_args_follow_fixed_args_verbatim() {
        let mut args = sample_args();
        args.use_precomputed_msas = false;
        args.extra_args = vec!["--db_preset=reduced_dbs".to_string(), "--gpu_relax".to_string()];

        let rendered = args.to_args();
        assert_eq!(rendered[4], "--use_precomputed_msas=false");
        assert_eq!(&rendered[5..], &["--db_preset=reduced_dbs", "--gpu_relax"]);
    }

    #[test]
    fn interpreted_invocation_puts_script_first_and_output_dir_last() {
        let launcher = Launcher::interpreted("python3", "/opt/alphafold/docker/run_docker.py");
        let inv = Invocation::for_task(&launcher, &sample_args(), Path::new("/batch/T1/af2output"));

        assert_eq!(inv.program(), "python3");
        assert_eq!(inv.args()[0], "/opt/alphafold/docker/run_docker.py");
        assert_eq!(
            inv.args().last().unwrap(),
            "--output_dir=/batch/T1/af2output"
        );
        assert_eq!(inv.args().len(), 7);
    }

    #[test]
    fn direct_invocation_runs_script_itself() {
        let launcher = Launcher::direct("/opt/run.sh");
        let inv = Invocation::for_task(&launcher, &sample_args(), Path::new("/b/T2/af2output"));

        assert_eq!(inv.program(), "/opt/run.sh");
        assert_eq!(inv.args()[0], "--fasta_paths=/data/casp15/fasta");
    }

    #[test]
    fn display_joins_command_line_with_spaces() {
        let launcher = Launcher::interpreted("python3", "/af/run_docker.py");
        let inv = Invocation::for_task(&launcher, &sample_args(), Path::new("/b/T3/af2output"));

        assert_eq!(
            inv.to_string(),
            "python3 /af/run_docker.py --fasta_paths=/data/casp15/fasta \
             --max_template_date=2021-11-01 --model_preset=monomer --data_dir=/data/af2 \
             --use_precomputed_msas=true --output_dir=/b/T3/af2output"
        );
    }
}
