use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    build_subscriber(verbosity, quiet, log_file)?
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))
}

fn build_subscriber(
    verbosity: u8,
    quiet: bool,
    log_file: Option<PathBuf>,
) -> Result<impl Subscriber + Send + Sync + 'static> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(&path).map_err(CliError::Io)?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_thread_ids(true)
                    .with_target(true),
            )
        }
        None => None,
    };

    Ok(tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer)
        .with(file_layer))
}

fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::Once;
    use tracing::{debug, error, info, trace, warn};

    static INIT: Once = Once::new();

    fn ensure_global_logger_is_set() {
        INIT.call_once(|| {
            setup_logging(3, false, None).expect("Failed to set up global logger for tests");
        });
    }

    #[test]
    #[serial]
    fn initialization_and_macros_work() {
        ensure_global_logger_is_set();

        error!("This is an error");
        warn!("This is a warning");
        info!("This is info");
        debug!("This is debug");
        trace!("This is trace");
    }

    #[test]
    #[serial]
    fn second_initialization_is_an_error_not_a_panic() {
        ensure_global_logger_is_set();

        let result = setup_logging(0, false, None);
        assert!(matches!(result, Err(CliError::Other(_))));
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(7, false), LevelFilter::TRACE);
        assert_eq!(level_filter(3, true), LevelFilter::ERROR);
    }

    #[test]
    fn log_file_receives_events_at_configured_level() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("af2batch.log");

        let subscriber = build_subscriber(2, false, Some(log_path.clone())).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            debug!("Resolved batch root for file test.");
            trace!("Spawning details below the threshold.");
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Resolved batch root for file test."));
        assert!(content.contains("DEBUG"));
        assert!(content.contains("ThreadId"));
        assert!(!content.contains("below the threshold"));
    }

    #[test]
    fn quiet_log_file_keeps_only_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("quiet.log");

        let subscriber = build_subscriber(0, true, Some(log_path.clone())).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            warn!("Task T1 failed: exit code 17");
            error!("Root directory does not exist");
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Root directory does not exist"));
        assert!(!content.contains("exit code 17"));
    }

    #[test]
    #[serial]
    fn invalid_log_file_path_propagates_error() {
        let invalid_path = PathBuf::from("/");

        if cfg!(unix) && invalid_path.is_dir() {
            let result = setup_logging(0, false, Some(invalid_path));
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }
}
