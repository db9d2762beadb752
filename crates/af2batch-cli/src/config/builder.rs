use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use af2batch::core::command::PredictionArgs;
use af2batch::engine::config::{DispatchConfig, DispatchConfigBuilder};
use tracing::debug;

pub fn build_config(args: &BatchArgs) -> Result<DispatchConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let prediction_file = file_config.prediction.take().unwrap_or_default();
    let launcher_file = file_config.launcher.take().unwrap_or_default();

    let prediction = PredictionArgs {
        fasta_paths: args
            .fasta_paths
            .clone()
            .or(prediction_file.fasta_paths)
            .unwrap_or(defaults.fasta_paths),
        max_template_date: args
            .max_template_date
            .clone()
            .or(prediction_file.max_template_date)
            .unwrap_or(defaults.max_template_date),
        model_preset: args
            .model_preset
            .clone()
            .or(prediction_file.model_preset)
            .unwrap_or(defaults.model_preset),
        data_dir: args
            .data_dir
            .clone()
            .or(prediction_file.data_dir)
            .unwrap_or(defaults.data_dir),
        use_precomputed_msas: args
            .use_precomputed_msas
            .or(prediction_file.use_precomputed_msas)
            .unwrap_or(defaults.use_precomputed_msas),
        extra_args: prediction_file.extra_args,
    };

    let interpreter = if args.launch_mode.direct {
        None
    } else {
        Some(
            args.launch_mode
                .interpreter
                .clone()
                .or(launcher_file.interpreter)
                .unwrap_or(defaults.interpreter),
        )
    };
    debug!("Launcher interpreter resolved to {:?}", &interpreter);

    let config = DispatchConfigBuilder::new()
        .root(args.root.clone())
        .script(args.docker_script.clone())
        .interpreter(interpreter)
        .prediction(prediction)
        .dry_run(args.dry_run)
        .only_existing_output(args.only_exist)
        .build()?;

    Ok(config)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "prediction.fasta-paths" => {
                config
                    .prediction
                    .get_or_insert_with(Default::default)
                    .fasta_paths = Some(value.to_string());
            }
            "prediction.max-template-date" => {
                config
                    .prediction
                    .get_or_insert_with(Default::default)
                    .max_template_date = Some(value.to_string());
            }
            "prediction.model-preset" => {
                config
                    .prediction
                    .get_or_insert_with(Default::default)
                    .model_preset = Some(value.to_string());
            }
            "prediction.data-dir" => {
                config
                    .prediction
                    .get_or_insert_with(Default::default)
                    .data_dir = Some(value.to_string());
            }
            "prediction.use-precomputed-msas" => {
                config
                    .prediction
                    .get_or_insert_with(Default::default)
                    .use_precomputed_msas = Some(
                    parser::parse_bool(key, value).map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            "launcher.interpreter" => {
                config
                    .launcher
                    .get_or_insert_with(Default::default)
                    .interpreter = Some(value.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
