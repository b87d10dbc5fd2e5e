mod defaults;
mod models;

pub use defaults::DefaultsConfig;
pub use models::AppConfig;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use molstack::engine::config::StackParametersBuilder;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialStackSection {
    layers: Option<usize>,
    z_spacing: Option<f64>,
    x_spacing: Option<f64>,
    rotation_step: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialOutputSection {
    directory: Option<PathBuf>,
    auto_confirm: Option<bool>,
}

/// Settings read from an optional TOML file; every field may be absent.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialStackConfig {
    #[serde(default)]
    stack: PartialStackSection,
    #[serde(default)]
    output: PartialOutputSection,
}

impl PartialStackConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves final settings: command-line flag, then file value, then default.
    pub fn merge_with_cli(self, cli: &Cli) -> Result<AppConfig> {
        let defaults = DefaultsConfig::default();

        let params = StackParametersBuilder::new()
            .layer_count(
                cli.num_layers
                    .or(self.stack.layers)
                    .unwrap_or(defaults.layers),
            )
            .z_spacing(cli.z_dist.or(self.stack.z_spacing).unwrap_or(defaults.z_spacing))
            .x_spacing(cli.x_dist.or(self.stack.x_spacing).unwrap_or(defaults.x_spacing))
            .rotation_step_degrees(
                cli.rot_step
                    .or(self.stack.rotation_step)
                    .unwrap_or(defaults.rotation_step),
            )
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let output_dir = cli
            .output_dir
            .clone()
            .or(self.output.directory)
            .unwrap_or(defaults.output_dir);

        let auto_confirm = cli.yes || self.output.auto_confirm.unwrap_or(defaults.auto_confirm);

        Ok(AppConfig {
            input_files: cli.input_files.clone(),
            output_dir,
            auto_confirm,
            params,
        })
    }
}

/// Builds the application configuration from parsed arguments.
pub fn resolve(cli: &Cli) -> Result<AppConfig> {
    let partial = match &cli.config {
        Some(path) => PartialStackConfig::from_file(path)?,
        None => PartialStackConfig::default(),
    };
    partial.merge_with_cli(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["molstack"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn defaults_apply_without_flags_or_file() {
        let config = resolve(&parse(&["a.xyz"])).unwrap();
        assert_eq!(config.params.layer_count, 2);
        assert_eq!(config.params.z_spacing, 6.0);
        assert_eq!(config.params.x_spacing, 0.0);
        assert_eq!(config.params.rotation_step_degrees, 30);
        assert_eq!(config.output_dir, PathBuf::from("stacked_geometries"));
        assert!(!config.auto_confirm);
        assert_eq!(config.input_files, vec![PathBuf::from("a.xyz")]);
    }

    #[test]
    fn file_values_override_defaults_and_flags_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stack.toml");
        fs::write(
            &path,
            r#"
            [stack]
            layers = 3
            z-spacing = 3.4
            rotation-step = 60

            [output]
            directory = "runs/pyrene"
            auto-confirm = true
            "#,
        )
        .unwrap();

        let cli = parse(&["a.xyz", "-c", path.to_str().unwrap(), "--rot-step", "90"]);
        let config = resolve(&cli).unwrap();
        assert_eq!(config.params.layer_count, 3);
        assert_eq!(config.params.z_spacing, 3.4);
        assert_eq!(config.params.rotation_step_degrees, 90);
        assert_eq!(config.output_dir, PathBuf::from("runs/pyrene"));
        assert!(config.auto_confirm);
    }

    #[test]
    fn yes_flag_enables_auto_confirm() {
        let config = resolve(&parse(&["a.xyz", "--yes"])).unwrap();
        assert!(config.auto_confirm);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[stack]\nlayer-count = 2\n").unwrap();
        let result = resolve(&parse(&["a.xyz", "-c", path.to_str().unwrap()]));
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let result = resolve(&parse(&["a.xyz", "-c", path.to_str().unwrap()]));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn invalid_parameters_become_config_errors() {
        let result = resolve(&parse(&["a.xyz", "--rot-step", "0"]));
        assert!(matches!(result, Err(CliError::Config(_))));
        let result = resolve(&parse(&["a.xyz", "-n", "0"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
