use crate::cli::args::Command;
use crate::cli::params::InstallParams;
use crate::config::load_settings;
use crate::error::AssetPrepError;
use crate::manifest::Manifest;
use std::path::PathBuf;
use std::time::Duration;

/// Merges command line overrides over the settings file and pins the built-in manifest.
pub fn resolve_command(command: Command) -> Result<InstallParams, AssetPrepError> {
    let Command {
        config_path,
        output_dir,
        timeout_secs,
    } = command;

    let settings = load_settings(config_path.as_deref())?;

    let timeout_secs = timeout_secs.unwrap_or(settings.timeout_secs);
    if timeout_secs == 0 {
        return Err(AssetPrepError::CliArgumentValidation {
            details: "timeout must be greater than 0.".to_string(),
        });
    }

    let output_dir = output_dir
        .map(PathBuf::from)
        .unwrap_or(settings.output_dir);

    Ok(InstallParams {
        manifest: Manifest::builtin(),
        output_dir,
        timeout: Duration::from_secs(timeout_secs),
        user_agent: settings.user_agent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let params = resolve_command(Command::default()).unwrap();

        assert_eq!(params.output_dir, PathBuf::from("."));
        assert_eq!(params.timeout, Duration::from_secs(30));
        assert_eq!(params.manifest, Manifest::builtin());
    }

    #[test]
    fn test_arguments_override_settings_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("assetprep.toml");
        std::fs::write(
            &config_path,
            "output_dir = \"from-file\"\ntimeout_secs = 12\nuser_agent = \"custom/1.0\"\n",
        )
        .unwrap();

        let from_file = resolve_command(Command {
            config_path: Some(config_path.to_str().unwrap().to_string()),
            ..Command::default()
        })
        .unwrap();
        assert_eq!(from_file.output_dir, PathBuf::from("from-file"));
        assert_eq!(from_file.timeout, Duration::from_secs(12));
        assert_eq!(from_file.user_agent, "custom/1.0");

        let overridden = resolve_command(Command {
            config_path: Some(config_path.to_str().unwrap().to_string()),
            output_dir: Some("from-cli".to_string()),
            timeout_secs: Some(3),
        })
        .unwrap();
        assert_eq!(overridden.output_dir, PathBuf::from("from-cli"));
        assert_eq!(overridden.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = resolve_command(Command {
            timeout_secs: Some(0),
            ..Command::default()
        });
        assert!(matches!(
            result,
            Err(AssetPrepError::CliArgumentValidation { .. })
        ));
    }
}
