use super::Settings;
use crate::error::AssetPrepError;
use config::Config as ConfigBuilder;

/// Loads settings from an optional file. Without a file every field keeps its default.
pub fn load_settings(config_path: Option<&str>) -> Result<Settings, AssetPrepError> {
    let Some(config_path) = config_path else {
        return Ok(Settings::default());
    };

    let config_builder = ConfigBuilder::builder()
        .add_source(config::File::with_name(config_path))
        .build()?;

    config_builder.try_deserialize().map_err(Into::into)
}
