pub mod settings;
pub mod user;

pub use settings::{ArrowParens, PluginSettings, SettingsFile};
pub use user::{load_settings_file, load_user_settings, user_config_path};

use crate::error::HostResult;

/// Merge two SettingsFile values, preferring values from `primary` over `fallback`
pub fn merge_settings(
    fallback: Option<SettingsFile>,
    primary: Option<SettingsFile>,
) -> Option<SettingsFile> {
    match (fallback, primary) {
        (None, None) => None,
        (Some(settings), None) => Some(settings),
        (None, Some(settings)) => Some(settings),
        (Some(fallback), Some(primary)) => Some(SettingsFile {
            enabled: primary.enabled.or(fallback.enabled),
            strict_argument_position: primary
                .strict_argument_position
                .or(fallback.strict_argument_position),
            arrow_parens: primary.arrow_parens.or(fallback.arrow_parens),
        }),
    }
}

/// Decode a plugin entry as it appears in a project's JSON configuration.
///
/// Unknown keys (such as the entry's `name`) are ignored.
pub fn parse_plugin_entry(json: &str) -> HostResult<SettingsFile> {
    Ok(serde_json::from_str(json)?)
}
