use serde::{Deserialize, Serialize};

/// How a single-parameter arrow head is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowParens {
    /// `value => f(value)` when the only parameter is a plain identifier.
    #[default]
    AsNeeded,
    /// Always `(value) => f(value)`.
    Always,
}

/// Settings as read from a plugin entry or config file. Every key is optional
/// so sources can be layered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SettingsFile {
    pub enabled: Option<bool>,
    #[serde(alias = "strictArgumentPosition")]
    pub strict_argument_position: Option<bool>,
    #[serde(alias = "arrowParens")]
    pub arrow_parens: Option<ArrowParens>,
}

/// Effective settings for the wrap-function-reference plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PluginSettings {
    pub enabled: bool,
    /// Only offer the refactor when the identifier is an argument, never the
    /// callee, of its parent call.
    pub strict_argument_position: bool,
    pub arrow_parens: ArrowParens,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            strict_argument_position: true,
            arrow_parens: ArrowParens::AsNeeded,
        }
    }
}

impl From<SettingsFile> for PluginSettings {
    fn from(file: SettingsFile) -> Self {
        let defaults = PluginSettings::default();
        Self {
            enabled: file.enabled.unwrap_or(defaults.enabled),
            strict_argument_position: file
                .strict_argument_position
                .unwrap_or(defaults.strict_argument_position),
            arrow_parens: file.arrow_parens.unwrap_or(defaults.arrow_parens),
        }
    }
}
