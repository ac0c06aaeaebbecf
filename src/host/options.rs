use serde::Deserialize;

/// Formatting options an editor passes along with an edit request.
///
/// The wrap refactor ignores them; they are forwarded to the host as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    pub indent_size: Option<u32>,
    pub tab_size: Option<u32>,
    pub convert_tabs_to_spaces: Option<bool>,
    pub new_line_character: Option<String>,
}

/// User preferences attached to an edit request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub quote_preference: Option<String>,
    pub provide_refactor_not_applicable_reason: Option<bool>,
}
