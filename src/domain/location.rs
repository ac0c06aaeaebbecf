use serde::Serialize;

use crate::domain::position::TextSpan;

/// A span inside a named file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub file_name: String,
    pub span: TextSpan,
}

/// Hover text for the symbol under the cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickInfo {
    pub span: TextSpan,
    pub display: String,
}
