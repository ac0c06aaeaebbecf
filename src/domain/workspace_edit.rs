use serde::Serialize;

use crate::domain::position::TextSpan;

/// Single contiguous text substitution in one file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacementEdit {
    pub file_name: String,
    pub span: TextSpan,
    pub new_text: String,
}

impl ReplacementEdit {
    /// Apply the edit to `text`, returning `None` when the span does not fit.
    pub fn apply(&self, text: &str) -> Option<String> {
        let range = self.span.range();
        let before = text.get(..range.start)?;
        let after = text.get(range.end..)?;
        let mut out = String::with_capacity(before.len() + self.new_text.len() + after.len());
        out.push_str(before);
        out.push_str(&self.new_text);
        out.push_str(after);
        Some(out)
    }
}

/// Result of computing a refactor's edits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefactorEditInfo {
    pub edits: Vec<ReplacementEdit>,
    pub rename_filename: Option<String>,
    pub rename_location: Option<usize>,
}

impl RefactorEditInfo {
    pub fn from_edits(edits: Vec<ReplacementEdit>) -> Self {
        Self {
            edits,
            rename_filename: None,
            rename_location: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces_span_only() {
        let edit = ReplacementEdit {
            file_name: "a.ts".to_string(),
            span: TextSpan::new(4, 2),
            new_text: "() => fn()".to_string(),
        };
        assert_eq!(edit.apply("run(fn);").as_deref(), Some("run(() => fn());"));
    }

    #[test]
    fn test_apply_out_of_bounds_is_none() {
        let edit = ReplacementEdit {
            file_name: "a.ts".to_string(),
            span: TextSpan::new(10, 2),
            new_text: String::new(),
        };
        assert!(edit.apply("short").is_none());
    }

    #[test]
    fn test_edit_info_serializes_camel_case() {
        let info = RefactorEditInfo::from_edits(vec![]);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"edits": [], "renameFilename": null, "renameLocation": null})
        );
    }
}
