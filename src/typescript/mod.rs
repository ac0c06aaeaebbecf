//! Reference TypeScript host built on tree-sitter.
//!
//! Parses `.ts`/`.tsx` sources, lowers them into [`SyntaxTree`]s and answers
//! type queries with single-file lexical resolution.

pub mod checker;
pub mod lower;
pub mod service;

pub use checker::{Namespace, TypeScriptChecker, declarations_of, resolve_declarations};
pub use service::{TypeScriptProgram, TypeScriptService};

use std::path::Path;

use tree_sitter::{Language, Parser};

use crate::error::{HostError, HostResult};
use crate::syntax::SyntaxTree;

fn language_for(file_name: &str) -> Language {
    let is_tsx = Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tsx"));
    if is_tsx {
        tree_sitter_typescript::LANGUAGE_TSX.into()
    } else {
        tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
    }
}

/// Parse and lower one source file.
///
/// Syntax errors do not fail the parse; erroneous regions lower to
/// [`crate::syntax::SyntaxKind::Unknown`] nodes.
pub fn parse(file_name: &str, text: &str) -> HostResult<SyntaxTree> {
    let mut parser = Parser::new();
    parser.set_language(&language_for(file_name))?;
    let tree = parser
        .parse(text, None)
        .ok_or_else(|| HostError::parse(file_name))?;

    let root = tree.root_node();
    if root.has_error() {
        log::warn!(
            target: "wrapref::typescript",
            "{} has syntax errors; results may be incomplete",
            file_name
        );
    }
    Ok(lower::lower(file_name, text, root))
}
