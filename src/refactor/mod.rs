//! The wrap-function-reference refactor.
//!
//! Turns `run(handler)` into `run((value, index) => handler(value, index))`
//! when `run`'s first parameter is declared with a function type.

pub mod applicability;
pub mod signature;
pub mod synthesize;

#[cfg(test)]
pub(crate) mod test_support;

pub use applicability::is_applicable;
pub use signature::extract_callback_parameters;
pub use synthesize::{build_edit, wrap_in_closure};

use crate::config::PluginSettings;
use crate::domain::{RefactorAction, RefactorDescriptor};
use crate::host::TypeChecker;
use crate::syntax::{self, SyntaxKind, SyntaxNode, SyntaxTree};

pub const REFACTOR_NAME: &str = "wrap-function-reference-info";
pub const REFACTOR_DESCRIPTION: &str = "wrap function reference desc";
pub const ACTION_NAME: &str = "wrap-function-reference";
pub const ACTION_DESCRIPTION: &str = "Wrap function reference";

/// The single catalog entry this refactor advertises.
pub fn descriptor() -> RefactorDescriptor {
    RefactorDescriptor {
        name: REFACTOR_NAME.to_string(),
        description: REFACTOR_DESCRIPTION.to_string(),
        actions: vec![RefactorAction {
            name: ACTION_NAME.to_string(),
            description: ACTION_DESCRIPTION.to_string(),
        }],
    }
}

/// Host services and settings for one refactor invocation.
#[derive(Clone, Copy)]
pub struct RefactorContext<'a> {
    pub tree: &'a SyntaxTree,
    pub checker: &'a dyn TypeChecker,
    pub strict_argument_position: bool,
}

impl<'a> RefactorContext<'a> {
    pub fn new(tree: &'a SyntaxTree, checker: &'a dyn TypeChecker, settings: &PluginSettings) -> Self {
        Self {
            tree,
            checker,
            strict_argument_position: settings.strict_argument_position,
        }
    }
}

/// Identifier at the cursor together with the call it is passed to.
#[derive(Clone, Copy, Debug)]
pub struct CallbackTarget<'a> {
    pub identifier: SyntaxNode<'a>,
    pub call: SyntaxNode<'a>,
}

/// Structural part of the applicability check, shared by both phases.
///
/// Returns the reason as `Err` when the cursor is not on a candidate.
pub fn find_callback_target<'a>(
    tree: &'a SyntaxTree,
    offset: usize,
    strict_argument_position: bool,
) -> Result<CallbackTarget<'a>, &'static str> {
    let identifier = syntax::locate(tree.root(), offset).ok_or("offset outside source")?;
    if !syntax::is_identifier_reference(identifier) {
        return Err("not an identifier reference");
    }
    let call = identifier
        .parent()
        .filter(|parent| parent.kind() == SyntaxKind::CallExpression)
        .ok_or("parent is not a call expression")?;
    if strict_argument_position && !syntax::is_call_argument(identifier) {
        return Err("identifier is the callee, not an argument");
    }
    Ok(CallbackTarget { identifier, call })
}
