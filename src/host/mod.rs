//! Boundary between the refactoring engine and the host that owns source trees
//! and type information.
//!
//! Every service is passed explicitly; nothing here is global.

pub mod options;

pub use options::{FormatOptions, UserPreferences};

use crate::domain::{
    CursorLocus, Location, QuickInfo, RefactorDescriptor, RefactorEditInfo,
};
use crate::error::RefactorResult;
use crate::printer::SyntheticExpr;
use crate::syntax::{SyntaxNode, SyntaxTree};

/// A formal parameter as seen by the type checker.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSymbol<'a> {
    pub name: String,
    /// Declaring node. Expected to be a `Parameter` but hosts may report other
    /// kinds for synthetic symbols.
    pub value_declaration: Option<SyntaxNode<'a>>,
}

/// One call signature, possibly one overload among several.
#[derive(Clone, Debug, PartialEq)]
pub struct Signature<'a> {
    pub declaration: Option<SyntaxNode<'a>>,
    pub parameters: Vec<ParameterSymbol<'a>>,
}

/// Static type of an expression, reduced to what the engine needs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Type<'a> {
    call_signatures: Vec<Signature<'a>>,
}

impl<'a> Type<'a> {
    /// A type with no call signatures.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn with_signatures(call_signatures: Vec<Signature<'a>>) -> Self {
        Self { call_signatures }
    }

    pub fn call_signatures(&self) -> &[Signature<'a>] {
        &self.call_signatures
    }

    pub fn is_callable(&self) -> bool {
        !self.call_signatures.is_empty()
    }

    pub fn into_call_signatures(self) -> Vec<Signature<'a>> {
        self.call_signatures
    }
}

/// Type-resolution oracle over a program snapshot.
pub trait TypeChecker {
    /// Static type of `node`. Unresolvable nodes yield [`Type::unknown`].
    fn type_of<'a>(&'a self, node: SyntaxNode<'a>) -> Type<'a>;

    /// Overload chosen for a call expression, if the callee resolves.
    fn resolved_signature<'a>(&'a self, call: SyntaxNode<'a>) -> Option<Signature<'a>>;
}

/// Read-only snapshot of all source trees plus their checker.
pub trait Program {
    fn source_tree(&self, file_name: &str) -> Option<&SyntaxTree>;

    fn type_checker(&self) -> &dyn TypeChecker;
}

/// Renders synthesized nodes to source text.
pub trait Printer {
    fn render(&self, expr: &SyntheticExpr, source: &SyntaxTree) -> String;
}

/// Editor-facing operations of a language service.
///
/// The refactoring plugin implements this by wrapping another implementation
/// and overriding only the two refactor operations.
pub trait LanguageService {
    fn program(&self) -> Option<&dyn Program>;

    fn get_applicable_refactors(
        &self,
        file_name: &str,
        locus: CursorLocus,
    ) -> Vec<RefactorDescriptor>;

    fn get_edits_for_refactor(
        &self,
        file_name: &str,
        format_options: &FormatOptions,
        locus: CursorLocus,
        refactor_name: &str,
        action_name: &str,
        preferences: &UserPreferences,
    ) -> RefactorResult<Option<RefactorEditInfo>>;

    fn get_quick_info_at_position(&self, file_name: &str, offset: usize) -> Option<QuickInfo>;

    fn get_definition_at_position(&self, file_name: &str, offset: usize) -> Vec<Location>;

    fn find_references(&self, file_name: &str, offset: usize) -> Vec<Location>;
}
