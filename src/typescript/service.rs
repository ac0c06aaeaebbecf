use std::collections::BTreeMap;

use super::checker::{TypeScriptChecker, declarations_of, declared_name};
use crate::domain::{CursorLocus, Location, QuickInfo, RefactorDescriptor, RefactorEditInfo};
use crate::error::{HostResult, RefactorResult};
use crate::host::{FormatOptions, LanguageService, Program, TypeChecker, UserPreferences};
use crate::syntax::{Field, SyntaxKind, SyntaxNode, SyntaxTree, locate};

/// Parsed TypeScript sources keyed by file name.
#[derive(Debug, Default)]
pub struct TypeScriptProgram {
    files: BTreeMap<String, SyntaxTree>,
    checker: TypeScriptChecker,
}

impl TypeScriptProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Program holding a single file.
    pub fn from_source(file_name: &str, text: &str) -> HostResult<Self> {
        let mut program = Self::new();
        program.add_file(file_name, text)?;
        Ok(program)
    }

    /// Parse `text` and add it, replacing any previous version of the file.
    pub fn add_file(&mut self, file_name: &str, text: &str) -> HostResult<()> {
        let tree = super::parse(file_name, text)?;
        if self.files.insert(file_name.to_string(), tree).is_some() {
            log::debug!(target: "wrapref::typescript", "Replaced {}", file_name);
        }
        Ok(())
    }

    pub fn remove_file(&mut self, file_name: &str) -> bool {
        self.files.remove(file_name).is_some()
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl Program for TypeScriptProgram {
    fn source_tree(&self, file_name: &str) -> Option<&SyntaxTree> {
        self.files.get(file_name)
    }

    fn type_checker(&self) -> &dyn TypeChecker {
        &self.checker
    }
}

/// Language service over a [`TypeScriptProgram`].
///
/// Offers no refactors of its own; navigation and hover come from the
/// lexical binder.
#[derive(Debug, Default)]
pub struct TypeScriptService {
    program: TypeScriptProgram,
}

impl TypeScriptService {
    pub fn new(program: TypeScriptProgram) -> Self {
        Self { program }
    }

    pub fn typescript_program(&self) -> &TypeScriptProgram {
        &self.program
    }

    pub fn typescript_program_mut(&mut self) -> &mut TypeScriptProgram {
        &mut self.program
    }

    fn symbol_at(&self, file_name: &str, offset: usize) -> Option<SyntaxNode<'_>> {
        let tree = self.program.source_tree(file_name)?;
        locate(tree.root(), offset)
            .filter(|node| matches!(node.kind(), SyntaxKind::Identifier | SyntaxKind::TypeReference))
    }
}

/// Span a declaration is navigated to: its name when it has one.
fn name_span(declaration: SyntaxNode<'_>) -> SyntaxNode<'_> {
    declaration
        .child_by_field(Field::Name)
        .unwrap_or(declaration)
}

/// Text between the declaration's start and its body, without `;`.
fn signature_text(declaration: SyntaxNode<'_>) -> &str {
    let text = match declaration.child_by_field(Field::Body) {
        Some(body) => declaration
            .tree()
            .text()
            .get(declaration.start()..body.start())
            .unwrap_or_default(),
        None => declaration.text(),
    };
    text.trim_end().trim_end_matches(';').trim_end()
}

/// Hover text in the editor's `kind name: type` style.
fn describe(declaration: SyntaxNode<'_>) -> String {
    let name = declared_name(declaration).unwrap_or_default();
    let annotated = |prefix: &str| match declaration.child_by_field(Field::Type) {
        Some(ty) => format!("{prefix} {name}: {}", ty.text()),
        None => format!("{prefix} {name}"),
    };
    match declaration.kind() {
        SyntaxKind::FunctionDeclaration => {
            let text = signature_text(declaration);
            let text = text.strip_prefix("export ").unwrap_or(text);
            text.strip_prefix("declare ").unwrap_or(text).to_string()
        }
        SyntaxKind::VariableDeclaration => {
            let keyword = declaration
                .parent()
                .and_then(|stmt| stmt.text().split_whitespace().next())
                .unwrap_or("var");
            annotated(keyword)
        }
        SyntaxKind::Parameter => annotated("(parameter)"),
        SyntaxKind::TypeAliasDeclaration => match declaration.child_by_field(Field::Type) {
            Some(ty) => format!("type {name} = {}", ty.text()),
            None => format!("type {name}"),
        },
        _ => declaration.text().to_string(),
    }
}

fn location_of(node: SyntaxNode<'_>) -> Location {
    Location {
        file_name: node.tree().file_name().to_string(),
        span: node.span(),
    }
}

impl LanguageService for TypeScriptService {
    fn program(&self) -> Option<&dyn Program> {
        Some(&self.program)
    }

    fn get_applicable_refactors(&self, _file_name: &str, _locus: CursorLocus) -> Vec<RefactorDescriptor> {
        Vec::new()
    }

    fn get_edits_for_refactor(
        &self,
        file_name: &str,
        _format_options: &FormatOptions,
        _locus: CursorLocus,
        refactor_name: &str,
        action_name: &str,
        _preferences: &UserPreferences,
    ) -> RefactorResult<Option<RefactorEditInfo>> {
        log::debug!(
            target: "wrapref::typescript",
            "No built-in refactor {}/{} for {}",
            refactor_name,
            action_name,
            file_name
        );
        Ok(None)
    }

    fn get_quick_info_at_position(&self, file_name: &str, offset: usize) -> Option<QuickInfo> {
        let symbol = self.symbol_at(file_name, offset)?;
        let declaration = declarations_of(symbol).into_iter().next()?;
        Some(QuickInfo {
            span: symbol.span(),
            display: describe(declaration),
        })
    }

    fn get_definition_at_position(&self, file_name: &str, offset: usize) -> Vec<Location> {
        let Some(symbol) = self.symbol_at(file_name, offset) else {
            return Vec::new();
        };
        declarations_of(symbol)
            .into_iter()
            .map(|decl| location_of(name_span(decl)))
            .collect()
    }

    fn find_references(&self, file_name: &str, offset: usize) -> Vec<Location> {
        let Some(symbol) = self.symbol_at(file_name, offset) else {
            return Vec::new();
        };
        let Some(target) = declarations_of(symbol).into_iter().next() else {
            return Vec::new();
        };
        let Some(name) = declared_name(target) else {
            return Vec::new();
        };

        symbol
            .tree()
            .descendants()
            .filter(|node| match node.kind() {
                SyntaxKind::Identifier => node.text() == name,
                // generic references carry their name as an identifier child
                SyntaxKind::TypeReference => {
                    node.child_by_field(Field::Name).is_none() && node.text() == name
                }
                _ => false,
            })
            .filter(|node| declarations_of(*node).first() == Some(&target))
            .map(location_of)
            .collect()
    }
}
