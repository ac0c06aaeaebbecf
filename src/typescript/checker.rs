//! Lexical binder and type checker for lowered TypeScript trees.
//!
//! Resolution is single-file and structural: names are looked up through the
//! enclosing scopes, and types are derived from annotations, function
//! initializers and `type` aliases. There is no inference beyond that.

use crate::host::{ParameterSymbol, Signature, Type, TypeChecker};
use crate::syntax::{Field, SyntaxKind, SyntaxNode, is_identifier_reference};

/// Alias and initializer chains longer than this resolve to unknown.
const MAX_RESOLUTION_DEPTH: usize = 16;

/// Which declaration space a name is looked up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Namespace {
    Value,
    Type,
}

impl Namespace {
    /// Namespace a reference node is resolved in.
    pub fn of(node: SyntaxNode<'_>) -> Self {
        let in_type = node.kind() == SyntaxKind::TypeReference
            || node
                .parent()
                .is_some_and(|parent| parent.kind() == SyntaxKind::TypeReference);
        if in_type { Namespace::Type } else { Namespace::Value }
    }
}

/// Name a declaration introduces, if it has a plain one.
pub fn declared_name(declaration: SyntaxNode<'_>) -> Option<&str> {
    declaration
        .child_by_field(Field::Name)
        .filter(|name| name.kind() == SyntaxKind::Identifier)
        .map(|name| name.text())
}

/// Name a reference node refers to.
fn referenced_name(node: SyntaxNode<'_>) -> &str {
    match node.kind() {
        SyntaxKind::TypeReference => node
            .child_by_field(Field::Name)
            .map_or_else(|| node.text(), |name| name.text()),
        _ => node.text(),
    }
}

/// Declarations visible from `reference` under `name`, innermost scope first.
///
/// Only the innermost scope that declares the name contributes; several
/// results mean overloads or redeclarations in that scope.
pub fn resolve_declarations<'a>(
    reference: SyntaxNode<'a>,
    name: &str,
    namespace: Namespace,
) -> Vec<SyntaxNode<'a>> {
    for scope in reference.ancestors().filter(|n| n.kind().is_scope()) {
        let mut found = Vec::new();
        if scope.kind().is_function_like() {
            if namespace == Namespace::Value {
                found.extend(
                    scope
                        .children_by_field(Field::Parameter)
                        .filter(|param| declared_name(*param) == Some(name)),
                );
            }
        } else {
            collect_scope_declarations(scope, name, namespace, &mut found);
        }
        if !found.is_empty() {
            return found;
        }
    }
    Vec::new()
}

fn collect_scope_declarations<'a>(
    container: SyntaxNode<'a>,
    name: &str,
    namespace: Namespace,
    found: &mut Vec<SyntaxNode<'a>>,
) {
    for child in container.children() {
        match (child.kind(), namespace) {
            (SyntaxKind::FunctionDeclaration, Namespace::Value)
            | (SyntaxKind::TypeAliasDeclaration, Namespace::Type) => {
                if declared_name(child) == Some(name) {
                    found.push(child);
                }
            }
            (SyntaxKind::VariableStatement, Namespace::Value) => found.extend(
                child
                    .children()
                    .filter(|decl| decl.kind() == SyntaxKind::VariableDeclaration)
                    .filter(|decl| declared_name(*decl) == Some(name)),
            ),
            // export statements and similar wrappers
            (SyntaxKind::Unknown, _) => collect_scope_declarations(child, name, namespace, found),
            _ => {}
        }
    }
}

/// Declarations an identifier or type reference stands for.
///
/// A declaration's own name resolves to that declaration.
pub fn declarations_of(node: SyntaxNode<'_>) -> Vec<SyntaxNode<'_>> {
    match node.kind() {
        SyntaxKind::Identifier if !is_identifier_reference(node) => {
            node.parent().into_iter().collect()
        }
        SyntaxKind::Identifier if node.field() == Some(Field::Property) => Vec::new(),
        SyntaxKind::Identifier | SyntaxKind::TypeReference => {
            resolve_declarations(node, referenced_name(node), Namespace::of(node))
        }
        _ => Vec::new(),
    }
}

/// Call signature declared by a function-like node.
fn signature_of(function: SyntaxNode<'_>) -> Signature<'_> {
    let parameters = function
        .children_by_field(Field::Parameter)
        .map(|param| ParameterSymbol {
            name: declared_name(param)
                .or_else(|| param.child_by_field(Field::Name).map(|n| n.text()))
                .unwrap_or_default()
                .to_string(),
            value_declaration: Some(param),
        })
        .collect();
    Signature {
        declaration: Some(function),
        parameters,
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TypeScriptChecker;

impl TypeScriptChecker {
    pub fn new() -> Self {
        Self
    }

    fn expression_type<'a>(&self, node: SyntaxNode<'a>, depth: usize) -> Type<'a> {
        if depth > MAX_RESOLUTION_DEPTH {
            log::debug!(target: "wrapref::checker", "Resolution depth exceeded at {:?}", node);
            return Type::unknown();
        }
        match node.kind() {
            SyntaxKind::Identifier => self.declarations_type(&declarations_of(node), depth + 1),
            SyntaxKind::ArrowFunction | SyntaxKind::FunctionExpression => {
                Type::with_signatures(vec![signature_of(node)])
            }
            SyntaxKind::ParenthesizedExpression => node
                .children()
                .next()
                .map_or_else(Type::unknown, |inner| self.expression_type(inner, depth + 1)),
            SyntaxKind::CallExpression => self
                .resolve_call(node, depth + 1)
                .and_then(|sig| sig.declaration)
                .and_then(|decl| decl.child_by_field(Field::ReturnType))
                .map_or_else(Type::unknown, |ret| self.type_node_type(ret, depth + 1)),
            SyntaxKind::SourceFile
            | SyntaxKind::ExpressionStatement
            | SyntaxKind::FunctionDeclaration
            | SyntaxKind::VariableStatement
            | SyntaxKind::VariableDeclaration
            | SyntaxKind::TypeAliasDeclaration
            | SyntaxKind::Parameter
            | SyntaxKind::Block
            | SyntaxKind::ReturnStatement
            | SyntaxKind::PropertyAccessExpression
            | SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::FunctionType
            | SyntaxKind::UnionType
            | SyntaxKind::IntersectionType
            | SyntaxKind::ParenthesizedType
            | SyntaxKind::TypeReference
            | SyntaxKind::KeywordType
            | SyntaxKind::Unknown => Type::unknown(),
        }
    }

    /// Combined type of a symbol's declarations.
    ///
    /// Bodiless function declarations are overload signatures; when present,
    /// the implementation signature is hidden.
    fn declarations_type<'a>(&self, declarations: &[SyntaxNode<'a>], depth: usize) -> Type<'a> {
        let functions: Vec<_> = declarations
            .iter()
            .copied()
            .filter(|d| d.kind() == SyntaxKind::FunctionDeclaration)
            .collect();
        if !functions.is_empty() {
            let has_overloads = functions.len() > 1
                && functions.iter().any(|f| f.child_by_field(Field::Body).is_none());
            return Type::with_signatures(
                functions
                    .into_iter()
                    .filter(|f| !has_overloads || f.child_by_field(Field::Body).is_none())
                    .map(signature_of)
                    .collect(),
            );
        }
        declarations
            .first()
            .map_or_else(Type::unknown, |decl| self.declaration_type(*decl, depth))
    }

    fn declaration_type<'a>(&self, declaration: SyntaxNode<'a>, depth: usize) -> Type<'a> {
        match declaration.kind() {
            SyntaxKind::FunctionDeclaration => Type::with_signatures(vec![signature_of(declaration)]),
            SyntaxKind::VariableDeclaration => {
                if let Some(annotation) = declaration.child_by_field(Field::Type) {
                    self.type_node_type(annotation, depth + 1)
                } else if let Some(init) = declaration.child_by_field(Field::Initializer) {
                    self.expression_type(init, depth + 1)
                } else {
                    Type::unknown()
                }
            }
            SyntaxKind::Parameter => declaration
                .child_by_field(Field::Type)
                .map_or_else(Type::unknown, |ty| self.type_node_type(ty, depth + 1)),
            _ => Type::unknown(),
        }
    }

    /// Type denoted by a type-level node.
    fn type_node_type<'a>(&self, node: SyntaxNode<'a>, depth: usize) -> Type<'a> {
        if depth > MAX_RESOLUTION_DEPTH {
            log::debug!(target: "wrapref::checker", "Resolution depth exceeded at {:?}", node);
            return Type::unknown();
        }
        match node.kind() {
            SyntaxKind::FunctionType => Type::with_signatures(vec![signature_of(node)]),
            SyntaxKind::ParenthesizedType => node
                .children()
                .next()
                .map_or_else(Type::unknown, |inner| self.type_node_type(inner, depth + 1)),
            SyntaxKind::UnionType => {
                let members: Vec<_> = node
                    .children()
                    .map(|member| self.type_node_type(member, depth + 1))
                    .collect();
                if !members.is_empty() && members.iter().all(Type::is_callable) {
                    members.into_iter().next().unwrap_or_default()
                } else {
                    Type::unknown()
                }
            }
            SyntaxKind::IntersectionType => Type::with_signatures(
                node.children()
                    .flat_map(|member| self.type_node_type(member, depth + 1).into_call_signatures())
                    .collect(),
            ),
            SyntaxKind::TypeReference => {
                let aliases = resolve_declarations(node, referenced_name(node), Namespace::Type);
                aliases
                    .first()
                    .and_then(|alias| alias.child_by_field(Field::Type))
                    .map_or_else(Type::unknown, |ty| self.type_node_type(ty, depth + 1))
            }
            _ => Type::unknown(),
        }
    }

    /// Pick the overload a call binds to: the first accepting at least as
    /// many parameters as there are arguments, else the first declared.
    fn resolve_call<'a>(&self, call: SyntaxNode<'a>, depth: usize) -> Option<Signature<'a>> {
        let callee = call.child_by_field(Field::Callee)?;
        let signatures = self.expression_type(callee, depth).into_call_signatures();
        let argc = call.children_by_field(Field::Argument).count();
        let position = signatures
            .iter()
            .position(|sig| sig.parameters.len() >= argc)
            .unwrap_or(0);
        signatures.into_iter().nth(position)
    }
}

impl TypeChecker for TypeScriptChecker {
    fn type_of<'a>(&'a self, node: SyntaxNode<'a>) -> Type<'a> {
        let ty = self.expression_type(node, 0);
        log::trace!(
            target: "wrapref::checker",
            "type_of {:?} `{}`: {} call signature(s)",
            node,
            node.text(),
            ty.call_signatures().len()
        );
        ty
    }

    fn resolved_signature<'a>(&'a self, call: SyntaxNode<'a>) -> Option<Signature<'a>> {
        if call.kind() != SyntaxKind::CallExpression {
            return None;
        }
        self.resolve_call(call, 0)
    }
}
