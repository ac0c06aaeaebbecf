//! Hand-built trees and a scripted checker for exercising the refactor in
//! isolation from any real host.

use crate::host::{ParameterSymbol, Signature, Type, TypeChecker};
use crate::syntax::{Field, NodeId, SyntaxKind, SyntaxNode, SyntaxTree, TreeBuilder};

/// Declared type of `run`'s first parameter.
#[derive(Clone, Copy, Debug)]
pub(crate) enum CallbackShape {
    /// `(a: any, b: any) => void` with the given parameter names.
    Function(&'static [&'static str]),
    /// `(() => void) | string`
    Union,
    /// No annotation at all.
    Missing,
}

pub(crate) struct Fixture {
    pub tree: SyntaxTree,
    pub declaration: NodeId,
    pub parameter: NodeId,
    pub callee_offset: usize,
    pub arg_offset: usize,
}

/// Builds `declare function run(cb<shape>): void;\nrun(fn);`.
pub(crate) fn fixture(shape: CallbackShape) -> Fixture {
    let mut text = String::from("declare function run(");
    let param_start = text.len();
    text.push_str("cb");
    let param_name = param_start..text.len();

    // (kind, range, [(parameter range, name range)])
    let type_node = match shape {
        CallbackShape::Function(names) => {
            text.push_str(": (");
            let type_start = text.len() - 1;
            let mut params = Vec::new();
            for (i, name) in names.iter().enumerate() {
                if i > 0 {
                    text.push_str(", ");
                }
                let start = text.len();
                text.push_str(name);
                let name_end = text.len();
                text.push_str(": any");
                params.push((start..text.len(), start..name_end));
            }
            text.push_str(") => void");
            Some((SyntaxKind::FunctionType, type_start..text.len(), params))
        }
        CallbackShape::Union => {
            text.push_str(": ");
            let type_start = text.len();
            text.push_str("(() => void) | string");
            Some((SyntaxKind::UnionType, type_start..text.len(), Vec::new()))
        }
        CallbackShape::Missing => None,
    };
    let param_end = text.len();
    text.push_str("): void;");
    let decl_end = text.len();
    text.push('\n');
    let call_start = text.len();
    text.push_str("run(fn);");

    let mut b = TreeBuilder::new("fixture.ts", text, SyntaxKind::SourceFile);
    let root = b.root();
    let declaration = b.push(root, SyntaxKind::FunctionDeclaration, None, 0..decl_end);
    b.push(declaration, SyntaxKind::Identifier, Some(Field::Name), 17..20);
    let parameter = b.push(
        declaration,
        SyntaxKind::Parameter,
        Some(Field::Parameter),
        param_start..param_end,
    );
    b.push(parameter, SyntaxKind::Identifier, Some(Field::Name), param_name);
    if let Some((kind, range, params)) = type_node {
        let type_id = b.push(parameter, kind, Some(Field::Type), range);
        for (range, name) in params {
            let p = b.push(type_id, SyntaxKind::Parameter, Some(Field::Parameter), range);
            b.push(p, SyntaxKind::Identifier, Some(Field::Name), name);
        }
    }
    b.push(
        declaration,
        SyntaxKind::KeywordType,
        Some(Field::ReturnType),
        decl_end - 5..decl_end - 1,
    );

    let stmt = b.push(
        root,
        SyntaxKind::ExpressionStatement,
        None,
        call_start..call_start + 8,
    );
    let call = b.push(stmt, SyntaxKind::CallExpression, None, call_start..call_start + 7);
    b.push(
        call,
        SyntaxKind::Identifier,
        Some(Field::Callee),
        call_start..call_start + 3,
    );
    b.push(
        call,
        SyntaxKind::Identifier,
        Some(Field::Argument),
        call_start + 4..call_start + 6,
    );

    Fixture {
        tree: b.finish(),
        declaration,
        parameter,
        callee_offset: call_start,
        arg_offset: call_start + 4,
    }
}

/// Checker that treats listed identifiers as callable and resolves every
/// call to the given parameter declarations.
pub(crate) struct FakeChecker {
    pub callables: Vec<&'static str>,
    pub parameters: Option<Vec<NodeId>>,
}

impl FakeChecker {
    pub fn new(callables: Vec<&'static str>, parameters: Option<Vec<NodeId>>) -> Self {
        Self {
            callables,
            parameters,
        }
    }
}

impl TypeChecker for FakeChecker {
    fn type_of<'a>(&'a self, node: SyntaxNode<'a>) -> Type<'a> {
        if node.kind() == SyntaxKind::Identifier
            && self.callables.iter().any(|name| *name == node.text())
        {
            Type::with_signatures(vec![Signature {
                declaration: None,
                parameters: Vec::new(),
            }])
        } else {
            Type::unknown()
        }
    }

    fn resolved_signature<'a>(&'a self, call: SyntaxNode<'a>) -> Option<Signature<'a>> {
        let ids = self.parameters.as_ref()?;
        let tree = call.tree();
        let parameters = ids
            .iter()
            .map(|&id| {
                let node = tree.node(id);
                ParameterSymbol {
                    name: node
                        .child_by_field(Field::Name)
                        .map(|n| n.text().to_string())
                        .unwrap_or_default(),
                    value_declaration: Some(node),
                }
            })
            .collect();
        Some(Signature {
            declaration: None,
            parameters,
        })
    }
}
