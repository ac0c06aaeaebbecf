use super::kind::{Field, SyntaxKind};
use super::tree::SyntaxNode;

/// Find the most deeply nested node whose span contains `offset`.
///
/// # Arguments
/// * `root` - The node to search from
/// * `offset` - Byte offset into the source text
///
/// # Returns
/// The deepest node with `start <= offset < end`, or `None` when the offset
/// lies outside `root`.
pub fn locate(root: SyntaxNode<'_>, offset: usize) -> Option<SyntaxNode<'_>> {
    if !root.contains(offset) {
        return None;
    }
    root.children()
        .find_map(|child| locate(child, offset))
        .or(Some(root))
}

/// Check if a node is an identifier used as a value rather than the name of
/// a declaration.
pub fn is_identifier_reference(node: SyntaxNode<'_>) -> bool {
    if node.kind() != SyntaxKind::Identifier {
        return false;
    }
    let Some(parent) = node.parent() else {
        return true;
    };
    let declares = match parent.kind() {
        SyntaxKind::FunctionDeclaration
        | SyntaxKind::VariableDeclaration
        | SyntaxKind::TypeAliasDeclaration
        | SyntaxKind::Parameter => node.field() == Some(Field::Name),
        SyntaxKind::SourceFile
        | SyntaxKind::ExpressionStatement
        | SyntaxKind::VariableStatement
        | SyntaxKind::Block
        | SyntaxKind::ReturnStatement
        | SyntaxKind::Identifier
        | SyntaxKind::CallExpression
        | SyntaxKind::ArrowFunction
        | SyntaxKind::FunctionExpression
        | SyntaxKind::PropertyAccessExpression
        | SyntaxKind::ParenthesizedExpression
        | SyntaxKind::StringLiteral
        | SyntaxKind::NumericLiteral
        | SyntaxKind::FunctionType
        | SyntaxKind::UnionType
        | SyntaxKind::IntersectionType
        | SyntaxKind::ParenthesizedType
        | SyntaxKind::TypeReference
        | SyntaxKind::KeywordType
        | SyntaxKind::Unknown => false,
    };
    !declares
}

/// Check if `node` sits in an argument slot of its parent call.
pub fn is_call_argument(node: SyntaxNode<'_>) -> bool {
    node.field() == Some(Field::Argument)
        && node
            .parent()
            .is_some_and(|parent| parent.kind() == SyntaxKind::CallExpression)
}

/// Position of `node` among the arguments of its parent call.
pub fn argument_index(node: SyntaxNode<'_>) -> Option<usize> {
    let parent = node.parent()?;
    if parent.kind() != SyntaxKind::CallExpression {
        return None;
    }
    parent
        .children_by_field(Field::Argument)
        .position(|arg| arg == node)
}
