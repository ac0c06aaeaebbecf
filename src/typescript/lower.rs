//! Lowering of tree-sitter TypeScript trees into [`SyntaxTree`].

use tree_sitter::Node;

use crate::syntax::{Field, NodeId, SyntaxKind, SyntaxTree, TreeBuilder};

/// What to do with one named tree-sitter node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lowering {
    /// Becomes a node of the given kind.
    Node(SyntaxKind),
    /// Dropped, its children attach to the enclosing node.
    Splice,
    /// Dropped together with its subtree.
    Skip,
}

/// Convert a parsed tree-sitter tree rooted at `program`.
pub fn lower(file_name: &str, text: &str, program: Node<'_>) -> SyntaxTree {
    let mut lowerer = Lowerer {
        builder: TreeBuilder::new(file_name, text, SyntaxKind::SourceFile),
    };
    let root = lowerer.builder.root();
    lowerer.lower_children(program, root, None);
    let tree = lowerer.builder.finish();
    log::trace!(
        target: "wrapref::typescript",
        "Lowered {} into {} nodes",
        file_name,
        tree.node_count()
    );
    tree
}

struct Lowerer {
    builder: TreeBuilder,
}

impl Lowerer {
    /// Lower every named child of `node` under `parent`.
    ///
    /// `spliced` overrides the field of each child when `node` itself was
    /// spliced away (argument lists, parameter lists, type annotations).
    fn lower_children(&mut self, node: Node<'_>, parent: NodeId, spliced: Option<Field>) {
        let mut cursor = node.walk();
        if !cursor.goto_first_child() {
            return;
        }
        loop {
            let child = cursor.node();
            if child.is_named() && !child.is_missing() {
                let raw_field = cursor.field_name();
                let field = spliced.or_else(|| raw_field.and_then(|name| map_field(name, node.kind())));
                self.lower_node(child, parent, field, raw_field);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }

    fn lower_node(
        &mut self,
        node: Node<'_>,
        parent: NodeId,
        field: Option<Field>,
        raw_field: Option<&str>,
    ) {
        match classify(node.kind(), raw_field) {
            Lowering::Skip => {}
            Lowering::Splice => {
                let spliced = match node.kind() {
                    "arguments" => Some(Field::Argument),
                    "formal_parameters" => Some(Field::Parameter),
                    _ => field,
                };
                self.lower_children(node, parent, spliced);
            }
            Lowering::Node(kind) => {
                // `x => ...` has a bare identifier where a parameter list would be
                if raw_field == Some("parameter") && kind == SyntaxKind::Identifier {
                    let param = self.builder.push(
                        parent,
                        SyntaxKind::Parameter,
                        Some(Field::Parameter),
                        node.byte_range(),
                    );
                    self.builder
                        .push(param, kind, Some(Field::Name), node.byte_range());
                    return;
                }
                let id = self.builder.push(parent, kind, field, node.byte_range());
                if !is_leaf(kind) {
                    self.lower_children(node, id, None);
                }
            }
        }
    }
}

fn classify(kind: &str, raw_field: Option<&str>) -> Lowering {
    let lowered = match kind {
        "comment" => return Lowering::Skip,
        "arguments" | "formal_parameters" | "type_annotation" | "ambient_declaration" => {
            return Lowering::Splice;
        }
        "expression_statement" => SyntaxKind::ExpressionStatement,
        "function_declaration" | "function_signature" | "generator_function_declaration" => {
            SyntaxKind::FunctionDeclaration
        }
        "lexical_declaration" | "variable_declaration" => SyntaxKind::VariableStatement,
        "variable_declarator" => SyntaxKind::VariableDeclaration,
        "type_alias_declaration" => SyntaxKind::TypeAliasDeclaration,
        "required_parameter" | "optional_parameter" => SyntaxKind::Parameter,
        "statement_block" => SyntaxKind::Block,
        "return_statement" => SyntaxKind::ReturnStatement,
        "identifier" | "property_identifier" | "shorthand_property_identifier" => {
            SyntaxKind::Identifier
        }
        "call_expression" => SyntaxKind::CallExpression,
        "arrow_function" => SyntaxKind::ArrowFunction,
        "function_expression" | "function" => SyntaxKind::FunctionExpression,
        "member_expression" => SyntaxKind::PropertyAccessExpression,
        "parenthesized_expression" => SyntaxKind::ParenthesizedExpression,
        "string" | "template_string" => SyntaxKind::StringLiteral,
        "number" => SyntaxKind::NumericLiteral,
        "function_type" => SyntaxKind::FunctionType,
        "union_type" => SyntaxKind::UnionType,
        "intersection_type" => SyntaxKind::IntersectionType,
        "parenthesized_type" => SyntaxKind::ParenthesizedType,
        "type_identifier" if raw_field == Some("name") => SyntaxKind::Identifier,
        "type_identifier" | "generic_type" | "nested_type_identifier" => SyntaxKind::TypeReference,
        "predefined_type" => SyntaxKind::KeywordType,
        _ => SyntaxKind::Unknown,
    };
    Lowering::Node(lowered)
}

fn map_field(name: &str, parent_kind: &str) -> Option<Field> {
    match name {
        "name" | "pattern" => Some(Field::Name),
        "function" => Some(Field::Callee),
        "arguments" => Some(Field::Argument),
        "parameters" | "parameter" => Some(Field::Parameter),
        "type" => Some(Field::Type),
        "return_type" => Some(Field::ReturnType),
        "value" if parent_kind == "type_alias_declaration" => Some(Field::Type),
        "value" => Some(Field::Initializer),
        "body" => Some(Field::Body),
        "object" => Some(Field::Object),
        "property" => Some(Field::Property),
        _ => None,
    }
}

/// Kinds whose tree-sitter subtree carries nothing the model needs.
fn is_leaf(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Identifier
            | SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::KeywordType
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::argument_list("arguments", None, Lowering::Splice)]
    #[case::parameter_list("formal_parameters", Some("parameters"), Lowering::Splice)]
    #[case::annotation("type_annotation", Some("type"), Lowering::Splice)]
    #[case::ambient("ambient_declaration", None, Lowering::Splice)]
    #[case::comment("comment", None, Lowering::Skip)]
    #[case::signature("function_signature", None, Lowering::Node(SyntaxKind::FunctionDeclaration))]
    #[case::member("member_expression", None, Lowering::Node(SyntaxKind::PropertyAccessExpression))]
    fn test_classify(
        #[case] kind: &str,
        #[case] raw_field: Option<&str>,
        #[case] expected: Lowering,
    ) {
        assert_eq!(classify(kind, raw_field), expected);
    }

    #[test]
    fn test_classify_type_identifier_by_role() {
        assert_eq!(
            classify("type_identifier", Some("name")),
            Lowering::Node(SyntaxKind::Identifier)
        );
        assert_eq!(
            classify("type_identifier", None),
            Lowering::Node(SyntaxKind::TypeReference)
        );
    }

    #[test]
    fn test_unmodelled_kinds_are_unknown() {
        assert_eq!(
            classify("if_statement", None),
            Lowering::Node(SyntaxKind::Unknown)
        );
    }

    #[test]
    fn test_alias_value_is_a_type() {
        assert_eq!(map_field("value", "type_alias_declaration"), Some(Field::Type));
        assert_eq!(map_field("value", "variable_declarator"), Some(Field::Initializer));
        assert_eq!(map_field("kind", "lexical_declaration"), None);
    }
}
