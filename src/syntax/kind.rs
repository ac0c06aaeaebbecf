use std::fmt;

/// Closed set of node categories the refactoring engine reasons about.
///
/// Hosts map their own node kinds onto this enumeration. Anything the engine
/// never inspects collapses into [`SyntaxKind::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    SourceFile,

    // Statements and declarations
    ExpressionStatement,
    FunctionDeclaration,
    VariableStatement,
    VariableDeclaration,
    TypeAliasDeclaration,
    Parameter,
    Block,
    ReturnStatement,

    // Expressions
    Identifier,
    CallExpression,
    ArrowFunction,
    FunctionExpression,
    PropertyAccessExpression,
    ParenthesizedExpression,
    StringLiteral,
    NumericLiteral,

    // Types
    FunctionType,
    UnionType,
    IntersectionType,
    ParenthesizedType,
    TypeReference,
    KeywordType,

    Unknown,
}

impl SyntaxKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            SyntaxKind::SourceFile => "SourceFile",
            SyntaxKind::ExpressionStatement => "ExpressionStatement",
            SyntaxKind::FunctionDeclaration => "FunctionDeclaration",
            SyntaxKind::VariableStatement => "VariableStatement",
            SyntaxKind::VariableDeclaration => "VariableDeclaration",
            SyntaxKind::TypeAliasDeclaration => "TypeAliasDeclaration",
            SyntaxKind::Parameter => "Parameter",
            SyntaxKind::Block => "Block",
            SyntaxKind::ReturnStatement => "ReturnStatement",
            SyntaxKind::Identifier => "Identifier",
            SyntaxKind::CallExpression => "CallExpression",
            SyntaxKind::ArrowFunction => "ArrowFunction",
            SyntaxKind::FunctionExpression => "FunctionExpression",
            SyntaxKind::PropertyAccessExpression => "PropertyAccessExpression",
            SyntaxKind::ParenthesizedExpression => "ParenthesizedExpression",
            SyntaxKind::StringLiteral => "StringLiteral",
            SyntaxKind::NumericLiteral => "NumericLiteral",
            SyntaxKind::FunctionType => "FunctionType",
            SyntaxKind::UnionType => "UnionType",
            SyntaxKind::IntersectionType => "IntersectionType",
            SyntaxKind::ParenthesizedType => "ParenthesizedType",
            SyntaxKind::TypeReference => "TypeReference",
            SyntaxKind::KeywordType => "KeywordType",
            SyntaxKind::Unknown => "Unknown",
        }
    }

    /// Nodes that own a parameter list.
    pub const fn is_function_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::FunctionDeclaration
                | SyntaxKind::ArrowFunction
                | SyntaxKind::FunctionExpression
                | SyntaxKind::FunctionType
        )
    }

    /// Nodes that introduce a lexical scope for name resolution.
    pub const fn is_scope(self) -> bool {
        matches!(
            self,
            SyntaxKind::SourceFile
                | SyntaxKind::Block
                | SyntaxKind::FunctionDeclaration
                | SyntaxKind::ArrowFunction
                | SyntaxKind::FunctionExpression
        )
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role a child plays inside its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Callee,
    Argument,
    Parameter,
    Type,
    ReturnType,
    Initializer,
    Body,
    /// Receiver of a property access.
    Object,
    /// Member name of a property access.
    Property,
}
