pub mod kind;
pub mod node_utils;
pub mod tree;

// Re-export main types
pub use kind::{Field, SyntaxKind};
pub use node_utils::{argument_index, is_call_argument, is_identifier_reference, locate};
pub use tree::{NodeId, SyntaxNode, SyntaxTree, TreeBuilder};
