/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and its top-level items
/// - expressions: Definitions for the expression and index nodes
/// - statements: Definitions for declarations, statements, sources and sinks
/// - types: The resolved type of a declaration or expression
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
