/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: the syntax node enum, the owning tree, and subtree display
pub mod ast;
