/// Syntax tree module
/// Contains every node of a parsed declaration file and the traversal over it
///
/// Submodules:
/// - ast: Sum types, capability tiers and the borrowed `Node` view
/// - expressions: Literals, names and declaration parts
/// - signatures: Interface and type literal members
/// - statements: Declarations, source files and namespace bodies
/// - types: Type expressions
/// - walk: Depth-first walker and the `inspect` adapter
pub mod ast;
pub mod expressions;
pub mod signatures;
pub mod statements;
pub mod types;
pub mod walk;
