//! Depth-first traversal.
//!
//! [`walk`] calls [`Visitor::visit`] with `Some(node)`. On
//! [`Continuation::Descend`] it walks every present child of the node, in
//! source order, and then calls `visit(None)` to signal that the subtree was
//! exited. On [`Continuation::Skip`] neither the children nor the exit call
//! are visited.

use super::ast::{AstNode, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Descend,
    Skip,
}

impl From<bool> for Continuation {
    fn from(descend: bool) -> Self {
        if descend {
            Continuation::Descend
        } else {
            Continuation::Skip
        }
    }
}

pub trait Visitor<'ast> {
    /// `None` marks the end of a subtree previously descended into.
    fn visit(&mut self, node: Option<Node<'ast>>) -> Continuation;
}

pub fn walk<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: Node<'ast>) {
    if visitor.visit(Some(node)) == Continuation::Skip {
        return;
    }

    for_each_child(node, &mut |child| walk(&mut *visitor, child));

    visitor.visit(None);
}

struct Inspector<F> {
    callback: F,
}

impl<'ast, F> Visitor<'ast> for Inspector<F>
where
    F: FnMut(Option<Node<'ast>>) -> bool,
{
    fn visit(&mut self, node: Option<Node<'ast>>) -> Continuation {
        (self.callback)(node).into()
    }
}

/// Walks `node` with a plain callback. Returning `true` descends into the
/// children and the callback later receives `None` on exit; returning
/// `false` skips the children and the exit call.
pub fn inspect<'ast, F>(node: Node<'ast>, callback: F)
where
    F: FnMut(Option<Node<'ast>>) -> bool,
{
    let mut inspector = Inspector { callback };
    walk(&mut inspector, node);
}

/// The direct children of `node`, in the order [`walk`] visits them.
pub fn children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut out = Vec::new();
    for_each_child(node, &mut |child| out.push(child));
    out
}

fn each<'a, T: AstNode + 'a>(
    items: impl IntoIterator<Item = &'a T>,
    f: &mut dyn FnMut(Node<'a>),
) {
    for item in items {
        f(item.as_node());
    }
}

fn for_each_child<'a>(node: Node<'a>, f: &mut dyn FnMut(Node<'a>)) {
    match node {
        // Expressions
        Node::NumericLiteral(_) | Node::StringLiteral(_) | Node::Identifier(_) => {}
        Node::QualifiedName(n) => {
            f(n.left.as_node());
            f(n.right.as_node());
        }
        Node::ArrayLiteralExpression(n) => each(&n.elements, f),
        Node::EnumMember(n) => {
            f(n.name.as_node());
            each(&n.initializer, f);
        }
        Node::TypeParameter(n) => f(n.name.as_node()),
        Node::HeritageClause(n) => each(&n.types, f),
        Node::ExpressionWithTypeArguments(n) => f(n.expression.as_node()),
        Node::Parameter(n) => {
            f(n.name.as_node());
            f(n.ty.as_node());
        }
        Node::VariableDeclarationList(n) => each(&n.declarations, f),
        Node::VariableDeclaration(n) => {
            f(n.name.as_node());
            each(&n.ty, f);
            each(&n.initializer, f);
        }
        Node::PrefixUnaryExpression(n) => f(n.operand.as_node()),

        // Signatures
        Node::PropertySignature(n) => {
            f(n.name.as_node());
            f(n.ty.as_node());
        }
        Node::IndexSignature(n) => {
            each(&n.parameters, f);
            f(n.ty.as_node());
        }

        // Types
        Node::LiteralType(n) => f(n.literal.as_node()),
        Node::TypeLiteral(n) => each(&n.members, f),
        Node::ArrayType(n) => f(n.element_type.as_node()),
        Node::TypeReference(n) => f(n.type_name.as_node()),
        Node::UnionType(n) => each(&n.types, f),
        Node::TupleType(n) => each(&n.elements, f),
        Node::ParenthesizedType(n) => f(n.ty.as_node()),

        // Statements
        Node::SourceFile(n) => each(&n.statements, f),
        Node::ModuleBlock(n) => each(&n.statements, f),
        Node::VariableStatement(n) => f(n.declaration_list.as_node()),
        Node::TypeAliasDeclaration(n) => {
            f(n.name.as_node());
            f(n.ty.as_node());
        }
        Node::EnumDeclaration(n) => {
            f(n.name.as_node());
            each(&n.members, f);
        }
        Node::InterfaceDeclaration(n) => {
            f(n.name.as_node());
            each(&n.type_parameters, f);
            each(&n.heritage_clauses, f);
            each(&n.members, f);
        }
        Node::ModuleDeclaration(n) => {
            f(n.name.as_node());
            f(n.body.as_node());
        }
    }
}
