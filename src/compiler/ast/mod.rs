pub(super) mod literals;
pub(super) mod operators;
pub(super) mod ast_node;
pub(super) mod symbol_table;
pub(super) mod datatype;

pub(super) use self::{
    ast_node::{
        Program,
        Decl,
        FormalDecl,
        FnBody,
        Stmt,
        Expr,
        TypeSpec,
        Identifier
    },
    literals::Literal,
    operators::{
        UnaryOperation,
        BinaryOperation
    },
};
