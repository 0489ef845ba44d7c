
/// Literals are defined constants within a program. See the Expr node for
/// their usage. They are divided by their representation in text.
///
/// Note: signed literals are stored in the AST as a negate unary operation. For example
/// -32 <=> UNARY_OP{UnaryOperation::NEGATE, Literal::INTEGER(32)}
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Form: %d
    INTEGER(u64),

    /// Form: "%c*"
    /// Stored verbatim with the surrounding quotes.
    STRING(String),

    /// Form: false | true
    BOOL(bool),
}
