/// Unary Operations are symbolic functions with one argument.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(non_camel_case_types)]
pub enum UnaryOperation {
    NOT,        // ! <rhs>
    NEGATE,     // - <rhs>
}

impl UnaryOperation {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOperation::NOT => "!",
            UnaryOperation::NEGATE => "-",
        }
    }
}

/// Binary Operations are symbolic functions with two arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(non_camel_case_types)]
pub enum BinaryOperation {
    ADD,            // <lhs> + <rhs>
    SUB,            // <lhs> - <rhs>
    MUL,            // <lhs> * <rhs>
    DIV,            // <lhs> / <rhs>

    AND,            // <lhs> && <rhs>
    OR,             // <lhs> || <rhs>

    EQUAL,          // <lhs> == <rhs>
    NOT_EQUAL,      // <lhs> != <rhs>
    GREATER_THAN,   // <lhs> >  <rhs>
    LESS_THAN,      // <lhs> <  <rhs>
    GREATER_EQUAL,  // <lhs> >= <rhs>
    LESS_EQUAL      // <lhs> <= <rhs>
}

impl BinaryOperation {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperation::ADD => "+",
            BinaryOperation::SUB => "-",
            BinaryOperation::MUL => "*",
            BinaryOperation::DIV => "/",
            BinaryOperation::AND => "&&",
            BinaryOperation::OR => "||",
            BinaryOperation::EQUAL => "==",
            BinaryOperation::NOT_EQUAL => "!=",
            BinaryOperation::GREATER_THAN => ">",
            BinaryOperation::LESS_THAN => "<",
            BinaryOperation::GREATER_EQUAL => ">=",
            BinaryOperation::LESS_EQUAL => "<=",
        }
    }
}
