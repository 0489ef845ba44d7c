use std::rc::Rc;

use super::datatype::DataType;
use super::literals::Literal;
use super::operators::{UnaryOperation, BinaryOperation};
use super::symbol_table::{Symbol, FieldMap};

/// Identifier is a string sequence representative of a symbol, together with
/// its 1-based source position. Name analysis fills the resolution slots
/// exactly once; the parser leaves them empty.
///
/// # Example:
///     int hello;
///         ^^^^^ -> Identifier
#[derive(Debug, Clone)]
pub struct Identifier {
    name: String,
    line: usize,
    column: usize,

    // Filled by name analysis
    symbol: Option<Symbol>,
    resolved_type: Option<DataType>,
    fields: Option<Rc<FieldMap>>,
}

impl Identifier {
    pub fn new(name: String, line: usize, column: usize) -> Self {
        Identifier {
            name,
            line,
            column,
            symbol: None,
            resolved_type: None,
            fields: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Symbol this occurrence resolved to, if name analysis found one.
    pub fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    /// Resolved type of this occurrence, if name analysis found one.
    pub fn resolved_type(&self) -> Option<&DataType> {
        self.resolved_type.as_ref()
    }

    /// Field map for onward dot-access chaining. Only present on identifiers
    /// that resolved to a struct typed entity.
    pub fn fields(&self) -> Option<Rc<FieldMap>> {
        self.fields.clone()
    }

    pub(crate) fn set_resolved(&mut self, symbol: Symbol, resolved_type: DataType) {
        self.symbol = Some(symbol);
        self.resolved_type = Some(resolved_type);
    }

    pub(crate) fn set_fields(&mut self, fields: Rc<FieldMap>) {
        self.fields = Some(fields);
    }
}


/// Root of the harambe AST. A program is a flat list of global declarations.
#[derive(Debug, Clone)]
pub struct Program {
    pub decls: Vec<Decl>,
}


/// Type specifier as written in a declaration.
///
/// # Example:
///     int x;
///     ^^^ -> TypeSpec
///     struct Point p;
///     ^^^^^^^^^^^^ -> TypeSpec (the identifier is the struct type name use)
#[derive(Debug, Clone)]
#[allow(non_camel_case_types)]
pub enum TypeSpec {
    INT,
    BOOL,
    VOID,
    STRUCT {
        id: Identifier
    },
}

impl TypeSpec {
    /// Convert the written type into its data type.
    pub fn to_datatype(&self) -> DataType {
        match self {
            TypeSpec::INT => DataType::INT,
            TypeSpec::BOOL => DataType::BOOL,
            TypeSpec::VOID => DataType::VOID,
            TypeSpec::STRUCT { id } => DataType::STRUCT(String::from(id.name())),
        }
    }
}


/// Formal parameter of a function declaration.
///
/// # Example:
///     int add(int x, int y) { ... }
///             ^^^^^ -> FormalDecl
#[derive(Debug, Clone)]
pub struct FormalDecl {
    pub type_spec: TypeSpec,
    pub id: Identifier,
}


/// Body of a function declaration. Declarations precede statements. The body
/// does not introduce a scope of its own, the enclosing function declaration
/// opens one for the formals and the body together.
#[derive(Debug, Clone)]
pub struct FnBody {
    pub decls: Vec<Decl>,
    pub stmts: Vec<Stmt>,
}


#[derive(Debug, Clone)]
#[allow(non_camel_case_types)]
pub enum Decl {
    /// Variable declaration, of primitive or struct type.
    ///
    /// # Example:
    ///     int x;
    ///     struct Point p;
    ///     ^^^^^^^^^^^^^^ -> VarDecl
    VAR_DECL {
        type_spec: TypeSpec,
        id: Identifier,
    },

    /// Function declaration. The name is declared in the enclosing scope,
    /// formals and body share one nested scope.
    ///
    /// # Example:
    ///     int add(int x, int y) { return (x + y); }
    ///     ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ -> FnDecl
    FN_DECL {
        return_type: TypeSpec,
        id: Identifier,
        formals: Vec<FormalDecl>,
        body: FnBody,
    },

    /// Struct type declaration. The field declarations are collected into the
    /// ordered field map of the declared struct type symbol.
    ///
    /// # Example:
    ///     struct Point { int x; int y; };
    ///     ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ -> StructDecl
    STRUCT_DECL {
        id: Identifier,
        fields: Vec<Decl>,
    },
}


#[derive(Debug, Clone)]
#[allow(non_camel_case_types)]
pub enum Stmt {
    /// Assignment statement. Nested assignments appear as an Expr::ASSIGN on
    /// the right hand side.
    ///
    /// # Example:
    ///     x = 42;
    ///     ^^^^^^ -> Assign
    ASSIGN {
        lhs: Expr,
        rhs: Expr,
    },

    /// # Example:
    ///     x++;
    POST_INC {
        loc: Expr,
    },

    /// # Example:
    ///     x--;
    POST_DEC {
        loc: Expr,
    },

    /// Read statement stores a value from stdin into a location.
    ///
    /// # Example:
    ///     cin >> x;
    ///     ^^^^^^^^ -> Read
    READ {
        loc: Expr,
    },

    /// Write statement displays the result of an expression on stdout.
    ///
    /// # Example:
    ///     cout << (x + 1);
    ///     ^^^^^^^^^^^^^^^ -> Write
    WRITE {
        expr: Expr,
    },

    /// If statement. The body introduces a block scope with its own
    /// declarations preceding its statements.
    ///
    /// # Example:
    ///     if (x < 10) { int y; y = x; }
    IF {
        condition: Expr,
        decls: Vec<Decl>,
        stmts: Vec<Stmt>,
    },

    /// If statement with an else block. Each branch introduces its own
    /// block scope.
    IF_ELSE {
        condition: Expr,
        then_decls: Vec<Decl>,
        then_stmts: Vec<Stmt>,
        else_decls: Vec<Decl>,
        else_stmts: Vec<Stmt>,
    },

    /// While statement. The body introduces a block scope.
    ///
    /// # Example:
    ///     while (x < 10) { x++; }
    WHILE {
        condition: Expr,
        decls: Vec<Decl>,
        stmts: Vec<Stmt>,
    },

    /// Call statement. Wraps an Expr::CALL used for its effect.
    ///
    /// # Example:
    ///     report(x);
    CALL {
        call: Expr,
    },

    /// Return statement. The expression is optional, a bare return is legal
    /// at this phase.
    ///
    /// # Example:
    ///     return (x + y);
    ///     return;
    RETURN {
        expr: Option<Expr>,
    },
}


#[derive(Debug, Clone)]
#[allow(non_camel_case_types)]
pub enum Expr {
    /// Literal constant with its source position.
    ///
    /// # Example:
    ///     x = 42;
    ///         ^^ -> Literal
    LITERAL {
        literal: Literal,
        line: usize,
        column: usize,
    },

    /// Identifier use.
    ID(Identifier),

    /// Dot access of a struct field. The location is either another dot
    /// access or a plain identifier; the grammar rejects anything else.
    ///
    /// # Example:
    ///     p.x = 3;
    ///     ^^^ -> DotAccess
    DOT_ACCESS {
        loc: Box<Expr>,
        field: Identifier,
    },

    /// Assignment as an expression.
    ///
    /// # Example:
    ///     x = (y = 3);
    ///         ^^^^^^^ -> Assign
    ASSIGN {
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    /// Function call expression.
    ///
    /// # Example:
    ///     x = add(1, 2);
    ///         ^^^^^^^^^ -> Call
    CALL {
        id: Identifier,
        args: Vec<Expr>,
    },

    /// # Example:
    ///     x = -y;
    ///         ^ -> Unary Operator
    UNARY_OP {
        op: UnaryOperation,
        operand: Box<Expr>,
    },

    /// # Syntax:
    ///     <lhs> <op> <rhs>
    ///
    /// # Example:
    ///     x = (40 + 2);
    ///             ^ -> Binary Operator
    BINARY_OP {
        op: BinaryOperation,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Whether this expression is a dot access. The name analyser uses this
    /// to pick the resolution path for the left hand side of a dot.
    pub fn is_dot_access(&self) -> bool {
        match self {
            Expr::DOT_ACCESS { .. } => true,
            _ => false
        }
    }

    /// Utility for extracting the identifier out of an identifier expression.
    pub fn identifier(&self) -> Option<&Identifier> {
        match self {
            Expr::ID(id) => Some(id),
            _ => None
        }
    }
}
