use super::Unparser;
use super::super::ast::{
    Program,
    Decl,
    Stmt,
    Expr,
    TypeSpec,
    Identifier,
    Literal,
};
use super::super::ast::symbol_table::SymbolType;

/// Spaces per block level.
const INDENT_WIDTH: usize = 4;

/// AnnotatedUnparser walks a frozen AST and renders source faithful text.
///
/// Identifier uses that resolved during name analysis are annotated with
/// their resolved type, `x(int)`, and call targets with their signature,
/// `f(int, bool->void)`. Declarations render the bare identifier.
/// Unresolved identifiers render bare, so the unparse of an unanalysed tree
/// is plain reparseable source.
pub struct AnnotatedUnparser;

impl Unparser for AnnotatedUnparser {
    fn default() -> Self {
        Self {}
    }

    fn unparse(self, program: &Program) -> String {
        let mut output = String::new();
        for decl in &program.decls {
            self.unparse_decl(&mut output, decl, 0);
        }
        output
    }
}

/// Declarations
impl AnnotatedUnparser {
    fn indent(depth: usize) -> String {
        " ".repeat(depth * INDENT_WIDTH)
    }

    fn unparse_decl(&self, output: &mut String, decl: &Decl, depth: usize) {
        match decl {
            Decl::VAR_DECL { type_spec, id } => {
                output.push_str(&format!(
                    "{}{} {};\n",
                    Self::indent(depth),
                    self.unparse_type_spec(type_spec),
                    id.name()
                ));
            }
            Decl::FN_DECL { return_type, id, formals, body } => {
                let formals: Vec<String> = formals.iter()
                    .map(|formal| format!("{} {}", self.unparse_type_spec(&formal.type_spec), formal.id.name()))
                    .collect();
                output.push_str(&format!(
                    "{}{} {}({}) {{\n",
                    Self::indent(depth),
                    self.unparse_type_spec(return_type),
                    id.name(),
                    formals.join(", ")
                ));
                for decl in &body.decls {
                    self.unparse_decl(output, decl, depth + 1);
                }
                for stmt in &body.stmts {
                    self.unparse_stmt(output, stmt, depth + 1);
                }
                output.push_str(&format!("{}}}\n\n", Self::indent(depth)));
            }
            Decl::STRUCT_DECL { id, fields } => {
                output.push_str(&format!("{}struct {} {{\n", Self::indent(depth), id.name()));
                for field in fields {
                    self.unparse_decl(output, field, depth + 1);
                }
                output.push_str(&format!("{}}};\n", Self::indent(depth)));
            }
        }
    }

    fn unparse_type_spec(&self, type_spec: &TypeSpec) -> String {
        match type_spec {
            TypeSpec::INT => String::from("int"),
            TypeSpec::BOOL => String::from("bool"),
            TypeSpec::VOID => String::from("void"),
            TypeSpec::STRUCT { id } => format!("struct {}", id.name()),
        }
    }
}

/// Statements
impl AnnotatedUnparser {
    fn unparse_stmt(&self, output: &mut String, stmt: &Stmt, depth: usize) {
        let indent = Self::indent(depth);
        match stmt {
            Stmt::ASSIGN { lhs, rhs } => {
                // Statement context drops the outer parentheses of the assignment
                output.push_str(&format!("{}{} = {};\n", indent, self.unparse_expr(lhs), self.unparse_expr(rhs)));
            }
            Stmt::POST_INC { loc } => {
                output.push_str(&format!("{}{}++;\n", indent, self.unparse_expr(loc)));
            }
            Stmt::POST_DEC { loc } => {
                output.push_str(&format!("{}{}--;\n", indent, self.unparse_expr(loc)));
            }
            Stmt::READ { loc } => {
                output.push_str(&format!("{}cin >> {};\n", indent, self.unparse_expr(loc)));
            }
            Stmt::WRITE { expr } => {
                output.push_str(&format!("{}cout << {};\n", indent, self.unparse_expr(expr)));
            }
            Stmt::IF { condition, decls, stmts } => {
                output.push_str(&format!("{}if ({}) {{\n", indent, self.unparse_expr(condition)));
                self.unparse_block(output, decls, stmts, depth + 1);
                output.push_str(&format!("{}}}\n", indent));
            }
            Stmt::IF_ELSE { condition, then_decls, then_stmts, else_decls, else_stmts } => {
                output.push_str(&format!("{}if ({}) {{\n", indent, self.unparse_expr(condition)));
                self.unparse_block(output, then_decls, then_stmts, depth + 1);
                output.push_str(&format!("{}}} else {{\n", indent));
                self.unparse_block(output, else_decls, else_stmts, depth + 1);
                output.push_str(&format!("{}}}\n", indent));
            }
            Stmt::WHILE { condition, decls, stmts } => {
                output.push_str(&format!("{}while ({}) {{\n", indent, self.unparse_expr(condition)));
                self.unparse_block(output, decls, stmts, depth + 1);
                output.push_str(&format!("{}}}\n", indent));
            }
            Stmt::CALL { call } => {
                output.push_str(&format!("{}{};\n", indent, self.unparse_expr(call)));
            }
            Stmt::RETURN { expr } => {
                match expr {
                    Some(expr) => output.push_str(&format!("{}return {};\n", indent, self.unparse_expr(expr))),
                    None => output.push_str(&format!("{}return;\n", indent)),
                }
            }
        }
    }

    fn unparse_block(&self, output: &mut String, decls: &[Decl], stmts: &[Stmt], depth: usize) {
        for decl in decls {
            self.unparse_decl(output, decl, depth);
        }
        for stmt in stmts {
            self.unparse_stmt(output, stmt, depth);
        }
    }
}

/// Expressions
impl AnnotatedUnparser {
    fn unparse_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::LITERAL { literal, .. } => {
                self.unparse_literal(literal)
            }
            Expr::ID(id) => {
                format!("{}{}", id.name(), self.use_annotation(id))
            }
            Expr::DOT_ACCESS { loc, field } => {
                format!("({}).{}{}", self.unparse_expr(loc), field.name(), self.use_annotation(field))
            }
            Expr::ASSIGN { lhs, rhs } => {
                format!("({} = {})", self.unparse_expr(lhs), self.unparse_expr(rhs))
            }
            Expr::CALL { id, args } => {
                let args: Vec<String> = args.iter()
                    .map(|arg| self.unparse_expr(arg))
                    .collect();
                format!("{}{}({})", id.name(), self.call_annotation(id), args.join(", "))
            }
            Expr::UNARY_OP { op, operand } => {
                format!("({}{})", op.symbol(), self.unparse_expr(operand))
            }
            Expr::BINARY_OP { op, lhs, rhs } => {
                format!("({} {} {})", self.unparse_expr(lhs), op.symbol(), self.unparse_expr(rhs))
            }
        }
    }

    fn unparse_literal(&self, literal: &Literal) -> String {
        match literal {
            Literal::INTEGER(value) => value.to_string(),
            Literal::STRING(text) => text.clone(),
            Literal::BOOL(value) => value.to_string(),
        }
    }

    /// Annotation of an identifier use: the resolved type in parentheses.
    /// A use that resolved to a function carries the function's return type;
    /// the signature form is reserved for call targets.
    fn use_annotation(&self, id: &Identifier) -> String {
        match id.resolved_type() {
            Some(resolved_type) => format!("({})", resolved_type),
            None => String::new(),
        }
    }

    /// Annotation of a call target. A target without a formal type list still
    /// prints the arrow and its resolved type.
    fn call_annotation(&self, id: &Identifier) -> String {
        match id.symbol() {
            Some(symbol) => match symbol.symbol_type() {
                SymbolType::FUNCTION { formal_types, return_type } => {
                    let formal_types: Vec<String> = formal_types.iter()
                        .map(|datatype| datatype.to_string())
                        .collect();
                    format!("({}->{})", formal_types.join(", "), return_type)
                }
                _ => match id.resolved_type() {
                    Some(resolved_type) => format!("(->{})", resolved_type),
                    None => String::new(),
                }
            }
            None => String::new()
        }
    }
}
