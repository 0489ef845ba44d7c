use crate::pest::Parser;
use simple_error::SimpleError;

use super::AstParser;
use super::super::ast::{
    Program,
    Decl,
    FormalDecl,
    FnBody,
    Stmt,
    Expr,
    TypeSpec,
    Identifier,
    Literal,
    UnaryOperation,
    BinaryOperation,
};

/// Harambe Parser parses a string into a series of tokens.
/// These tokens are defined as a Context-Free-Grammar in the src/harambe.pest file.
/// The tokens generated from this parser are then formalised into the generic
/// abstract syntax tree implementation.
#[derive(Parser)]
#[grammar = "harambe.pest"]
struct HarambeParser;

/// HarambePestParser is a concrete AstParser.
/// It uses the pest library to generate a token sequence from a source string
/// that is then converted into a Program tree. Identifier and literal nodes
/// capture their 1-based line and column from the token span.
pub struct HarambePestParser;

impl HarambePestParser {

    /// Parses source string into a Program.
    fn parse_into_program(&self, source: &str) -> Result<Program, SimpleError> {
        match HarambeParser::parse(Rule::program, source) {
            Ok(mut pairs) => {
                match pairs.next() {
                    Some(pair) if pair.as_rule() == Rule::program => {
                        Ok(self.parse_pair_program(pair))
                    }
                    _ => Err(SimpleError::new("program has been parsed without error but is empty"))
                }
            }
            Err(error) => Err(SimpleError::new(format!("{}", error)))
        }
    }

    fn parse_pair_program(&self, pair: pest::iterators::Pair<Rule>) -> Program {
        let decls = pair.into_inner()
            .filter(|inner| inner.as_rule() == Rule::decl)
            .map(|inner| self.parse_pair_decl(inner))
            .collect();
        Program { decls }
    }

    /// Parses a pest declaration pair into an AST declaration
    fn parse_pair_decl(&self, pair: pest::iterators::Pair<Rule>) -> Decl {
        let inner = pair.into_inner().next().unwrap();
        match inner.as_rule() {
            Rule::struct_decl => { self.parse_pair_struct_decl(inner) }
            Rule::fn_decl =>     { self.parse_pair_fn_decl(inner) }
            Rule::var_decl =>    { self.parse_pair_var_decl(inner) }
            _ => { panic!("Whoops! Unprocessed pest rule: {:?}", inner.as_rule()) }
        }
    }

    fn parse_pair_var_decl(&self, pair: pest::iterators::Pair<Rule>) -> Decl {
        let mut inner = pair.into_inner();
        let type_spec = self.parse_pair_type_spec(inner.next().unwrap());
        let id = self.parse_pair_identifier(inner.next().unwrap());
        Decl::VAR_DECL { type_spec, id }
    }

    fn parse_pair_struct_decl(&self, pair: pest::iterators::Pair<Rule>) -> Decl {
        let mut inner = pair.into_inner();
        let _ = inner.next(); // struct keyword
        let id = self.parse_pair_identifier(inner.next().unwrap());
        let fields = inner
            .filter(|field| field.as_rule() == Rule::var_decl)
            .map(|field| self.parse_pair_var_decl(field))
            .collect();
        Decl::STRUCT_DECL { id, fields }
    }

    fn parse_pair_fn_decl(&self, pair: pest::iterators::Pair<Rule>) -> Decl {
        let mut inner = pair.into_inner();
        let return_type = self.parse_pair_type_spec(inner.next().unwrap());
        let id = self.parse_pair_identifier(inner.next().unwrap());

        let mut formals = Vec::new();
        let mut decls = Vec::new();
        let mut stmts = Vec::new();
        for next in inner {
            match next.as_rule() {
                Rule::formal_list => {
                    formals = next.into_inner()
                        .map(|formal| self.parse_pair_formal_decl(formal))
                        .collect();
                }
                Rule::var_decl => { decls.push(self.parse_pair_var_decl(next)); }
                Rule::stmt =>     { stmts.push(self.parse_pair_stmt(next)); }
                _ => { panic!("Whoops! Unprocessed pest rule: {:?}", next.as_rule()) }
            }
        }

        Decl::FN_DECL { return_type, id, formals, body: FnBody { decls, stmts } }
    }

    fn parse_pair_formal_decl(&self, pair: pest::iterators::Pair<Rule>) -> FormalDecl {
        let mut inner = pair.into_inner();
        let type_spec = self.parse_pair_type_spec(inner.next().unwrap());
        let id = self.parse_pair_identifier(inner.next().unwrap());
        FormalDecl { type_spec, id }
    }

    fn parse_pair_type_spec(&self, pair: pest::iterators::Pair<Rule>) -> TypeSpec {
        let inner = pair.into_inner().next().unwrap();
        match inner.as_rule() {
            Rule::int_kw =>  { TypeSpec::INT }
            Rule::bool_kw => { TypeSpec::BOOL }
            Rule::void_kw => { TypeSpec::VOID }
            Rule::struct_type => {
                let id_pair = inner.into_inner()
                    .find(|name| name.as_rule() == Rule::identifier)
                    .unwrap();
                TypeSpec::STRUCT { id: self.parse_pair_identifier(id_pair) }
            }
            _ => { panic!("Whoops! Unprocessed pest rule: {:?}", inner.as_rule()) }
        }
    }

    /// Parses a pest token pair into an AST identifier with its source position
    fn parse_pair_identifier(&self, pair: pest::iterators::Pair<Rule>) -> Identifier {
        let (line, column) = pair.as_span().start_pos().line_col();
        Identifier::new(String::from(pair.as_str()), line, column)
    }

    /// Parses a pest statement pair into an AST statement
    fn parse_pair_stmt(&self, pair: pest::iterators::Pair<Rule>) -> Stmt {
        let inner = pair.into_inner().next().unwrap();
        match inner.as_rule() {
            Rule::read_stmt =>     { self.parse_pair_read_stmt(inner) }
            Rule::write_stmt =>    { self.parse_pair_write_stmt(inner) }
            Rule::if_stmt =>       { self.parse_pair_if_stmt(inner) }
            Rule::if_else_stmt =>  { self.parse_pair_if_else_stmt(inner) }
            Rule::while_stmt =>    { self.parse_pair_while_stmt(inner) }
            Rule::return_stmt =>   { self.parse_pair_return_stmt(inner) }
            Rule::call_stmt =>     { self.parse_pair_call_stmt(inner) }
            Rule::post_inc_stmt => { Stmt::POST_INC { loc: self.parse_pair_first_location(inner) } }
            Rule::post_dec_stmt => { Stmt::POST_DEC { loc: self.parse_pair_first_location(inner) } }
            Rule::assign_stmt =>   { self.parse_pair_assign_stmt(inner) }
            _ => { panic!("Whoops! Unprocessed pest rule: {:?}", inner.as_rule()) }
        }
    }

    fn parse_pair_first_location(&self, pair: pest::iterators::Pair<Rule>) -> Expr {
        let location = pair.into_inner()
            .find(|inner| inner.as_rule() == Rule::location)
            .unwrap();
        self.parse_pair_location(location)
    }

    fn parse_pair_read_stmt(&self, pair: pest::iterators::Pair<Rule>) -> Stmt {
        Stmt::READ { loc: self.parse_pair_first_location(pair) }
    }

    fn parse_pair_write_stmt(&self, pair: pest::iterators::Pair<Rule>) -> Stmt {
        let expr = pair.into_inner()
            .find(|inner| inner.as_rule() == Rule::expr)
            .unwrap();
        Stmt::WRITE { expr: self.parse_pair_expr(expr) }
    }

    fn parse_pair_if_stmt(&self, pair: pest::iterators::Pair<Rule>) -> Stmt {
        let mut inner = pair.into_inner();
        let _ = inner.next(); // if keyword
        let condition = self.parse_pair_expr(inner.next().unwrap());
        let (decls, stmts) = self.parse_pair_block(inner.next().unwrap());
        Stmt::IF { condition, decls, stmts }
    }

    fn parse_pair_if_else_stmt(&self, pair: pest::iterators::Pair<Rule>) -> Stmt {
        let mut inner = pair.into_inner();
        let _ = inner.next(); // if keyword
        let condition = self.parse_pair_expr(inner.next().unwrap());
        let (then_decls, then_stmts) = self.parse_pair_block(inner.next().unwrap());
        let _ = inner.next(); // else keyword
        let (else_decls, else_stmts) = self.parse_pair_block(inner.next().unwrap());
        Stmt::IF_ELSE { condition, then_decls, then_stmts, else_decls, else_stmts }
    }

    fn parse_pair_while_stmt(&self, pair: pest::iterators::Pair<Rule>) -> Stmt {
        let mut inner = pair.into_inner();
        let _ = inner.next(); // while keyword
        let condition = self.parse_pair_expr(inner.next().unwrap());
        let (decls, stmts) = self.parse_pair_block(inner.next().unwrap());
        Stmt::WHILE { condition, decls, stmts }
    }

    fn parse_pair_return_stmt(&self, pair: pest::iterators::Pair<Rule>) -> Stmt {
        let expr = pair.into_inner()
            .find(|inner| inner.as_rule() == Rule::expr)
            .map(|inner| self.parse_pair_expr(inner));
        Stmt::RETURN { expr }
    }

    fn parse_pair_call_stmt(&self, pair: pest::iterators::Pair<Rule>) -> Stmt {
        let call = pair.into_inner().next().unwrap();
        Stmt::CALL { call: self.parse_pair_call_expr(call) }
    }

    fn parse_pair_assign_stmt(&self, pair: pest::iterators::Pair<Rule>) -> Stmt {
        let mut inner = pair.into_inner();
        let lhs = self.parse_pair_location(inner.next().unwrap());
        let rhs = self.parse_pair_expr(inner.next().unwrap());
        Stmt::ASSIGN { lhs, rhs }
    }

    /// Parses a pest block pair into its declaration and statement lists
    fn parse_pair_block(&self, pair: pest::iterators::Pair<Rule>) -> (Vec<Decl>, Vec<Stmt>) {
        let mut decls = Vec::new();
        let mut stmts = Vec::new();
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::var_decl => { decls.push(self.parse_pair_var_decl(inner)); }
                Rule::stmt =>     { stmts.push(self.parse_pair_stmt(inner)); }
                _ => { panic!("Whoops! Unprocessed pest rule: {:?}", inner.as_rule()) }
            }
        }
        (decls, stmts)
    }

    /// Parses a pest expression pair into an AST expression
    fn parse_pair_expr(&self, pair: pest::iterators::Pair<Rule>) -> Expr {
        let inner = pair.into_inner().next().unwrap();
        match inner.as_rule() {
            Rule::assign_expr => { self.parse_pair_assign_expr(inner) }
            Rule::logic_or =>    { self.parse_pair_binary_expression(inner) }
            _ => { panic!("Whoops! Unprocessed pest rule: {:?}", inner.as_rule()) }
        }
    }

    fn parse_pair_assign_expr(&self, pair: pest::iterators::Pair<Rule>) -> Expr {
        let mut inner = pair.into_inner();
        let lhs = self.parse_pair_location(inner.next().unwrap());
        let rhs = self.parse_pair_expr(inner.next().unwrap());
        Expr::ASSIGN { lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    /// Parses a pest token pair into an AST binary expression.
    /// A linear list of binary operations of equal precedence becomes a
    /// left associative tree of binary operations.
    fn parse_pair_binary_expression(&self, pair: pest::iterators::Pair<Rule>) -> Expr {
        let mut pair = pair.into_inner();

        let mut lhs = self.parse_pair_operand(pair.next().unwrap());
        while pair.peek().is_some() {
            let op = self.parse_pair_binary_op(pair.next().unwrap());
            let rhs = self.parse_pair_operand(pair.next().unwrap());
            lhs = Expr::BINARY_OP {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            }
        }

        lhs
    }

    fn parse_pair_operand(&self, pair: pest::iterators::Pair<Rule>) -> Expr {
        match pair.as_rule() {
            Rule::logic_and |
            Rule::equality |
            Rule::relational |
            Rule::additive |
            Rule::term =>  { self.parse_pair_binary_expression(pair) }
            Rule::unary => { self.parse_pair_unary(pair) }
            _ => { panic!("Whoops! Unprocessed pest rule: {:?}", pair.as_rule()) }
        }
    }

    fn parse_pair_binary_op(&self, pair: pest::iterators::Pair<Rule>) -> BinaryOperation {
        match pair.as_str() {
            "||" => BinaryOperation::OR,
            "&&" => BinaryOperation::AND,
            "==" => BinaryOperation::EQUAL,
            "!=" => BinaryOperation::NOT_EQUAL,
            "<=" => BinaryOperation::LESS_EQUAL,
            ">=" => BinaryOperation::GREATER_EQUAL,
            "<" => BinaryOperation::LESS_THAN,
            ">" => BinaryOperation::GREATER_THAN,
            "+" => BinaryOperation::ADD,
            "-" => BinaryOperation::SUB,
            "*" => BinaryOperation::MUL,
            "/" => BinaryOperation::DIV,
            op => panic!("Whoops! Unprocessed binary operator: {}", op)
        }
    }

    fn parse_pair_unary(&self, pair: pest::iterators::Pair<Rule>) -> Expr {
        let mut ops = Vec::new();
        let mut operand = None;
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::not_op =>  { ops.push(UnaryOperation::NOT); }
                Rule::neg_op =>  { ops.push(UnaryOperation::NEGATE); }
                Rule::primary => { operand = Some(self.parse_pair_primary(inner)); }
                _ => { panic!("Whoops! Unprocessed pest rule: {:?}", inner.as_rule()) }
            }
        }

        // Operators apply innermost first
        let mut expr = operand.unwrap();
        for op in ops.into_iter().rev() {
            expr = Expr::UNARY_OP { op, operand: Box::new(expr) };
        }
        expr
    }

    fn parse_pair_primary(&self, pair: pest::iterators::Pair<Rule>) -> Expr {
        let inner = pair.into_inner().next().unwrap();
        match inner.as_rule() {
            Rule::call_expr => { self.parse_pair_call_expr(inner) }
            Rule::boolean |
            Rule::integer |
            Rule::string =>    { self.parse_pair_literal(inner) }
            Rule::location =>  { self.parse_pair_location(inner) }
            Rule::expr =>      { self.parse_pair_expr(inner) }
            _ => { panic!("Whoops! Unprocessed pest rule: {:?}", inner.as_rule()) }
        }
    }

    /// Parses a pest token pair into an AST literal with its source position
    fn parse_pair_literal(&self, pair: pest::iterators::Pair<Rule>) -> Expr {
        let (line, column) = pair.as_span().start_pos().line_col();
        let literal = match pair.as_rule() {
            Rule::integer => {
                Literal::INTEGER(pair.as_str().parse().unwrap())
            }
            Rule::boolean => {
                Literal::BOOL(pair.as_str().parse().unwrap())
            }
            Rule::string => {
                Literal::STRING(String::from(pair.as_str()))
            }
            _ => { panic!("Whoops! Unprocessed literal rule: {:?}", pair.as_rule()) }
        };
        Expr::LITERAL { literal, line, column }
    }

    fn parse_pair_call_expr(&self, pair: pest::iterators::Pair<Rule>) -> Expr {
        let mut inner = pair.into_inner();
        let id = self.parse_pair_identifier(inner.next().unwrap());
        let args = match inner.next() {
            Some(arg_list) => {
                arg_list.into_inner()
                    .map(|arg| self.parse_pair_expr(arg))
                    .collect()
            }
            None => Vec::new()
        };
        Expr::CALL { id, args }
    }

    /// Parses a pest location pair into a plain identifier or a left
    /// associative dot access chain
    fn parse_pair_location(&self, pair: pest::iterators::Pair<Rule>) -> Expr {
        let mut inner = pair.into_inner();
        let mut expr = self.parse_pair_location_base(inner.next().unwrap());
        for field_pair in inner {
            let field = self.parse_pair_identifier(field_pair);
            expr = Expr::DOT_ACCESS { loc: Box::new(expr), field };
        }
        expr
    }

    fn parse_pair_location_base(&self, pair: pest::iterators::Pair<Rule>) -> Expr {
        let inner = pair.into_inner().next().unwrap();
        match inner.as_rule() {
            Rule::identifier => { Expr::ID(self.parse_pair_identifier(inner)) }
            Rule::location =>   { self.parse_pair_location(inner) }
            _ => { panic!("Whoops! Unprocessed pest rule: {:?}", inner.as_rule()) }
        }
    }
}

/// AstParser Trait Concrete Implementation
impl AstParser for HarambePestParser {
    fn default() -> Self {
        Self {}
    }

    /// Parse processes a source string into an abstract syntax tree
    fn parse(self, source: &str) -> Result<Program, SimpleError> {
        self.parse_into_program(source)
    }
}
