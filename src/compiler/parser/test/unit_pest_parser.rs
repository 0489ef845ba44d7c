use crate::compiler::parser::{AstParser, HarambePestParser};
use crate::compiler::ast::{
    Program,
    Decl,
    Stmt,
    Expr,
    TypeSpec,
    Literal,
    UnaryOperation,
    BinaryOperation,
};

fn parse(source: &str) -> Program {
    HarambePestParser::default().parse(source).unwrap()
}

#[test]
fn parse_var_decls() {
    let program = parse("int x; bool flag; struct P p;");
    assert_eq!(program.decls.len(), 3);

    match &program.decls[0] {
        Decl::VAR_DECL { type_spec: TypeSpec::INT, id } => assert_eq!(id.name(), "x"),
        decl => panic!("Expected int var decl, got {:?}", decl)
    }
    match &program.decls[1] {
        Decl::VAR_DECL { type_spec: TypeSpec::BOOL, id } => assert_eq!(id.name(), "flag"),
        decl => panic!("Expected bool var decl, got {:?}", decl)
    }
    match &program.decls[2] {
        Decl::VAR_DECL { type_spec: TypeSpec::STRUCT { id: type_id }, id } => {
            assert_eq!(type_id.name(), "P");
            assert_eq!(id.name(), "p");
        }
        decl => panic!("Expected struct var decl, got {:?}", decl)
    }
}

#[test]
fn parse_struct_decl() {
    let program = parse("struct Point { int x; int y; };");
    match &program.decls[0] {
        Decl::STRUCT_DECL { id, fields } => {
            assert_eq!(id.name(), "Point");
            assert_eq!(fields.len(), 2);
        }
        decl => panic!("Expected struct decl, got {:?}", decl)
    }
}

#[test]
fn parse_fn_decl_with_formals() {
    let program = parse("int add(int a, bool b) { return (a + 1); }");
    match &program.decls[0] {
        Decl::FN_DECL { return_type: TypeSpec::INT, id, formals, body } => {
            assert_eq!(id.name(), "add");
            assert_eq!(formals.len(), 2);
            assert_eq!(formals[0].id.name(), "a");
            assert_eq!(formals[1].id.name(), "b");
            assert!(matches!(formals[1].type_spec, TypeSpec::BOOL));
            assert_eq!(body.stmts.len(), 1);
        }
        decl => panic!("Expected fn decl, got {:?}", decl)
    }
}

#[test]
fn parse_fn_body_decls_precede_stmts() {
    let program = parse("void main() { int x; bool y; x = 1; y = true; }");
    match &program.decls[0] {
        Decl::FN_DECL { body, .. } => {
            assert_eq!(body.decls.len(), 2);
            assert_eq!(body.stmts.len(), 2);
        }
        decl => panic!("Expected fn decl, got {:?}", decl)
    }
}

#[test]
fn parse_statement_forms() {
    let program = parse(
        "void main() { \
             int x; \
             x = 1; \
             x++; \
             x--; \
             cin >> x; \
             cout << x; \
             if (true) { x = 2; } \
             if (false) { x = 3; } else { x = 4; } \
             while (x < 10) { x++; } \
             main(); \
             return; \
         }"
    );
    match &program.decls[0] {
        Decl::FN_DECL { body, .. } => {
            assert!(matches!(body.stmts[0], Stmt::ASSIGN { .. }));
            assert!(matches!(body.stmts[1], Stmt::POST_INC { .. }));
            assert!(matches!(body.stmts[2], Stmt::POST_DEC { .. }));
            assert!(matches!(body.stmts[3], Stmt::READ { .. }));
            assert!(matches!(body.stmts[4], Stmt::WRITE { .. }));
            assert!(matches!(body.stmts[5], Stmt::IF { .. }));
            assert!(matches!(body.stmts[6], Stmt::IF_ELSE { .. }));
            assert!(matches!(body.stmts[7], Stmt::WHILE { .. }));
            assert!(matches!(body.stmts[8], Stmt::CALL { .. }));
            assert!(matches!(body.stmts[9], Stmt::RETURN { expr: None }));
        }
        decl => panic!("Expected fn decl, got {:?}", decl)
    }
}

#[test]
fn parse_operator_precedence() {
    let program = parse("void main() { int x; x = 1 + 2 * 3; }");
    match &program.decls[0] {
        Decl::FN_DECL { body, .. } => match &body.stmts[0] {
            Stmt::ASSIGN { rhs: Expr::BINARY_OP { op, rhs, .. }, .. } => {
                assert_eq!(*op, BinaryOperation::ADD);
                assert!(matches!(
                    rhs.as_ref(),
                    Expr::BINARY_OP { op: BinaryOperation::MUL, .. }
                ));
            }
            stmt => panic!("Expected assign of binary op, got {:?}", stmt)
        }
        decl => panic!("Expected fn decl, got {:?}", decl)
    }
}

#[test]
fn parse_equal_precedence_is_left_associative() {
    let program = parse("void main() { int x; x = 1 - 2 - 3; }");
    match &program.decls[0] {
        Decl::FN_DECL { body, .. } => match &body.stmts[0] {
            Stmt::ASSIGN { rhs: Expr::BINARY_OP { op, lhs, .. }, .. } => {
                assert_eq!(*op, BinaryOperation::SUB);
                // (1 - 2) is the left operand of the outer subtraction
                assert!(matches!(
                    lhs.as_ref(),
                    Expr::BINARY_OP { op: BinaryOperation::SUB, .. }
                ));
            }
            stmt => panic!("Expected assign of binary op, got {:?}", stmt)
        }
        decl => panic!("Expected fn decl, got {:?}", decl)
    }
}

#[test]
fn parse_unary_operators_nest() {
    let program = parse("void main() { bool b; b = !-1; }");
    match &program.decls[0] {
        Decl::FN_DECL { body, .. } => match &body.stmts[0] {
            Stmt::ASSIGN { rhs: Expr::UNARY_OP { op, operand }, .. } => {
                assert_eq!(*op, UnaryOperation::NOT);
                assert!(matches!(
                    operand.as_ref(),
                    Expr::UNARY_OP { op: UnaryOperation::NEGATE, .. }
                ));
            }
            stmt => panic!("Expected assign of unary op, got {:?}", stmt)
        }
        decl => panic!("Expected fn decl, got {:?}", decl)
    }
}

#[test]
fn parse_dot_access_chain_is_left_associative() {
    let program = parse("void main() { p.q.r = 1; }");
    match &program.decls[0] {
        Decl::FN_DECL { body, .. } => match &body.stmts[0] {
            Stmt::ASSIGN { lhs: Expr::DOT_ACCESS { loc, field }, .. } => {
                assert_eq!(field.name(), "r");
                match loc.as_ref() {
                    Expr::DOT_ACCESS { loc: inner_loc, field: inner_field } => {
                        assert_eq!(inner_field.name(), "q");
                        assert_eq!(inner_loc.identifier().unwrap().name(), "p");
                    }
                    expr => panic!("Expected nested dot access, got {:?}", expr)
                }
            }
            stmt => panic!("Expected dot access assign, got {:?}", stmt)
        }
        decl => panic!("Expected fn decl, got {:?}", decl)
    }
}

#[test]
fn parse_parenthesised_location_matches_plain_location() {
    let plain = parse("void main() { p.a = 1; }");
    let wrapped = parse("void main() { (p).a = 1; }");

    for program in [&plain, &wrapped] {
        match &program.decls[0] {
            Decl::FN_DECL { body, .. } => match &body.stmts[0] {
                Stmt::ASSIGN { lhs: Expr::DOT_ACCESS { loc, field }, .. } => {
                    assert_eq!(loc.identifier().unwrap().name(), "p");
                    assert_eq!(field.name(), "a");
                }
                stmt => panic!("Expected dot access assign, got {:?}", stmt)
            }
            decl => panic!("Expected fn decl, got {:?}", decl)
        }
    }
}

#[test]
fn parse_nested_assignment_expression() {
    let program = parse("void main() { int x; int y; x = (y = 3); }");
    match &program.decls[0] {
        Decl::FN_DECL { body, .. } => match &body.stmts[0] {
            Stmt::ASSIGN { rhs: Expr::ASSIGN { lhs, rhs }, .. } => {
                assert_eq!(lhs.identifier().unwrap().name(), "y");
                assert!(matches!(
                    rhs.as_ref(),
                    Expr::LITERAL { literal: Literal::INTEGER(3), .. }
                ));
            }
            stmt => panic!("Expected nested assignment, got {:?}", stmt)
        }
        decl => panic!("Expected fn decl, got {:?}", decl)
    }
}

#[test]
fn parse_call_with_arguments() {
    let program = parse("void main() { f(1, x, g()); }");
    match &program.decls[0] {
        Decl::FN_DECL { body, .. } => match &body.stmts[0] {
            Stmt::CALL { call: Expr::CALL { id, args } } => {
                assert_eq!(id.name(), "f");
                assert_eq!(args.len(), 3);
                assert!(matches!(args[2], Expr::CALL { .. }));
            }
            stmt => panic!("Expected call statement, got {:?}", stmt)
        }
        decl => panic!("Expected fn decl, got {:?}", decl)
    }
}

#[test]
fn parse_string_literal_keeps_quotes() {
    let program = parse("void main() { cout << \"hello\\n\"; }");
    match &program.decls[0] {
        Decl::FN_DECL { body, .. } => match &body.stmts[0] {
            Stmt::WRITE { expr: Expr::LITERAL { literal: Literal::STRING(text), .. } } => {
                assert_eq!(text, "\"hello\\n\"");
            }
            stmt => panic!("Expected write of string literal, got {:?}", stmt)
        }
        decl => panic!("Expected fn decl, got {:?}", decl)
    }
}

#[test]
fn parse_positions_are_one_based() {
    let program = parse("int x;\nbool long_name;");
    match &program.decls[0] {
        Decl::VAR_DECL { id, .. } => {
            assert_eq!((id.line(), id.column()), (1, 5));
        }
        decl => panic!("Expected var decl, got {:?}", decl)
    }
    match &program.decls[1] {
        Decl::VAR_DECL { id, .. } => {
            assert_eq!((id.line(), id.column()), (2, 6));
        }
        decl => panic!("Expected var decl, got {:?}", decl)
    }
}

#[test]
fn parse_comments_are_skipped() {
    let program = parse("// leading comment\nint x; # trailing comment\nbool y;");
    assert_eq!(program.decls.len(), 2);
}

#[test]
fn parse_keywords_are_not_identifiers() {
    HarambePestParser::default().parse("int while;").expect_err("Testing parser error");
    HarambePestParser::default().parse("int int;").expect_err("Testing parser error");
}

#[test]
fn parse_reports_syntax_errors() {
    HarambePestParser::default().parse("int x").expect_err("Testing parser error");
    HarambePestParser::default().parse("void main() { x = ; }").expect_err("Testing parser error");
    HarambePestParser::default().parse("void main() { (1 + 2).a = 3; }").expect_err("Testing parser error");
}
