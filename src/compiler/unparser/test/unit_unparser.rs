use crate::compiler::parser::{AstParser, HarambePestParser};
use crate::compiler::name_analyser::{NameAnalyser, HarambeNameAnalyser};
use crate::compiler::unparser::{Unparser, AnnotatedUnparser};

/// Parse and unparse without analysis; identifiers render bare.
fn unparse_plain(source: &str) -> String {
    let program = HarambePestParser::default().parse(source).unwrap();
    AnnotatedUnparser::default().unparse(&program)
}

/// Parse, analyse and unparse; resolved identifiers carry annotations.
fn unparse_analysed(source: &str) -> String {
    let mut program = HarambePestParser::default().parse(source).unwrap();
    HarambeNameAnalyser::default().analyse(&mut program);
    AnnotatedUnparser::default().unparse(&program)
}

#[test]
fn uses_are_annotated_with_their_resolved_type() {
    let text = unparse_analysed("int main() { int x; x = 3; }");
    assert_eq!(text, "int main() {\n    int x;\n    x(int) = 3;\n}\n\n");
}

#[test]
fn struct_declarations_and_dot_access() {
    let text = unparse_analysed("struct P { int a; }; int main() { struct P p; p.a = 1; }");
    assert_eq!(
        text,
        "struct P {\n\
         \x20   int a;\n\
         };\n\
         int main() {\n\
         \x20   struct P p;\n\
         \x20   (p(P)).a(int) = 1;\n\
         }\n\n"
    );
}

#[test]
fn call_targets_are_annotated_with_their_signature() {
    let text = unparse_analysed("void report(int value) { } int main() { report(7); }");
    assert_eq!(
        text,
        "void report(int value) {\n\
         }\n\
         \n\
         int main() {\n\
         \x20   report(int->void)(7);\n\
         }\n\n"
    );
}

#[test]
fn call_target_with_no_formals_keeps_the_arrow() {
    let text = unparse_analysed("int get() { return 4; } int main() { int x; x = get(); }");
    assert!(text.contains("x(int) = get(->int)();"));
}

#[test]
fn plain_use_of_a_function_annotates_its_return_type() {
    // Only call targets carry the signature form
    let text = unparse_analysed("int get() { return 4; } void main() { int x; x = get; }");
    assert!(text.contains("x(int) = get(int);"));
}

#[test]
fn call_target_without_a_formal_list_prints_arrow_and_type() {
    // Calling a variable resolves but carries no formal types
    let text = unparse_analysed("void main() { int x; x(); }");
    assert!(text.contains("x(->int)();"));
}

#[test]
fn control_flow_formatting() {
    let text = unparse_analysed(
        "void main() { \
             int x; \
             x = 0; \
             if (x < 10) { x++; } else { x--; } \
             while (true) { cin >> x; cout << \"hi\"; } \
             return; \
         }"
    );
    assert_eq!(
        text,
        "void main() {\n\
         \x20   int x;\n\
         \x20   x(int) = 0;\n\
         \x20   if ((x(int) < 10)) {\n\
         \x20       x(int)++;\n\
         \x20   } else {\n\
         \x20       x(int)--;\n\
         \x20   }\n\
         \x20   while (true) {\n\
         \x20       cin >> x(int);\n\
         \x20       cout << \"hi\";\n\
         \x20   }\n\
         \x20   return;\n\
         }\n\n"
    );
}

#[test]
fn nested_assignment_keeps_inner_parentheses_only() {
    let text = unparse_analysed("void main() { int x; int y; x = (y = 3); }");
    assert!(text.contains("\n    x(int) = (y(int) = 3);\n"));
}

#[test]
fn expression_grouping_follows_precedence() {
    let text = unparse_analysed("void main() { int x; x = 1 + 2 * 3; }");
    assert!(text.contains("x(int) = (1 + (2 * 3));"));
}

#[test]
fn unary_operators_are_parenthesised() {
    let text = unparse_analysed("void main() { bool b; b = !true; }");
    assert!(text.contains("b(bool) = (!true);"));
}

#[test]
fn unresolved_identifiers_render_bare() {
    let text = unparse_plain("int main() { y = 1; }");
    assert_eq!(text, "int main() {\n    y = 1;\n}\n\n");
}

#[test]
fn unparse_is_still_produced_after_analysis_errors() {
    let text = unparse_analysed("int main() { y = 1; }");
    assert_eq!(text, "int main() {\n    y = 1;\n}\n\n");
}

#[test]
fn plain_unparse_reaches_a_fixed_point() {
    let source = "\
struct P { int a; bool b; };
int add(int x, int y) { return (x + y); }
void main() {
    struct P p;
    int x;
    x = add(1, 2);
    p.a = x;
    if (p.b) { cout << \"yes\"; } else { x--; }
    while (x > 0) { cin >> x; x = (x = x - 1); }
    main();
    return;
}
";
    let first = unparse_plain(source);
    let second = unparse_plain(first.as_str());
    assert_eq!(first, second);
}
