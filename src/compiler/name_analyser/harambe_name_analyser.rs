use std::rc::Rc;

use super::{NameAnalyser, ErrorReporter};
use super::scope_tracker::ScopeTracker;
use super::super::ast::{
    Program,
    Decl,
    FormalDecl,
    FnBody,
    Stmt,
    Expr,
    TypeSpec,
    Identifier,
};
use super::super::ast::datatype::DataType;
use super::super::ast::symbol_table::{Symbol, FieldMap};
use super::super::diagnostics::SemanticError;

/// HarambeNameAnalyser is a concrete NameAnalyser.
///
/// The walk is recursive, depth first and left to right, so diagnostics come
/// out in source order. Every identifier occurrence is resolved through one
/// of the role methods below; the parent node picks the role according to the
/// syntactic context of the occurrence. Scope pushes are paired with pops on
/// every path, diagnostics never unwind scopes.
pub struct HarambeNameAnalyser {
    symbol_tracker: ScopeTracker,
    reporter: ErrorReporter,
}

impl NameAnalyser for HarambeNameAnalyser {
    fn default() -> Self {
        Self {
            symbol_tracker: ScopeTracker::new(),
            reporter: ErrorReporter::new(),
        }
    }

    /// Analyse walks all global declarations inside the global scope the
    /// tracker was constructed with.
    fn analyse(mut self, program: &mut Program) -> ErrorReporter {
        for decl in &mut program.decls {
            self.analyse_decl(decl);
        }
        self.reporter
    }
}

/// Declaration analysis
impl HarambeNameAnalyser {
    fn analyse_decl(&mut self, decl: &mut Decl) {
        match decl {
            Decl::VAR_DECL { type_spec, id } => {
                self.analyse_var_decl(type_spec, id);
            }
            Decl::FN_DECL { return_type, id, formals, body } => {
                self.analyse_fn_decl(return_type, id, formals, body);
            }
            Decl::STRUCT_DECL { id, fields } => {
                self.analyse_struct_decl(id, fields);
            }
        }
    }

    /// Analyse a variable declaration. Returns the declared symbol so struct
    /// bodies can collect their fields in declaration order.
    fn analyse_var_decl(&mut self, type_spec: &mut TypeSpec, id: &mut Identifier) -> Option<Symbol> {
        match type_spec {
            TypeSpec::STRUCT { id: type_id } => {
                let fields = self.analyse_struct_type_use(type_id);
                let datatype = DataType::STRUCT(String::from(type_id.name()));
                self.declare_struct_variable(id, fields, datatype)
            }
            _ => {
                self.declare_primitive(id, type_spec.to_datatype())
            }
        }
    }

    /// Formals declare exactly like local variables: the void check applies
    /// and a struct typed formal resolves its type name and carries the
    /// struct's field map.
    fn analyse_formal_decl(&mut self, formal: &mut FormalDecl) {
        self.analyse_var_decl(&mut formal.type_spec, &mut formal.id);
    }

    /// The function name is declared in the enclosing scope before the body
    /// is descended into, so the function is visible to its own body. The
    /// formals and the body share a single nested scope.
    fn analyse_fn_decl(
        &mut self,
        return_type: &mut TypeSpec,
        id: &mut Identifier,
        formals: &mut Vec<FormalDecl>,
        body: &mut FnBody
    ) {
        let formal_types: Vec<DataType> = formals.iter()
            .map(|formal| formal.type_spec.to_datatype())
            .collect();
        self.declare_function(id, formal_types, return_type.to_datatype());

        self.symbol_tracker.enter_scope();
        for formal in formals.iter_mut() {
            self.analyse_formal_decl(formal);
        }
        for decl in &mut body.decls {
            self.analyse_decl(decl);
        }
        for stmt in &mut body.stmts {
            self.analyse_stmt(stmt);
        }
        self.exit_scope();
    }

    /// The field declarations are walked inside a temporary scope used for
    /// duplicate detection. The resulting field map outlives that scope as
    /// the authoritative record of the struct layout; the struct name itself
    /// is declared in the enclosing scope afterwards.
    fn analyse_struct_decl(&mut self, id: &mut Identifier, fields: &mut Vec<Decl>) {
        self.symbol_tracker.enter_scope();
        let mut field_map = FieldMap::new();
        for field in fields.iter_mut() {
            match field {
                Decl::VAR_DECL { type_spec, id: field_id } => {
                    if let Some(symbol) = self.analyse_var_decl(type_spec, field_id) {
                        field_map.insert(String::from(symbol.identifier()), symbol);
                    }
                }
                _ => panic!("Malformed AST! Struct bodies only hold variable declarations.")
            }
        }
        self.exit_scope();

        self.declare_struct_type(id, Rc::new(field_map));
    }
}

/// Identifier role analysis. The parent node selects the role; identifiers
/// never pick their own.
impl HarambeNameAnalyser {
    /// Declare a variable or formal of the given type. Void declarations are
    /// reported and not inserted, as are duplicates; on a duplicate the
    /// existing binding is kept.
    fn declare_primitive(&mut self, id: &mut Identifier, datatype: DataType) -> Option<Symbol> {
        if datatype == DataType::VOID {
            self.reporter.report(id.line(), id.column(), SemanticError::NON_FUNCTION_DECLARED_VOID);
            return None;
        }
        if self.symbol_tracker.find_symbol_local(id.name()).is_some() {
            self.reporter.report(id.line(), id.column(), SemanticError::MULTIPLY_DECLARED_IDENTIFIER);
            return None;
        }

        let symbol = Symbol::variable(String::from(id.name()), datatype.clone());
        self.declare(id, symbol.clone());
        id.set_resolved(symbol.clone(), datatype);
        Some(symbol)
    }

    /// Declare a variable of a previously defined struct type. When the
    /// struct type did not resolve, nothing is declared here; the type use
    /// already carried the diagnostic.
    fn declare_struct_variable(
        &mut self,
        id: &mut Identifier,
        fields: Option<Rc<FieldMap>>,
        datatype: DataType
    ) -> Option<Symbol> {
        let fields = fields?;
        if self.symbol_tracker.find_symbol_local(id.name()).is_some() {
            self.reporter.report(id.line(), id.column(), SemanticError::MULTIPLY_DECLARED_IDENTIFIER);
            return None;
        }

        let symbol = Symbol::struct_variable(String::from(id.name()), datatype.clone(), fields);
        self.declare(id, symbol.clone());
        id.set_resolved(symbol.clone(), datatype);
        Some(symbol)
    }

    /// Declare a function in the enclosing scope. The formal types are
    /// captured from the formals list in declaration order.
    fn declare_function(&mut self, id: &mut Identifier, formal_types: Vec<DataType>, return_type: DataType) {
        if self.symbol_tracker.find_symbol_local(id.name()).is_some() {
            self.reporter.report(id.line(), id.column(), SemanticError::MULTIPLY_DECLARED_IDENTIFIER);
            return;
        }

        let symbol = Symbol::function(String::from(id.name()), formal_types, return_type.clone());
        self.declare(id, symbol.clone());
        id.set_resolved(symbol, return_type);
    }

    /// Declare a struct type in the enclosing scope.
    fn declare_struct_type(&mut self, id: &mut Identifier, fields: Rc<FieldMap>) {
        if self.symbol_tracker.find_symbol_local(id.name()).is_some() {
            self.reporter.report(id.line(), id.column(), SemanticError::MULTIPLY_DECLARED_IDENTIFIER);
            return;
        }

        let symbol = Symbol::struct_type(String::from(id.name()), fields.clone());
        self.declare(id, symbol.clone());
        let resolved_type = symbol.resolved_type();
        id.set_resolved(symbol, resolved_type);
        id.set_fields(fields);
    }

    /// Plain identifier use.
    fn analyse_use(&mut self, id: &mut Identifier) {
        match self.symbol_tracker.find_symbol(id.name()) {
            Some(symbol) => {
                let symbol = symbol.clone();
                let resolved_type = symbol.resolved_type();
                id.set_resolved(symbol, resolved_type);
            }
            None => {
                self.reporter.report(id.line(), id.column(), SemanticError::UNDECLARED_IDENTIFIER);
            }
        }
    }

    /// The type name in a struct variable declaration. Returns the fields of
    /// the named struct type so the declaration can link them.
    fn analyse_struct_type_use(&mut self, id: &mut Identifier) -> Option<Rc<FieldMap>> {
        match self.symbol_tracker.find_symbol(id.name()) {
            Some(symbol) if symbol.is_struct_type() => {
                let symbol = symbol.clone();
                let fields = symbol.fields();
                let resolved_type = symbol.resolved_type();
                id.set_resolved(symbol, resolved_type);
                fields
            }
            _ => {
                self.reporter.report(id.line(), id.column(), SemanticError::INVALID_STRUCT_TYPE_NAME);
                None
            }
        }
    }

    /// Left hand side of a dot access when it is a plain identifier. The
    /// resolved type must itself name a struct type declared in scope.
    fn analyse_dot_lhs(&mut self, id: &mut Identifier) {
        match self.symbol_tracker.find_symbol(id.name()) {
            None => {
                self.reporter.report(id.line(), id.column(), SemanticError::UNDECLARED_IDENTIFIER);
            }
            Some(symbol) => {
                let symbol = symbol.clone();
                let names_struct_type = match symbol.datatype() {
                    Some(DataType::STRUCT(name)) => {
                        match self.symbol_tracker.find_symbol(name) {
                            Some(type_symbol) => type_symbol.is_struct_type(),
                            None => false
                        }
                    }
                    _ => false
                };
                let resolved_type = symbol.resolved_type();
                id.set_resolved(symbol, resolved_type);

                if !names_struct_type {
                    self.reporter.report(id.line(), id.column(), SemanticError::DOT_ACCESS_OF_NON_STRUCT);
                }
            }
        }
    }

    /// Right hand side of a dot access whose location is a plain identifier.
    /// The container fields are looked up through the location identifier.
    fn analyse_dot_rhs_by_name(&mut self, field: &mut Identifier, lhs_name: &str) {
        let fields = self.symbol_tracker.find_symbol(lhs_name)
            .and_then(|symbol| symbol.fields());
        match fields {
            Some(fields) => self.resolve_field(field, &fields),
            None => {
                self.reporter.report(field.line(), field.column(), SemanticError::INVALID_STRUCT_FIELD_NAME);
            }
        }
    }

    /// Right hand side of a dot access whose location is itself a dot access.
    /// The container fields come from the inner access directly.
    fn analyse_dot_rhs_with_fields(&mut self, field: &mut Identifier, fields: Option<Rc<FieldMap>>) {
        match fields {
            Some(fields) => self.resolve_field(field, &fields),
            None => {
                self.reporter.report(field.line(), field.column(), SemanticError::DOT_ACCESS_OF_NON_STRUCT);
            }
        }
    }

    /// Resolve a field name against a container field map. Struct typed
    /// fields expose their own fields on the identifier for onward chaining.
    fn resolve_field(&mut self, field: &mut Identifier, fields: &FieldMap) {
        match fields.get(field.name()) {
            Some(symbol) => {
                let symbol = symbol.clone();
                let nested_fields = symbol.fields();
                let resolved_type = symbol.resolved_type();
                field.set_resolved(symbol, resolved_type);
                if let Some(nested_fields) = nested_fields {
                    field.set_fields(nested_fields);
                }
            }
            None => {
                self.reporter.report(field.line(), field.column(), SemanticError::INVALID_STRUCT_FIELD_NAME);
            }
        }
    }

    /// Call target. The formal type list rides on the resolved symbol for the
    /// annotated unparse; arity and argument types are a later phase.
    fn analyse_call_target(&mut self, id: &mut Identifier) {
        match self.symbol_tracker.find_symbol(id.name()) {
            Some(symbol) => {
                let symbol = symbol.clone();
                let resolved_type = symbol.resolved_type();
                id.set_resolved(symbol, resolved_type);
            }
            None => {
                self.reporter.report(id.line(), id.column(), SemanticError::UNDECLARED_IDENTIFIER);
            }
        }
    }
}

/// Statement and expression analysis
impl HarambeNameAnalyser {
    fn analyse_stmt(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::ASSIGN { lhs, rhs } => {
                self.analyse_expr(lhs);
                self.analyse_expr(rhs);
            }
            Stmt::POST_INC { loc } | Stmt::POST_DEC { loc } | Stmt::READ { loc } => {
                self.analyse_expr(loc);
            }
            Stmt::WRITE { expr } => {
                self.analyse_expr(expr);
            }
            Stmt::IF { condition, decls, stmts } => {
                self.analyse_expr(condition);
                self.analyse_block(decls, stmts);
            }
            Stmt::IF_ELSE { condition, then_decls, then_stmts, else_decls, else_stmts } => {
                self.analyse_expr(condition);
                self.analyse_block(then_decls, then_stmts);
                self.analyse_block(else_decls, else_stmts);
            }
            Stmt::WHILE { condition, decls, stmts } => {
                self.analyse_expr(condition);
                self.analyse_block(decls, stmts);
            }
            Stmt::CALL { call } => {
                self.analyse_expr(call);
            }
            Stmt::RETURN { expr } => {
                if let Some(expr) = expr {
                    self.analyse_expr(expr);
                }
            }
        }
    }

    /// Each block body gets its own scope.
    fn analyse_block(&mut self, decls: &mut Vec<Decl>, stmts: &mut Vec<Stmt>) {
        self.symbol_tracker.enter_scope();
        for decl in decls {
            self.analyse_decl(decl);
        }
        for stmt in stmts {
            self.analyse_stmt(stmt);
        }
        self.exit_scope();
    }

    fn analyse_expr(&mut self, expr: &mut Expr) {
        match expr {
            Expr::LITERAL { .. } => {}
            Expr::ID(id) => {
                self.analyse_use(id);
            }
            Expr::DOT_ACCESS { loc, field } => {
                self.analyse_dot_access(loc, field);
            }
            Expr::ASSIGN { lhs, rhs } => {
                self.analyse_expr(lhs);
                self.analyse_expr(rhs);
            }
            Expr::CALL { id, args } => {
                self.analyse_call_target(id);
                for arg in args {
                    self.analyse_expr(arg);
                }
            }
            Expr::UNARY_OP { operand, .. } => {
                self.analyse_expr(operand);
            }
            Expr::BINARY_OP { lhs, rhs, .. } => {
                self.analyse_expr(lhs);
                self.analyse_expr(rhs);
            }
        }
    }

    /// A dot access resolves its location first. A plain identifier location
    /// goes through the left-of-dot role and the field is looked up through
    /// the location name; a nested dot access is resolved recursively and the
    /// field is looked up in the fields exposed by the inner access.
    fn analyse_dot_access(&mut self, loc: &mut Expr, field: &mut Identifier) {
        if loc.is_dot_access() {
            self.analyse_expr(loc);
            let inner_fields = match loc {
                Expr::DOT_ACCESS { field: inner_field, .. } => inner_field.fields(),
                _ => panic!("Malformed AST! Location was checked to be a dot access.")
            };
            self.analyse_dot_rhs_with_fields(field, inner_fields);
        } else if let Expr::ID(lhs_id) = loc {
            self.analyse_dot_lhs(lhs_id);
            let lhs_name = String::from(lhs_id.name());
            self.analyse_dot_rhs_by_name(field, &lhs_name);
        }
        // Other locations cannot come out of the grammar and resolve to nothing.
    }

    /// Scope exits are paired with every enter; a failure here is an analyser
    /// bug and is logged without stopping the walk.
    fn exit_scope(&mut self) {
        if let Err(error) = self.symbol_tracker.exit_scope() {
            eprintln!("internal error leaving scope: {}", error);
        }
    }

    /// Insert a declaration whose duplicate check already passed. A tracker
    /// refusal here is an analyser bug and is logged without stopping the walk.
    fn declare(&mut self, id: &Identifier, symbol: Symbol) {
        if let Err(error) = self.symbol_tracker.add_symbol(id.name(), symbol) {
            eprintln!("internal error declaring '{}': {}", id.name(), error);
        }
    }
}
