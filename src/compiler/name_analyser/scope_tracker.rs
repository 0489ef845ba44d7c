use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use crate::compiler::ast::symbol_table::Symbol;

/// Contract violations of the scope tracker. These indicate a bug in the
/// caller, not in the analysed program; the analyser logs them and keeps
/// walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum ScopeError {
    EmptyScopeStack,
    DuplicateInScope,
    NullName,
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeError::EmptyScopeStack => write!(f, "no scopes active"),
            ScopeError::DuplicateInScope => write!(f, "identifier already declared in the innermost scope"),
            ScopeError::NullName => write!(f, "empty identifier name"),
        }
    }
}

impl Error for ScopeError {}


/// A lightweight scope tracker made for name analysis. The last scope of the
/// stack is the innermost one. Constructed with the global scope already in
/// place, so exactly one scope remains after a whole program has been walked.
pub(crate) struct ScopeTracker {
    scopes: Vec<HashMap<String, Symbol>>,
}

impl ScopeTracker {
    pub fn new() -> Self {
        ScopeTracker { scopes: vec![HashMap::new()] }
    }

    /// Open a fresh innermost scope.
    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Close the innermost scope.
    pub fn exit_scope(&mut self) -> Result<(), ScopeError> {
        match self.scopes.pop() {
            Some(_) => Ok(()),
            None => Err(ScopeError::EmptyScopeStack)
        }
    }

    /// Declare a symbol in the innermost scope. Never touches outer scopes.
    pub fn add_symbol(&mut self, identifier: &str, symbol: Symbol) -> Result<(), ScopeError> {
        if identifier.is_empty() {
            return Err(ScopeError::NullName);
        }
        let current_scope = self.scopes.last_mut().ok_or(ScopeError::EmptyScopeStack)?;
        if current_scope.contains_key(identifier) {
            return Err(ScopeError::DuplicateInScope);
        }
        current_scope.insert(identifier.to_string(), symbol);
        Ok(())
    }

    /// Find a symbol in the innermost scope only.
    pub fn find_symbol_local(&self, identifier: &str) -> Option<&Symbol> {
        self.scopes.last()?.get(identifier)
    }

    /// Find a symbol searching innermost to outermost, so inner declarations
    /// shadow outer ones. Returns None on an empty stack.
    pub fn find_symbol(&self, identifier: &str) -> Option<&Symbol> {
        for scope in self.scopes.iter().rev() {
            if let Some(symbol) = scope.get(identifier) {
                return Some(symbol)
            }
        }
        None
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
