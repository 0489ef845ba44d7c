use strum_macros::Display;

/// Semantic error conditions detected during name analysis. The display
/// strings are the exact diagnostic messages the driver is expected to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[allow(non_camel_case_types)]
pub enum SemanticError {
    #[strum(serialize = "Undeclared identifier")]
    UNDECLARED_IDENTIFIER,

    #[strum(serialize = "Multiply declared identifier")]
    MULTIPLY_DECLARED_IDENTIFIER,

    #[strum(serialize = "Non-function declared void")]
    NON_FUNCTION_DECLARED_VOID,

    #[strum(serialize = "Invalid name of struct type")]
    INVALID_STRUCT_TYPE_NAME,

    #[strum(serialize = "Invalid struct field name")]
    INVALID_STRUCT_FIELD_NAME,

    #[strum(serialize = "Dot-access of non-struct type")]
    DOT_ACCESS_OF_NON_STRUCT,
}

/// A single reported diagnostic. Line and column are the 1-based source
/// position of the offending identifier occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub message: SemanticError,
}

/// Collector for name analysis diagnostics. Reported diagnostics are written
/// to stderr as they occur, so their order follows the tree walk, and are
/// kept for the driver summary and for tests.
///
/// The reporter is threaded through the analysis walk rather than living in
/// process wide state; one reporter exists per driver invocation.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    diagnostics: Vec<Diagnostic>,
    any_error: bool,
}

impl ErrorReporter {
    pub fn new() -> Self {
        ErrorReporter {
            diagnostics: Vec::new(),
            any_error: false,
        }
    }

    /// Report a semantic error at a source position.
    pub fn report(&mut self, line: usize, column: usize, message: SemanticError) {
        eprintln!("{}:{} ***ERROR*** {}", line, column, message);
        self.any_error = true;
        self.diagnostics.push(Diagnostic { line, column, message });
    }

    /// True once any diagnostic has been reported.
    pub fn any_error(&self) -> bool {
        self.any_error
    }

    /// Reported diagnostics in tree walk order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
