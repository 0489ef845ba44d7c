pub(super) mod scope_tracker;
mod harambe_name_analyser;

use super::ast::Program;
use super::diagnostics::ErrorReporter;

/// NameAnalyser resolves every identifier occurrence of an AST, detecting
/// re-declarations and undeclared uses. It attaches the resolved symbol and
/// type to each identifier node in place and never changes the tree shape.
pub trait NameAnalyser {
    /// Creates a default configuration of a NameAnalyser
    fn default() -> Self;

    /// Analyse a program, filling the resolution slots of its identifiers.
    /// Returns the reporter holding every diagnostic found along the walk.
    fn analyse(self, program: &mut Program) -> ErrorReporter;
}

// Concrete Definition Export
pub use self::harambe_name_analyser::HarambeNameAnalyser;
