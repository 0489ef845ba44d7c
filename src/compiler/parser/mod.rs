use simple_error::SimpleError;

use super::ast::Program;

pub mod harambe_pest_parser;
mod test;

/// Parser handles interpretation of source text into the intermediate
/// representation. Put another way the parser turns a source string into an
/// abstract syntax tree.
pub trait AstParser {
    /// Creates a default configuration of an AstParser
    fn default() -> Self;

    /// Parse a source string into an Abstract Syntax Tree.
    /// A syntax error surfaces as a simple error carrying the rendered
    /// pest diagnostic.
    fn parse(self, source: &str) -> Result<Program, SimpleError>;
}

// Concrete Definition Export
pub use self::harambe_pest_parser::HarambePestParser;
