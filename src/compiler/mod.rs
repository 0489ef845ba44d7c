mod ast;
pub mod diagnostics;
pub mod parser;
pub mod name_analyser;
pub mod unparser;

use std::path::Path;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::error::Error;

// Interface Definitions
use self::parser::AstParser;
use self::name_analyser::NameAnalyser;
use self::unparser::Unparser;
use self::diagnostics::ErrorReporter;

// Concrete Definitions Re-Export
pub use self::parser::HarambePestParser;
pub use self::name_analyser::HarambeNameAnalyser;
pub use self::unparser::AnnotatedUnparser;
pub use self::diagnostics::{Diagnostic, SemanticError};


/// Result of running the front end over one source text. The unparse text is
/// produced whether or not name analysis reported errors; the reporter tells
/// the two cases apart.
pub struct FrontEndOutput {
    pub unparse_text: String,
    pub reporter: ErrorReporter,
}

impl FrontEndOutput {
    pub fn succeeded(&self) -> bool {
        !self.reporter.any_error()
    }
}


/// Compiler is a simple class that holds the configuration of a compilation.
/// Compiler takes three typed parameters defining:
///  the AstParser being used,
///  the NameAnalyser being used,
///  and the Unparser being used.
///
/// # Compilation Diagram
/// harambe_code -> AstParser -> Program -> NameAnalyser -> annotated Program -> Unparser -> unparse text
pub struct Compiler<P: AstParser, A: NameAnalyser, U: Unparser> {
    parser: P,
    analyser: A,
    unparser: U,
}

#[allow(dead_code)] // Many of the functions on compiler act as a library interface and are not used
impl<P: AstParser, A: NameAnalyser, U: Unparser> Compiler<P, A, U> {

    /// Default generates a default compiler configuration. Default configuration is determined by
    /// the default methods of the parser, analyser and unparser.
    pub fn default() -> Self {
        Compiler {
            parser: P::default(),
            analyser: A::default(),
            unparser: U::default(),
        }
    }

    /// Create new compiler using a preconfigured parser, analyser and unparser.
    pub fn new(parser: P, analyser: A, unparser: U) -> Self {
        Compiler {
            parser,
            analyser,
            unparser,
        }
    }

    /// Runs the front end over a source string.
    /// @return: FrontEndOutput if the source parsed, otherwise the parse error.
    pub fn compile_str(self, source: &str) -> Result<FrontEndOutput, simple_error::SimpleError> {
        let mut program = self.parser.parse(source)?;
        let reporter = self.analyser.analyse(&mut program);
        let unparse_text = self.unparser.unparse(&program);

        Ok(FrontEndOutput { unparse_text, reporter })
    }

    /// Runs the front end over a source file.
    /// @return: FrontEndOutput if Ok. Otherwise IO Error from a failed read or the parse error.
    pub fn compile(self, source_filename: &Path) -> Result<FrontEndOutput, Box<dyn Error>> {
        let source_str = fs::read_to_string(source_filename)?;

        Ok(self.compile_str(source_str.as_str())?)
    }

    /// Runs the front end over a source file and writes the annotated unparse
    /// into the destination file path. The unparse is written whether or not
    /// name analysis reported errors.
    /// @return: FrontEndOutput if Ok. Otherwise IO Error from a failed read/write or the parse error.
    pub fn compile_and_save(self, source_filename: &Path, dest_filename: &Path) -> Result<FrontEndOutput, Box<dyn Error>> {
        let output = self.compile(source_filename)?;

        let mut file = File::create(dest_filename)?;
        file.write_all(output.unparse_text.as_bytes())?;

        Ok(output)
    }
}


#[cfg(test)]
mod tests {
    use super::{Compiler, HarambePestParser, HarambeNameAnalyser, AnnotatedUnparser};

    type FrontEnd = Compiler<HarambePestParser, HarambeNameAnalyser, AnnotatedUnparser>;

    #[test]
    fn parse_failure_is_an_error() {
        assert!(FrontEnd::default().compile_str("int x").is_err());
    }

    #[test]
    fn unparse_is_produced_with_and_without_diagnostics() {
        let clean = FrontEnd::default().compile_str("int main() { int x; x = 3; }").unwrap();
        assert!(clean.succeeded());
        assert!(!clean.unparse_text.is_empty());

        let broken = FrontEnd::default().compile_str("int main() { y = 1; }").unwrap();
        assert!(!broken.succeeded());
        assert_eq!(broken.reporter.diagnostics().len(), 1);
        assert!(!broken.unparse_text.is_empty());
    }
}
