// External Modules
extern crate pest;
#[macro_use]
extern crate pest_derive;
extern crate safer_ffi;

use safer_ffi::prelude::*;

use compiler::Compiler;

// Internal Modules
mod compiler;

// Front end types to use
type PARSER = compiler::HarambePestParser;
type ANALYSER = compiler::HarambeNameAnalyser;
type UNPARSER = compiler::AnnotatedUnparser;


/// Analysis response describes a front end run over one source text.
/// It contains the annotated unparse and the diagnostic count.
#[derive_ReprC]
#[repr(C)]
pub struct AnalysisResponse {
    /// Code text is a null-terminated string with the annotated unparse of
    /// the program. On a parse failure it carries the parse error text.
    code_text: char_p::Box,      // C Repr: char *

    /// Number of name analysis diagnostics reported. Zero means name
    /// analysis succeeded.
    error_count: usize,

    /// Non zero when the source failed to parse; code_text then holds the
    /// parse error instead of an unparse.
    parse_failed: usize,
}

/// Analysis request describes the content needed to attempt a front end run.
/// It contains the harambe source text string.
#[derive_ReprC]
#[repr(C)]
pub struct AnalysisRequest {
    /// Code text is a null-terminated string with the textual representation
    /// of harambe source code.
    code_text: char_p::Box       // C repr: char *
}

/// Analyze attempts to parse and name-analyze an AnalysisRequest.
/// The memory for the analysis response is allocated on call, it is then the
/// responsibility of the caller to free this memory via free_analysis_response.
#[ffi_export]
pub fn analyze(request: &AnalysisRequest) -> AnalysisResponse {
    let compiler: Compiler<PARSER, ANALYSER, UNPARSER> = Compiler::default();
    match compiler.compile_str(request.code_text.to_str()) {
        Ok(output) => AnalysisResponse {
            code_text: output.unparse_text.try_into().unwrap(),
            error_count: output.reporter.diagnostics().len(),
            parse_failed: 0,
        },
        Err(error) => AnalysisResponse {
            code_text: format!("Exception occured during parse: {}", error).try_into().unwrap(),
            error_count: 0,
            parse_failed: 1,
        }
    }
}


/// Frees an analysis response returned via the API
/// Calling the function is a requirement after using a response.
#[ffi_export]
pub fn free_analysis_response(response: AnalysisResponse) {
    drop(response.code_text);
}


// Header generator
// To generate call:
// $ cargo test --features c-headers -- generate_headers
#[safer_ffi::cfg_headers]
#[test]
fn generate_headers() -> std::io::Result<()> {
    safer_ffi::headers::builder()
        .to_file("include/harambe_compiler.h")?
        .generate()
}
