// External Modules
extern crate pest;
extern crate exitcode;
#[macro_use]
extern crate pest_derive;

// Internal Modules
mod compiler;
use compiler::Compiler;

// Standard Imports
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

// Basic front end configuration
type PARSER = compiler::HarambePestParser;
type ANALYSER = compiler::HarambeNameAnalyser;
type UNPARSER = compiler::AnnotatedUnparser;


/// Command Line interface struct
/// Describes possible arguments using the clap library
#[derive(Parser)]
struct CompilerCLIOptions {
    /// Path of the harambe source file to analyse
    #[clap(parse(from_os_str))]
    input: PathBuf,

    /// Path of the annotated unparse output file
    #[clap(parse(from_os_str))]
    output: PathBuf,
}

fn main() {
    // Parse Command line arguments
    let cli_args = match CompilerCLIOptions::try_parse() {
        Ok(cli_args) => cli_args,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(exitcode::USAGE);
        }
    };

    let source = match fs::read_to_string(&cli_args.input) {
        Ok(source) => source,
        Err(_) => {
            eprintln!("File {} not found.", cli_args.input.display());
            std::process::exit(exitcode::NOINPUT);
        }
    };

    // Open the destination before running the front end
    let mut output_file = match File::create(&cli_args.output) {
        Ok(output_file) => output_file,
        Err(_) => {
            eprintln!("File {} could not be opened for writing.", cli_args.output.display());
            std::process::exit(exitcode::CANTCREAT);
        }
    };

    let front_end: Compiler<PARSER, ANALYSER, UNPARSER> = Compiler::default();
    let output = match front_end.compile_str(source.as_str()) {
        Ok(output) => output,
        Err(error) => {
            eprintln!("Exception occured during parse: {}", error);
            std::process::exit(exitcode::DATAERR);
        }
    };

    // The annotated unparse is written whether or not name analysis
    // reported errors. The per-error lines already went to stderr during
    // the walk, only the summary is left to print.
    if let Err(_) = output_file.write_all(output.unparse_text.as_bytes()) {
        eprintln!("File {} could not be opened for writing.", cli_args.output.display());
        std::process::exit(exitcode::IOERR);
    }

    if output.reporter.any_error() {
        eprintln!("Errors occured during name analyze");
    } else {
        eprintln!("name analyze succeeded");
    }
    std::process::exit(exitcode::OK);
}
