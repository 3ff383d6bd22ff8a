// Redfin: an interpreter for the ><> esoteric programming language

use std::fs;
use std::io;
use std::path::Path;

use crossterm::tty::IsTty;

use redfin::console::{ByteSource, RawTtySource, StdinSource, StdoutSink};
use redfin::interpreter::engine::Interpreter;
use redfin::parser::grid::Grid;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("redfin");
        eprintln!("Error: No program file provided");
        eprintln!();
        eprintln!("Usage: {} <program.fsh>", program_name);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} demos/hello.fsh", program_name);
        std::process::exit(1);
    }

    let program_file = &args[1];

    if !Path::new(program_file).exists() {
        eprintln!("Error: File '{}' not found", program_file);
        std::process::exit(1);
    }

    let source = match fs::read_to_string(program_file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Could not read '{}': {}", program_file, e);
            std::process::exit(1);
        }
    };

    let grid = Grid::parse(&source);

    // Interactive terminals get unbuffered per-keypress input for `i`;
    // piped input is read byte by byte.
    let input: Box<dyn ByteSource> = if io::stdin().is_tty() {
        Box::new(RawTtySource::new())
    } else {
        Box::new(StdinSource::new())
    };

    let mut interpreter = Interpreter::new(grid, input, StdoutSink::new());

    if let Err(e) = interpreter.run() {
        eprintln!("something smells fishy...");
        eprintln!("  {}", e);
        std::process::exit(1);
    }
}
