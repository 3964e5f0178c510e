use std::io;
use std::io::Write;

use tracing::{debug, warn};

use crate::core::parser::Parser;

const PROMPT: &str = ">> ";

/// Read-parse-print loop over stdin. Each line is parsed as one source unit;
/// parser errors are listed, otherwise the parsed program is rendered back
/// out. `exit` or end of input terminates the loop.
pub fn start() -> io::Result<()> {
    let reader = io::stdin();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;
        let mut input = String::new();

        let n = reader.read_line(&mut input)?;
        if n == 0 || input.trim() == "exit" {
            println!("Bye!");
            return Ok(());
        }

        let mut parser = Parser::from(&input);
        let program = parser.parse_program();
        let errors = parser.errors();
        if !errors.is_empty() {
            warn!(errors = errors.len(), "input did not parse");
            println!("parser errors:");
            for err in errors {
                println!("\t{}", err);
            }
        } else {
            debug!(statements = program.statements.len(), "parsed program");
            println!("{}", program);
        }
    }
}
