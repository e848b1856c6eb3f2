//! Demonstrate batch error reporting for malformed Lox input.

use lox_scanner::{Console, ErrorLog, scan, tokenize};

fn main() {
    let source = "var x = 1 @ 2;\n/* left open\nprint x;";

    // All-or-nothing: any lexical error rejects the input.
    match tokenize(source) {
        Ok(tokens) => println!("Scanned {} tokens (unexpected)", tokens.len()),
        Err(e) => {
            println!("Lex errors: {e}");
            for error in e.errors() {
                println!("  Kind: {:?}", error.kind);
                println!("  Location: line {}", error.line);
            }
        }
    }

    println!();

    // Keep the tokens and inspect the sink separately.
    let mut log = ErrorLog::new();
    let tokens = scan(source, &mut log);
    println!("Scanned {} tokens, {} error(s)", tokens.len(), log.diagnostics().len());
    for diagnostic in log.diagnostics() {
        println!("  {diagnostic}");
    }

    println!();

    // Print errors as they happen.
    let mut console = Console::new(std::io::stdout());
    let _ = scan(source, &mut console);
    println!("had error: {}", console.had_error());
}
