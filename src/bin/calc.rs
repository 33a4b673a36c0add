use rustycalc::evaluate;
use rustycalc::printer;
use rustycalc::types::CalcError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::error::Error;

fn is_exit(input: &str) -> bool {
    input.eq_ignore_ascii_case("exit")
}

// read -> eval -> print
fn rep(input: &str) -> Result<String, CalcError> {
    Ok(format!("Result: {}", printer::pr_str(evaluate(input)?)))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("Simple Text Calculator");
    println!("Supported operations: +, -, *, /");
    println!("Input expression in the format: <operand1> <operator> <operand2>");
    println!("Type 'exit' to quit.");

    let mut editor = DefaultEditor::new()?;
    loop {
        // プロンプトの前に一行空ける
        println!();
        match editor.readline("Enter an expression: ") {
            Ok(line) => {
                let input = line.trim();
                if is_exit(input) {
                    println!("Exiting calculator. Goodbye!");
                    break Ok(());
                }

                editor.add_history_entry(input)?;
                println!("{}", rep(input).unwrap_or_else(|e| format!("Error: {}", e)));
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break Ok(()),
            Err(err) => {
                println!("Error: {:?}", err);
                break Err(err.into());
            }
        }
    }
}
