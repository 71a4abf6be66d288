mod command;
mod error;
mod tree;

use calc_engine::numerical::Ctxt;
use command::{Command, Output};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}, ops::ControlFlow, process};
use tracing::Level;

/// Runs a single line of input, printing its output or error. Breaks if the line asked to exit.
fn run_line(input: &str, ctxt: &mut Ctxt) -> ControlFlow<()> {
    match command::run(Command::parse(input), ctxt) {
        Ok(Output::Nothing) => (),
        Ok(Output::Text(text)) => println!("{}", text),
        Ok(Output::Exit) => return ControlFlow::Break(()),
        Err(err) => err.report_to_stderr(),
    }
    ControlFlow::Continue(())
}

/// Runs every non-empty line of the given input as a command.
fn run_script(input: &str, ctxt: &mut Ctxt) {
    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        if run_line(line, ctxt).is_break() {
            break;
        }
    }
}

/// Reads and runs lines until the user exits.
fn run_interactive(ctxt: &mut Ctxt) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    println!("Type `help` for help.");

    loop {
        let input = match rl.readline(">>> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        };
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;
        if run_line(&input, ctxt).is_break() {
            return Ok(());
        }
    }
}

fn main() {
    let mut verbose = false;
    let mut filename = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            _ => filename = Some(arg),
        }
    }

    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let mut ctxt = Ctxt::default();

    if let Some(filename) = filename {
        // run source file
        match fs::read_to_string(&filename) {
            Ok(input) => run_script(&input, &mut ctxt),
            Err(err) => {
                eprintln!("could not read `{}`: {}", filename, err);
                process::exit(1);
            },
        }
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("could not read stdin: {}", err);
            process::exit(1);
        }
        run_script(&input, &mut ctxt);
    } else if let Err(err) = run_interactive(&mut ctxt) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
