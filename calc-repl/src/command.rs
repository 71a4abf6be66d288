//! Parsing and running the commands typed into the REPL.

use calc_engine::{
    numerical::{Ctxt, Eval},
    parser::parse_with,
    symbolic::simplify_with_steps,
    tokenizer::{tokenize, TokenKind},
};
use calc_error::Error;
use crate::{error::{CommandError, InvalidName, NotDefined}, tree};
use tracing::debug;

pub const HELP: &str = "\
commands:
  help               show this message
  exit               leave the calculator
  clear              forget every variable except pi and e
  <name> = <expr>    evaluate <expr> and store the value in <name>
  !<name>            forget the variable <name>
  eval <expr>        evaluate <expr> to a number
  latex <expr>       simplify <expr> and write it as LaTeX
  show <expr>        simplify <expr> and draw it as a tree
  steps <expr>       simplify <expr> and list the rules that were applied
  <expr>             simplify <expr>

functions: sin cos tan cot sec csc arcsin arccos arctan sqrt log ln exp abs floor ceil round sign
derivatives: d(x, <expr>) differentiates <expr> with respect to x";

/// A line of input, split into the command and its argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command<'a> {
    Help,
    Exit,
    Clear,
    Define { name: &'a str, expr: &'a str },
    Undefine(&'a str),
    Eval(&'a str),
    Latex(&'a str),
    Show(&'a str),
    Steps(&'a str),
    Simplify(&'a str),
}

impl<'a> Command<'a> {
    /// Splits a line into its command. Anything that is not a known command is an expression
    /// to simplify.
    pub fn parse(input: &'a str) -> Self {
        let trimmed = input.trim();
        match trimmed {
            "help" => return Self::Help,
            "exit" => return Self::Exit,
            "clear" => return Self::Clear,
            _ => (),
        }

        if let Some((name, expr)) = input.split_once('=') {
            return Self::Define { name: name.trim(), expr };
        }

        if let Some(name) = trimmed.strip_prefix('!') {
            return Self::Undefine(name.trim());
        }

        let prefixed = [
            ("eval ", Self::Eval as fn(&'a str) -> Self),
            ("latex ", Self::Latex),
            ("show ", Self::Show),
            ("steps ", Self::Steps),
        ];
        for (prefix, command) in prefixed {
            if let Some(expr) = trimmed.strip_prefix(prefix) {
                return command(expr);
            }
        }

        Self::Simplify(input)
    }
}

/// The result of running a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Nothing to print.
    Nothing,

    /// Text to print.
    Text(String),

    /// The REPL should stop.
    Exit,
}

/// Attaches the source of the expression to an error.
fn in_source<'a>(source: &'a str) -> impl FnOnce(Error) -> CommandError<'a> {
    move |error| CommandError::new(error, source)
}

/// Returns true if `name` reads as a single variable, and not as a keyword such as `sin` or `d`.
fn is_variable_name(name: &str) -> bool {
    match tokenize(name).as_deref() {
        Ok([token]) => token.kind == TokenKind::Name && token.span == (0..name.len()),
        _ => false,
    }
}

/// Runs a command against the given context.
pub fn run<'a>(command: Command<'a>, ctxt: &mut Ctxt) -> Result<Output, CommandError<'a>> {
    debug!(?command, "running command");
    match command {
        Command::Help => Ok(Output::Text(HELP.to_string())),
        Command::Exit => Ok(Output::Exit),
        Command::Clear => {
            ctxt.clear();
            Ok(Output::Nothing)
        },
        Command::Define { name, expr } => {
            let lower = name.to_ascii_lowercase();
            if !is_variable_name(&lower) {
                let error = Error::new(vec![0..name.len()], InvalidName { name: name.to_string() });
                return Err(CommandError::new(error, name));
            }

            let value = parse_with(expr, ctxt)
                .and_then(|expr| expr.eval(ctxt))
                .map_err(in_source(expr))?;
            ctxt.define(&lower, value);
            Ok(Output::Text(format!("{} = {}", lower, value)))
        },
        Command::Undefine(name) => match ctxt.undefine(name) {
            Some(_) => Ok(Output::Nothing),
            None => {
                let error = Error::new(vec![0..name.len()], NotDefined { name: name.to_string() });
                Err(CommandError::new(error, name))
            },
        },
        Command::Eval(source) => {
            let value = parse_with(source, ctxt)
                .and_then(|expr| expr.eval(ctxt))
                .map_err(in_source(source))?;
            Ok(Output::Text(value.to_string()))
        },
        Command::Latex(source) => {
            let expr = parse_with(source, ctxt)
                .and_then(|expr| expr.simplify(ctxt))
                .map_err(in_source(source))?;
            Ok(Output::Text(expr.to_latex()))
        },
        Command::Show(source) => {
            let expr = parse_with(source, ctxt)
                .and_then(|expr| expr.simplify(ctxt))
                .map_err(in_source(source))?;
            Ok(Output::Text(tree::render(&expr)))
        },
        Command::Steps(source) => {
            let (expr, steps) = parse_with(source, ctxt)
                .and_then(|expr| simplify_with_steps(&expr, ctxt))
                .map_err(in_source(source))?;

            let mut out = String::new();
            for (i, step) in steps.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, step.description()));
            }
            out.push_str(&expr.to_string());
            Ok(Output::Text(out))
        },
        Command::Simplify(source) => {
            let expr = parse_with(source, ctxt)
                .and_then(|expr| expr.simplify(ctxt))
                .map_err(in_source(source))?;
            Ok(Output::Text(expr.to_string()))
        },
    }
}
