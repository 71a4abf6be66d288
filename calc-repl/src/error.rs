use ariadne::{Fmt, Source};
use calc_attrs::ErrorKind;
use calc_error::{Error, EXPR};

/// The left-hand side of an assignment is not a valid variable name.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid variable name", name),
    labels = ["this name"],
    help = "variable names may only contain the letters a to z, and cannot be a function name or `d`",
)]
pub struct InvalidName {
    pub name: String,
}

/// Tried to undefine a variable that does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the variable `{}` is not defined", name),
    labels = ["this variable"],
    help = format!("use {} to list the commands", "help".fg(EXPR)),
)]
pub struct NotDefined {
    pub name: String,
}

/// An error raised by a command, along with the text its spans point into.
#[derive(Debug)]
pub struct CommandError<'a> {
    pub error: Error,
    pub source: &'a str,
}

impl<'a> CommandError<'a> {
    pub fn new(error: Error, source: &'a str) -> Self {
        Self { error, source }
    }

    /// Report the error to stderr.
    ///
    /// Errors from evaluation and simplification do not point anywhere in the source, so the
    /// whole source is highlighted for them instead.
    pub fn report_to_stderr(&self) {
        let spans = if self.error.spans.is_empty() {
            vec![0..self.source.len()]
        } else {
            self.error.spans.clone()
        };

        let report = self.error.kind.build_report("input", &spans);
        if let Err(err) = report.eprint(("input", Source::from(self.source))) {
            eprintln!("{}: {}", self.error, err);
        }
    }
}
