use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::EXPR;

/// The variable is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", name),
    labels = ["this variable"],
    help = if suggestions.is_empty() {
        format!("to define it, type: {} = {}", name.fg(EXPR), "<expression>".fg(EXPR))
    } else if suggestions.len() == 1 {
        format!("did you mean the `{}` variable?", (&*suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these variables? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,

    /// Defined variables with a similar name.
    pub suggestions: Vec<String>,
}
