use levenshtein::levenshtein;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The variables available when evaluating or simplifying an expression.
///
/// Names are case-insensitive: they are lower-cased whenever a variable is defined or looked
/// up. The default context contains `pi` and `e`, which can be redefined or removed like any
/// other variable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            vars: HashMap::from([
                ("e".to_string(), std::f64::consts::E),
                ("pi".to_string(), std::f64::consts::PI),
            ]),
        }
    }
}

impl Ctxt {
    /// Creates a new empty context.
    ///
    /// Consider using the [`Default`] implementation instead, which includes the constants `pi`
    /// and `e`.
    pub fn new() -> Ctxt {
        Ctxt { vars: HashMap::new() }
    }

    /// Defines a variable, replacing its previous value if it was already defined.
    pub fn define(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_lowercase(), value);
    }

    /// Removes a variable from the context, returning its value if it was defined.
    pub fn undefine(&mut self, name: &str) -> Option<f64> {
        self.vars.remove(&name.to_lowercase())
    }

    /// Resets the context to its default state, removing all user-defined variables and
    /// restoring `pi` and `e`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(&name.to_lowercase()).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Returns all variables in the context with a name similar to the given name, in
    /// alphabetical order.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let name = name.to_lowercase();
        let mut similar = self.vars
            .keys()
            .filter(|n| levenshtein(n, &name) < 2)
            .map(|n| n.as_str())
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        let mut ctxt = Ctxt::new();
        ctxt.define("X", 5.0);
        assert_eq!(ctxt.get_var("x"), Some(5.0));
        assert_eq!(ctxt.get_var("X"), Some(5.0));
        assert_eq!(ctxt.get_vars().keys().collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn define_and_undefine_are_idempotent() {
        let mut ctxt = Ctxt::new();
        ctxt.define("a", 1.0);
        ctxt.define("a", 2.0);
        assert_eq!(ctxt.get_var("a"), Some(2.0));

        assert_eq!(ctxt.undefine("A"), Some(2.0));
        assert_eq!(ctxt.undefine("a"), None);
        assert_eq!(ctxt.get_var("a"), None);
    }

    #[test]
    fn constants_can_be_replaced() {
        let mut ctxt = Ctxt::default();
        ctxt.define("pi", 3.0);
        assert_eq!(ctxt.get_var("pi"), Some(3.0));

        ctxt.undefine("e");
        assert_eq!(ctxt.get_var("e"), None);

        ctxt.define("y", 1.0);
        ctxt.clear();
        assert_eq!(ctxt, Ctxt::default());
    }

    #[test]
    fn similar_vars() {
        let mut ctxt = Ctxt::default();
        ctxt.define("rate", 0.5);
        ctxt.define("rat", 0.25);
        ctxt.define("speed", 3.0);

        assert_eq!(ctxt.get_similar_vars("RAT"), vec!["rat", "rate"]);
        assert_eq!(ctxt.get_similar_vars("p"), vec!["e", "pi"]);
        assert!(ctxt.get_similar_vars("velocity").is_empty());
    }
}
