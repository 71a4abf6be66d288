#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rule that was applied while simplifying an expression, in the order the rules were applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// A variable was replaced with its value from the context.
    SubstituteVariable,

    /// An operation on constants was evaluated.
    ConstantFold,

    /// `a+a = 2a`
    AddSameVariable,

    /// `a-a = 0`
    SubtractSameVariable,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `0-a = -a`
    SubtractFromZero,

    /// `(-a)+b = b-a`
    /// `a+(-b) = a-b`
    /// `a-(-b) = a+b`
    /// `(-a)-b = -(a+b)`
    RewriteNegatedTerm,

    /// Constants in nested sums, differences or products were moved next to each other.
    ///
    /// `(a+1)+2 = a+3`
    /// `2*(3*a) = 6*a`
    GroupConstants,

    /// `2a+3a = 5a`
    CombineLikeTerms,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `-1*a = -a`
    /// `a*-1 = -a`
    MultiplyNegativeOne,

    /// `a*2 = 2*a`
    ConstantFirst,

    /// `(-a)*b = -(a*b)`
    /// `a/(-b) = -(a/b)`
    ExtractNegation,

    /// `a^2*a^3 = a^5`
    /// `a^3/a = a^2`
    CombineLikeFactors,

    /// `0/a = 0`
    DivideZero,

    /// `a/1 = a`
    DivideOne,

    /// `a/-1 = -a`
    DivideNegativeOne,

    /// `(-a)/(-b) = a/b`
    CancelNegations,

    /// `(a/b)/(c/d) = (a*d)/(b*c)`
    /// `a/(b/c) = (a*c)/b`
    SimplifyComplexFraction,

    /// `0^a = 0`
    PowerOfZero,

    /// `1^a = 1`
    PowerOfOne,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `a^-1 = 1/a`
    PowerNegativeOne,

    /// `--a = a`
    DoubleNegation,

    /// `-(a-b) = b-a`
    NegateDifference,

    /// `cos(-a) = cos(a)`
    /// `abs(-a) = abs(a)`
    EvenFunction,

    /// `ln(exp(a)) = a`
    LogOfExp,
}

impl Step {
    /// A short human-readable description of the rule.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SubstituteVariable => "substitute a known variable",
            Self::ConstantFold => "evaluate an operation on constants",
            Self::AddSameVariable => "a + a = 2a",
            Self::SubtractSameVariable => "a - a = 0",
            Self::AddZero => "a + 0 = a",
            Self::SubtractZero => "a - 0 = a",
            Self::SubtractFromZero => "0 - a = -a",
            Self::RewriteNegatedTerm => "rewrite a sum or difference with a negated term",
            Self::GroupConstants => "group constants together",
            Self::CombineLikeTerms => "combine like terms",
            Self::MultiplyZero => "a * 0 = 0",
            Self::MultiplyOne => "a * 1 = a",
            Self::MultiplyNegativeOne => "a * -1 = -a",
            Self::ConstantFirst => "move a constant factor to the front",
            Self::ExtractNegation => "move a negation out of a product or quotient",
            Self::CombineLikeFactors => "combine like factors",
            Self::DivideZero => "0 / a = 0",
            Self::DivideOne => "a / 1 = a",
            Self::DivideNegativeOne => "a / -1 = -a",
            Self::CancelNegations => "(-a) / (-b) = a / b",
            Self::SimplifyComplexFraction => "simplify a fraction of fractions",
            Self::PowerOfZero => "0^a = 0",
            Self::PowerOfOne => "1^a = 1",
            Self::PowerZero => "a^0 = 1",
            Self::PowerOne => "a^1 = a",
            Self::PowerNegativeOne => "a^-1 = 1 / a",
            Self::DoubleNegation => "--a = a",
            Self::NegateDifference => "-(a - b) = b - a",
            Self::EvenFunction => "drop a negation inside an even function",
            Self::LogOfExp => "ln(exp(a)) = a",
        }
    }
}
