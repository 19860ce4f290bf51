/// Core parser infrastructure.
///
/// Provides the entry point for turning a token slice into an expression tree
/// and the check that nothing is left over once the expression ends.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence levels for `+ -`, `* /` (including implicit
/// multiplication) and right-associative `^`.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles negation, literals, the variable `x`, parenthesized groups,
/// function calls and the `e^` exponential alias.
pub mod unary;
