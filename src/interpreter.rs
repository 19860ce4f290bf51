/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the tree once per domain point. Evaluation is pure:
/// points are independent, so the sweep can be split across threads without
/// synchronization.
///
/// # Responsibilities
/// - Evaluates arithmetic, exponentiation and built-in functions on `f64`.
/// - Encodes per-point domain errors as NaN instead of failing.
/// - Packages samples into an ordered curve.
pub mod evaluator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads the raw expression and produces a stream of tokens
/// (numbers, identifiers, operators, parentheses, commas), each tagged with
/// its byte offset. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Reports the first unrecognized character.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser over an operator-precedence
/// grammar. Informal notation (implicit multiplication, `e^`, bare function
/// names) is resolved by grammar rules rather than text rewriting.
///
/// # Responsibilities
/// - Converts tokens into [`AstNode`](crate::ast::AstNode) trees.
/// - Validates grammar and rejects unknown identifiers, reporting positions.
pub mod parser;
