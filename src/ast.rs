use std::fmt;

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation, `-x`.
    Neg,
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`, also produced by implicit multiplication.
    Mul,
    /// `/`
    Div,
    /// `^`, right-associative.
    Pow,
}

impl BinaryOperator {
    /// Returns the operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

/// A built-in function of one argument.
///
/// The set is closed: anything not listed here is rejected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// Sine, in radians.
    Sin,
    /// Cosine, in radians.
    Cos,
    /// Tangent, in radians.
    Tan,
    /// Natural logarithm.
    Log,
    /// Square root.
    Sqrt,
    /// Natural exponential. Only reachable through the `e^` alias.
    Exp,
}

impl Function {
    /// Resolves a callable identifier to a function.
    ///
    /// Names are case-sensitive. `exp` is not callable by name; the
    /// exponential is written `e^...`.
    ///
    /// # Example
    /// ```
    /// use graphfx::ast::Function;
    ///
    /// assert_eq!(Function::from_name("sqrt"), Some(Function::Sqrt));
    /// assert_eq!(Function::from_name("Sin"), None);
    /// assert_eq!(Function::from_name("exp"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }

    /// Returns the canonical name used when displaying a call.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
        }
    }
}

/// An abstract syntax tree node for a single-variable expression.
///
/// Each node owns its children exclusively. Nodes carry no source positions,
/// so two spellings of the same expression (`4x` and `4*x`) compare equal.
///
/// The `Display` implementation renders the fully explicit, normalized form
/// with every binary operation parenthesized.
///
/// # Example
/// ```
/// use graphfx::compile;
///
/// let ast = compile("4x + e^(x+1)").unwrap();
/// assert_eq!(ast.to_string(), "((4 * x) + exp((x + 1)))");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// A numeric literal.
    Constant(f64),
    /// The free variable `x`.
    Variable,
    /// A unary operation.
    UnaryOp {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
    },
    /// A binary operation.
    BinaryOp {
        /// The operator to apply.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A call to a built-in function.
    Call {
        /// The function being called.
        function: Function,
        /// Its single argument.
        argument: Box<Self>,
    },
}

impl AstNode {
    /// Builds a binary node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Builds a function call node.
    #[must_use]
    pub fn call(function: Function, argument: Self) -> Self {
        Self::Call { function,
                     argument: Box::new(argument) }
    }

    /// Builds a negation node.
    #[must_use]
    pub fn neg(operand: Self) -> Self {
        Self::UnaryOp { op:      UnaryOperator::Neg,
                        operand: Box::new(operand), }
    }

    /// Returns the number of nodes on the longest path from this node down to
    /// a leaf, itself included. A lone constant has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Constant(_) | Self::Variable => 1,
            Self::UnaryOp { operand, .. } => 1 + operand.depth(),
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::Call { argument, .. } => 1 + argument.depth(),
        }
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Variable => write!(f, "x"),
            Self::UnaryOp { op: UnaryOperator::Neg,
                            operand, } => write!(f, "-{operand}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {} {right})", op.symbol()),
            Self::Call { function, argument } => write!(f, "{}({argument})", function.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_fully_parenthesized() {
        let ast = AstNode::binary(BinaryOperator::Pow,
                                  AstNode::Constant(2.0),
                                  AstNode::binary(BinaryOperator::Pow,
                                                  AstNode::Constant(3.0),
                                                  AstNode::Constant(2.0)));

        assert_eq!(ast.to_string(), "(2 ^ (3 ^ 2))");
    }

    #[test]
    fn depth_follows_the_longest_branch() {
        let ast = AstNode::binary(BinaryOperator::Add,
                                  AstNode::Constant(1.0),
                                  AstNode::call(Function::Sin, AstNode::neg(AstNode::Variable)));

        assert_eq!(ast.depth(), 4);
        assert_eq!(AstNode::Constant(1.5).depth(), 1);
    }
}
