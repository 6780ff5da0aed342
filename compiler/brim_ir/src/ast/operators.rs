//! Binary operators.

/// Binary operators, in the two grammar tiers plus comparison.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Additive tier
    Add,
    Sub,
    /// `&`: spelled like a logical AND but evaluates as addition.
    And,

    // Multiplicative tier
    Mul,
    Div,
    /// `|`: spelled like a logical OR but evaluates as multiplication.
    Or,

    // Comparison
    Gt,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::And => "&",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Or => "|",
            Self::Gt => ">",
        }
    }

    /// Look up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<BinaryOp> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "&" => Some(Self::And),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "|" => Some(Self::Or),
            ">" => Some(Self::Gt),
            _ => None,
        }
    }

    /// `+ - &`, parsed by the `expr` rule.
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::And)
    }

    /// `* / |`, parsed by the `term` rule.
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div | Self::Or)
    }

    /// Human-readable operation name for overflow diagnostics.
    pub const fn operation_name(self) -> &'static str {
        match self {
            Self::Add | Self::And => "addition",
            Self::Sub => "subtraction",
            Self::Mul | Self::Or => "multiplication",
            Self::Div => "division",
            Self::Gt => "comparison",
        }
    }
}
