use crate::error::{GateError, GateResult};

/// Angle expression as written in canonical angle strings.
#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Float(f64),
    Pi,
    Neg(Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn evaluate(&self) -> GateResult<f64> {
        match self {
            Expr::Float(val) => Ok(*val),
            Expr::Pi => Ok(std::f64::consts::PI),
            Expr::Neg(inner) => Ok(-inner.evaluate()?),
            Expr::Mul(lhs, rhs) => Ok(lhs.evaluate()? * rhs.evaluate()?),
            Expr::Div(lhs, rhs) => {
                let denom = rhs.evaluate()?;
                if denom == 0.0 {
                    Err(GateError::Parse("Division by zero".to_string()))
                } else {
                    Ok(lhs.evaluate()? / denom)
                }
            }
        }
    }
}

/// A gate call such as `crx(0.50*pi)`.
#[derive(Debug, Clone, PartialEq)]
pub struct GateCall {
    /// Lowercase mnemonic.
    pub name: String,
    /// Angle expressions in order.
    pub params: Vec<Expr>,
}
