//! Reading canonical angle strings and QASM-style gate calls back into values.

pub mod ast;
pub mod rules;

use self::ast::Expr;
use self::rules::{angle_expr, gate_call};
use crate::error::{GateError, GateResult};
use crate::ir::{Gate, GateRegistry};
use nom::{character::complete::space0, combinator::all_consuming, sequence::delimited};

/// Parses an angle written as `pi`, `-pi/4`, `3*pi/4`, `0.50*pi`, `1.0`, ...
///
/// Every string produced by [`format_angle`](crate::ir::format_angle) is
/// accepted, in both representations.
pub fn parse_angle(input: &str) -> GateResult<f64> {
    let (_, expr) = all_consuming(delimited(space0, angle_expr, space0))(input)
        .map_err(|_| GateError::Parse(format!("Invalid angle: '{}'", input)))?;
    expr.evaluate()
}

/// Parses a gate call such as `swap` or `crx(0.50*pi)` into a gate of the
/// matching registered family.
pub fn parse_gate(input: &str, registry: &GateRegistry) -> GateResult<Gate> {
    let (_, call) = all_consuming(delimited(space0, gate_call, space0))(input)
        .map_err(|_| GateError::Parse(format!("Invalid gate call: '{}'", input)))?;
    let gate_type = registry.by_qasm(&call.name)?;
    let args = call
        .params
        .iter()
        .map(Expr::evaluate)
        .collect::<GateResult<Vec<_>>>()?;
    Gate::new(gate_type, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{format_angle, gates, Representation};
    use std::f64::consts::PI;

    #[test]
    fn test_parse_rational_forms() {
        assert_eq!(parse_angle("0").unwrap(), 0.0);
        assert_eq!(parse_angle("pi").unwrap(), PI);
        assert_eq!(parse_angle("-pi").unwrap(), -PI);
        assert_eq!(parse_angle("2*pi").unwrap(), 2.0 * PI);
        assert_eq!(parse_angle("pi/2").unwrap(), PI / 2.0);
        assert_eq!(parse_angle("-pi/4").unwrap(), -PI / 4.0);
        assert_eq!(parse_angle("-3*pi/4").unwrap(), PI * -3.0 / 4.0);
    }

    #[test]
    fn test_parse_decimal_forms() {
        assert_eq!(parse_angle("1*pi").unwrap(), PI);
        assert_eq!(parse_angle("-1*pi").unwrap(), -PI);
        assert_eq!(parse_angle("0.50*pi").unwrap(), 0.5 * PI);
    }

    #[test]
    fn test_parse_raw_values() {
        assert_eq!(parse_angle("1.0").unwrap(), 1.0);
        assert_eq!(parse_angle(" -0.25 ").unwrap(), -0.25);
        assert_eq!(parse_angle("1e-8").unwrap(), 1e-8);
    }

    #[test]
    fn test_rational_round_trip() {
        for k in -12..=12 {
            for d in [1.0, 2.0, 3.0, 7.0, 64.0, 100.0] {
                let angle = k as f64 * PI / d;
                let text = format_angle(angle, Representation::Rational);
                let parsed = parse_angle(&text).unwrap();
                assert!((parsed - angle).abs() < 1e-12, "{text}");
            }
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_angle("pie"), Err(GateError::Parse(_))));
        assert!(matches!(parse_angle("pi/0"), Err(GateError::Parse(_))));
        assert!(matches!(parse_angle(""), Err(GateError::Parse(_))));
    }

    #[test]
    fn test_parse_gate() {
        let registry = GateRegistry::standard();
        let gate = parse_gate("crx(0.50*pi)", &registry).unwrap();
        assert_eq!(gate.gate_type(), &gates::crx());
        assert_eq!(gate.args(), &[0.5 * PI]);

        let swap = parse_gate("swap", &registry).unwrap();
        assert_eq!(swap.gate_type(), &gates::swap());

        assert!(matches!(
            parse_gate("ccz", &registry),
            Err(GateError::UnknownFamily(_))
        ));
        assert!(matches!(
            parse_gate("rx(pi", &registry),
            Err(GateError::Parse(_))
        ));
        assert!(matches!(
            parse_gate("rx", &registry),
            Err(GateError::ArgumentCount { .. })
        ));
    }
}
