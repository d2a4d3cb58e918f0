use super::ast::{Expr, GateCall};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, one_of, space0},
    combinator::{map, opt, recognize, value},
    multi::{fold_many0, many0, separated_list0},
    number::complete::double,
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};

// --- Helpers ---

fn identifier(input: &str) -> IResult<&str, String> {
    map(
        recognize(pair(
            alt((alpha1, tag("_"))),
            many0(alt((alphanumeric1, tag("_")))),
        )),
        |s: &str| s.to_string(),
    )(input)
}

fn pi(input: &str) -> IResult<&str, Expr> {
    value(Expr::Pi, tag("pi"))(input)
}

fn number(input: &str) -> IResult<&str, Expr> {
    map(double, Expr::Float)(input)
}

fn negated(input: &str) -> IResult<&str, Expr> {
    map(preceded(char('-'), pi), |e| Expr::Neg(Box::new(e)))(input)
}

fn factor(input: &str) -> IResult<&str, Expr> {
    alt((pi, negated, number))(input)
}

// --- Angle & gate call parsers ---

/// `factor (('*' | '/') factor)*`, left associative.
pub fn angle_expr(input: &str) -> IResult<&str, Expr> {
    let (input, first) = factor(input)?;
    fold_many0(
        pair(delimited(space0, one_of("*/"), space0), factor),
        move || first.clone(),
        |acc, (op, rhs)| match op {
            '*' => Expr::Mul(Box::new(acc), Box::new(rhs)),
            _ => Expr::Div(Box::new(acc), Box::new(rhs)),
        },
    )(input)
}

pub fn gate_call(input: &str) -> IResult<&str, GateCall> {
    let (input, name) = identifier(input)?;
    let (input, params) = opt(delimited(
        pair(char('('), space0),
        separated_list0(tuple((space0, char(','), space0)), angle_expr),
        pair(space0, char(')')),
    ))(input)?;

    Ok((
        input,
        GateCall {
            name,
            params: params.unwrap_or_default(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pi_fraction() {
        assert_eq!(
            angle_expr("pi/2"),
            Ok((
                "",
                Expr::Div(Box::new(Expr::Pi), Box::new(Expr::Float(2.0)))
            ))
        );
    }

    #[test]
    fn test_negative_pi() {
        assert_eq!(
            angle_expr("-pi"),
            Ok(("", Expr::Neg(Box::new(Expr::Pi))))
        );
    }

    #[test]
    fn test_coefficient() {
        assert_eq!(
            angle_expr("-3 * pi"),
            Ok((
                "",
                Expr::Mul(Box::new(Expr::Float(-3.0)), Box::new(Expr::Pi))
            ))
        );
    }

    #[test]
    fn test_gate_call_no_params() {
        assert_eq!(
            gate_call("swap"),
            Ok((
                "",
                GateCall {
                    name: "swap".to_string(),
                    params: vec![]
                }
            ))
        );
    }

    #[test]
    fn test_gate_call_with_params() {
        assert_eq!(
            gate_call("u3( pi, 0 ,1.5)"),
            Ok((
                "",
                GateCall {
                    name: "u3".to_string(),
                    params: vec![Expr::Pi, Expr::Float(0.0), Expr::Float(1.5)]
                }
            ))
        );
    }
}
