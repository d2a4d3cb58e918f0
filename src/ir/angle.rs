//! Canonical text for rotation angles.
//!
//! Angles are shown as rational multiples of π when a fraction with a small
//! denominator reproduces them within [`ANGLE_TOLERANCE`], and as the raw
//! `f64` otherwise. Both representations accept or reject an angle using the
//! same tolerance.

use std::f64::consts::PI;

/// Threshold below which an angle is zero and within which a rational
/// multiple of π is considered exact.
pub const ANGLE_TOLERANCE: f64 = 1e-7;

/// Largest denominator tried when approximating `angle / π`.
pub const MAX_DENOMINATOR: i64 = 100;

/// How angles are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Representation {
    /// `pi/2`, `-3*pi/4`, `2*pi`; used for display.
    #[default]
    Rational,
    /// `0.50*pi`, `-1*pi`; used for QASM-style export.
    Decimal,
}

/// Closest fraction `num/den` to `x` with `den <= max_denominator`.
///
/// Walks the continued-fraction convergents of `x` and, once the bound is hit,
/// picks the closer of the last convergent and the largest admissible
/// semiconvergent (ties go to the convergent).
pub fn limit_denominator(x: f64, max_denominator: i64) -> (i64, i64) {
    if !x.is_finite() {
        return (0, 1);
    }
    // Keeps the convergent numerators inside i64.
    if x.abs() >= 1e15 {
        return (x.round() as i64, 1);
    }
    let (mut p0, mut q0, mut p1, mut q1) = (0_i64, 1_i64, 1_i64, 0_i64);
    let mut rest = x;
    loop {
        let a = rest.floor();
        if q0 as f64 + a * q1 as f64 > max_denominator as f64 {
            break;
        }
        let a = a as i64;
        (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q0 + a * q1);
        let frac = rest - a as f64;
        if frac == 0.0 {
            return (p1, q1);
        }
        rest = frac.recip();
    }
    let k = (max_denominator - q0) / q1;
    let (sp, sq) = (p0 + k * p1, q0 + k * q1);
    let distance = |p: i64, q: i64| (p as f64 / q as f64 - x).abs();
    if distance(p1, q1) <= distance(sp, sq) {
        (p1, q1)
    } else {
        (sp, sq)
    }
}

fn raw(angle: f64) -> String {
    format!("{angle:?}")
}

/// Renders one angle (radians).
pub fn format_angle(angle: f64, representation: Representation) -> String {
    if angle.abs() < ANGLE_TOLERANCE {
        return "0".to_string();
    }
    if !angle.is_finite() {
        return raw(angle);
    }
    let (num, den) = limit_denominator(angle / PI, MAX_DENOMINATOR);
    match representation {
        Representation::Rational => {
            if (PI * num as f64 / den as f64 - angle).abs() >= ANGLE_TOLERANCE {
                return raw(angle);
            }
            match (num, den) {
                (1, 1) => "pi".to_string(),
                (-1, 1) => "-pi".to_string(),
                (n, 1) => format!("{n}*pi"),
                (1, d) => format!("pi/{d}"),
                (-1, d) => format!("-pi/{d}"),
                (n, d) => format!("{n}*pi/{d}"),
            }
        }
        Representation::Decimal => {
            let coefficient = angle / PI;
            let rounded = (coefficient * 100.0).round() / 100.0;
            if (coefficient - rounded).abs() >= ANGLE_TOLERANCE {
                return raw(angle);
            }
            if den == 1 {
                format!("{num}*pi")
            } else {
                format!("{coefficient:.2}*pi")
            }
        }
    }
}

/// Renders every angle, preserving order.
pub fn format_args(args: &[f64], representation: Representation) -> Vec<String> {
    args.iter()
        .map(|&a| format_angle(a, representation))
        .collect()
}

/// Rational rendering joined with `", "`, as used in gate names.
pub fn args_to_str(args: &[f64]) -> String {
    format_args(args, Representation::Rational).join(", ")
}
