//! Property-based tests for gate unitaries, adjoints and angle rendering.

use proptest::prelude::*;
use q_gates::ir::{format_angle, gates, matrix, GateType, Representation};
use q_gates::{parse_angle, Gate, Instruction};
use std::f64::consts::PI;

/// Any catalogue family with angles drawn from a few turns either way.
fn arb_gate() -> impl Strategy<Value = Gate> {
    let count = gates::families().len();
    (0..count, prop::collection::vec(-4.0 * PI..4.0 * PI, 3)).prop_map(|(index, angles)| {
        let gate_type = GateType::from_family(gates::families().swap_remove(index));
        let args = angles[..gate_type.num_angles()].to_vec();
        gate_type.instantiate(args).unwrap()
    })
}

proptest! {
    #[test]
    fn prop_gates_are_unitary(gate in arb_gate()) {
        prop_assert!(matrix::is_unitary(&gate.u(), matrix::UNITARY_TOLERANCE), "{}", gate);
    }

    #[test]
    fn prop_dagger_is_adjoint(gate in arb_gate()) {
        let expected = matrix::conjugate_transpose(&gate.u());
        let dagger = gate.dagger().unwrap();
        prop_assert!(matrix::max_abs_diff(&dagger.u(), &expected) < 1e-9, "{}", gate);
        prop_assert_eq!(dagger.gate_type(), gate.gate_type());
    }

    #[test]
    fn prop_discrete_dagger_is_adjoint(gate in arb_gate()) {
        let fixed = gate
            .gate_type()
            .make_discrete(gate.args().to_vec(), None)
            .unwrap()
            .instance()
            .unwrap();
        prop_assert_eq!(fixed.u(), gate.u());
        prop_assert_eq!(fixed.num_angles(), 0);

        let dagger = fixed.dagger().unwrap();
        prop_assert!(dagger.is_discrete());
        let expected = matrix::conjugate_transpose(&fixed.u());
        prop_assert!(matrix::max_abs_diff(&dagger.u(), &expected) < 1e-9, "{}", fixed);
    }

    #[test]
    fn prop_rational_multiples_of_pi_round_trip(k in -24i64..=24, d in 1i64..=100) {
        let angle = k as f64 * PI / d as f64;
        let text = format_angle(angle, Representation::Rational);
        prop_assert!(text == "0" || text.contains("pi"), "{}", text);
        let parsed = parse_angle(&text).unwrap();
        prop_assert!((parsed - angle).abs() < 1e-9, "{} -> {}", text, parsed);
    }

    #[test]
    fn prop_any_angle_reads_back(angle in -10.0f64..10.0) {
        for representation in [Representation::Rational, Representation::Decimal] {
            let text = format_angle(angle, representation);
            let parsed = parse_angle(&text).unwrap();
            prop_assert!((parsed - angle).abs() < 1e-6, "{} -> {}", text, parsed);
        }
    }
}
