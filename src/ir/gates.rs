//! Standard gate catalogue.
//!
//! Each family is a unit struct implementing [`GateFamily`]. Multi-qubit
//! operands are ordered `[target, control]`. The constructor functions at the
//! bottom return the corresponding [`GateType`]s, including the fixed-phase
//! Clifford+T gates, which are discrete specializations of [`U1`].
//!
//! | Family | Qubits | Angles | QASM |
//! |--------|--------|--------|------|
//! | [`Id`] | 1 | 0 | `id` |
//! | [`X`], [`Y`], [`Z`] | 1 | 0 | `x`, `y`, `z` |
//! | [`H`] | 1 | 0 | `h` |
//! | [`Rx`], [`Ry`], [`Rz`] | 1 | 1 | `rx`, `ry`, `rz` |
//! | [`U1`] | 1 | 1 | `u1` |
//! | [`U3`] | 1 | 3 | `u3` |
//! | [`Cnot`] | 2 | 0 | `cx` |
//! | [`Cz`] | 2 | 0 | `cz` |
//! | [`Crx`] | 2 | 1 | `crx` |
//! | [`Swap`] | 2 | 0 | `swap` |

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};
use std::sync::Arc;

use num_complex::Complex64;

use super::gate::{Gate, GateFamily, GateType};
use super::matrix::{self, Matrix, I, ONE, ZERO};
use crate::error::GateResult;

fn real(x: f64) -> Complex64 {
    Complex64::new(x, 0.0)
}

fn phase(angle: f64) -> Complex64 {
    Complex64::from_polar(1.0, angle)
}

/// Adjoint rule of rotations: the same family with every angle negated.
fn negate_angles(gate: &Gate) -> GateResult<Gate> {
    gate.with_args(gate.args().iter().map(|a| -a).collect())
}

fn rx_matrix(theta: f64) -> Matrix {
    let (s, c) = (theta / 2.0).sin_cos();
    matrix::from_rows(2, &[real(c), -I * s, -I * s, real(c)])
}

fn pauli_x() -> Matrix {
    matrix::from_rows(2, &[ZERO, ONE, ONE, ZERO])
}

fn pauli_z() -> Matrix {
    matrix::from_rows(2, &[ONE, ZERO, ZERO, -ONE])
}

/// Identity gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Id;

impl GateFamily for Id {
    fn name(&self) -> &'static str {
        "Id"
    }
    fn num_qubits(&self) -> usize {
        1
    }
    fn calculate_u(&self, _args: &[f64]) -> Matrix {
        matrix::identity(2)
    }
    fn dagger(&self, gate: &Gate) -> GateResult<Gate> {
        Ok(gate.clone())
    }
    fn qasm_name(&self) -> &'static str {
        "id"
    }
    fn qiskit_name(&self) -> &'static str {
        "id"
    }
}

/// Pauli-X (NOT) gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct X;

impl GateFamily for X {
    fn name(&self) -> &'static str {
        "X"
    }
    fn num_qubits(&self) -> usize {
        1
    }
    fn calculate_u(&self, _args: &[f64]) -> Matrix {
        pauli_x()
    }
    fn dagger(&self, gate: &Gate) -> GateResult<Gate> {
        Ok(gate.clone())
    }
    fn qasm_name(&self) -> &'static str {
        "x"
    }
    fn qiskit_name(&self) -> &'static str {
        "x"
    }
}

/// Pauli-Y gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Y;

impl GateFamily for Y {
    fn name(&self) -> &'static str {
        "Y"
    }
    fn num_qubits(&self) -> usize {
        1
    }
    fn calculate_u(&self, _args: &[f64]) -> Matrix {
        matrix::from_rows(2, &[ZERO, -I, I, ZERO])
    }
    fn dagger(&self, gate: &Gate) -> GateResult<Gate> {
        Ok(gate.clone())
    }
    fn qasm_name(&self) -> &'static str {
        "y"
    }
    fn qiskit_name(&self) -> &'static str {
        "y"
    }
}

/// Pauli-Z gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Z;

impl GateFamily for Z {
    fn name(&self) -> &'static str {
        "Z"
    }
    fn num_qubits(&self) -> usize {
        1
    }
    fn calculate_u(&self, _args: &[f64]) -> Matrix {
        pauli_z()
    }
    fn dagger(&self, gate: &Gate) -> GateResult<Gate> {
        Ok(gate.clone())
    }
    fn qasm_name(&self) -> &'static str {
        "z"
    }
    fn qiskit_name(&self) -> &'static str {
        "z"
    }
}

/// Hadamard gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct H;

impl GateFamily for H {
    fn name(&self) -> &'static str {
        "H"
    }
    fn num_qubits(&self) -> usize {
        1
    }
    fn calculate_u(&self, _args: &[f64]) -> Matrix {
        let r = real(FRAC_1_SQRT_2);
        matrix::from_rows(2, &[r, r, r, -r])
    }
    fn dagger(&self, gate: &Gate) -> GateResult<Gate> {
        Ok(gate.clone())
    }
    fn qasm_name(&self) -> &'static str {
        "h"
    }
    fn qiskit_name(&self) -> &'static str {
        "h"
    }
}

/// Rotation about the X axis, `exp(-i θ X / 2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rx;

impl GateFamily for Rx {
    fn name(&self) -> &'static str {
        "Rx"
    }
    fn num_qubits(&self) -> usize {
        1
    }
    fn num_angles(&self) -> usize {
        1
    }
    fn calculate_u(&self, args: &[f64]) -> Matrix {
        rx_matrix(args[0])
    }
    fn dagger(&self, gate: &Gate) -> GateResult<Gate> {
        negate_angles(gate)
    }
    fn qasm_name(&self) -> &'static str {
        "rx"
    }
    fn qiskit_name(&self) -> &'static str {
        "rx"
    }
}

/// Rotation about the Y axis, `exp(-i θ Y / 2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ry;

impl GateFamily for Ry {
    fn name(&self) -> &'static str {
        "Ry"
    }
    fn num_qubits(&self) -> usize {
        1
    }
    fn num_angles(&self) -> usize {
        1
    }
    fn calculate_u(&self, args: &[f64]) -> Matrix {
        let (s, c) = (args[0] / 2.0).sin_cos();
        matrix::from_rows(2, &[real(c), real(-s), real(s), real(c)])
    }
    fn dagger(&self, gate: &Gate) -> GateResult<Gate> {
        negate_angles(gate)
    }
    fn qasm_name(&self) -> &'static str {
        "ry"
    }
    fn qiskit_name(&self) -> &'static str {
        "ry"
    }
}

/// Rotation about the Z axis, `diag(e^{-iθ/2}, e^{iθ/2})`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rz;

impl GateFamily for Rz {
    fn name(&self) -> &'static str {
        "Rz"
    }
    fn num_qubits(&self) -> usize {
        1
    }
    fn num_angles(&self) -> usize {
        1
    }
    fn calculate_u(&self, args: &[f64]) -> Matrix {
        let half = args[0] / 2.0;
        matrix::from_rows(2, &[phase(-half), ZERO, ZERO, phase(half)])
    }
    fn dagger(&self, gate: &Gate) -> GateResult<Gate> {
        negate_angles(gate)
    }
    fn qasm_name(&self) -> &'static str {
        "rz"
    }
    fn qiskit_name(&self) -> &'static str {
        "rz"
    }
}

/// Phase gate `diag(1, e^{iλ})`.
#[derive(Debug, Clone, Copy, Default)]
pub struct U1;

impl GateFamily for U1 {
    fn name(&self) -> &'static str {
        "U1"
    }
    fn num_qubits(&self) -> usize {
        1
    }
    fn num_angles(&self) -> usize {
        1
    }
    fn calculate_u(&self, args: &[f64]) -> Matrix {
        matrix::from_rows(2, &[ONE, ZERO, ZERO, phase(args[0])])
    }
    fn dagger(&self, gate: &Gate) -> GateResult<Gate> {
        negate_angles(gate)
    }
    fn qasm_name(&self) -> &'static str {
        "u1"
    }
    fn qiskit_name(&self) -> &'static str {
        "u1"
    }
}

/// Generic single-qubit gate `U3(θ, φ, λ)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct U3;

impl GateFamily for U3 {
    fn name(&self) -> &'static str {
        "U3"
    }
    fn num_qubits(&self) -> usize {
        1
    }
    fn num_angles(&self) -> usize {
        3
    }
    fn calculate_u(&self, args: &[f64]) -> Matrix {
        let (theta, phi, lambda) = (args[0], args[1], args[2]);
        let (s, c) = (theta / 2.0).sin_cos();
        matrix::from_rows(
            2,
            &[
                real(c),
                -phase(lambda) * s,
                phase(phi) * s,
                phase(phi + lambda) * c,
            ],
        )
    }
    /// `U3(θ, φ, λ)† = U3(-θ, -λ, -φ)`.
    fn dagger(&self, gate: &Gate) -> GateResult<Gate> {
        let args = gate.args();
        gate.with_args(vec![-args[0], -args[2], -args[1]])
    }
    fn qasm_name(&self) -> &'static str {
        "u3"
    }
    fn qiskit_name(&self) -> &'static str {
        "u3"
    }
}

/// Controlled NOT. Operands `[target, control]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cnot;

impl GateFamily for Cnot {
    fn name(&self) -> &'static str {
        "Cnot"
    }
    fn num_qubits(&self) -> usize {
        2
    }
    fn controls(&self) -> &'static [usize] {
        &[1]
    }
    fn calculate_u(&self, _args: &[f64]) -> Matrix {
        matrix::controlled(&pauli_x())
    }
    fn dagger(&self, gate: &Gate) -> GateResult<Gate> {
        Ok(gate.clone())
    }
    fn qasm_name(&self) -> &'static str {
        "cx"
    }
    fn qiskit_name(&self) -> &'static str {
        "cx"
    }
}

/// Controlled Z. Symmetric in its operands; listed as `[target, control]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cz;

impl GateFamily for Cz {
    fn name(&self) -> &'static str {
        "Cz"
    }
    fn num_qubits(&self) -> usize {
        2
    }
    fn controls(&self) -> &'static [usize] {
        &[1]
    }
    fn calculate_u(&self, _args: &[f64]) -> Matrix {
        matrix::controlled(&pauli_z())
    }
    fn dagger(&self, gate: &Gate) -> GateResult<Gate> {
        Ok(gate.clone())
    }
    fn qasm_name(&self) -> &'static str {
        "cz"
    }
    fn qiskit_name(&self) -> &'static str {
        "cz"
    }
}

/// Controlled [`Rx`]. Operands `[target, control]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crx;

impl GateFamily for Crx {
    fn name(&self) -> &'static str {
        "Crx"
    }
    fn num_qubits(&self) -> usize {
        2
    }
    fn num_angles(&self) -> usize {
        1
    }
    fn controls(&self) -> &'static [usize] {
        &[1]
    }
    fn calculate_u(&self, args: &[f64]) -> Matrix {
        matrix::controlled(&rx_matrix(args[0]))
    }
    fn dagger(&self, gate: &Gate) -> GateResult<Gate> {
        negate_angles(gate)
    }
    fn qasm_name(&self) -> &'static str {
        "crx"
    }
    fn qiskit_name(&self) -> &'static str {
        "crx"
    }
}

/// Exchanges the states of two qubits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Swap;

impl GateFamily for Swap {
    fn name(&self) -> &'static str {
        "Swap"
    }
    fn num_qubits(&self) -> usize {
        2
    }
    fn calculate_u(&self, _args: &[f64]) -> Matrix {
        #[rustfmt::skip]
        let entries = [
            ONE,  ZERO, ZERO, ZERO,
            ZERO, ZERO, ONE,  ZERO,
            ZERO, ONE,  ZERO, ZERO,
            ZERO, ZERO, ZERO, ONE,
        ];
        matrix::from_rows(4, &entries)
    }
    fn dagger(&self, gate: &Gate) -> GateResult<Gate> {
        Ok(gate.clone())
    }
    fn qasm_name(&self) -> &'static str {
        "swap"
    }
    fn qiskit_name(&self) -> &'static str {
        "swap"
    }
}

/// Every family in the catalogue.
pub fn families() -> Vec<Arc<dyn GateFamily>> {
    vec![
        Arc::new(Id),
        Arc::new(X),
        Arc::new(Y),
        Arc::new(Z),
        Arc::new(H),
        Arc::new(Rx),
        Arc::new(Ry),
        Arc::new(Rz),
        Arc::new(U1),
        Arc::new(U3),
        Arc::new(Cnot),
        Arc::new(Cz),
        Arc::new(Crx),
        Arc::new(Swap),
    ]
}

pub fn id() -> GateType {
    GateType::of(Id)
}

pub fn x() -> GateType {
    GateType::of(X)
}

pub fn y() -> GateType {
    GateType::of(Y)
}

pub fn z() -> GateType {
    GateType::of(Z)
}

pub fn h() -> GateType {
    GateType::of(H)
}

pub fn rx() -> GateType {
    GateType::of(Rx)
}

pub fn ry() -> GateType {
    GateType::of(Ry)
}

pub fn rz() -> GateType {
    GateType::of(Rz)
}

pub fn u1() -> GateType {
    GateType::of(U1)
}

pub fn u3() -> GateType {
    GateType::of(U3)
}

pub fn cnot() -> GateType {
    GateType::of(Cnot)
}

pub fn cz() -> GateType {
    GateType::of(Cz)
}

pub fn crx() -> GateType {
    GateType::of(Crx)
}

pub fn swap() -> GateType {
    GateType::of(Swap)
}

fn named_u1(angle: f64, name: &str, mnemonic: &'static str) -> GateType {
    u1().specialize(vec![angle], Some(name.to_string()))
        .with_export_name(mnemonic)
}

/// S gate, `U1(π/2)`.
pub fn s() -> GateType {
    named_u1(FRAC_PI_2, "S", "s")
}

/// S-dagger gate, `U1(-π/2)`.
pub fn sdg() -> GateType {
    named_u1(-FRAC_PI_2, "Sdg", "sdg")
}

/// T gate, `U1(π/4)`.
pub fn t() -> GateType {
    named_u1(FRAC_PI_4, "T", "t")
}

/// T-dagger gate, `U1(-π/4)`.
pub fn tdg() -> GateType {
    named_u1(-FRAC_PI_4, "Tdg", "tdg")
}

/// Discrete specializations exported under their own mnemonic.
pub fn named_specializations() -> Vec<GateType> {
    vec![s(), sdg(), t(), tdg()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::instruction::Instruction;
    use crate::ir::matrix::{conjugate_transpose, is_unitary, max_abs_diff, UNITARY_TOLERANCE};
    use std::f64::consts::PI;

    fn sample(gate_type: &GateType) -> Gate {
        let args = [0.3, -1.7, 2.9];
        gate_type
            .instantiate(args[..gate_type.num_angles()].to_vec())
            .unwrap()
    }

    #[test]
    fn test_catalogue_is_unitary() {
        for family in families() {
            let gate = sample(&GateType::from_family(family));
            assert!(is_unitary(&gate.u(), UNITARY_TOLERANCE), "{gate}");
        }
    }

    #[test]
    fn test_catalogue_dagger() {
        for family in families() {
            let gate = sample(&GateType::from_family(family));
            let dagger = gate.dagger().unwrap();
            assert_eq!(dagger.gate_type(), gate.gate_type());
            assert!(
                max_abs_diff(&dagger.u(), &conjugate_transpose(&gate.u())) < UNITARY_TOLERANCE,
                "{gate}"
            );
        }
    }

    #[test]
    fn test_crx_matrix() {
        let gate = crx().instantiate(vec![PI / 2.0]).unwrap();
        let u = gate.u();
        let (c, s) = ((PI / 4.0).cos(), (PI / 4.0).sin());
        assert_eq!(u.shape(), (4, 4));
        assert!((u[(0, 0)] - ONE).norm() < 1e-12);
        assert!((u[(1, 1)] - ONE).norm() < 1e-12);
        assert!(u[(0, 1)].norm() < 1e-12);
        assert!((u[(2, 2)] - real(c)).norm() < 1e-12);
        assert!((u[(2, 3)] - (-I * s)).norm() < 1e-12);
        assert!((u[(3, 2)] - (-I * s)).norm() < 1e-12);
        assert!((u[(3, 3)] - real(c)).norm() < 1e-12);
    }

    #[test]
    fn test_crx_exports() {
        let gate = crx().instantiate(vec![PI / 2.0]).unwrap();
        assert_eq!(gate.to_string(), "Crx(pi/2)");
        assert_eq!(gate.to_qasm(), "crx(0.50*pi)");
        assert_eq!(gate.qiskit_name(), "crx");
        let dagger = gate.dagger().unwrap();
        assert_eq!(dagger.args(), &[-PI / 2.0]);
        assert_eq!(dagger.to_string(), "Crx(-pi/2)");
    }

    #[test]
    fn test_swap() {
        let gate = swap().instance().unwrap();
        assert!(gate.is_discrete());
        assert_eq!(gate.to_string(), "Swap");
        assert_eq!(gate.to_qasm(), "swap");
        assert_eq!(gate.dagger().unwrap(), gate);
    }

    #[test]
    fn test_clifford_t_phases() {
        let t_gate = t().instance().unwrap();
        assert_eq!(t_gate.to_string(), "T");
        assert_eq!(t_gate.num_angles(), 0);
        assert_eq!(t_gate.to_qasm(), "t");
        assert_eq!(t_gate.qiskit_name(), "t");

        let t_dagger = t_gate.dagger().unwrap();
        assert!(t_dagger.is_discrete());
        assert_eq!(t_dagger.gate_type(), &tdg());
        assert_eq!(t_dagger.to_string(), "Tdg");
        assert_eq!(t_dagger.to_qasm(), "tdg");

        // Unnamed phases keep the family mnemonic.
        let phase = u1().make_discrete(vec![0.3 * PI], None).unwrap();
        let phase_dagger = phase.instance().unwrap().dagger().unwrap();
        assert_eq!(phase_dagger.to_string(), "U1(-3*pi/10)");
        assert_eq!(phase_dagger.to_qasm(), "u1(-0.30*pi)");

        let s_squared = &s().instance().unwrap().u() * &s().instance().unwrap().u();
        assert!(max_abs_diff(&s_squared, &z().instance().unwrap().u()) < 1e-12);
        assert_eq!(sdg().instance().unwrap().dagger().unwrap().gate_type(), &s());
    }

    #[test]
    fn test_zero_angle_dagger_keeps_type() {
        let still = rx().make_discrete(vec![0.0], None).unwrap();
        let dagger = still.instance().unwrap().dagger().unwrap();
        assert_eq!(dagger.gate_type(), &still);
        assert_eq!(dagger.to_string(), "Rx(0)");

        let tilt = u3().make_discrete(vec![0.7, 0.0, 0.0], None).unwrap();
        let tilt_dagger = tilt.instance().unwrap().dagger().unwrap();
        assert_eq!(
            tilt_dagger.gate_type(),
            &u3().make_discrete(vec![-0.7, 0.0, 0.0], None).unwrap()
        );
    }

    #[test]
    fn test_discrete_matches_continuous() {
        for angle in [PI / 3.0, -0.4, 2.5] {
            let continuous = crx().instantiate(vec![angle]).unwrap();
            let fixed = crx().make_discrete(vec![angle], None).unwrap();
            assert_eq!(fixed.instance().unwrap().u(), continuous.u());
        }
    }

    #[test]
    fn test_u3_dagger_swaps_phases() {
        let gate = u3().instantiate(vec![0.3, 0.5, 0.7]).unwrap();
        assert_eq!(gate.dagger().unwrap().args(), &[-0.3, -0.7, -0.5]);
        assert_eq!(gate.to_string(), "U3(0.3, 0.5, 0.7)");
    }
}
