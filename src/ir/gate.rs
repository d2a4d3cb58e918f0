//! Gate families, gate types and gate instances.
//!
//! A [`GateFamily`] holds the rules of one kind of gate: arity, matrix,
//! adjoint and export names. A [`GateType`] is the descriptor callers pass
//! around: either the continuous family itself or a discrete specialization of
//! it with the angles baked in. A [`Gate`] is an immutable instance carrying
//! its angles and the unitary computed from them.
//!
//! # Examples
//!
//! ```
//! use q_gates::ir::gates;
//! use q_gates::Instruction;
//! use std::f64::consts::PI;
//!
//! let crx = gates::crx().instantiate(vec![PI / 2.0]).unwrap();
//! assert_eq!(crx.to_string(), "Crx(pi/2)");
//! assert_eq!(crx.to_qasm(), "crx(0.50*pi)");
//!
//! let half_turn = gates::crx().make_discrete(vec![PI / 2.0], None).unwrap();
//! let fixed = half_turn.instance().unwrap();
//! assert!(fixed.is_discrete());
//! assert_eq!(fixed.num_angles(), 0);
//! assert_eq!(fixed.u(), crx.u());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tracing::debug;

use super::angle::{self, Representation};
use super::gates;
use super::instruction::Instruction;
use super::matrix::{self, Matrix};
use crate::error::{GateError, GateResult};

/// The rules shared by every instance of one kind of gate.
///
/// Implementors are usually unit structs. Operands follow the
/// `[target, control, ...]` order described in [`matrix`](super::matrix);
/// families that deviate must say so through [`GateFamily::controls`].
pub trait GateFamily: fmt::Debug + Send + Sync {
    /// Family identifier, also the display name of the continuous type.
    fn name(&self) -> &'static str;

    /// Number of qubits the gate acts on.
    fn num_qubits(&self) -> usize;

    /// Number of free angles.
    fn num_angles(&self) -> usize {
        0
    }

    /// Whether instances carry no free parameters.
    fn is_discrete(&self) -> bool {
        self.num_angles() == 0
    }

    /// Operand positions that act as controls.
    fn controls(&self) -> &'static [usize] {
        &[]
    }

    /// Unitary for the given angles. Must be pure.
    fn calculate_u(&self, args: &[f64]) -> Matrix;

    /// Adjoint of a continuous instance of this family.
    fn dagger(&self, _gate: &Gate) -> GateResult<Gate> {
        Err(GateError::NotImplemented {
            family: self.name().to_string(),
            operation: "dagger",
        })
    }

    /// Lowercase OpenQASM mnemonic.
    fn qasm_name(&self) -> &'static str;

    /// Canonical gate name in Qiskit.
    fn qiskit_name(&self) -> &'static str;

    /// OpenQASM rendering: the mnemonic, followed by decimal angles when the
    /// gate carries any.
    fn to_qasm(&self, gate: &Gate) -> String {
        if gate.args().is_empty() {
            self.qasm_name().to_string()
        } else {
            format!(
                "{}({})",
                self.qasm_name(),
                gate.angles(Representation::Decimal).join(",")
            )
        }
    }
}

/// Descriptor of a gate type.
///
/// Two descriptors are equal when they belong to the same family and fix the
/// same angles (bitwise, with `-0.0 == 0.0`); display and export names are
/// not part of the identity.
#[derive(Debug, Clone)]
pub struct GateType {
    family: Arc<dyn GateFamily>,
    fixed_angles: Option<Vec<f64>>,
    display_name: Option<String>,
    /// QASM and Qiskit name of a named specialization, e.g. `t`.
    export_name: Option<&'static str>,
}

impl GateType {
    /// The continuous type of `family`.
    pub fn of<F: GateFamily + 'static>(family: F) -> Self {
        Self::from_family(Arc::new(family))
    }

    /// The continuous type of a shared family handle.
    pub fn from_family(family: Arc<dyn GateFamily>) -> Self {
        Self {
            family,
            fixed_angles: None,
            display_name: None,
            export_name: None,
        }
    }

    /// Specialization without argument validation; callers guarantee the
    /// angle count.
    pub(crate) fn specialize(&self, angles: Vec<f64>, name: Option<String>) -> Self {
        let display_name = name.unwrap_or_else(|| {
            format!("{}({})", self.family.name(), angle::args_to_str(&angles))
        });
        debug!(
            family = self.family.name(),
            name = %display_name,
            "derived discrete gate type"
        );
        Self {
            family: Arc::clone(&self.family),
            fixed_angles: Some(angles),
            display_name: Some(display_name),
            export_name: None,
        }
    }

    pub(crate) fn with_export_name(mut self, name: &'static str) -> Self {
        self.export_name = Some(name);
        self
    }

    /// Fixes the angles of a continuous type.
    ///
    /// Discrete types are returned unchanged. Otherwise `angles` must match
    /// the family's angle count; the resulting type takes no arguments and is
    /// named `"<Family>(<angles>)"` unless `name` is given.
    pub fn make_discrete(&self, angles: Vec<f64>, name: Option<String>) -> GateResult<Self> {
        if self.is_discrete() {
            return Ok(self.clone());
        }
        let expected = self.family.num_angles();
        if angles.len() != expected {
            return Err(GateError::ArgumentCount {
                gate_name: self.name().to_string(),
                expected,
                got: angles.len(),
            });
        }
        check_finite(self.name(), &angles)?;
        Ok(self.specialize(angles, name))
    }

    /// Builds an instance with the given free angles.
    pub fn instantiate(&self, args: Vec<f64>) -> GateResult<Gate> {
        Gate::new(self.clone(), args)
    }

    /// Builds an instance of a type without free angles.
    pub fn instance(&self) -> GateResult<Gate> {
        self.instantiate(Vec::new())
    }

    /// The family this type belongs to.
    pub fn family(&self) -> &dyn GateFamily {
        self.family.as_ref()
    }

    /// Shared handle to the family.
    pub fn family_handle(&self) -> &Arc<dyn GateFamily> {
        &self.family
    }

    /// Identifier of the family.
    pub fn family_id(&self) -> &'static str {
        self.family.name()
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.family.name())
    }

    /// Mnemonic used instead of the family's in QASM and Qiskit exports.
    pub fn export_name(&self) -> Option<&'static str> {
        self.export_name
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.family.num_qubits()
    }

    /// Number of free angles; zero for discrete specializations.
    pub fn num_angles(&self) -> usize {
        if self.fixed_angles.is_some() {
            0
        } else {
            self.family.num_angles()
        }
    }

    /// Whether instances of this type carry no free angles.
    pub fn is_discrete(&self) -> bool {
        self.fixed_angles.is_some() || self.family.is_discrete()
    }

    /// Angles baked into a discrete specialization.
    pub fn fixed_angles(&self) -> Option<&[f64]> {
        self.fixed_angles.as_deref()
    }

    /// The continuous type of the same family.
    pub fn continuous(&self) -> Self {
        Self::from_family(Arc::clone(&self.family))
    }

    /// Whether instances of `self` may stand in for instances of `other`.
    ///
    /// Holds when the types are equal or `other` is the continuous type of the
    /// family `self` specializes.
    pub fn is_subtype_of(&self, other: &GateType) -> bool {
        self == other || (other.fixed_angles.is_none() && self.family_id() == other.family_id())
    }

    /// `-0.0` compares as `0.0`.
    fn angle_bits(&self) -> Option<Vec<u64>> {
        self.fixed_angles
            .as_ref()
            .map(|angles| angles.iter().map(|&a| canonical_bits(a)).collect())
    }
}

fn canonical_bits(angle: f64) -> u64 {
    if angle == 0.0 {
        0.0f64.to_bits()
    } else {
        angle.to_bits()
    }
}

impl PartialEq for GateType {
    fn eq(&self, other: &Self) -> bool {
        self.family_id() == other.family_id() && self.angle_bits() == other.angle_bits()
    }
}

impl Eq for GateType {}

impl Hash for GateType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family_id().hash(state);
        self.angle_bits().hash(state);
    }
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An instance of a gate type.
///
/// The unitary is computed once, at construction, from the angles. Gates are
/// immutable; [`Gate::with_args`] builds a new gate with other angles.
#[derive(Debug, Clone)]
pub struct Gate {
    gate_type: GateType,
    args: Vec<f64>,
    u: Matrix,
}

impl Gate {
    /// Creates a gate of `gate_type` with the given free angles.
    ///
    /// `args` must have exactly `gate_type.num_angles()` entries, which is
    /// zero for discrete types; their fixed angles are used instead.
    pub fn new(gate_type: GateType, args: Vec<f64>) -> GateResult<Self> {
        let expected = gate_type.num_angles();
        if args.len() != expected {
            return Err(GateError::ArgumentCount {
                gate_name: gate_type.name().to_string(),
                expected,
                got: args.len(),
            });
        }
        let args = match gate_type.fixed_angles() {
            Some(fixed) => fixed.to_vec(),
            None => args,
        };
        check_finite(gate_type.name(), &args)?;
        let u = compute_u(gate_type.family(), &args)?;
        Ok(Self { gate_type, args, u })
    }

    /// Type of this gate.
    pub fn gate_type(&self) -> &GateType {
        &self.gate_type
    }

    /// Angles, in declaration order. For discrete specializations these are
    /// the baked-in literals.
    pub fn args(&self) -> &[f64] {
        &self.args
    }

    /// Copy of the unitary.
    pub fn u(&self) -> Matrix {
        self.u.clone()
    }

    /// Whether the angles are fixed by the type.
    pub fn is_discrete(&self) -> bool {
        self.gate_type.is_discrete()
    }

    /// A gate of the same type with other angles.
    pub fn with_args(&self, args: Vec<f64>) -> GateResult<Self> {
        Self::new(self.gate_type.clone(), args)
    }

    /// Hermitian conjugate of this gate.
    ///
    /// Discrete specializations go through their continuous family: the
    /// family's rule is applied to a continuous copy and the result is fixed
    /// again. A result matching a named specialization such as `Tdg` takes
    /// its labels.
    pub fn dagger(&self) -> GateResult<Self> {
        if self.gate_type.fixed_angles().is_none() {
            return self.gate_type.family().dagger(self);
        }
        let continuous = Self::new(self.gate_type.continuous(), self.args.clone())?;
        let mut dagger = continuous.dagger()?.into_discrete()?;
        if let Some(named) = gates::named_specializations()
            .into_iter()
            .find(|named| named == &dagger.gate_type)
        {
            dagger.gate_type = named;
        }
        Ok(dagger)
    }

    /// Re-labels this gate as a discrete specialization of its family.
    pub fn into_discrete(self) -> GateResult<Self> {
        let gate_type = self.gate_type.make_discrete(self.args.clone(), None)?;
        Ok(Self {
            gate_type,
            args: self.args,
            u: self.u,
        })
    }

    /// Angles rendered as text.
    pub fn angles(&self, representation: Representation) -> Vec<String> {
        angle::format_args(&self.args, representation)
    }

    /// OpenQASM rendering.
    pub fn to_qasm(&self) -> String {
        match self.gate_type.export_name() {
            Some(name) => name.to_string(),
            None => self.gate_type.family().to_qasm(self),
        }
    }

    /// Canonical gate name in Qiskit.
    pub fn qiskit_name(&self) -> &'static str {
        self.gate_type
            .export_name()
            .unwrap_or_else(|| self.gate_type.family().qiskit_name())
    }
}

fn check_finite(gate_name: &str, angles: &[f64]) -> GateResult<()> {
    match angles.iter().find(|a| !a.is_finite()) {
        Some(&angle) => Err(GateError::NonFiniteAngle {
            gate_name: gate_name.to_string(),
            angle,
        }),
        None => Ok(()),
    }
}

fn compute_u(family: &dyn GateFamily, args: &[f64]) -> GateResult<Matrix> {
    let u = family.calculate_u(args);
    let expected = 1usize << family.num_qubits();
    if u.nrows() != expected || u.ncols() != expected {
        return Err(GateError::MatrixShape {
            family: family.name().to_string(),
            rows: u.nrows(),
            cols: u.ncols(),
            expected,
        });
    }
    matrix::check_control_layout(&u, family.controls()).map_err(|basis_state| {
        GateError::ControlLayout {
            family: family.name().to_string(),
            basis_state,
        }
    })?;
    debug_assert!(
        matrix::is_unitary(&u, matrix::UNITARY_TOLERANCE),
        "{} produced a non-unitary matrix for {:?}",
        family.name(),
        args
    );
    Ok(u)
}

impl Instruction for Gate {
    fn name(&self) -> &str {
        self.gate_type.name()
    }

    fn num_qubits(&self) -> usize {
        self.gate_type.num_qubits()
    }

    fn num_cregs(&self) -> usize {
        0
    }

    fn num_angles(&self) -> usize {
        self.gate_type.num_angles()
    }
}

impl PartialEq for Gate {
    fn eq(&self, other: &Self) -> bool {
        self.gate_type == other.gate_type && self.args == other.args
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_discrete() {
            f.write_str(self.gate_type.name())
        } else {
            write!(
                f,
                "{}({})",
                self.gate_type.name(),
                angle::args_to_str(&self.args)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::matrix::{from_rows, ONE, ZERO};
    use std::f64::consts::PI;

    /// A phase family with no adjoint rule.
    #[derive(Debug)]
    struct Bare;

    impl GateFamily for Bare {
        fn name(&self) -> &'static str {
            "Bare"
        }
        fn num_qubits(&self) -> usize {
            1
        }
        fn num_angles(&self) -> usize {
            1
        }
        fn calculate_u(&self, args: &[f64]) -> Matrix {
            from_rows(2, &[ONE, ZERO, ZERO, num_complex::Complex64::from_polar(1.0, args[0])])
        }
        fn qasm_name(&self) -> &'static str {
            "bare"
        }
        fn qiskit_name(&self) -> &'static str {
            "p"
        }
    }

    /// Claims a control on operand 0 but controls on operand 1.
    #[derive(Debug)]
    struct Misordered;

    impl GateFamily for Misordered {
        fn name(&self) -> &'static str {
            "Misordered"
        }
        fn num_qubits(&self) -> usize {
            2
        }
        fn controls(&self) -> &'static [usize] {
            &[0]
        }
        fn calculate_u(&self, _args: &[f64]) -> Matrix {
            matrix::controlled(&from_rows(2, &[ZERO, ONE, ONE, ZERO]))
        }
        fn qasm_name(&self) -> &'static str {
            "mis"
        }
        fn qiskit_name(&self) -> &'static str {
            "mis"
        }
    }

    /// Returns a 1-qubit matrix while declaring two qubits.
    #[derive(Debug)]
    struct WrongShape;

    impl GateFamily for WrongShape {
        fn name(&self) -> &'static str {
            "WrongShape"
        }
        fn num_qubits(&self) -> usize {
            2
        }
        fn calculate_u(&self, _args: &[f64]) -> Matrix {
            matrix::identity(2)
        }
        fn qasm_name(&self) -> &'static str {
            "ws"
        }
        fn qiskit_name(&self) -> &'static str {
            "ws"
        }
    }

    #[test]
    fn test_argument_count() {
        let err = GateType::of(Bare).instantiate(vec![]).unwrap_err();
        assert!(matches!(
            err,
            GateError::ArgumentCount {
                expected: 1,
                got: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_discrete_rejects_arguments() {
        let fixed = GateType::of(Bare).make_discrete(vec![PI], None).unwrap();
        assert!(fixed.instantiate(vec![PI]).is_err());
        assert_eq!(fixed.instance().unwrap().args(), &[PI]);
    }

    #[test]
    fn test_make_discrete_wrong_count() {
        assert!(GateType::of(Bare).make_discrete(vec![], None).is_err());
    }

    #[test]
    fn test_make_discrete_is_idempotent() {
        let fixed = GateType::of(Bare)
            .make_discrete(vec![PI / 2.0], Some("Half".to_string()))
            .unwrap();
        let again = fixed.make_discrete(vec![1.0], None).unwrap();
        assert_eq!(again, fixed);
        assert_eq!(again.name(), "Half");
        assert_eq!(again.fixed_angles(), Some(&[PI / 2.0][..]));
    }

    #[test]
    fn test_default_discrete_name() {
        let fixed = GateType::of(Bare).make_discrete(vec![-PI / 4.0], None).unwrap();
        assert_eq!(fixed.name(), "Bare(-pi/4)");
        assert_eq!(fixed.instance().unwrap().to_string(), "Bare(-pi/4)");
    }

    #[test]
    fn test_missing_dagger() {
        let gate = GateType::of(Bare).instantiate(vec![1.0]).unwrap();
        assert!(matches!(
            gate.dagger(),
            Err(GateError::NotImplemented {
                operation: "dagger",
                ..
            })
        ));
        let fixed = gate.into_discrete().unwrap();
        assert!(fixed.dagger().is_err());
    }

    #[test]
    fn test_control_layout_violation() {
        let err = GateType::of(Misordered).instance().unwrap_err();
        assert!(matches!(
            err,
            GateError::ControlLayout { basis_state: 2, .. }
        ));
    }

    #[test]
    fn test_matrix_shape() {
        let err = GateType::of(WrongShape).instance().unwrap_err();
        assert!(matches!(
            err,
            GateError::MatrixShape {
                rows: 2,
                expected: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_subtype() {
        let family = GateType::of(Bare);
        let fixed = family.make_discrete(vec![PI], None).unwrap();
        assert!(fixed.is_subtype_of(&family));
        assert!(!family.is_subtype_of(&fixed));
        assert_eq!(fixed.continuous(), family);
    }

    #[test]
    fn test_identity_ignores_display_name() {
        let family = GateType::of(Bare);
        let a = family.make_discrete(vec![PI], Some("A".into())).unwrap();
        let b = family.make_discrete(vec![PI], None).unwrap();
        assert_eq!(a, b);
        let c = family.make_discrete(vec![-PI], None).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_signed_zero_is_one_type() {
        let family = GateType::of(Bare);
        let zero = family.make_discrete(vec![0.0], None).unwrap();
        let negative_zero = family.make_discrete(vec![-0.0], None).unwrap();
        assert_eq!(zero, negative_zero);

        let mut seen = std::collections::HashSet::new();
        seen.insert(zero);
        assert!(!seen.insert(negative_zero));
    }

    #[test]
    fn test_non_finite_angles_rejected() {
        let family = GateType::of(Bare);
        assert!(matches!(
            family.make_discrete(vec![f64::NAN], None),
            Err(GateError::NonFiniteAngle { .. })
        ));
        assert!(matches!(
            family.instantiate(vec![f64::INFINITY]),
            Err(GateError::NonFiniteAngle { .. })
        ));
    }

    #[test]
    fn test_with_args_recomputes_matrix() {
        let gate = GateType::of(Bare).instantiate(vec![0.0]).unwrap();
        let turned = gate.with_args(vec![PI]).unwrap();
        assert_eq!(gate.args(), &[0.0]);
        assert!((turned.u()[(1, 1)] - num_complex::Complex64::new(-1.0, 0.0)).norm() < 1e-12);
        assert!((gate.u()[(1, 1)] - ONE).norm() < 1e-12);
    }
}
