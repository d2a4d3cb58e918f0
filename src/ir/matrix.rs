//! Dense complex matrices and the numeric checks gates rely on.
//!
//! Operand order is `[target, control, ...]` and little-endian: operand `k`
//! is bit `k` of a computational basis index. With that convention a control
//! on the last operand is the most significant Kronecker factor, which is
//! what [`controlled`] builds.

use nalgebra::DMatrix;
use num_complex::Complex64;

/// Square complex matrix of dimension `2^num_qubits`.
pub type Matrix = DMatrix<Complex64>;

/// Tolerance for unitarity and matrix equality checks.
pub const UNITARY_TOLERANCE: f64 = 1e-9;

pub(crate) const ZERO: Complex64 = Complex64::new(0.0, 0.0);
pub(crate) const ONE: Complex64 = Complex64::new(1.0, 0.0);
pub(crate) const I: Complex64 = Complex64::new(0.0, 1.0);

/// Builds a `dim x dim` matrix from row-major entries.
pub fn from_rows(dim: usize, entries: &[Complex64]) -> Matrix {
    DMatrix::from_row_slice(dim, dim, entries)
}

/// Identity of dimension `dim`.
pub fn identity(dim: usize) -> Matrix {
    DMatrix::identity(dim, dim)
}

/// `|0><0| ⊗ I + |1><1| ⊗ sub`, i.e. `sub` applied when the most significant
/// qubit is set.
pub fn controlled(sub: &Matrix) -> Matrix {
    let p0 = from_rows(2, &[ONE, ZERO, ZERO, ZERO]);
    let p1 = from_rows(2, &[ZERO, ZERO, ZERO, ONE]);
    p0.kronecker(&identity(sub.nrows())) + p1.kronecker(sub)
}

/// Hermitian conjugate.
pub fn conjugate_transpose(m: &Matrix) -> Matrix {
    m.adjoint()
}

/// Largest entrywise distance between two matrices, infinite on shape mismatch.
pub fn max_abs_diff(a: &Matrix, b: &Matrix) -> f64 {
    if a.shape() != b.shape() {
        return f64::INFINITY;
    }
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}

/// Checks `M · Mᴴ = I` entrywise within `tolerance`.
pub fn is_unitary(m: &Matrix, tolerance: f64) -> bool {
    if !m.is_square() {
        return false;
    }
    let product = m * m.adjoint();
    max_abs_diff(&product, &identity(m.nrows())) < tolerance
}

/// Verifies that `m` leaves every basis state untouched unless all operands
/// listed in `controls` are set.
///
/// Returns the first offending basis index on failure.
pub fn check_control_layout(m: &Matrix, controls: &[usize]) -> Result<(), usize> {
    if controls.is_empty() {
        return Ok(());
    }
    let mask = controls.iter().fold(0usize, |acc, &c| acc | (1 << c));
    let dim = m.nrows();
    for column in (0..dim).filter(|col| col & mask != mask) {
        for row in 0..dim {
            let expected = if row == column { ONE } else { ZERO };
            if (m[(row, column)] - expected).norm() > UNITARY_TOLERANCE {
                return Err(column);
            }
        }
    }
    Ok(())
}
