/// Identity and arity shared by every circuit instruction.
///
/// Arities are fixed per concrete type. Gates implement this alongside their
/// unitary semantics; non-unitary instructions such as [`Measure`] only carry
/// the arity contract.
pub trait Instruction {
    /// Display name of the instruction type.
    fn name(&self) -> &str;

    /// Number of qubits the instruction acts on.
    fn num_qubits(&self) -> usize;

    /// Number of classical bits the instruction writes.
    fn num_cregs(&self) -> usize;

    /// Number of free angle parameters accompanying each instance.
    fn num_angles(&self) -> usize;
}

/// Measurement of one qubit into one classical bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Measure;

impl Measure {
    /// OpenQASM mnemonic.
    pub fn to_qasm(&self) -> &'static str {
        "measure"
    }
}

impl Instruction for Measure {
    fn name(&self) -> &str {
        "Measure"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn num_cregs(&self) -> usize {
        1
    }

    fn num_angles(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_arity() {
        let m = Measure;
        assert_eq!(m.name(), "Measure");
        assert_eq!(m.num_qubits(), 1);
        assert_eq!(m.num_cregs(), 1);
        assert_eq!(m.num_angles(), 0);
        assert_eq!(m.to_qasm(), "measure");
    }
}
