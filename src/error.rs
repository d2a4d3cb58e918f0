//! Error types for gate definitions and hardware profiles.

use thiserror::Error;

/// Errors raised while building or manipulating gates.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GateError {
    /// Wrong number of angle arguments for the gate type.
    #[error("Gate '{gate_name}' expects {expected} angle arguments, got {got}")]
    ArgumentCount {
        gate_name: String,
        expected: usize,
        got: usize,
    },

    /// NaN or infinite angle.
    #[error("Gate '{gate_name}' got non-finite angle {angle}")]
    NonFiniteAngle { gate_name: String, angle: f64 },

    /// The gate family does not provide the requested rule.
    #[error("Gate family '{family}' does not implement {operation}")]
    NotImplemented {
        family: String,
        operation: &'static str,
    },

    /// `calculate_u` returned a matrix of the wrong dimension.
    #[error("Gate family '{family}' produced a {rows}x{cols} matrix, expected {expected}x{expected}")]
    MatrixShape {
        family: String,
        rows: usize,
        cols: usize,
        expected: usize,
    },

    /// The matrix does not act as the identity where its controls are unset.
    #[error("Gate family '{family}' disturbs basis state {basis_state} although its controls are unset")]
    ControlLayout { family: String, basis_state: usize },

    /// A registered variant is not a discrete specialization of its family.
    #[error("'{variant}' is not a discrete specialization of '{family}'")]
    InvalidVariant { family: String, variant: String },

    /// Variants were registered for a type the set does not contain.
    #[error("Gate set '{gate_set}' has no member '{family}' to register variants for")]
    VariantNotMember { gate_set: String, family: String },

    #[error("Unknown gate family: {0}")]
    UnknownFamily(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for gate operations.
pub type GateResult<T> = Result<T, GateError>;

/// Errors raised while building connectivity graphs and hardware profiles.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HardwareError {
    #[error("Edge ({control}, {target}) is out of range for {num_qubits} qubits in '{name}'")]
    QubitOutOfRange {
        name: String,
        control: usize,
        target: usize,
        num_qubits: usize,
    },

    #[error("Self-loop on qubit {qubit} in '{name}'")]
    SelfLoop { name: String, qubit: usize },

    /// Per-qubit costs do not cover every qubit.
    #[error("Hardware '{name}' has {num_qubits} qubits but {got} qubit costs")]
    QubitCostLength {
        name: String,
        num_qubits: usize,
        got: usize,
    },

    #[error("Gate '{gate}' is not supported by '{hardware}'")]
    UnsupportedGate { hardware: String, gate: String },

    #[error("Gate '{gate}' acts on {expected} qubits, got {got}")]
    OperandCount {
        gate: String,
        expected: usize,
        got: usize,
    },

    #[error("Duplicate qubit {qubit} in operation (gate: {gate})")]
    DuplicateOperand { gate: String, qubit: usize },

    #[error("Qubit {qubit} does not exist on '{hardware}' ({num_qubits} qubits)")]
    InvalidQubit {
        hardware: String,
        qubit: usize,
        num_qubits: usize,
    },

    /// A control qubit has no edge to its target.
    #[error("Qubits {control} -> {target} are not connected on '{hardware}'")]
    NotConnected {
        hardware: String,
        control: usize,
        target: usize,
    },

    /// Gate construction failed while loading a profile.
    #[error(transparent)]
    Gate(#[from] GateError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for hardware operations.
pub type HardwareResult<T> = Result<T, HardwareError>;
