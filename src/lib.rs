//! Quantum gate definitions and hardware descriptions.
//!
//! - [`ir`]: gate families, discrete specializations, unitaries and angle
//!   formatting.
//! - [`parser`]: reads canonical angle strings and gate calls back.
//! - [`gate_set`]: named collections of gate types.
//! - [`connectivity`]: directed qubit coupling maps.
//! - [`hardware`]: a gate set on a connectivity, with resource limits.
//!
//! ```
//! use q_gates::ir::gates;
//! use q_gates::Hardware;
//!
//! let hw = Hardware::clifford_t_line(3);
//! let cnot = gates::cnot().instance().unwrap();
//! assert!(hw.check_operation(&cnot, &[0, 1]).is_ok());
//! assert!(hw.check_operation(&cnot, &[0, 2]).is_err());
//! ```

pub mod connectivity;
pub mod error;
pub mod gate_set;
pub mod hardware;
pub mod ir;
pub mod parser;

pub use connectivity::QubitConnectivity;
pub use error::{GateError, GateResult, HardwareError, HardwareResult};
pub use gate_set::GateSet;
pub use hardware::{Hardware, HardwareProfile};
pub use ir::{Gate, GateFamily, GateRegistry, GateType, Instruction, Representation};
pub use parser::{parse_angle, parse_gate};
