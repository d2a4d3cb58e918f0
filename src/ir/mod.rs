pub mod angle;
pub mod gate;
pub mod gates;
pub mod instruction;
pub mod matrix;
pub mod registry;

// Re-export for easier access
pub use angle::{format_angle, format_args, Representation, ANGLE_TOLERANCE};
pub use gate::{Gate, GateFamily, GateType};
pub use instruction::{Instruction, Measure};
pub use matrix::Matrix;
pub use registry::{GateRegistry, GateTypeRecord};
