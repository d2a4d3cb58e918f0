//! Hardware profiles: a gate set on a qubit connectivity, with resource limits.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::connectivity::{rigetti, QubitConnectivity};
use crate::error::{HardwareError, HardwareResult};
use crate::gate_set::{GateSet, GateSetRecord};
use crate::ir::{Gate, GateRegistry, GateType, Instruction};

/// Hardware Specification
#[derive(Debug, Clone)]
pub struct Hardware {
    name: String,
    connectivity: QubitConnectivity,
    gate_set: GateSet,
    num_gates: Option<usize>,
    qubit_cost: Option<Vec<f64>>,
}

/// Serialized form of a [`Hardware`] profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareProfile {
    pub name: String,
    pub connectivity: QubitConnectivity,
    pub gate_set: GateSetRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_gates: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qubit_cost: Option<Vec<f64>>,
}

impl Hardware {
    /// Assembles a profile. `qubit_cost`, when given, needs one entry per
    /// qubit.
    pub fn new(
        name: impl Into<String>,
        connectivity: QubitConnectivity,
        gate_set: GateSet,
        num_gates: Option<usize>,
        qubit_cost: Option<Vec<f64>>,
    ) -> HardwareResult<Self> {
        let name = name.into();
        if let Some(costs) = &qubit_cost {
            if costs.len() != connectivity.num_qubits() {
                return Err(HardwareError::QubitCostLength {
                    name,
                    num_qubits: connectivity.num_qubits(),
                    got: costs.len(),
                });
            }
        }
        Ok(Self::assemble(name, connectivity, gate_set, num_gates, qubit_cost))
    }

    fn assemble(
        name: impl Into<String>,
        connectivity: QubitConnectivity,
        gate_set: GateSet,
        num_gates: Option<usize>,
        qubit_cost: Option<Vec<f64>>,
    ) -> Self {
        let name = name.into();
        debug!(
            hardware = %name,
            num_qubits = connectivity.num_qubits(),
            connectivity = connectivity.name(),
            gate_set = gate_set.name(),
            gates = gate_set.len(),
            "assembled hardware profile"
        );
        Self {
            name,
            connectivity,
            gate_set,
            num_gates,
            qubit_cost,
        }
    }

    /// Fully connected hardware with the Clifford + T gate set.
    pub fn clifford_t_all_to_all(num_qubits: usize) -> Self {
        Self::assemble(
            "CliffordTAll2All",
            QubitConnectivity::all_to_all(num_qubits),
            GateSet::clifford_t().reduce_gate_set(num_qubits),
            None,
            None,
        )
    }

    /// Nearest-neighbour hardware with the Clifford + T gate set.
    pub fn clifford_t_line(num_qubits: usize) -> Self {
        Self::assemble(
            "CliffordTLine",
            QubitConnectivity::line(num_qubits),
            GateSet::clifford_t().reduce_gate_set(num_qubits),
            None,
            None,
        )
    }

    /// Rigetti Agave.
    pub fn agave() -> Self {
        let connectivity = rigetti::agave();
        let gate_set = GateSet::rigetti().reduce_gate_set(connectivity.num_qubits());
        Self::assemble("RigettiAgave", connectivity, gate_set, None, None)
    }

    /// Rigetti Aspen.
    pub fn aspen() -> Self {
        let connectivity = rigetti::aspen();
        let gate_set = GateSet::rigetti().reduce_gate_set(connectivity.num_qubits());
        Self::assemble("RigettiAspen", connectivity, gate_set, None, None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_qubits(&self) -> usize {
        self.connectivity.num_qubits()
    }

    pub fn connectivity(&self) -> &QubitConnectivity {
        &self.connectivity
    }

    pub fn gate_set(&self) -> &GateSet {
        &self.gate_set
    }

    pub fn supports_type(&self, gate_type: &GateType) -> bool {
        self.gate_set.supports_type(gate_type)
    }

    pub fn supports(&self, gate: &Gate) -> bool {
        self.gate_set.supports(gate)
    }

    pub fn connected(&self, i: usize, j: usize) -> bool {
        self.connectivity.connected(i, j)
    }

    pub fn max_gates(&self) -> Option<usize> {
        self.num_gates
    }

    /// Gates still available after `used` have been placed; `None` when
    /// unbounded.
    pub fn remaining_gates(&self, used: usize) -> Option<usize> {
        self.num_gates.map(|max| max.saturating_sub(used))
    }

    /// Cost of using `qubit`; zero without a cost table or out of range.
    pub fn qubit_cost(&self, qubit: usize) -> f64 {
        self.qubit_cost
            .as_ref()
            .and_then(|costs| costs.get(qubit).copied())
            .unwrap_or(0.0)
    }

    pub fn reduce_gate_set(&self, num_qubits: usize) -> GateSet {
        self.gate_set.reduce_gate_set(num_qubits)
    }

    /// Checks that `gate` may be applied to `qubits` on this device.
    ///
    /// Operands are `[target, control, ...]`; each control must be connected
    /// to the target.
    pub fn check_operation(&self, gate: &Gate, qubits: &[usize]) -> HardwareResult<()> {
        if !self.supports(gate) {
            return Err(HardwareError::UnsupportedGate {
                hardware: self.name.clone(),
                gate: gate.to_string(),
            });
        }
        if qubits.len() != gate.num_qubits() {
            return Err(HardwareError::OperandCount {
                gate: gate.to_string(),
                expected: gate.num_qubits(),
                got: qubits.len(),
            });
        }
        for (k, &qubit) in qubits.iter().enumerate() {
            if qubit >= self.num_qubits() {
                return Err(HardwareError::InvalidQubit {
                    hardware: self.name.clone(),
                    qubit,
                    num_qubits: self.num_qubits(),
                });
            }
            if qubits[..k].contains(&qubit) {
                return Err(HardwareError::DuplicateOperand {
                    gate: gate.to_string(),
                    qubit,
                });
            }
        }
        if let Some((&target, controls)) = qubits.split_first() {
            for &control in controls {
                if !self.connected(control, target) {
                    return Err(HardwareError::NotConnected {
                        hardware: self.name.clone(),
                        control,
                        target,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn to_profile(&self) -> HardwareProfile {
        HardwareProfile {
            name: self.name.clone(),
            connectivity: self.connectivity.clone(),
            gate_set: self.gate_set.to_record(),
            num_gates: self.num_gates,
            qubit_cost: self.qubit_cost.clone(),
        }
    }

    /// Rebuilds a profile, resolving gate families through `registry`.
    pub fn from_profile(profile: HardwareProfile, registry: &GateRegistry) -> HardwareResult<Self> {
        let gate_set = GateSet::from_record(&profile.gate_set, registry)?;
        Self::new(
            profile.name,
            profile.connectivity,
            gate_set,
            profile.num_gates,
            profile.qubit_cost,
        )
    }

    pub fn to_json(&self) -> HardwareResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_profile())?)
    }

    pub fn from_json(json: &str, registry: &GateRegistry) -> HardwareResult<Self> {
        let profile: HardwareProfile = serde_json::from_str(json)?;
        Self::from_profile(profile, registry)
    }
}
