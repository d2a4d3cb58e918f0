//! Lookup of gate families by name.
//!
//! The registry is how textual or serialized gate descriptions are turned back
//! into [`GateType`]s. New families are added with [`GateRegistry::register`];
//! nothing else needs to change for them to be parsed or loaded.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::gate::{GateFamily, GateType};
use super::gates;
use crate::error::{GateError, GateResult};

/// Serialized form of a [`GateType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateTypeRecord {
    /// Family identifier, e.g. `"Crx"`.
    pub family: String,
    /// Fixed angles of a discrete specialization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angles: Option<Vec<f64>>,
    /// Display name of a discrete specialization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<&GateType> for GateTypeRecord {
    fn from(gate_type: &GateType) -> Self {
        let angles = gate_type.fixed_angles().map(<[f64]>::to_vec);
        let name = angles.as_ref().map(|_| gate_type.name().to_string());
        Self {
            family: gate_type.family_id().to_string(),
            angles,
            name,
        }
    }
}

/// Gate families indexed by identifier, plus named specializations such as
/// `T` that export under their own mnemonic.
#[derive(Debug, Clone, Default)]
pub struct GateRegistry {
    families: BTreeMap<&'static str, Arc<dyn GateFamily>>,
    named: Vec<GateType>,
}

impl GateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the whole standard catalogue.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for family in gates::families() {
            registry.register(family);
        }
        for gate_type in gates::named_specializations() {
            registry.register_named(gate_type);
        }
        registry
    }

    /// Adds a family, returning the one previously registered under the same
    /// identifier.
    pub fn register(&mut self, family: Arc<dyn GateFamily>) -> Option<Arc<dyn GateFamily>> {
        self.families.insert(family.name(), family)
    }

    /// Adds a discrete specialization that is looked up by its export name.
    /// Types without one are ignored.
    pub fn register_named(&mut self, gate_type: GateType) {
        if gate_type.export_name().is_some() && gate_type.fixed_angles().is_some() {
            self.named.retain(|known| known.export_name() != gate_type.export_name());
            self.named.push(gate_type);
        }
    }

    /// Number of registered families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Continuous types of every family, ordered by identifier.
    pub fn gate_types(&self) -> Vec<GateType> {
        self.families
            .values()
            .map(|f| GateType::from_family(Arc::clone(f)))
            .collect()
    }

    /// Continuous type of the family with identifier `id`.
    pub fn get(&self, id: &str) -> GateResult<GateType> {
        self.families
            .get(id)
            .map(|f| GateType::from_family(Arc::clone(f)))
            .ok_or_else(|| GateError::UnknownFamily(id.to_string()))
    }

    /// Type exported as `mnemonic` in OpenQASM: a family's continuous type or
    /// a named specialization.
    pub fn by_qasm(&self, mnemonic: &str) -> GateResult<GateType> {
        self.find(|f| f.qasm_name() == mnemonic)
            .or_else(|| self.find_named(mnemonic))
            .ok_or_else(|| GateError::UnknownFamily(mnemonic.to_string()))
    }

    /// Type named `name` in Qiskit.
    pub fn by_qiskit_name(&self, name: &str) -> GateResult<GateType> {
        self.find(|f| f.qiskit_name() == name)
            .or_else(|| self.find_named(name))
            .ok_or_else(|| GateError::UnknownFamily(name.to_string()))
    }

    /// Rebuilds a gate type from its serialized form.
    pub fn resolve(&self, record: &GateTypeRecord) -> GateResult<GateType> {
        let gate_type = self.get(&record.family)?;
        let Some(angles) = &record.angles else {
            return Ok(gate_type);
        };
        let fixed = gate_type.make_discrete(angles.clone(), record.name.clone())?;
        Ok(self
            .named
            .iter()
            .find(|named| **named == fixed)
            .cloned()
            .unwrap_or(fixed))
    }

    fn find_named(&self, export_name: &str) -> Option<GateType> {
        self.named
            .iter()
            .find(|named| named.export_name() == Some(export_name))
            .cloned()
    }

    fn find(&self, predicate: impl Fn(&dyn GateFamily) -> bool) -> Option<GateType> {
        self.families
            .values()
            .find(|f| predicate(f.as_ref()))
            .map(|f| GateType::from_family(Arc::clone(f)))
    }
}
