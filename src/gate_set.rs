//! Ordered collections of gate types describing what a device supports.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GateError, GateResult};
use crate::ir::{gates, Gate, GateRegistry, GateType, GateTypeRecord};

/// Discrete variants registered for one continuous member.
#[derive(Debug, Clone)]
struct Variants {
    family: GateType,
    variants: Vec<GateType>,
}

/// A named, ordered, duplicate-free set of gate types.
///
/// Membership is over types, not instances. Every derivation
/// ([`reduce_gate_set`](GateSet::reduce_gate_set), [`union`](GateSet::union),
/// [`with_variants`](GateSet::with_variants)) returns a new set.
#[derive(Debug, Clone)]
pub struct GateSet {
    name: String,
    gates: Vec<GateType>,
    variants: Vec<Variants>,
}

fn dedup(gate_types: impl IntoIterator<Item = GateType>) -> Vec<GateType> {
    let mut unique: Vec<GateType> = Vec::new();
    for gate_type in gate_types {
        if !unique.contains(&gate_type) {
            unique.push(gate_type);
        }
    }
    unique
}

impl GateSet {
    /// Creates a set, keeping the first occurrence of each type.
    pub fn new(name: impl Into<String>, gates: impl IntoIterator<Item = GateType>) -> Self {
        Self {
            name: name.into(),
            gates: dedup(gates),
            variants: Vec::new(),
        }
    }

    /// Registers the discrete specializations that replace the continuous
    /// member `family` when the set is reduced for a device.
    ///
    /// `family` must be a continuous member of the set and every variant a
    /// discrete specialization of it.
    pub fn with_variants(
        self,
        family: GateType,
        variants: impl IntoIterator<Item = GateType>,
    ) -> GateResult<Self> {
        if family.fixed_angles().is_some() || !self.contains(&family) {
            return Err(GateError::VariantNotMember {
                gate_set: self.name.clone(),
                family: family.name().to_string(),
            });
        }
        let variants = dedup(variants);
        if let Some(bad) = variants
            .iter()
            .find(|v| v.fixed_angles().is_none() || !v.is_subtype_of(&family))
        {
            return Err(GateError::InvalidVariant {
                family: family.name().to_string(),
                variant: bad.name().to_string(),
            });
        }
        Ok(self.push_variants(family, variants))
    }

    fn push_variants(mut self, family: GateType, variants: Vec<GateType>) -> Self {
        self.variants.retain(|entry| entry.family != family);
        self.variants.push(Variants { family, variants });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in insertion order.
    pub fn gates(&self) -> &[GateType] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GateType> {
        self.gates.iter()
    }

    /// Exact type membership.
    pub fn contains(&self, gate_type: &GateType) -> bool {
        self.gates.contains(gate_type)
    }

    /// Whether `gate_type`, or the continuous family it specializes, is a
    /// member.
    pub fn supports_type(&self, gate_type: &GateType) -> bool {
        self.gates.iter().any(|member| gate_type.is_subtype_of(member))
    }

    /// Whether instances like `gate` may be used with this set.
    pub fn supports(&self, gate: &Gate) -> bool {
        self.supports_type(gate.gate_type())
    }

    /// Discrete variants registered for `family`, if any.
    pub fn variants_of(&self, family: &GateType) -> Option<&[GateType]> {
        self.variants
            .iter()
            .find(|entry| &entry.family == family)
            .map(|entry| entry.variants.as_slice())
    }

    /// Largest arity among the members.
    pub fn max_qubits(&self) -> usize {
        self.gates.iter().map(GateType::num_qubits).max().unwrap_or(0)
    }

    /// The set usable on a device with `num_qubits` qubits.
    ///
    /// Members acting on more than `num_qubits` qubits are dropped and
    /// continuous members with registered variants are replaced by them.
    pub fn reduce_gate_set(&self, num_qubits: usize) -> GateSet {
        let mut reduced = Vec::with_capacity(self.gates.len());
        for gate_type in &self.gates {
            match self.variants_of(gate_type) {
                Some(variants) => reduced.extend(variants.iter().cloned()),
                None => reduced.push(gate_type.clone()),
            }
        }
        reduced.retain(|gate_type| gate_type.num_qubits() <= num_qubits);
        let reduced = GateSet::new(self.name.clone(), reduced);
        debug!(
            gate_set = %self.name,
            num_qubits,
            before = self.len(),
            after = reduced.len(),
            "reduced gate set"
        );
        reduced
    }

    /// Members of `self` followed by the members of `other` not already
    /// present. Variant tables are merged, `self` taking precedence.
    pub fn union(&self, other: &GateSet) -> GateSet {
        let mut merged = GateSet::new(
            self.name.clone(),
            self.gates.iter().chain(other.gates.iter()).cloned(),
        );
        merged.variants = self.variants.clone();
        for entry in &other.variants {
            if merged.variants_of(&entry.family).is_none() {
                merged.variants.push(entry.clone());
            }
        }
        merged
    }

    /// `[U3, Cnot]`.
    pub fn arline() -> Self {
        Self::new("ArlineGateSet", [gates::u3(), gates::cnot()])
    }

    /// Clifford + T: `[H, S, Sdg, T, Tdg, X, Y, Z, Cnot]`.
    pub fn clifford_t() -> Self {
        Self::new(
            "CliffordTGateSet",
            [
                gates::h(),
                gates::s(),
                gates::sdg(),
                gates::t(),
                gates::tdg(),
                gates::x(),
                gates::y(),
                gates::z(),
                gates::cnot(),
            ],
        )
    }

    /// Rigetti natives: `[Rx, Rz, Cz]`, with `Rx` restricted to `±π/2` and `π`
    /// once reduced.
    pub fn rigetti() -> Self {
        let rx = gates::rx();
        let variants = [FRAC_PI_2, -FRAC_PI_2, PI]
            .map(|angle| rx.specialize(vec![angle], None))
            .to_vec();
        Self::new("RigettiGateSet", [rx.clone(), gates::rz(), gates::cz()])
            .push_variants(rx, variants)
    }

    /// Every continuous family of the standard catalogue.
    pub fn universal() -> Self {
        Self::new(
            "UniversalGateSet",
            gates::families().into_iter().map(GateType::from_family),
        )
    }

    /// Serializable form.
    pub fn to_record(&self) -> GateSetRecord {
        GateSetRecord {
            name: self.name.clone(),
            gates: self.gates.iter().map(GateTypeRecord::from).collect(),
            variants: self
                .variants
                .iter()
                .map(|entry| VariantsRecord {
                    family: GateTypeRecord::from(&entry.family),
                    variants: entry.variants.iter().map(GateTypeRecord::from).collect(),
                })
                .collect(),
        }
    }

    /// Rebuilds a set from its serialized form.
    pub fn from_record(record: &GateSetRecord, registry: &GateRegistry) -> GateResult<Self> {
        let gates = record
            .gates
            .iter()
            .map(|r| registry.resolve(r))
            .collect::<GateResult<Vec<_>>>()?;
        let mut gate_set = Self::new(record.name.clone(), gates);
        for entry in &record.variants {
            let family = registry.resolve(&entry.family)?;
            let variants = entry
                .variants
                .iter()
                .map(|r| registry.resolve(r))
                .collect::<GateResult<Vec<_>>>()?;
            gate_set = gate_set.with_variants(family, variants)?;
        }
        Ok(gate_set)
    }
}

impl<'a> IntoIterator for &'a GateSet {
    type Item = &'a GateType;
    type IntoIter = std::slice::Iter<'a, GateType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serialized form of a [`GateSet`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateSetRecord {
    pub name: String,
    pub gates: Vec<GateTypeRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<VariantsRecord>,
}

/// Serialized variant table entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantsRecord {
    pub family: GateTypeRecord,
    pub variants: Vec<GateTypeRecord>,
}
