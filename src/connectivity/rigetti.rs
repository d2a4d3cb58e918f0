//! Rigetti device coupling maps.

use super::QubitConnectivity;

#[rustfmt::skip]
const AGAVE_EDGES: [(usize, usize); 16] = [
    (0, 1), (0, 7), (1, 0), (1, 2), (2, 1), (2, 3), (3, 2), (3, 4),
    (4, 3), (4, 5), (5, 4), (5, 6), (6, 5), (6, 7), (7, 0), (7, 6),
];

#[rustfmt::skip]
const ASPEN_EDGES: [(usize, usize); 34] = [
    (0, 1), (0, 7), (0, 15), (1, 0), (1, 2), (1, 14), (2, 1), (2, 3),
    (3, 2), (3, 4), (4, 3), (4, 5), (5, 4), (5, 6), (7, 0), (7, 6),
    (8, 9), (8, 15), (9, 8), (9, 10), (10, 9), (10, 11), (11, 10), (11, 12),
    (12, 11), (12, 13), (13, 12), (13, 14), (14, 1), (14, 13), (14, 15), (15, 0),
    (15, 8), (15, 14),
];

/// Agave: 8 qubits on a ring.
pub fn agave() -> QubitConnectivity {
    QubitConnectivity::from_valid_edges("agave", 8, AGAVE_EDGES)
}

/// Aspen: two 8-qubit rings joined by 1–14 and 0–15. Qubit 6 only receives.
pub fn aspen() -> QubitConnectivity {
    QubitConnectivity::from_valid_edges("aspen", 16, ASPEN_EDGES)
}

/// Aspen with every coupling usable in both directions.
pub fn aspen_symmetrical() -> QubitConnectivity {
    aspen().symmetrized("aspen_symmetrical")
}
