//! Ring dimensions of the two lattice parameter sets served by the
//! surrounding scheme.

/// Level-1 ring dimension (32-bit torus ciphertexts).
pub const LVL1_N: usize = 1 << 10;

/// Level-2 ring dimension (64-bit torus ciphertexts).
pub const LVL2_N: usize = 1 << 11;
