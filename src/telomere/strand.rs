//! Per-strand base roles for the scanning automaton.
//!
//! The same automaton serves both orientations of the degenerate yeast
//! repeat: the G-rich strand carries the (TG)1-3 pattern directly and the
//! C-rich strand carries its complement. Only the base roles differ.

///
/// Base roles for one scan orientation.
///
/// `primary` bases extend a run but are capped between secondary bases,
/// `secondary` bases extend a run but are capped at short consecutive
/// stretches, and the two `noise` bases are tolerated only where they stay
/// locally sparse. Any other byte ends the run and marks it trash.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrandConfig {
    pub primary: u8,
    pub secondary: u8,
    pub noise: [u8; 2],
}

impl StrandConfig {
    pub fn is_noise(&self, base: u8) -> bool {
        base == self.noise[0] || base == self.noise[1]
    }
}

/// Scan orientation matching the G-rich (TG-repeat) strand.
pub const G_STRAND: StrandConfig = StrandConfig {
    primary: b'G',
    secondary: b'T',
    noise: [b'A', b'C'],
};

/// Scan orientation matching the C-rich (CA-repeat) strand.
pub const C_STRAND: StrandConfig = StrandConfig {
    primary: b'C',
    secondary: b'A',
    noise: [b'T', b'G'],
};
