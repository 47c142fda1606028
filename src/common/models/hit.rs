///
/// A single accepted telomere run.
///
/// `index` is 1-based and shared across both strand passes, so hits from the
/// second pass continue the numbering of the first. `position` is the 0-based
/// offset of the run's first byte in the scanned text.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelomereHit {
    pub index: u32,
    pub length: usize,
    pub position: usize,
    pub context: String,
}
