use crate::common::models::TelomereHit;
use crate::telomere::context::context_window;
use crate::telomere::scan::RunMatch;

///
/// Accumulates accepted runs from both strand passes under one shared,
/// 1-based index.
///
#[derive(Debug, Default)]
pub struct HitCollector {
    hits: Vec<TelomereHit>,
    index: u32,
}

impl HitCollector {
    pub fn new() -> Self {
        HitCollector::default()
    }

    /// Record one accepted run: assign it the next index and attach its
    /// context window.
    pub fn record(&mut self, seq: &[u8], run: RunMatch) {
        self.index += 1;
        self.hits.push(TelomereHit {
            index: self.index,
            length: run.length,
            position: run.position,
            context: context_window(seq, run.position, run.length),
        });
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn into_hits(self) -> Vec<TelomereHit> {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_indices_are_shared_and_one_based() {
        let seq = b"TTGGGTTGGGTTGGG";
        let mut collector = HitCollector::new();
        assert!(collector.is_empty());

        collector.record(
            seq,
            RunMatch {
                position: 0,
                length: 5,
            },
        );
        collector.record(
            seq,
            RunMatch {
                position: 5,
                length: 10,
            },
        );

        let hits = collector.into_hits();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].index, 1);
        assert_eq!(hits[1].index, 2);
        assert_eq!(hits[1].position, 5);
        assert_eq!(hits[1].context, "TTGGGTTGGGTTGGG");
    }
}
