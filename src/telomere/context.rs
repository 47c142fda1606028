use crate::common::consts::LINE_SEPARATOR;
use crate::telomere::consts::{CONTEXT_FLANK, END_OF_READ_MARKER};

///
/// Build the display context for an accepted run: the surrounding slice of
/// raw text with line separators and tabs rewritten so the results table
/// stays one row per hit.
///
/// The window covers the run plus up to [`CONTEXT_FLANK`] bytes on each
/// side, clipped at the text boundaries. Every line separator inside it is
/// spelled out as a marker and every tab becomes a space; all other bytes,
/// headers and quality characters included, pass through untouched.
///
/// # Arguments
///
/// - seq: the scanned text
/// - position: 0-based offset of the run's first byte
/// - length: accepted run length
///
pub fn context_window(seq: &[u8], position: usize, length: usize) -> String {
    let window_start = position.saturating_sub(CONTEXT_FLANK);
    let window_end = (position + length + CONTEXT_FLANK).min(seq.len());

    let mut context = Vec::with_capacity(window_end - window_start);
    for &byte in &seq[window_start..window_end] {
        match byte {
            LINE_SEPARATOR => context.extend_from_slice(END_OF_READ_MARKER.as_bytes()),
            b'\t' => context.push(b' '),
            _ => context.push(byte),
        }
    }

    String::from_utf8_lossy(&context).into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_separators_and_tabs_are_rewritten() {
        let context = context_window(b"AC\nGT\tTT", 3, 2);
        assert_eq!(context, "ACEND OF READGT TT");
    }

    #[test]
    fn test_window_clips_at_text_boundaries() {
        let seq = "TTGGG".repeat(2);
        let context = context_window(seq.as_bytes(), 2, 5);
        assert_eq!(context, "TTGGGTTGGG");
    }

    #[test]
    fn test_window_extent_mid_text() {
        let seq = "TTGGG".repeat(40);
        let context = context_window(seq.as_bytes(), 60, 10);

        // 50 bytes of flank on each side of the 10-byte run
        assert_eq!(context.len(), 110);
        assert_eq!(context, &seq[10..120]);
    }
}
