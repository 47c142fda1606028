//! The scanning automaton: a single forward pass that grows one tentative
//! run at a time and an outer sweep that retries from just past wherever the
//! last attempt stopped.

use crate::common::consts::LINE_SEPARATOR;
use crate::telomere::consts::{
    MAX_PRIMARY_ADJACENCY, MAX_PRIMARY_RUN, MAX_SECONDARY_RUN, MAX_TELOMERE_LENGTH,
    MAX_WINDOW_NOISE, NOISE_WINDOW,
};
use crate::telomere::strand::StrandConfig;

/// Counters for one run attempt. Reset at every candidate offset.
#[derive(Debug, Default)]
struct ScanAttemptState {
    length: usize,
    trash: bool,
    primary_adjacency: usize,
    secondary_run: usize,
    primary_run: usize,
}

///
/// Outcome of a single run attempt.
///
/// `end` is the offset where the attempt stopped; the outer sweep resumes
/// one byte past it. Depending on the break path it is either the last
/// consumed byte or the first rejected one, and `seq.len()` when the text
/// ran out.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunAttempt {
    pub length: usize,
    pub trash: bool,
    pub end: usize,
}

/// An accepted run, before context extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunMatch {
    pub position: usize,
    pub length: usize,
}

///
/// Grow one tentative run forward from `start` until a stop condition fires.
///
/// Primary bases are counted between secondary bases and capped, secondary
/// bases are capped at short consecutive stretches, and a noise base is
/// consumed only while noise stays locally sparse in the lookahead window.
/// A long alternation of secondary-then-primary pairs marks the run as a
/// microsatellite (trash), as does any byte outside the strand's alphabet.
///
/// # Arguments
///
/// - seq: the scanned text
/// - start: 0-based candidate offset
/// - strand: base roles for the current orientation
///
pub fn attempt_run(seq: &[u8], start: usize, strand: &StrandConfig) -> RunAttempt {
    let mut state = ScanAttemptState::default();
    let mut pos = start;

    while pos < seq.len() {
        let base = seq[pos];

        if base == strand.primary {
            state.length += 1;
            // the adjacency probe reads the true preceding byte, which for a
            // mid-text candidate may sit outside the attempt itself
            if pos > 0 && seq[pos - 1] == strand.secondary {
                state.primary_adjacency += 1;
            } else {
                state.primary_adjacency = 0;
            }
            state.secondary_run = 0;
            state.primary_run += 1;
        } else if base == strand.secondary {
            state.length += 1;
            state.secondary_run += 1;
            state.primary_run = 0;
        } else if strand.is_noise(base) {
            let window_end = (pos + NOISE_WINDOW).min(seq.len());
            let local_noise = seq[pos..window_end]
                .iter()
                .filter(|&&b| strand.is_noise(b))
                .count();
            if local_noise > MAX_WINDOW_NOISE {
                break;
            }
            // a sparse noise base joins the run without touching the
            // primary/secondary counters
            state.length += 1;
        } else {
            state.trash = true;
            break;
        }

        if state.secondary_run > MAX_SECONDARY_RUN {
            break;
        }
        if state.primary_run > MAX_PRIMARY_RUN {
            break;
        }
        if state.primary_adjacency > MAX_PRIMARY_ADJACENCY {
            state.trash = true;
            break;
        }

        pos += 1;
    }

    RunAttempt {
        length: state.length,
        trash: state.trash,
        end: pos,
    }
}

///
/// Sweep one strand orientation across the whole text and collect every
/// accepted run in ascending position order.
///
/// An attempt is accepted when it is longer than `min_length` (strict),
/// shorter than the plausibility cap, not trash, and does not butt up
/// against a line separator on either side. The sweep then resumes one byte
/// past the attempt's end, so overlapping sub-runs of a rejected stretch are
/// never re-reported.
///
/// # Arguments
///
/// - seq: the scanned text
/// - strand: base roles for the current orientation
/// - min_length: minimum run length (strict) required to report a hit
///
pub fn scan_strand(seq: &[u8], strand: &StrandConfig, min_length: usize) -> Vec<RunMatch> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos < seq.len() {
        let start = pos;
        let run = attempt_run(seq, start, strand);

        let follows_separator = start > 0 && seq[start - 1] == LINE_SEPARATOR;
        let lookahead = start + run.length + 1;
        let precedes_separator = lookahead < seq.len() && seq[lookahead] == LINE_SEPARATOR;

        if run.length > min_length
            && run.length < MAX_TELOMERE_LENGTH
            && !run.trash
            && !follows_separator
            && !precedes_separator
        {
            matches.push(RunMatch {
                position: start,
                length: run.length,
            });
        }

        pos = run.end + 1;
    }

    matches
}
