//! # Telofinder: *<small>Fast detection of degenerate telomeric repeat runs in sequencing reads.</small>*
//!
//! `telofinder` scans the raw text of a sequence file (plain or gzipped) for
//! the degenerate telomeric repeats of budding yeast on both strand
//! orientations, then writes a tab-separated table of every qualifying run
//! with its length, position, and surrounding context for downstream
//! inspection.
//!
//! ## Modules
//! The detection logic lives in [telomere]; shared models, constants, and
//! file helpers live in [common].
pub mod common;
pub mod telomere;
