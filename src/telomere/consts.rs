/// Subcommand name for the scanner.
pub const SCAN_CMD: &str = "scan";

/// Default minimum run length required to report a hit.
pub const DEFAULT_MIN_LENGTH: usize = 50;

/// Thresholds below this pick up short interstitial TG stretches.
pub const MIN_RECOMMENDED_LENGTH: usize = 30;

/// Runs at or above this length are rejected as implausible.
pub const MAX_TELOMERE_LENGTH: usize = 1000;

/// Forward lookahead window for the local noise-density check.
pub const NOISE_WINDOW: usize = 15;

/// Maximum noise bases tolerated inside one lookahead window.
pub const MAX_WINDOW_NOISE: usize = 2;

/// Maximum consecutive secondary bases inside a run.
pub const MAX_SECONDARY_RUN: usize = 3;

/// Maximum primary bases between two secondary bases.
pub const MAX_PRIMARY_RUN: usize = 5;

/// Cap on secondary-then-primary adjacencies before a run is trashed as a
/// microsatellite rather than a telomere.
pub const MAX_PRIMARY_ADJACENCY: usize = 10;

/// Bases of flanking text kept on each side of a reported run.
pub const CONTEXT_FLANK: usize = 50;

/// Marker substituted for line separators inside a context window.
pub const END_OF_READ_MARKER: &str = "END OF READ";
