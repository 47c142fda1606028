// Results table columns
pub const INDEX_COL_NAME: &str = "Index";
pub const LENGTH_COL_NAME: &str = "Telomere length";
pub const POSITION_COL_NAME: &str = "Position";
pub const CONTEXT_COL_NAME: &str = "Context";

pub const GZ_FILE_EXTENSION: &str = "gz";
pub const RESULTS_FILE_SUFFIX: &str = "-results.tsv";

/// The byte that separates reads in the scanned text.
pub const LINE_SEPARATOR: u8 = b'\n';
