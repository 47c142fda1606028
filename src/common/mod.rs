//!
//! # Common, core utilities for `telofinder`
//! Shared constants, error types, data models, and file helpers used by the
//! scanning module and the command line interface. Usually not interfaced
//! with directly unless you are working with the [models].
//!
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::models::SequenceStore;
    use super::utils::get_dynamic_reader;

    #[fixture]
    fn path_to_fastq_file() -> &'static str {
        "tests/data/reads.fastq"
    }

    #[fixture]
    fn path_to_fastq_file_gzipped() -> &'static str {
        "tests/data/reads.fastq.gz"
    }

    #[rstest]
    fn test_dynamic_reader_plain(path_to_fastq_file: &str) {
        let mut reader = get_dynamic_reader(Path::new(path_to_fastq_file)).unwrap();

        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();

        assert_eq!(text.len(), 661);
        assert!(text.starts_with("@read1"));
    }

    #[rstest]
    fn test_dynamic_reader_gzipped(path_to_fastq_file: &str, path_to_fastq_file_gzipped: &str) {
        let mut reader = get_dynamic_reader(Path::new(path_to_fastq_file)).unwrap();
        let mut plain = String::new();
        reader.read_to_string(&mut plain).unwrap();

        let mut reader = get_dynamic_reader(Path::new(path_to_fastq_file_gzipped)).unwrap();
        let mut gzipped = String::new();
        reader.read_to_string(&mut gzipped).unwrap();

        assert_eq!(plain, gzipped);
    }

    #[rstest]
    fn test_store_folds_case(path_to_fastq_file: &str) {
        let store = SequenceStore::try_from(Path::new(path_to_fastq_file)).unwrap();

        assert_eq!(store.len(), 661);
        assert!(store.as_bytes().iter().all(|b| !b.is_ascii_lowercase()));
    }

    #[rstest]
    fn test_store_missing_file() {
        let result = SequenceStore::try_from(Path::new("tests/data/no-such-file.fastq"));
        assert!(result.is_err());
    }
}
