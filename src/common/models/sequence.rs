use std::io::Read;
use std::path::Path;

use crate::common::errors::SequenceError;
use crate::common::utils::get_dynamic_reader;

///
/// The scanned text: an entire sequence file held in memory as one
/// upper-cased byte buffer.
///
/// Read headers, quality lines, and separators are kept as-is; the scanner
/// treats them as ordinary non-repeat bytes. The buffer is built once and
/// never mutated afterwards, so both strand passes share it read-only.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceStore {
    seq: Vec<u8>,
}

impl SequenceStore {
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.seq
    }
}

impl From<&str> for SequenceStore {
    fn from(text: &str) -> Self {
        let mut seq = text.as_bytes().to_vec();
        seq.make_ascii_uppercase();

        SequenceStore { seq }
    }
}

impl TryFrom<&Path> for SequenceStore {
    type Error = SequenceError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let mut reader = get_dynamic_reader(path)
            .map_err(|err| SequenceError::FileReadError(format!("{:?} ({})", path, err)))?;

        let mut text = String::new();
        reader.read_to_string(&mut text).map_err(|err| {
            if err.kind() == std::io::ErrorKind::InvalidData {
                SequenceError::DecodeError(format!("{:?}", path))
            } else {
                SequenceError::IoError(err)
            }
        })?;

        let mut seq = text.into_bytes();
        seq.make_ascii_uppercase();

        Ok(SequenceStore { seq })
    }
}
