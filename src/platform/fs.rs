// BizDir - platform/fs.rs
//
// Bounded reads of the static data file.

use crate::util::error::LoadError;
use std::path::Path;

/// Read the whole data file as text, refusing files above `max_size` bytes.
///
/// Invalid UTF-8 is replaced rather than rejected; the JSON parser reports
/// anything that is genuinely malformed.
pub fn read_data_file(path: &Path, max_size: u64) -> Result<String, LoadError> {
    let transport = |source| LoadError::Transport {
        path: path.to_path_buf(),
        source,
    };

    let size = std::fs::metadata(path).map_err(transport)?.len();
    if size > max_size {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size,
            max_size,
        });
    }

    let bytes = std::fs::read(path).map_err(transport)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Data file read");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
