use std::fs::File;
use std::io::Read;
use std::path::Path;
use crate::common::{PlayerError, Result};

/// Read a whole animation file into memory.
pub fn load_animation(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|source| PlayerError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let size = file.metadata()?.len() as usize;
    let mut data = Vec::new();
    data.try_reserve_exact(size)
        .map_err(|_| PlayerError::Allocation { what: "file contents", bytes: size })?;

    file.read_to_end(&mut data)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "loaded animation");

    Ok(data)
}
