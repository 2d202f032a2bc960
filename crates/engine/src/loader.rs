use crate::error::{EngineError, Result};
use std::path::Path;

/// Read the whole document at `path` as text.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected, which the
/// tokenizer then treats as a separator.
pub fn load_document(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::info!("loaded {} bytes from {}", bytes.len(), path.display());
    Ok(decode_lossy(bytes, path))
}

pub(crate) fn decode_lossy(bytes: Vec<u8>, path: &Path) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            let bytes = e.into_bytes();
            log::warn!(
                "{} is not valid UTF-8; invalid sequences were replaced",
                path.display()
            );
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }
}
