use std::io::{Read, Seek, SeekFrom};

use tracing::debug;

use crate::error::Result;
use crate::raster::NormalizedRaster;

/// Decode raw upload bytes and normalize them to a `side`x`side` raster.
///
/// The caller's buffer is only borrowed; nothing here consumes or mutates
/// it, so the original upload can still be persisted after validation.
/// Decode failures surface as `GateError::Decode` and are mapped to the
/// "Corrupted image." verdict at the gate boundary.
pub fn decode_raster(bytes: &[u8], side: u32) -> Result<NormalizedRaster> {
    let img = image::load_from_memory(bytes)?;
    debug!(
        width = img.width(),
        height = img.height(),
        side,
        "decoded upload"
    );
    Ok(NormalizedRaster::from_image(&img, side))
}

/// Drain a seekable stream into a byte buffer, restoring the stream to the
/// position it was found at.
///
/// Convenience for callers holding an upload as an open stream rather than
/// a slice: after this returns, the stream reads as if validation never
/// touched it.
pub fn read_to_validate<R: Read + Seek>(reader: &mut R) -> Result<Vec<u8>> {
    let start = reader.stream_position()?;
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    reader.seek(SeekFrom::Start(start))?;
    Ok(bytes)
}
