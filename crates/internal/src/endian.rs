//! Little-endian integer helpers for fixed-layout encodings

/// Append a u16 to `out` in little-endian byte order
pub fn put_u16_le(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Read a little-endian u16 at `offset`, if two bytes are available
pub fn u16_from_le_bytes(bytes: &[u8], offset: usize) -> Option<u16> {
    let end = offset.checked_add(2)?;
    let chunk = bytes.get(offset..end)?;
    Some(u16::from_le_bytes([chunk[0], chunk[1]]))
}

/// Decode a run of little-endian u16 values
///
/// Returns `None` unless `bytes` holds exactly `count` values.
pub fn u16_vec_from_le_bytes(bytes: &[u8], count: usize) -> Option<Vec<u16>> {
    if bytes.len() != count.checked_mul(2)? {
        return None;
    }
    Some(
        bytes
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]))
            .collect(),
    )
}
