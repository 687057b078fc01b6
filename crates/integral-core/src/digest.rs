// crates/integral-core/src/digest.rs

use crate::table::SummedAreaTable;

/// First 16 bytes of BLAKE3 over `width`, `height` and every cell, all
/// little-endian, rendered as lowercase hex.
pub fn table_digest(table: &SummedAreaTable) -> String {
    let mut h = blake3::Hasher::new();
    h.update(&(table.width() as u64).to_le_bytes());
    h.update(&(table.height() as u64).to_le_bytes());
    for v in table.as_slice() {
        h.update(&v.to_le_bytes());
    }
    let hash = h.finalize();
    hash.as_bytes()[0..16]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::sequential::build_sequential;
    use crate::grid::Grid;

    #[test]
    fn digest_tracks_content_and_shape() {
        let a = build_sequential(&Grid::from_fn(4, 2, |x, y| (x + y) as u32));
        let b = build_sequential(&Grid::from_fn(4, 2, |x, y| (x + y) as u32));
        let c = build_sequential(&Grid::from_fn(2, 4, |x, y| (x + y) as u32));
        assert_eq!(table_digest(&a), table_digest(&b));
        assert_ne!(table_digest(&a), table_digest(&c));
        assert_eq!(table_digest(&a).len(), 32);
    }
}
