// crates/integral-core/src/build/phases.rs
//
// Per-worker kernels shared by every parallel backend.

/// Phase 1: running horizontal sum of each row in `src` into `dst`.
///
/// `src` and `dst` cover the same whole rows of a `width`-wide grid.
pub(crate) fn prefix_rows(src: &[u32], dst: &mut [u64], width: usize) {
    debug_assert_eq!(src.len(), dst.len());
    for (s_row, d_row) in src.chunks(width).zip(dst.chunks_mut(width)) {
        let mut s = 0u64;
        for (&v, out) in s_row.iter().zip(d_row.iter_mut()) {
            s += v as u64;
            *out = s;
        }
    }
}

/// Phase 2: running vertical sum, in place, over one column block.
///
/// `segments[y]` is this block's slice of row `y`, top to bottom.
pub(crate) fn prefix_columns(segments: Vec<&mut [u64]>) {
    let Some(first) = segments.first() else {
        return;
    };
    let mut acc = vec![0u64; first.len()];
    for seg in segments {
        for (a, cell) in acc.iter_mut().zip(seg.iter_mut()) {
            *a += *cell;
            *cell = *a;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_independent_prefixes() {
        let src = [1u32, 2, 3, 4, 5, 6];
        let mut dst = [0u64; 6];
        prefix_rows(&src, &mut dst, 3);
        assert_eq!(dst, [1, 3, 6, 4, 9, 15]);
    }

    #[test]
    fn columns_accumulate_down() {
        let mut a = [1u64, 2];
        let mut b = [3u64, 4];
        let mut c = [5u64, 6];
        prefix_columns(vec![&mut a[..], &mut b[..], &mut c[..]]);
        assert_eq!((a, b, c), ([1, 2], [4, 6], [9, 12]));
    }

    #[test]
    fn empty_block_is_noop() {
        prefix_columns(Vec::new());
    }
}
