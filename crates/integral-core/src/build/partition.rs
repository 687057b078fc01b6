// crates/integral-core/src/build/partition.rs
//
// Static partitioning for the two-phase build. Rows are split into contiguous
// blocks for phase 1, columns into contiguous blocks for phase 2. Every cell
// belongs to exactly one block in each phase.

/// Worker counts below one mean one.
#[inline]
pub(crate) fn clamp_workers(workers: usize) -> usize {
    workers.max(1)
}

/// Block length `ceil(n / workers)`, at least 1.
#[inline]
pub(crate) fn block_len(n: usize, workers: usize) -> usize {
    n.div_ceil(clamp_workers(workers)).max(1)
}

/// Split a row-major `width`-wide buffer into column blocks of `cols_per`
/// columns. Block `k` holds, for every row top to bottom, the mutable slice
/// of columns `k*cols_per .. min(width, (k+1)*cols_per)`.
pub(crate) fn column_blocks(
    buf: &mut [u64],
    width: usize,
    cols_per: usize,
) -> Vec<Vec<&mut [u64]>> {
    if width == 0 || buf.is_empty() {
        return Vec::new();
    }
    let height = buf.len() / width;
    let n_blocks = width.div_ceil(cols_per);

    let mut blocks: Vec<Vec<&mut [u64]>> = (0..n_blocks)
        .map(|_| Vec::with_capacity(height))
        .collect();
    for row in buf.chunks_mut(width) {
        for (block, seg) in blocks.iter_mut().zip(row.chunks_mut(cols_per)) {
            block.push(seg);
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_len_is_ceiling() {
        assert_eq!(block_len(10, 3), 4);
        assert_eq!(block_len(9, 3), 3);
        assert_eq!(block_len(2, 8), 1);
        assert_eq!(block_len(5, 0), 5);
    }

    #[test]
    fn column_blocks_cover_each_cell_once() {
        // 5 wide, 3 tall, 2 columns per block -> blocks of width 2, 2, 1
        let mut buf: Vec<u64> = (0..15).collect();
        let blocks = column_blocks(&mut buf, 5, 2);
        assert_eq!(blocks.len(), 3);
        let widths: Vec<usize> = blocks.iter().map(|b| b[0].len()).collect();
        assert_eq!(widths, vec![2, 2, 1]);
        assert!(blocks.iter().all(|b| b.len() == 3));
        assert_eq!(&*blocks[1][2], &[12, 13]);
        assert_eq!(&*blocks[2][0], &[4]);
    }

    #[test]
    fn column_blocks_of_empty_buffer() {
        let mut buf: Vec<u64> = Vec::new();
        assert!(column_blocks(&mut buf, 0, 1).is_empty());
    }
}
