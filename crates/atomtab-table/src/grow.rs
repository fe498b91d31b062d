//! Growth of square row-major buffers.
//!
//! A square table of side `n` is stored as `n * n` cells, cell `(r, c)` at
//! `r * n + c`. Growing changes the row stride, so old contents cannot be
//! copied with a single flat move: each old row lands at the start of the
//! corresponding new row. Large tables copy rows in parallel with rayon.

use num_traits::Zero;
use rayon::prelude::*;

use crate::error::TableError;

/// Returns the side length a table of side `capacity` grows to when it must
/// hold at least `need` rows.
///
/// Doubles the capacity (treating zero as one), but never returns less than
/// `need`, so one reallocation covers any batch.
#[must_use]
pub fn grown_capacity(capacity: usize, need: usize) -> usize {
    capacity.saturating_mul(2).max(1).max(need)
}

/// Expands a square row-major buffer so it holds at least `need` rows.
///
/// Returns a freshly allocated buffer together with its side length. Every
/// cell `(r, c)` with `r, c < old_capacity` keeps its value; all other cells
/// are zero. When `old_capacity >= parallel_threshold` the rows are copied
/// in parallel.
///
/// `old` is only read, so on failure the caller's buffer is left untouched.
///
/// # Errors
///
/// Returns [`TableError::Allocation`] if the new cell count overflows
/// `usize` or the allocator cannot provide it.
///
/// # Panics
///
/// Panics if `old.len() != old_capacity * old_capacity`.
pub fn expand_square<V>(
    old: &[V],
    old_capacity: usize,
    need: usize,
    parallel_threshold: usize,
) -> Result<(Vec<V>, usize), TableError>
where
    V: Copy + Zero + Send + Sync,
{
    assert_eq!(old.len(), old_capacity * old_capacity, "buffer is not square");

    let capacity = grown_capacity(old_capacity, need);
    let cells = capacity
        .checked_mul(capacity)
        .ok_or(TableError::Allocation { capacity })?;

    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(cells)
        .map_err(|_| TableError::Allocation { capacity })?;
    buffer.resize(cells, V::zero());

    if old_capacity == 0 {
        return Ok((buffer, capacity));
    }

    if old_capacity >= parallel_threshold {
        buffer
            .par_chunks_mut(capacity)
            .zip(old.par_chunks(old_capacity))
            .for_each(|(dst, src)| dst[..old_capacity].copy_from_slice(src));
    } else {
        for (dst, src) in buffer.chunks_mut(capacity).zip(old.chunks(old_capacity)) {
            dst[..old_capacity].copy_from_slice(src);
        }
    }

    Ok((buffer, capacity))
}
