#![cfg_attr(not(test), no_std)]

//! Sliding line-scan primitive for grid-based win detection.
//!
//! Works on a flat row-major slice so it can serve any rectangular board
//! representation without copying.

/// The four scan directions as (row step, column step): horizontal,
/// vertical, diagonal down-right, diagonal down-left.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Checks whether `target` occupies an unbroken run of `run_len` cells in
/// any of the four scan directions.
///
/// # Arguments
/// * `cells` - The board data as a flat row-major slice (`rows * cols` long)
/// * `rows` - Board height
/// * `cols` - Board width
/// * `target` - The cell value to look for
/// * `run_len` - Number of consecutive matching cells needed
pub fn has_run<T: Copy + PartialEq>(
    cells: &[T],
    rows: usize,
    cols: usize,
    target: T,
    run_len: usize,
) -> bool {
    if run_len == 0 || cells.len() < rows * cols {
        return false;
    }
    // A run longer than the longer board side cannot fit in any
    // direction; rejecting it here also keeps run_len small enough that
    // the i32 arithmetic below cannot wrap.
    if run_len > rows.max(cols) {
        return false;
    }
    let (h, w) = (rows as i32, cols as i32);
    let len = run_len as i32;

    for r in 0..h {
        for c in 0..w {
            for (dr, dc) in DIRECTIONS {
                let end_r = r + dr * (len - 1);
                let end_c = c + dc * (len - 1);
                if end_r < 0 || end_r >= h || end_c < 0 || end_c >= w {
                    continue;
                }
                let mut k = 0;
                while k < len {
                    let idx = ((r + dr * k) * w + (c + dc * k)) as usize;
                    if cells[idx] != target {
                        break;
                    }
                    k += 1;
                }
                if k == len {
                    return true;
                }
            }
        }
    }
    false
}
