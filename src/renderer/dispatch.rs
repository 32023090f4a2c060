use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tracing::info;

/// Hands out pixel coordinates to render workers and counts finished
/// pixels.
///
/// The two pieces of mutable state are deliberately independent: the
/// allocation cursor sits behind its own lock, the completion counter is an
/// atomic. Progress reporting rides on the counter and never touches the
/// allocation path.
pub struct PixelDispatcher {
    rows: usize,
    cols: usize,
    total: usize,
    cursor: Mutex<Cursor>,
    completed: AtomicUsize,
    report_step: Option<usize>,
}

struct Cursor {
    row: usize,
    col: usize,
}

impl PixelDispatcher {
    pub fn new(rows: usize, cols: usize) -> PixelDispatcher {
        let total = rows * cols;
        PixelDispatcher {
            rows,
            cols,
            total,
            // an empty grid starts exhausted
            cursor: Mutex::new(Cursor {
                row: if total == 0 { rows.max(1) } else { 0 },
                col: 0,
            }),
            completed: AtomicUsize::new(0),
            report_step: None,
        }
    }

    /// Report progress every `fraction` of the grid (clamped to at least
    /// one pixel per report).
    pub fn with_progress(mut self, fraction: f64) -> PixelDispatcher {
        let fraction = fraction.clamp(0.0, 1.0);
        let step = ((self.total as f64) * fraction) as usize;
        self.report_step = Some(step.max(1));
        self
    }

    /// The next unallocated pixel in row-major order, or `None` once the
    /// grid is exhausted. Every coordinate is returned exactly once across
    /// all callers; after exhaustion every call returns `None`.
    pub fn allocate_next(&self) -> Option<(usize, usize)> {
        let mut cursor = self.cursor.lock();
        if cursor.row >= self.rows {
            return None;
        }
        let pixel = (cursor.row, cursor.col);
        cursor.col += 1;
        if cursor.col == self.cols {
            cursor.col = 0;
            cursor.row += 1;
        }
        Some(pixel)
    }

    /// Count one finished pixel, returning the new completed total.
    /// Emits a progress event when the count crosses a reporting step.
    pub fn mark_done(&self) -> usize {
        let done = self.completed.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(step) = self.report_step {
            let crossed = done / step > (done - 1) / step;
            if crossed || done == self.total {
                info!(
                    target: "render",
                    "{:.0}% of pixels complete ({}/{})",
                    100.0 * done as f64 / self.total as f64,
                    done,
                    self.total
                );
            }
        }
        done
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.completed() >= self.total
    }
}
