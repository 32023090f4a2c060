//! Parallel rasterization driver: a fixed set of workers pulls pixels from
//! the dispatcher, shades them against a read-only scene, and writes
//! disjoint cells of the film.

mod dispatch;
mod film;

pub use dispatch::PixelDispatcher;
pub use film::Film;

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{error, info};

/// Knobs for one render pass.
#[derive(Copy, Clone, Debug)]
pub struct RenderSettings {
    /// Worker count; `None` means one per logical CPU.
    pub threads: Option<usize>,
    /// Progress-report granularity as a fraction of the grid; `None`
    /// disables reporting.
    pub progress: Option<f64>,
}

impl Default for RenderSettings {
    fn default() -> RenderSettings {
        RenderSettings {
            threads: None,
            progress: Some(0.1),
        }
    }
}

// Shared handle to the film buffer. Sound to share across workers because
// the dispatcher delivers each pixel index to exactly one worker exactly
// once, so all writes are disjoint.
struct SharedFilm<T>(*mut T);

unsafe impl<T: Send> Send for SharedFilm<T> {}
unsafe impl<T: Send> Sync for SharedFilm<T> {}

/// Render every pixel of `film` by calling `shade(row, col)` from a fixed
/// pool of workers.
///
/// Allocation is row-major and exactly-once; a panicking shader costs only
/// its own pixel, which is filled with `fallback` and still counted, so
/// the pass always runs to completion with exact accounting.
pub fn render<T, F>(film: &mut Film<T>, settings: RenderSettings, fallback: T, shade: F)
where
    T: Copy + Send + Sync,
    F: Fn(usize, usize) -> T + Sync,
{
    let (width, height) = (film.width(), film.height());
    let workers = settings.threads.unwrap_or_else(num_cpus::get).max(1);

    let mut dispatcher = PixelDispatcher::new(height, width);
    if let Some(fraction) = settings.progress {
        dispatcher = dispatcher.with_progress(fraction);
    }
    let dispatcher = &dispatcher;

    info!(
        target: "render",
        "rendering {}x{} pixels across {} workers", width, height, workers
    );

    let shared = SharedFilm(film.as_mut_ptr());
    let shared = &shared;
    let shade = &shade;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .expect("worker pool construction failed");
    pool.scope(|scope| {
        for _ in 0..workers {
            scope.spawn(move |_| {
                while let Some((row, col)) = dispatcher.allocate_next() {
                    let value = match catch_unwind(AssertUnwindSafe(|| shade(row, col))) {
                        Ok(value) => value,
                        Err(_) => {
                            error!(
                                target: "render",
                                "shader panicked at pixel ({}, {}), writing fallback", row, col
                            );
                            fallback
                        }
                    };
                    // disjoint by the exactly-once allocation contract
                    unsafe {
                        *shared.0.add(row * width + col) = value;
                    }
                    dispatcher.mark_done();
                }
            });
        }
    });

    info!(
        target: "render",
        "render finished, {} of {} pixels complete",
        dispatcher.completed(),
        dispatcher.total()
    );
}
