//! Thread pools used by the [`MessageServer`] to serve client connections.
//!
//! Two pools are available, both selectable from the `msgs-server` command line:
//! - [`SharedQueueThreadPool`] a fixed set of threads pulling jobs off a crossbeam channel
//! - [`RayonThreadPool`] a work stealing pool backed by rayon
//!
//! [`MessageServer`]: ../struct.MessageServer.html
use crate::Result;

/// The functionality every thread pool must provide
pub trait ThreadPool {
    /// creates a new pool with `threads` threads, all of them started right away
    ///
    /// # Errors
    /// returns an error if any thread could not be created
    fn new(threads: u32) -> Result<Self>
    where
        Self: Sized;

    /// runs `job` on one of the pool's threads.
    /// A panicking job must not reduce the number of threads in the pool
    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static;
}

mod rayon_pool;
mod shared_queue;

pub use self::rayon_pool::RayonThreadPool;
pub use self::shared_queue::SharedQueueThreadPool;
