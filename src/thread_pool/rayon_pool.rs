use super::ThreadPool;
use crate::{MsgError, Result};
use tracing::{debug, error};

/// A thread pool that uses the work stealing strategy implemented by the [`Rayon`] library.
///
/// Jobs are handed to [`rayon::ThreadPool::spawn`]. A panicking job is caught by the pool's
/// panic handler, which logs it, and the worker thread keeps running.
///
/// [`Rayon`]: https://docs.rs/rayon/latest/rayon/index.html
pub struct RayonThreadPool {
    pool: rayon::ThreadPool,
}

impl ThreadPool for RayonThreadPool {
    fn new(threads: u32) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads as usize)
            .thread_name(|i| format!("msgs-rayon-{}", i))
            .panic_handler(|_| error!("a job panicked on the rayon thread pool"))
            .build()
            .map_err(|e| MsgError::Server(format!("could not build thread pool: {:?}", &e)))?;
        debug!("created rayon thread pool with {} threads", &threads);

        Ok(RayonThreadPool { pool })
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.pool.spawn(job);
    }
}
