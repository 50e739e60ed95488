use std::thread;
use crossbeam::channel::{self, Receiver, Sender};
use super::ThreadPool;
use crate::Result;
use tracing::{debug, error, instrument};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// A thread pool built on a shared job queue.
///
/// The queue is a crossbeam MPMC [`channel`] used as single producer, multiple consumer: the
/// pool sends jobs and every worker thread receives from the same channel.
///
/// A worker whose job panics is replaced with a fresh thread as it unwinds. Dropping the pool
/// closes the channel and every worker exits once the queue is drained.
///
/// [`channel`]: https://docs.rs/crossbeam/0.8.1/crossbeam/channel/index.html
pub struct SharedQueueThreadPool {
    tx: Sender<Job>,
}

impl ThreadPool for SharedQueueThreadPool {
    fn new(threads: u32) -> Result<Self> {
        let (tx, rx) = channel::unbounded::<Job>();
        for id in 0..threads {
            let worker = Worker { id, rx: rx.clone() };
            thread::Builder::new()
                .name(format!("msgs-worker-{}", id))
                .spawn(move || run_jobs(worker))?;
        }
        debug!("created shared queue thread pool with {} threads", threads);
        Ok(SharedQueueThreadPool { tx })
    }

    /// Queues `job` for the next idle worker.
    ///
    /// # Panics
    ///
    /// Panics if every worker has gone away.
    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.tx
            .send(Box::new(job))
            .expect("There are no threads in the pool");
    }
}

/// The receiving end held by one worker thread. Dropping it during a panic starts a
/// replacement thread with a clone of the receiver.
#[derive(Clone)]
struct Worker {
    id: u32,
    rx: Receiver<Job>,
}

impl Drop for Worker {
    fn drop(&mut self) {
        if thread::panicking() {
            debug!(worker = self.id, "job panicked, starting a new worker thread");
            let worker = self.clone();
            if let Err(e) = thread::Builder::new()
                .name(format!("msgs-worker-{}", worker.id))
                .spawn(move || run_jobs(worker))
            {
                error!("Failed to spawn a thread: {}", e);
            }
        }
    }
}

/// waits for jobs on the worker's receiver and runs them until the pool is dropped
#[instrument(skip(worker), fields(worker = worker.id))]
fn run_jobs(worker: Worker) {
    while let Ok(job) = worker.rx.recv() {
        debug!("received a new job");
        job();
    }
    debug!("worker exited because the thread pool was dropped");
}
