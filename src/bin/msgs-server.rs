//! this binary starts the message server
//! to see the list of options, type: `msgs-server --help`

use std::net::SocketAddr;
use clap::{crate_version, App, Arg, arg_enum, value_t};
use msgs::{MemoryStore, MessageServer, MsgError, RayonThreadPool, Result, SharedQueueThreadPool, ThreadPool};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use std::process::exit;

arg_enum! {
    #[allow(non_camel_case_types)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    enum Pool {
        shared,
        rayon
    }
}

const DEFAULT_ADDRESS: &str = "127.0.0.1:4000";
const DEFAULT_POOL: Pool = Pool::shared;
const DEFAULT_THREADS: &str = "4";

/// `Opt` holds parsed and validated options from the command line
#[derive(Debug)]
struct Opt {
    addr: SocketAddr,
    pool: Pool,
    threads: u32,
}

impl Opt {
    /// validates the `addr` and `threads` parameters
    /// returns `Ok<Opt>` if everything is valid
    /// # Errors
    /// returns [`MsgError::Parsing`] if one of the parameters is invalid
    ///
    fn build(addr: &str, pool: Pool, threads: &str) -> Result<Opt> {
        let addr: SocketAddr = addr
            .parse()
            .map_err(|_| MsgError::Parsing(format!("could not parse {} into an IP address and port", &addr)))?;

        let threads = match threads.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => return Err(MsgError::Parsing(format!("thread count must be a positive integer, got {}", threads))),
        };

        Ok(Opt { addr, pool, threads })
    }
}

fn main() {
    // set up a tracing subscriber to log to STDERR
    subscriber_config();

    // parse command line args
    let matches = App::new("msgs-server")
        .version(crate_version!())
        .author("strohs <strohs1@gmail.com>")
        .about("a multi-threaded message store server")
        .arg(Arg::with_name("addr")
            .long("addr")
            .value_name("IP_ADDR:PORT")
            .help("sets the IP_ADDR:PORT that the server listens on")
            .default_value(DEFAULT_ADDRESS))
        .arg(Arg::with_name("pool")
            .long("pool")
            .value_name("POOL_NAME")
            .help("sets the thread pool to serve connections with, either 'shared' or 'rayon'")
            .possible_values(&Pool::variants())
            .default_value("shared"))
        .arg(Arg::with_name("threads")
            .long("threads")
            .value_name("N")
            .help("sets the number of threads in the pool")
            .default_value(DEFAULT_THREADS))
        .get_matches();

    // both have defaults, so they are always present
    let addr = matches.value_of("addr").unwrap_or(DEFAULT_ADDRESS);
    let threads = matches.value_of("threads").unwrap_or(DEFAULT_THREADS);
    let pool: Pool = value_t!(matches, "pool", Pool).unwrap_or(DEFAULT_POOL);
    let opt = match Opt::build(addr, pool, threads) {
        Ok(opt) => opt,
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        }
    };

    // start the server
    if let Err(e) = run(opt) {
        eprintln!("{}", e);
        exit(1);
    }
}

fn run(opt: Opt) -> Result<()> {
    info!("msgs-server {}", env!("CARGO_PKG_VERSION"));
    info!("Thread pool: {} with {} threads", opt.pool, opt.threads);
    info!("Listening on {}", opt.addr);

    let store = MemoryStore::new();
    match opt.pool {
        Pool::shared => run_with_pool(store, SharedQueueThreadPool::new(opt.threads)?, opt.addr),
        Pool::rayon => run_with_pool(store, RayonThreadPool::new(opt.threads)?, opt.addr),
    }
}

fn run_with_pool<P: ThreadPool>(store: MemoryStore, pool: P, addr: SocketAddr) -> Result<()> {
    let server = MessageServer::new(store, pool);
    server.run(addr)
}

/// configures a tracing subscriber that will log to STDERR
fn subscriber_config() {
    let subscriber = FmtSubscriber::builder()
        // everything at DEBUG and above (info, warn, error) gets written
        .with_max_level(Level::DEBUG)
        // log to stderr instead of stdout
        .with_writer(std::io::stderr)
        // completes the builder.
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting tracing default subscriber failed");
}
