use crate::command::{Request, Response};
use crate::dice::{self, RandomDie};
use crate::thread_pool::ThreadPool;
use crate::{MessageEngine, Result};
use serde_json::Deserializer;
use std::io::{BufReader, BufWriter, Write};
use std::net::{TcpListener, TcpStream, ToSocketAddrs};
use tracing::{debug, error, info};

/// A TCP socket server in front of a [`MessageEngine`].
/// It listens for incoming [`Request`]s on a [`SocketAddr`](https://doc.rust-lang.org/std/net/enum.SocketAddr.html)
/// and serves every connection on a thread taken from its [`ThreadPool`].
///
/// Each thread receives its own handle to the engine and uses it to process the requests
/// arriving on that connection.
///
/// # Example
/// Create a server for "127.0.0.1:4000", with 4 threads running on a Rayon
/// Thread Pool, over an in-memory message store
/// ```rust
/// use msgs::{MemoryStore, MessageServer};
/// use msgs::thread_pool::{RayonThreadPool, ThreadPool};
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let pool = RayonThreadPool::new(4)?;
/// let server = MessageServer::new(MemoryStore::new(), pool);
/// //server.run("127.0.0.1:4000")?;
/// # Ok(())
/// # }
/// ```
///
/// [`Request`]: ./enum.Request.html
pub struct MessageServer<E: MessageEngine, P: ThreadPool> {
    /// the store every connection reads and writes
    engine: E,
    /// a pool of threads that serve connections using a handle to the engine
    pool: P,
}

impl<E: MessageEngine, P: ThreadPool> MessageServer<E, P> {
    /// Create a new `MessageServer` using the given [`MessageEngine`] and [`ThreadPool`] implementation.
    pub fn new(engine: E, pool: P) -> Self {
        MessageServer { engine, pool }
    }

    /// binds to the given address and serves connections until the process exits
    ///
    /// # Errors
    /// returns [`MsgError::Io`] if the address could not be bound
    ///
    /// [`MsgError::Io`]: ./enum.MsgError.html
    pub fn run<A: ToSocketAddrs>(self, addr: A) -> Result<()> {
        let listener = TcpListener::bind(addr)?;
        self.serve(listener)
    }

    /// serves connections from an already bound `listener`.
    /// A failure on one connection is logged and never stops the server.
    pub fn serve(self, listener: TcpListener) -> Result<()> {
        info!("accepting connections on {}", listener.local_addr()?);
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let engine = self.engine.clone();
                    self.pool.spawn(move || {
                        if let Err(e) = serve_client(engine, stream) {
                            error!("Error on serving client: {}", e);
                        }
                    });
                }
                Err(e) => error!("Connection failed: {}", e),
            }
        }
        Ok(())
    }
}

/// Reads [`Request`]s off the `tcp` stream until the client hangs up, answering each one with
/// exactly one [`Response`]
///
/// [`Request`]: ./enum.Request.html
/// [`Response`]: ./enum.Response.html
fn serve_client<E: MessageEngine>(engine: E, tcp: TcpStream) -> Result<()> {
    let peer_addr = tcp.peer_addr()?;
    let stream_reader = BufReader::new(&tcp);
    let mut stream_writer = BufWriter::new(&tcp);
    let req_reader = Deserializer::from_reader(stream_reader).into_iter::<Request>();

    for req in req_reader {
        let req = req?;
        debug!("Receive request from {}: {:?}", peer_addr, req);

        let resp = handle(&engine, req).unwrap_or_else(|e| Response::Err(e.to_string()));

        serde_json::to_writer(&mut stream_writer, &resp)?;
        stream_writer.flush()?;
        debug!("Response sent to {}: {:?}", peer_addr, resp);
    }
    Ok(())
}

/// runs a single request against the engine or the dice
fn handle<E: MessageEngine>(engine: &E, req: Request) -> Result<Response> {
    let resp = match req {
        Request::GetMessage { id } => Response::Message(engine.fetch(&id)?),
        Request::CreateMessage { input } => Response::Message(engine.create(input)?),
        Request::UpdateMessage { id, input } => Response::Message(engine.replace(&id, input)?),
        Request::QuoteOfTheDay => Response::Quote(dice::quote_of_the_day()),
        Request::Random => Response::Random(dice::random()),
        Request::RollThreeDice => Response::Rolls(dice::roll_three_dice()),
        Request::RollDice {
            num_dice,
            num_sides,
        } => Response::Rolls(dice::roll_dice(num_dice, num_sides)?),
        Request::GetDie {
            num_sides,
            num_rolls,
        } => Response::Die(RandomDie::new(num_sides)?.report(num_rolls.unwrap_or(0))?),
    };
    Ok(resp)
}
