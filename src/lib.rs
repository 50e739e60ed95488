#![deny(missing_docs)]
//! A multithreaded, in-memory message store that hands out its own ids, served over TCP.
//!
//! This crate provides the [`MemoryStore`] implementation itself, as well as a `msgs-client`
//! and `msgs-server` executable (see `src/bin/`) that can be used to talk to it.
//! Requests and responses travel between the client and server as JSON over a plain
//! TCP connection.
//!
//! ## Supported Operations
//! The message store supports three operations:
//!
//! - `CREATE` a message under a freshly generated id
//! - `GET` a message by its id
//! - `UPDATE` (replace) every field of a message by its id
//!
//! There is no delete and no listing. See the [`MessageEngine`] trait for the details.
//!
//! Next to the store the server answers a few random queries: a quote of the day, a random
//! float, and dice rolls. These live in the [`dice`] module.
//!
//! ## MemoryStore
//! [`MemoryStore`] is the implementor of the [`MessageEngine`] trait.
//! It is responsible for the following tasks:
//! - generating a unique id for every new message, through an [`IdGenerator`]
//! - keeping messages in a mutex guarded `HashMap` shared by every clone of the store
//! - failing with [`MsgError::NotFound`] when asked for, or to replace, an unknown id
//!
//! Nothing is persisted. The messages live as long as the process does.
//!
//! ## Ids
//! By default an id is 10 bytes from the operating system's random source, hex encoded
//! into 20 lowercase characters. Tests can use [`SequentialIds`] instead.
//!
//! ## Client / Server
//! Client and server logic is contained in the [`client`] and [`server`] structs. They are
//! responsible for the networking portion of this application, and for (de)serializing
//! [`Request`] and [`Response`] values.
//!
//! A client may send any number of requests over one connection. The server answers every
//! [`Request`] with exactly one [`Response`]. If the request failed the response is an
//! [`Err`] variant carrying the error message, and the connection stays open.
//!
//! [`client`]: ./struct.MessageClient.html
//! [`server`]: ./struct.MessageServer.html
//! [`MessageEngine`]: ./engine/trait.MessageEngine.html
//! [`Request`]: ./enum.Request.html
//! [`Response`]: ./enum.Response.html
//! [`Err`]: ./enum.Response.html#variant.Err

pub use error::{Result, MsgError};
pub use engine::{MessageEngine, MemoryStore, MAX_ID_ATTEMPTS};
pub use id::{IdGenerator, RandomIds, SequentialIds, ID_BYTES};
pub use message::{Message, MessageInput};
pub use server::MessageServer;
pub use client::MessageClient;
pub use thread_pool::{ThreadPool, SharedQueueThreadPool, RayonThreadPool};
pub use command::{Response, Request};
pub use dice::{DieRoll, RandomDie};

mod client;
mod command;
pub mod dice;
mod engine;
mod error;
mod id;
mod message;
mod server;
pub mod thread_pool;
