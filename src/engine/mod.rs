//! This module provides the message storage engine. The only implementation is
//! [`MemoryStore`], which keeps everything in a mutex guarded `HashMap` for the lifetime of
//! the process.
use crate::message::{Message, MessageInput};
use crate::Result;

/// A trait for the basic functionality of a message storage engine
///
/// All methods take `&self` so a handle can be cloned into every server thread.
/// Implementors provide their own interior synchronization.
pub trait MessageEngine: Clone + Send + 'static {
    /// stores `input` under a newly generated id and returns the stored message
    ///
    /// The id is never chosen by the caller and is never one already in the store.
    ///
    /// # Errors
    ///
    /// Returns `MsgError::IdsExhausted` if the id generator keeps repeating stored ids.
    fn create(&self, input: MessageInput) -> Result<Message>;

    /// gets the message stored under `id`
    ///
    /// # Errors
    ///
    /// Returns `MsgError::NotFound` if the given `id` is not in the store.
    fn fetch(&self, id: &str) -> Result<Message>;

    /// replaces the whole message stored under `id` with `input`
    ///
    /// Fields missing from `input` are cleared, not kept from the old message.
    ///
    /// # Errors
    ///
    /// Returns `MsgError::NotFound` if the given `id` is not in the store.
    fn replace(&self, id: &str, input: MessageInput) -> Result<Message>;
}

mod memory;

pub use self::memory::{MemoryStore, MAX_ID_ATTEMPTS};
