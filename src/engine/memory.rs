use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, instrument, warn};

use super::MessageEngine;
use crate::error::{MsgError, Result};
use crate::id::{IdGenerator, RandomIds};
use crate::message::{Message, MessageInput};

/// how many times `create` asks the generator for an unused id before giving up
pub const MAX_ID_ATTEMPTS: u32 = 32;

/// An in-memory message store.
///
/// Messages live in a `HashMap` keyed by the id the store generated for them. Nothing is
/// persisted, the data is gone once the last handle is dropped. Cloning a `MemoryStore`
/// gives another handle to the *same* map, so every server thread can hold one.
///
/// Every operation locks a single mutex around both the map and the id generator, which keeps
/// id generation collision free and lets a replace always see the latest state.
#[derive(Clone)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

struct State {
    // maps ids to the stored fields
    records: HashMap<String, MessageInput>,
    // source of new ids
    ids: Box<dyn IdGenerator>,
}

impl MemoryStore {
    /// creates an empty store that generates random hex ids
    pub fn new() -> Self {
        MemoryStore::with_generator(RandomIds)
    }

    /// creates an empty store that takes its ids from `ids`
    pub fn with_generator(ids: impl IdGenerator + 'static) -> Self {
        MemoryStore {
            state: Arc::new(Mutex::new(State {
                records: HashMap::new(),
                ids: Box::new(ids),
            })),
        }
    }

    /// number of messages currently stored
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.records.len())
    }

    /// returns `true` if nothing has been created yet
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>> {
        self.state.lock().map_err(|_| MsgError::LockPoisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore::new()
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.state.lock().map(|s| s.records.len()).ok();
        f.debug_struct("MemoryStore").field("len", &len).finish()
    }
}

impl MessageEngine for MemoryStore {
    #[instrument(skip(self))]
    fn create(&self, input: MessageInput) -> Result<Message> {
        let mut state = self.lock()?;

        // a generator may repeat itself, ask again a bounded number of times
        let mut attempts = 0;
        let id = loop {
            let id = state.ids.next_id();
            if !state.records.contains_key(&id) {
                break id;
            }
            attempts += 1;
            if attempts >= MAX_ID_ATTEMPTS {
                warn!(attempts, "id generator keeps returning ids already in use");
                return Err(MsgError::IdsExhausted(attempts));
            }
            debug!(%id, "generated id already in use, retrying");
        };

        state.records.insert(id.clone(), input.clone());
        debug!(%id, "created message");
        Ok(Message::new(id, input))
    }

    #[instrument(skip(self))]
    fn fetch(&self, id: &str) -> Result<Message> {
        let state = self.lock()?;
        match state.records.get(id) {
            Some(input) => Ok(Message::new(id.to_string(), input.clone())),
            None => Err(MsgError::NotFound(id.to_string())),
        }
    }

    #[instrument(skip(self))]
    fn replace(&self, id: &str, input: MessageInput) -> Result<Message> {
        let mut state = self.lock()?;
        match state.records.get_mut(id) {
            Some(stored) => {
                // whole record replacement, nothing carries over from the old fields
                *stored = input.clone();
                debug!(%id, "replaced message");
                Ok(Message::new(id.to_string(), input))
            }
            None => Err(MsgError::NotFound(id.to_string())),
        }
    }
}
