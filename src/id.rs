//! Identifier generation for stored messages.
//!
//! The store never lets a caller pick an id. It asks an [`IdGenerator`] instead, which by
//! default is [`RandomIds`]. Tests can plug in [`SequentialIds`] to get predictable ids.
use rand::rngs::OsRng;
use rand::RngCore;

/// number of random bytes behind every generated id (80 bits of entropy)
pub const ID_BYTES: usize = 10;

/// A source of fresh message identifiers
pub trait IdGenerator: Send {
    /// returns the next identifier. Implementations are not required to remember what
    /// they handed out, the store re-asks on a collision. A generator must return an unused
    /// id within `MAX_ID_ATTEMPTS` tries, after that `create` fails with
    /// `MsgError::IdsExhausted`.
    fn next_id(&mut self) -> String;
}

/// Generates ids from [`ID_BYTES`] bytes of OS randomness, hex encoded (20 lowercase chars)
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        let mut bytes = [0_u8; ID_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

/// Hands out `prefix-1`, `prefix-2`, ... in order.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// creates a generator whose ids all start with `prefix`
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIds {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
