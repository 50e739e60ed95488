use serde::{Deserialize, Serialize};

use crate::dice::DieRoll;
use crate::message::{Message, MessageInput};

/// These are the requests that a client can send to a message server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Request {
    /// fetch a stored message
    GetMessage {
        /// id previously returned by `CreateMessage`
        id: String,
    },
    /// store a new message under a freshly generated id
    CreateMessage {
        /// the message fields
        input: MessageInput,
    },
    /// replace every field of an existing message
    UpdateMessage {
        /// id of the message to replace
        id: String,
        /// the new message fields, missing fields are cleared
        input: MessageInput,
    },
    /// one of two canned quotes
    QuoteOfTheDay,
    /// a uniform random float in `[0, 1)`
    Random,
    /// roll three six sided dice
    RollThreeDice,
    /// roll `num_dice` dice
    RollDice {
        /// how many dice to roll
        num_dice: u32,
        /// sides per die, six when absent
        num_sides: Option<u32>,
    },
    /// describe a die and roll it
    GetDie {
        /// sides of the die, six when absent
        num_sides: Option<u32>,
        /// how many extra rolls to report, none when absent
        num_rolls: Option<u32>,
    },
}

/// The Response types that can be returned for any [`Request`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Response {
    /// returned by the message requests
    Message(Message),
    /// returned by `QuoteOfTheDay`
    Quote(String),
    /// returned by `Random`
    Random(f64),
    /// returned by `RollThreeDice` and `RollDice`
    Rolls(Vec<u32>),
    /// returned by `GetDie`
    Die(DieRoll),
    /// returned if an Error occurs while processing the request
    Err(String),
}
