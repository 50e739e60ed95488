use serde::{Deserialize, Serialize};

/// The fields a client supplies when creating or replacing a message.
/// Either field may be left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInput {
    /// the text of the message
    #[serde(default)]
    pub content: Option<String>,
    /// who wrote it
    #[serde(default)]
    pub author: Option<String>,
}

impl MessageInput {
    /// builds an input from optional `content` and `author`
    pub fn new(content: Option<String>, author: Option<String>) -> Self {
        MessageInput { content, author }
    }
}

/// A stored message along with the id the store assigned to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// opaque identifier generated by the store
    pub id: String,
    /// the text of the message
    pub content: Option<String>,
    /// who wrote it
    pub author: Option<String>,
}

impl Message {
    /// attaches `id` to the given `input`
    pub fn new(id: String, input: MessageInput) -> Self {
        Message {
            id,
            content: input.content,
            author: input.author,
        }
    }
}
