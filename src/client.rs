use std::io::{BufReader, BufWriter, Write};
use std::net::{TcpStream, ToSocketAddrs};
use serde::Deserialize;
use serde_json::de::IoRead;
use serde_json::Deserializer;
use crate::command::{Request, Response};
use crate::dice::DieRoll;
use crate::message::{Message, MessageInput};
use crate::{MsgError, Result};

/// `MessageClient` contains the functionality for talking to a [`MessageServer`]
///
/// A single client keeps its connection open, so any number of requests can be sent
/// through it one after the other.
///
/// [`MessageServer`]: ./struct.MessageServer.html
pub struct MessageClient {
    reader: Deserializer<IoRead<BufReader<TcpStream>>>,
    writer: BufWriter<TcpStream>,
}

impl MessageClient {
    /// creates a client and establishes a socket connection to the server at the given `addr`
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self> {
        let tcp_reader = TcpStream::connect(addr)?;
        let tcp_writer = tcp_reader.try_clone()?;

        Ok(MessageClient {
            reader: Deserializer::from_reader(BufReader::new(tcp_reader)),
            writer: BufWriter::new(tcp_writer),
        })
    }

    /// fetches the message stored under `id`
    /// # Errors
    /// `Err<MsgError::Server>` if no message exists with that id
    pub fn get_message(&mut self, id: String) -> Result<Message> {
        let resp = self.send(&Request::GetMessage { id })?;
        expect_message(resp)
    }

    /// stores a new message and returns it along with its generated id
    pub fn create_message(&mut self, input: MessageInput) -> Result<Message> {
        let resp = self.send(&Request::CreateMessage { input })?;
        expect_message(resp)
    }

    /// replaces the message stored under `id`
    /// # Errors
    /// `Err<MsgError::Server>` if no message exists with that id
    pub fn update_message(&mut self, id: String, input: MessageInput) -> Result<Message> {
        let resp = self.send(&Request::UpdateMessage { id, input })?;
        expect_message(resp)
    }

    /// asks the server for its quote of the day
    pub fn quote_of_the_day(&mut self) -> Result<String> {
        match self.send(&Request::QuoteOfTheDay)? {
            Response::Quote(quote) => Ok(quote),
            other => Err(unexpected(other)),
        }
    }

    /// asks the server for a random float in `[0, 1)`
    pub fn random(&mut self) -> Result<f64> {
        match self.send(&Request::Random)? {
            Response::Random(value) => Ok(value),
            other => Err(unexpected(other)),
        }
    }

    /// rolls three six sided dice on the server
    pub fn roll_three_dice(&mut self) -> Result<Vec<u32>> {
        match self.send(&Request::RollThreeDice)? {
            Response::Rolls(rolls) => Ok(rolls),
            other => Err(unexpected(other)),
        }
    }

    /// rolls `num_dice` dice with `num_sides` sides (six when `None`) on the server
    pub fn roll_dice(&mut self, num_dice: u32, num_sides: Option<u32>) -> Result<Vec<u32>> {
        match self.send(&Request::RollDice { num_dice, num_sides })? {
            Response::Rolls(rolls) => Ok(rolls),
            other => Err(unexpected(other)),
        }
    }

    /// gets a die with `num_sides` sides, rolled once plus `num_rolls` times
    pub fn get_die(&mut self, num_sides: Option<u32>, num_rolls: Option<u32>) -> Result<DieRoll> {
        match self.send(&Request::GetDie { num_sides, num_rolls })? {
            Response::Die(die) => Ok(die),
            other => Err(unexpected(other)),
        }
    }

    /// writes `req` to the server and waits for its response.
    /// An `Err` response from the server is turned into `MsgError::Server` here
    fn send(&mut self, req: &Request) -> Result<Response> {
        serde_json::to_writer(&mut self.writer, req)?;
        self.writer.flush()?;

        match Response::deserialize(&mut self.reader)? {
            Response::Err(msg) => Err(MsgError::Server(msg)), // re-throwing error here
            resp => Ok(resp),
        }
    }
}

fn expect_message(resp: Response) -> Result<Message> {
    match resp {
        Response::Message(message) => Ok(message),
        other => Err(unexpected(other)),
    }
}

fn unexpected(resp: Response) -> MsgError {
    MsgError::UnexpectedResponse(format!("{:?}", resp))
}
