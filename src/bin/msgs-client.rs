//! The msgs-client executable supports the following command line arguments, each of which
//! also accepts `--addr IP-PORT` (default `127.0.0.1:4000`):
//!
//! `msgs-client create [--content TEXT] [--author NAME]`
//!
//!     Store a new message. Prints the stored message, including its generated id.
//!
//! `msgs-client get <ID>`
//!
//!     Print the message stored under ID.
//!
//! `msgs-client update <ID> [--content TEXT] [--author NAME]`
//!
//!     Replace the message stored under ID. Fields that are left out are cleared.
//!
//! `msgs-client quote`, `msgs-client random`, `msgs-client roll-three`
//!
//!     Print the quote of the day, a random float, or three six sided dice rolls.
//!
//! `msgs-client roll <NUM_DICE> [--sides N]`, `msgs-client die [--sides N] [--rolls N]`
//!
//!     Roll some dice, or describe a die and roll it.
//!
//! Results are printed to stdout as JSON. On a server error, an unknown id, or an address
//! that does not parse, an error is printed and a non-zero exit code returned.
//!
//! `msgs-client -V`
//!
//!     Print the version.

use std::net::SocketAddr;
use std::process::exit;
use clap::{crate_version, App, Arg, SubCommand, ArgMatches};
use msgs::{MessageClient, MessageInput, MsgError, Result, Request};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const DEFAULT_ADDRESS: &str = "127.0.0.1:4000";

/// `Opt` holds parsed and validated options from the command line
#[derive(Debug)]
struct Opt {
    /// the server's ip:port
    addr: SocketAddr,
    req: Request,
}

impl Opt {
    /// validates the `addr` parameter is a valid IP address and PORT
    /// # Errors
    /// returns [`MsgError::Parsing`] if it is not
    ///
    fn build(addr: &str, req: Request) -> Result<Opt> {
        let addr: SocketAddr = addr
            .parse()
            .map_err(|_| MsgError::Parsing(format!("could not parse {} into an IP address and port", &addr)))?;

        Ok(Opt { addr, req })
    }
}

fn main() {
    // configure a subscriber that will log messages to STDERR
    subscriber_config();

    let addr_arg = Arg::with_name("addr")
        .long("addr")
        .value_name("IP_ADDR:PORT")
        .help("sets the IP_ADDR:PORT of the server to connect to")
        .default_value(DEFAULT_ADDRESS);
    let content_arg = Arg::with_name("content")
        .long("content")
        .value_name("TEXT")
        .takes_value(true)
        .help("the text of the message");
    let author_arg = Arg::with_name("author")
        .long("author")
        .value_name("NAME")
        .takes_value(true)
        .help("who wrote the message");
    let sides_arg = Arg::with_name("sides")
        .long("sides")
        .value_name("N")
        .takes_value(true)
        .help("number of sides per die, defaults to 6");

    let matches = App::new("msgs-client")
        .version(crate_version!())
        .author("strohs <strohs1@gmail.com>")
        .about("client for the msgs message server")
        .subcommands(vec![
            SubCommand::with_name("create")
                .about("Store a new message")
                .arg(content_arg.clone())
                .arg(author_arg.clone()),
            SubCommand::with_name("get")
                .about("Get the message stored under an id")
                .arg(Arg::with_name("ID").required(true).index(1)),
            SubCommand::with_name("update")
                .about("Replace every field of the message stored under an id")
                .arg(Arg::with_name("ID").required(true).index(1))
                .arg(content_arg)
                .arg(author_arg),
            SubCommand::with_name("quote").about("Get the quote of the day"),
            SubCommand::with_name("random").about("Get a random number between 0 and 1"),
            SubCommand::with_name("roll-three").about("Roll three six sided dice"),
            SubCommand::with_name("roll")
                .about("Roll some dice")
                .arg(Arg::with_name("NUM_DICE").required(true).index(1))
                .arg(sides_arg.clone()),
            SubCommand::with_name("die")
                .about("Describe a die and roll it")
                .arg(sides_arg)
                .arg(Arg::with_name("rolls")
                    .long("rolls")
                    .value_name("N")
                    .takes_value(true)
                    .help("how many times to roll the die")),
        ]
        .into_iter()
        // every subcommand talks to a server
        .map(|cmd| cmd.arg(addr_arg.clone())))
        .get_matches();

    // parse commands into an Opt struct, then run it
    if let Err(e) = parse_options(&matches).and_then(run) {
        eprintln!("{}", e);
        exit(1);
    }
}

/// sends the request held by `opt` to the server and prints the result
fn run(opt: Opt) -> Result<()> {
    let mut client = MessageClient::connect(opt.addr)?;
    match opt.req {
        Request::GetMessage { id } => print_json(&client.get_message(id)?),
        Request::CreateMessage { input } => print_json(&client.create_message(input)?),
        Request::UpdateMessage { id, input } => print_json(&client.update_message(id, input)?),
        Request::QuoteOfTheDay => print_json(&client.quote_of_the_day()?),
        Request::Random => print_json(&client.random()?),
        Request::RollThreeDice => print_json(&client.roll_three_dice()?),
        Request::RollDice { num_dice, num_sides } => print_json(&client.roll_dice(num_dice, num_sides)?),
        Request::GetDie { num_sides, num_rolls } => print_json(&client.get_die(num_sides, num_rolls)?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// parses the matches from the command line into an [`Opt`] struct
fn parse_options(matches: &ArgMatches) -> Result<Opt> {
    let (name, args) = match matches.subcommand() {
        (name, Some(args)) => (name, args),
        _ => return Err(MsgError::Parsing(String::from("no command given, see --help"))),
    };
    let addr = args.value_of("addr").unwrap_or(DEFAULT_ADDRESS);
    let req = match name {
        "create" => Request::CreateMessage { input: message_input(args) },
        "get" => Request::GetMessage { id: required(args, "ID")? },
        "update" => Request::UpdateMessage {
            id: required(args, "ID")?,
            input: message_input(args),
        },
        "quote" => Request::QuoteOfTheDay,
        "random" => Request::Random,
        "roll-three" => Request::RollThreeDice,
        "roll" => Request::RollDice {
            num_dice: parse_count(&required(args, "NUM_DICE")?)?,
            num_sides: optional_count(args, "sides")?,
        },
        "die" => Request::GetDie {
            num_sides: optional_count(args, "sides")?,
            num_rolls: optional_count(args, "rolls")?,
        },
        other => return Err(MsgError::Parsing(format!("unknown command {}", other))),
    };
    Opt::build(addr, req)
}

fn message_input(args: &ArgMatches) -> MessageInput {
    MessageInput::new(
        args.value_of("content").map(String::from),
        args.value_of("author").map(String::from),
    )
}

fn required(args: &ArgMatches, name: &str) -> Result<String> {
    args.value_of(name)
        .map(String::from)
        .ok_or_else(|| MsgError::Parsing(format!("missing argument {}", name)))
}

fn optional_count(args: &ArgMatches, name: &str) -> Result<Option<u32>> {
    args.value_of(name).map(parse_count).transpose()
}

fn parse_count(value: &str) -> Result<u32> {
    value
        .parse::<u32>()
        .map_err(|_| MsgError::Parsing(format!("could not parse {} into a count", value)))
}

/// configures a tracing subscriber that will log to STDERR
fn subscriber_config() {
    let subscriber = FmtSubscriber::builder()
        // only warnings and errors, stdout is reserved for results
        .with_max_level(Level::WARN)
        // log to stderr instead of stdout
        .with_writer(std::io::stderr)
        // completes the builder.
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting tracing default subscriber failed");
}
