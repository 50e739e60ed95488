use msgs::dice::MAX_ROLLS;
use msgs::{
    MemoryStore, MessageClient, MessageInput, MessageServer, MsgError, RayonThreadPool, Result,
    Request, Response, SequentialIds, SharedQueueThreadPool, ThreadPool,
};
use serde_json::Deserializer;
use std::io::Write;
use std::net::{SocketAddr, TcpListener};
use std::thread;

/// starts a server over `store` on an ephemeral port and returns its address.
/// The server thread is left running for the rest of the test process.
fn start_server<P: ThreadPool + Send + 'static>(store: MemoryStore, pool: P) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = MessageServer::new(store, pool);
    thread::spawn(move || server.serve(listener));
    addr
}

fn input(content: Option<&str>, author: Option<&str>) -> MessageInput {
    MessageInput::new(content.map(String::from), author.map(String::from))
}

#[test]
fn hi_bob_over_tcp() -> Result<()> {
    let addr = start_server(MemoryStore::new(), SharedQueueThreadPool::new(2)?);
    let mut client = MessageClient::connect(addr)?;

    let created = client.create_message(input(Some("hi"), Some("bob")))?;
    assert_eq!(created.content.as_deref(), Some("hi"));
    assert_eq!(created.author.as_deref(), Some("bob"));

    assert_eq!(client.get_message(created.id.clone())?, created);

    let replaced = client.update_message(created.id.clone(), input(Some("hi2"), Some("bob")))?;
    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.content.as_deref(), Some("hi2"));

    match client.get_message("doesnotexist".to_string()) {
        Err(MsgError::Server(msg)) => assert_eq!(msg, "no message exists with id doesnotexist"),
        other => panic!("expected a server error, got {:?}", other),
    }

    // the connection is still usable after an error
    assert_eq!(client.get_message(created.id.clone())?, replaced);
    Ok(())
}

#[test]
fn update_unknown_id_over_tcp() -> Result<()> {
    let addr = start_server(MemoryStore::new(), SharedQueueThreadPool::new(2)?);
    let mut client = MessageClient::connect(addr)?;

    let result = client.update_message("nope".to_string(), input(Some("x"), None));
    assert!(matches!(result, Err(MsgError::Server(ref msg)) if msg.contains("nope")));
    Ok(())
}

#[test]
fn clients_share_one_store() -> Result<()> {
    let store = MemoryStore::with_generator(SequentialIds::new("m"));
    let addr = start_server(store.clone(), RayonThreadPool::new(2)?);

    let mut writer = MessageClient::connect(addr)?;
    let mut reader = MessageClient::connect(addr)?;

    let created = writer.create_message(input(Some("x"), Some("a")))?;
    assert_eq!(created.id, "m-1");
    writer.update_message(created.id.clone(), input(Some("y"), None))?;

    let fetched = reader.get_message("m-1".to_string())?;
    assert_eq!(fetched.content.as_deref(), Some("y"));
    assert_eq!(fetched.author, None);
    assert_eq!(store.len()?, 1);
    Ok(())
}

#[test]
fn dice_over_tcp() -> Result<()> {
    let addr = start_server(MemoryStore::new(), SharedQueueThreadPool::new(2)?);
    let mut client = MessageClient::connect(addr)?;

    let quote = client.quote_of_the_day()?;
    assert!(quote == "Take it easy" || quote == "Salvation lies within");

    let value = client.random()?;
    assert!((0.0..1.0).contains(&value));

    let three = client.roll_three_dice()?;
    assert_eq!(three.len(), 3);

    let rolls = client.roll_dice(10, Some(4))?;
    assert_eq!(rolls.len(), 10);
    assert!(rolls.iter().all(|r| (1..=4).contains(r)));

    let die = client.get_die(None, Some(3))?;
    assert_eq!(die.num_sides, 6);
    assert_eq!(die.rolls.len(), 3);

    let plain = client.get_die(Some(12), None)?;
    assert!(plain.rolls.is_empty());

    assert!(matches!(client.roll_dice(2, Some(0)), Err(MsgError::Server(_))));
    Ok(())
}

#[test]
fn many_clients_create_concurrently() -> Result<()> {
    let store = MemoryStore::new();
    let addr = start_server(store.clone(), SharedQueueThreadPool::new(4)?);

    let handles: Vec<_> = (0..8)
        .map(|t| {
            thread::spawn(move || -> Result<Vec<String>> {
                let mut client = MessageClient::connect(addr)?;
                (0..20)
                    .map(|i| {
                        client
                            .create_message(input(Some(format!("{}-{}", t, i).as_str()), None))
                            .map(|m| m.id)
                    })
                    .collect()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.extend(handle.join().unwrap()?);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 160);
    assert_eq!(store.len()?, 160);
    Ok(())
}

// Should answer oversized dice requests with an error and keep serving the connection
#[test]
fn oversized_rolls_over_tcp() -> Result<()> {
    let store = MemoryStore::new();
    let addr = start_server(store.clone(), SharedQueueThreadPool::new(2)?);
    let mut client = MessageClient::connect(addr)?;

    let created = client.create_message(input(Some("keep me"), None))?;

    match client.roll_dice(u32::MAX, Some(6)) {
        Err(MsgError::Server(msg)) => assert!(msg.contains("num_dice"), "{}", msg),
        other => panic!("expected a server error, got {:?}", other),
    }
    assert!(matches!(client.get_die(None, Some(MAX_ROLLS + 1)), Err(MsgError::Server(_))));

    // same connection, same store
    assert_eq!(client.get_message(created.id.clone())?, created);
    assert_eq!(client.roll_dice(2, None)?.len(), 2);
    assert_eq!(store.len()?, 1);
    Ok(())
}

// Should report a response of the wrong shape instead of accepting it
#[test]
fn mismatched_response_is_an_error() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;

    // a fake server that answers every request with a quote
    thread::spawn(move || -> Result<()> {
        let (tcp, _) = listener.accept()?;
        let mut writer = tcp.try_clone()?;
        for req in Deserializer::from_reader(tcp).into_iter::<Request>() {
            req?;
            serde_json::to_writer(&mut writer, &Response::Quote("Take it easy".to_string()))?;
            writer.flush()?;
        }
        Ok(())
    });

    let mut client = MessageClient::connect(addr)?;
    assert!(matches!(
        client.get_message("any".to_string()),
        Err(MsgError::UnexpectedResponse(_))
    ));
    assert!(matches!(client.roll_three_dice(), Err(MsgError::UnexpectedResponse(_))));
    assert_eq!(client.quote_of_the_day()?, "Take it easy");
    Ok(())
}
