//! Fault-path tests: bad commands are reported, never applied, and never
//! kill the stream.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread;
use std::time::{Duration, Instant};

use grid_agent::client::{Client, ClientConfig, ProtocolError, SessionEvent};
use grid_agent::core::Agent;
use grid_agent::types::{AgentCommand, CellIndex};

const MESSAGE_GAP: Duration = Duration::from_millis(50);
const EVENT_DEADLINE: Duration = Duration::from_secs(2);

fn config_for(addr: SocketAddr) -> ClientConfig {
    ClientConfig {
        host: addr.ip().to_string(),
        port: addr.port(),
        ..ClientConfig::default()
    }
}

fn next_event(client: &mut Client) -> Option<SessionEvent> {
    let start = Instant::now();
    while start.elapsed() < EVENT_DEADLINE {
        if let Some(event) = client.try_recv() {
            return Some(event);
        }
        thread::sleep(Duration::from_millis(5));
    }
    None
}

fn spawn_script_server(messages: Vec<&'static str>) -> (SocketAddr, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        stream.write_all(b"R?").expect("send ready query");
        let mut ack = [0u8; 16];
        let n = stream.read(&mut ack).expect("read ack");
        assert_eq!(&ack[..n], b"R");
        for msg in messages {
            thread::sleep(MESSAGE_GAP);
            stream.write_all(msg.as_bytes()).expect("send message");
        }
        thread::sleep(MESSAGE_GAP);
    });
    (addr, handle)
}

#[test]
fn malformed_move_is_reported_and_stream_continues() {
    let (addr, server) = spawn_script_server(vec!["M a b", "M 2 3", "E"]);

    let mut client = Client::connect(config_for(addr)).expect("connect");

    assert_eq!(next_event(&mut client), Some(SessionEvent::Ready));
    assert_eq!(
        next_event(&mut client),
        Some(SessionEvent::Fault(ProtocolError::MalformedCommand(
            "M a b".to_string()
        )))
    );

    // The session survived the fault; the next command still applies.
    assert_eq!(
        next_event(&mut client),
        Some(SessionEvent::Command(AgentCommand::MoveTo {
            col: CellIndex::new(2).unwrap(),
            row: CellIndex::new(3).unwrap(),
        }))
    );
    assert_eq!(next_event(&mut client), Some(SessionEvent::Ended));

    server.join().expect("server thread");
}

#[test]
fn out_of_range_index_is_reported_not_clamped() {
    let (addr, server) = spawn_script_server(vec!["M 31 0", "M 0 -1", "E"]);

    let mut client = Client::connect(config_for(addr)).expect("connect");

    assert_eq!(next_event(&mut client), Some(SessionEvent::Ready));
    assert_eq!(
        next_event(&mut client),
        Some(SessionEvent::Fault(ProtocolError::IndexOutOfRange {
            index: 31
        }))
    );
    assert_eq!(
        next_event(&mut client),
        Some(SessionEvent::Fault(ProtocolError::IndexOutOfRange {
            index: -1
        }))
    );
    assert_eq!(next_event(&mut client), Some(SessionEvent::Ended));

    server.join().expect("server thread");
}

#[test]
fn faults_leave_the_position_unchanged() {
    let (addr, server) = spawn_script_server(vec!["M 31 0", "M x y", "E"]);

    let mut agent = Agent::new(ClientConfig::default().table);
    let start = agent.position();

    let mut client = Client::connect(config_for(addr)).expect("connect");
    agent.connected();

    // Drive the agent exactly as the frame loop does.
    loop {
        match next_event(&mut client).expect("event before deadline") {
            SessionEvent::Ready => agent.handshake_complete(),
            SessionEvent::Command(command) => agent.apply(command),
            SessionEvent::Fault(_) => {} // reported, never applied
            SessionEvent::Ended | SessionEvent::Closed => {
                agent.terminate();
                break;
            }
        }
    }

    assert_eq!(agent.position(), start);
    server.join().expect("server thread");
}
