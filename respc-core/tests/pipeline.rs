//! Integration tests for pipelined reads over a real loopback socket: a
//! scripted server thread writes several replies back in one burst (or
//! fragmented across several small writes), and the client must decode
//! exactly as many as were asked for, regardless of how the bytes were
//! chunked on the wire.

#![cfg(feature = "sync")]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use respc_core::{Command, CommandSequence, Connection, ConnectionConfig, SingleCommand, Value};

fn spawn_server(addr_tx: std::sync::mpsc::Sender<std::net::SocketAddr>, script: impl FnOnce(TcpStream) + Send + 'static) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    addr_tx.send(listener.local_addr().unwrap()).unwrap();
    thread::spawn(move || {
        let (socket, _) = listener.accept().expect("accept connection");
        script(socket);
    });
}

#[test]
fn pipelines_three_commands_in_one_write() {
    let (tx, rx) = std::sync::mpsc::channel();
    spawn_server(tx, |mut socket| {
        let mut buf = [0u8; 256];
        let n = socket.read(&mut buf).expect("read pipelined commands");
        assert_eq!(
            &buf[..n],
            b"*1\r\n$4\r\nPING\r\n*1\r\n$4\r\nPING\r\n*1\r\n$4\r\nPING\r\n".as_slice()
        );
        socket
            .write_all(b"+PONG\r\n+PONG\r\n+PONG\r\n")
            .expect("write replies");
    });
    let addr = rx.recv().unwrap();

    let stream = TcpStream::connect(addr).expect("connect to loopback server");
    let mut conn = Connection::new(stream, ConnectionConfig::default());

    let mut sequence = CommandSequence::new();
    for _ in 0..3 {
        sequence.push(SingleCommand::new(["PING"]).unwrap());
    }
    let command: Command = sequence.into();

    let replies = conn.call(&command).expect("pipelined call succeeds");
    assert_eq!(replies, vec![Value::String(b"PONG".to_vec()); 3]);
}

#[test]
fn decodes_replies_fragmented_across_several_writes() {
    let (tx, rx) = std::sync::mpsc::channel();
    spawn_server(tx, |mut socket| {
        let mut buf = [0u8; 64];
        let n = socket.read(&mut buf).expect("read command");
        assert_eq!(&buf[..n], b"*1\r\n$4\r\nPING\r\n");

        // Dribble the reply out one byte at a time to exercise the
        // read loop's handling of a reply that straddles many physical
        // reads.
        for byte in b"+PONG\r\n" {
            socket.write_all(&[*byte]).expect("write one byte");
            thread::sleep(Duration::from_millis(1));
        }
    });
    let addr = rx.recv().unwrap();

    let stream = TcpStream::connect(addr).expect("connect to loopback server");
    let mut conn = Connection::new(stream, ConnectionConfig::default());
    let command: Command = SingleCommand::new(["PING"]).unwrap().into();

    let replies = conn.call(&command).expect("call succeeds despite fragmentation");
    assert_eq!(replies, vec![Value::String(b"PONG".to_vec())]);
}

#[test]
fn surfaces_a_server_error_reply() {
    let (tx, rx) = std::sync::mpsc::channel();
    spawn_server(tx, |mut socket| {
        let mut buf = [0u8; 64];
        let _ = socket.read(&mut buf).expect("read command");
        socket
            .write_all(b"-ERR unknown command\r\n")
            .expect("write error reply");
    });
    let addr = rx.recv().unwrap();

    let stream = TcpStream::connect(addr).expect("connect to loopback server");
    let mut conn = Connection::new(stream, ConnectionConfig::default());
    let command: Command = SingleCommand::new(["BOGUS"]).unwrap().into();

    let replies = conn.call(&command).expect("error replies still decode");
    assert_eq!(replies, vec![Value::Error(b"ERR unknown command".to_vec())]);
}
