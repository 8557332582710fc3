//! End-to-end smoke test against a scripted loopback server: no real RESP
//! server is spawned, just a task that speaks just enough of the wire
//! protocol to answer one `PING` with `PONG`.

use respc_tokio::{Connection, ConnectionConfig, SingleCommand, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[tokio::test]
async fn ping_pong_round_trip() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback listener");
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept connection");
        let mut buf = [0u8; 64];
        let n = socket.read(&mut buf).await.expect("read command");
        assert_eq!(&buf[..n], b"*1\r\n$4\r\nPING\r\n");
        socket.write_all(b"+PONG\r\n").await.expect("write reply");
    });

    let stream = TcpStream::connect(addr).await.expect("connect to loopback server");
    let mut conn = Connection::new(stream, ConnectionConfig::default());
    let command = SingleCommand::new(["PING"]).unwrap().into();

    let replies = conn.async_call(&command).await.expect("call succeeds");
    assert_eq!(replies, vec![Value::String(b"PONG".to_vec())]);

    server.await.expect("server task does not panic");
}
