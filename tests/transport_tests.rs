#![cfg(feature = "std")]

use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};

use sternhalma::{
    transport::in_memory::InMemoryTransport, transport::Transport, Color, FieldState, Grid,
    Message, TcpTransport,
};

async fn tcp_pair() -> (TcpTransport, TcpTransport) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let client = TcpTransport::connect(addr).await.unwrap();
    let (server_stream, _) = listener.accept().await.unwrap();
    (client, TcpTransport::new(server_stream))
}

#[tokio::test]
async fn tcp_round_trips_messages_both_ways() {
    let (mut client, mut server) = tcp_pair().await;

    let login = Message::Login {
        name: "casey".into(),
        password: "hunter2".into(),
    };
    client.send(login.clone()).await.unwrap();
    assert_eq!(server.recv().await.unwrap(), login);

    let sync = Message::FieldInfo {
        fields: vec![
            FieldState {
                pos: Grid::new(0, -4),
                pin: Some(Color::Red),
            },
            FieldState {
                pos: Grid::new(0, 0),
                pin: None,
            },
        ],
    };
    server.send(sync.clone()).await.unwrap();
    assert_eq!(client.recv().await.unwrap(), sync);
}

#[tokio::test]
async fn tcp_rejects_an_absurd_frame_length() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let mut raw = TcpStream::connect(addr).await.unwrap();
    let (server_stream, _) = listener.accept().await.unwrap();
    let mut server = TcpTransport::new(server_stream);

    raw.write_all(&[0xFF; 4]).await.unwrap();
    let err = server.recv().await.unwrap_err();
    assert!(err.to_string().contains("invalid frame length"), "{}", err);
}

#[tokio::test]
async fn tcp_rejects_a_zero_length_frame() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let mut raw = TcpStream::connect(addr).await.unwrap();
    let (server_stream, _) = listener.accept().await.unwrap();
    let mut server = TcpTransport::new(server_stream);

    raw.write_all(&0u32.to_be_bytes()).await.unwrap();
    let err = server.recv().await.unwrap_err();
    assert!(err.to_string().contains("invalid frame length"), "{}", err);
}

#[tokio::test]
async fn tcp_rejects_garbage_inside_a_valid_frame() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let mut raw = TcpStream::connect(addr).await.unwrap();
    let (server_stream, _) = listener.accept().await.unwrap();
    let mut server = TcpTransport::new(server_stream);

    raw.write_all(&4u32.to_be_bytes()).await.unwrap();
    raw.write_all(&[0xFF; 4]).await.unwrap();
    let err = server.recv().await.unwrap_err();
    assert!(err.to_string().contains("malformed frame"), "{}", err);
}

#[tokio::test]
async fn tcp_refuses_to_send_an_oversized_message() {
    let (mut client, _server) = tcp_pair().await;

    let fields = (0..10_000)
        .map(|_| FieldState {
            pos: Grid::new(0, 0),
            pin: None,
        })
        .collect();
    let err = client.send(Message::FieldInfo { fields }).await.unwrap_err();
    assert!(err.to_string().contains("too large"), "{}", err);
}

#[tokio::test]
async fn tcp_reports_a_closed_peer() {
    let (mut client, server) = tcp_pair().await;
    drop(server);
    let err = client.recv().await.unwrap_err();
    assert!(err.to_string().contains("closed by peer"), "{}", err);
}

#[tokio::test]
async fn in_memory_pair_delivers_in_order() {
    let (mut a, mut b) = InMemoryTransport::pair();

    a.send(Message::NewGame).await.unwrap();
    a.send(Message::FieldInfoRequest).await.unwrap();
    assert_eq!(b.recv().await.unwrap(), Message::NewGame);
    assert_eq!(b.recv().await.unwrap(), Message::FieldInfoRequest);

    b.send(Message::TurnInfo {
        current: Some(Color::Blue),
    })
    .await
    .unwrap();
    assert_eq!(
        a.recv().await.unwrap(),
        Message::TurnInfo {
            current: Some(Color::Blue)
        }
    );
}

#[tokio::test]
async fn in_memory_dropped_peer_errors_both_directions() {
    let (mut a, b) = InMemoryTransport::pair();
    drop(b);
    assert!(a.send(Message::NewGame).await.is_err());
    assert!(a.recv().await.is_err());
}
