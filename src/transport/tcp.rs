use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::protocol::Message;
use crate::transport::Transport;

/// Default timeout for a single network operation.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on a serialized message. A full board sync is a few kilobytes;
/// anything near this limit is a broken or hostile peer.
const MAX_MESSAGE_SIZE: u32 = 65_536;

/// Bincode messages over TCP with a u32 big-endian length prefix.
pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Duration,
    max_message_size: u32,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            timeout_duration: DEFAULT_TIMEOUT,
            max_message_size: MAX_MESSAGE_SIZE,
        }
    }

    pub fn with_timeout(stream: TcpStream, timeout_duration: Duration) -> Self {
        Self {
            stream,
            timeout_duration,
            max_message_size: MAX_MESSAGE_SIZE,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }
}

fn map_io(e: std::io::Error) -> anyhow::Error {
    use std::io::ErrorKind;
    match e.kind() {
        ErrorKind::UnexpectedEof | ErrorKind::BrokenPipe => {
            anyhow::anyhow!("connection closed by peer")
        }
        ErrorKind::ConnectionReset => anyhow::anyhow!("connection reset by peer"),
        _ => anyhow::anyhow!("socket error: {}", e),
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let data = bincode::serialize(&msg)
            .map_err(|e| anyhow::anyhow!("serialization error: {}", e))?;
        if data.len() as u32 > self.max_message_size {
            return Err(anyhow::anyhow!(
                "outgoing message too large: {} bytes (max {})",
                data.len(),
                self.max_message_size
            ));
        }

        let op = async {
            self.stream
                .write_all(&(data.len() as u32).to_be_bytes())
                .await
                .map_err(map_io)?;
            self.stream.write_all(&data).await.map_err(map_io)
        };
        timeout(self.timeout_duration, op)
            .await
            .map_err(|_| anyhow::anyhow!("send timeout after {:?}", self.timeout_duration))?
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let op = async {
            let mut len_buf = [0u8; 4];
            self.stream.read_exact(&mut len_buf).await.map_err(map_io)?;
            let len = u32::from_be_bytes(len_buf);

            if len == 0 || len > self.max_message_size {
                return Err(anyhow::anyhow!(
                    "invalid frame length {} (max {})",
                    len,
                    self.max_message_size
                ));
            }

            let mut buf = vec![0u8; len as usize];
            self.stream.read_exact(&mut buf).await.map_err(map_io)?;
            bincode::deserialize(&buf).map_err(|e| anyhow::anyhow!("malformed frame: {}", e))
        };
        timeout(self.timeout_duration, op)
            .await
            .map_err(|_| anyhow::anyhow!("receive timeout after {:?}", self.timeout_duration))?
    }
}
