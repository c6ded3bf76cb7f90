use std::future::Future;
use std::io;
use std::net::SocketAddr;

use futures::{SinkExt, StreamExt};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{lookup_host, TcpStream};
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec, LinesCodecError};

use crate::{ConnectError, Endpoint};

/// Outbound text lines. Every `send` writes the line and a `\n`, then flushes.
pub type LineWriter = FramedWrite<OwnedWriteHalf, LinesCodec>;

/// Inbound text lines, buffered, with the terminator stripped.
pub type LineReader = FramedRead<OwnedReadHalf, LinesCodec>;

/// An established TCP session and the line channels built on top of it.
///
/// Only `connect` produces one, so both channels always share a live socket.
pub struct Connection {
    endpoint: Endpoint,
    peer_addr: SocketAddr,
    writer: LineWriter,
    reader: LineReader,
}

/// Resolve the endpoint, open a single TCP connection and wrap it in line channels.
///
/// There is no retry: only the first resolved address is tried, once.
pub async fn connect(endpoint: &Endpoint) -> Result<Connection, ConnectError> {
    let addr = resolve(endpoint).await?;

    let stream = bounded(endpoint, TcpStream::connect(addr)).await?;

    // lines go out as soon as they are written
    stream.set_nodelay(true)?;
    let peer_addr = stream.peer_addr()?;

    let (reader, writer) = stream.into_split();

    Ok(Connection {
        endpoint: endpoint.clone(),
        peer_addr,
        writer: FramedWrite::new(writer, LinesCodec::new()),
        reader: FramedRead::new(reader, LinesCodec::new()),
    })
}

/// First address the host name resolves to.
async fn resolve(endpoint: &Endpoint) -> Result<SocketAddr, ConnectError> {
    let unknown_host = || ConnectError::UnknownHost {
        host: endpoint.host.clone(),
    };

    lookup_host((endpoint.host.as_str(), endpoint.port))
        .await
        .map_err(|_| unknown_host())?
        .next()
        .ok_or_else(unknown_host)
}

/// Apply the endpoint's connect timeout, if any. Expiry is `TimedOut`.
async fn bounded<F, T>(endpoint: &Endpoint, attempt: F) -> io::Result<T>
where
    F: Future<Output = io::Result<T>>,
{
    match endpoint.connect_timeout {
        Some(limit) => tokio::time::timeout(limit, attempt).await.map_err(|_| {
            io::Error::new(
                io::ErrorKind::TimedOut,
                format!("connection to {} timed out", endpoint),
            )
        })?,
        None => attempt.await,
    }
}

impl Connection {
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    pub fn writer(&mut self) -> &mut LineWriter {
        &mut self.writer
    }

    pub fn reader(&mut self) -> &mut LineReader {
        &mut self.reader
    }

    /// Write one line and flush it to the socket.
    pub async fn send_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.send(line).await.map_err(into_io)
    }

    /// Read the next line. `Ok(None)` once the peer has closed its side.
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        self.reader.next().await.transpose().map_err(into_io)
    }

    pub fn into_split(self) -> (LineWriter, LineReader) {
        (self.writer, self.reader)
    }
}

pub(crate) fn into_io(err: LinesCodecError) -> io::Error {
    match err {
        LinesCodecError::Io(err) => err,
        LinesCodecError::MaxLineLengthExceeded => {
            io::Error::new(io::ErrorKind::InvalidData, "line too long")
        }
    }
}
