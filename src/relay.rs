use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio_util::codec::{FramedRead, LinesCodec};

use crate::Connection;

/// Copy lines from stdin to the network, and from the network to stdout.
pub async fn relay(connection: Connection) -> Result<(), String> {
    relay_with(connection, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Same as `relay` with any input and output. Returns when either direction ends.
pub async fn relay_with<I, O>(connection: Connection, input: I, mut output: O) -> Result<(), String>
where
    I: AsyncRead + Unpin + Send + 'static,
    O: AsyncWrite + Unpin + Send + 'static,
{
    let (mut writer, mut reader) = connection.into_split();

    // network -> output
    let mut inbound = tokio::spawn(async move {
        while let Some(line) = reader.next().await {
            let line = line.map_err(|_| "Failed to read from socket".to_string())?;

            output
                .write_all(format!("{}\n", line).as_bytes())
                .await
                .map_err(|_| "Failed to write to stdout".to_string())?;
            output
                .flush()
                .await
                .map_err(|_| "Failed to write to stdout".to_string())?;
        }

        Ok::<(), String>(())
    });

    // input -> network
    let mut outbound = tokio::spawn(async move {
        let mut lines = FramedRead::new(input, LinesCodec::new());

        while let Some(line) = lines.next().await {
            let line = line.map_err(|_| "Failed to read from stdin".to_string())?;

            writer
                .send(line)
                .await
                .map_err(|_| "Failed to write to socket".to_string())?;
        }

        Ok::<(), String>(())
    });

    let finished = tokio::select! {
        res = &mut inbound  => res,
        res = &mut outbound => res,
    };

    inbound.abort();
    outbound.abort();

    finished.map_err(|_| "Relay task stopped unexpectedly".to_string())?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{connect, Endpoint};
    use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn relays_both_directions() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = Endpoint::new("127.0.0.1", listener.local_addr().unwrap().port());

        // greet, wait for one line, then hang up
        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let (read_half, mut write_half) = stream.into_split();
            write_half.write_all(b"hello\n").await.unwrap();

            let mut line = String::new();
            BufReader::new(read_half).read_line(&mut line).await.unwrap();
            line
        });

        let conn = connect(&endpoint).await.unwrap();
        let (mut input_tx, input_rx) = tokio::io::duplex(1024);
        let (output_tx, mut output_rx) = tokio::io::duplex(1024);

        input_tx.write_all(b"PING\n").await.unwrap();
        relay_with(conn, input_rx, output_tx).await.unwrap();

        assert_eq!(server.await.unwrap(), "PING\n");

        let mut received = String::new();
        output_rx.read_to_string(&mut received).await.unwrap();
        assert_eq!(received, "hello\n");
    }
}
