use std::process::exit;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;

use kq6link::{connect, relay, Endpoint, DEFAULT_HOST, DEFAULT_PORT};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host to connect to
    #[arg(default_value = DEFAULT_HOST)]
    host: String,

    #[arg(short, long, default_value_t = DEFAULT_PORT, value_parser = port_in_range)]
    port: u16,

    /// Give up on the TCP handshake after this many seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Relay lines between stdin/stdout and the connection
    #[arg(long)]
    relay: bool,

    /// Don't print status messages
    #[arg(short, long)]
    silent: bool,
}

fn port_in_range(s: &str) -> Result<u16, String> {
    let port: u16 = u16::from_str_radix(s, 10)
        .map_err(|_| format!("{} is not a valid port number", s))?;

    // port is a u16 value. Only 0 is an invalid port
    if port == 0 {
        Err(format!("{} is not a valid port number", s))
    } else {
        Ok(port)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let mut endpoint = Endpoint::new(cli.host, cli.port);
    if let Some(secs) = cli.timeout {
        endpoint = endpoint.with_timeout(Duration::from_secs(secs));
    }

    let connection = match connect(&endpoint).await {
        Ok(connection) => connection,
        Err(err) => {
            println!("{}", err);
            exit(1);
        }
    };

    if !cli.silent {
        eprintln!("Connected to {}", endpoint.to_string().green());
    }

    if cli.relay {
        if let Err(error_msg) = relay(connection).await {
            eprintln!("{}", error_msg.red());
            exit(1);
        }

        // the stdin reader can still be parked on a blocking read
        exit(0);
    }
}
