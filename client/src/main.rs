use clap::Parser;
use client::{commands, render};
use log::{info, warn};
use shared::ServerMessage;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

/// Command line arguments for the viewer client.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Server IP address to connect to
    #[clap(short = 'H', long, default_value = "127.0.0.1")]
    host: String,
    /// Server port to connect to
    #[clap(short, long, default_value = "1337")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let address = format!("{}:{}", args.host, args.port);
    let stream = TcpStream::connect(&address).await?;
    info!("Connected to {}", address);
    println!("{}", commands::help());

    let (read_half, mut write_half) = stream.into_split();

    // Render every broadcast as it arrives; the first one lands right
    // after connecting.
    let mut reader = tokio::spawn(async move {
        let mut lines = BufReader::new(read_half).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<ServerMessage>(&line) {
                Ok(ServerMessage::GameState { payload }) => {
                    println!("\n{}", render::render(&payload));
                }
                Err(e) => warn!("Unreadable message from server: {}", e),
            }
        }
        info!("Server closed the connection");
    });

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = &mut reader => break,
            line = stdin.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match commands::parse_command(line) {
                    Some(message) => {
                        let text = serde_json::to_string(&message)?;
                        write_half.write_all(text.as_bytes()).await?;
                        write_half.write_all(b"\n").await?;
                    }
                    None => println!("{}", commands::help()),
                }
            }
        }
    }

    Ok(())
}
