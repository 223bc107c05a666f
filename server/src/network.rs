//! Server network layer: TCP accept loop, per-viewer connection tasks, and
//! the central event loop coordinating state dispatch with broadcasts.
//!
//! Every connection task funnels its events into one mpsc channel consumed
//! by `Server::run`, which is the only task touching the store and the
//! registry. That single consumer gives the ordering guarantee the
//! protocol needs: each broadcast reflects exactly the dispatches applied
//! before it, never a partially applied or reordered state.

use crate::registry::ViewerRegistry;
use crate::store::Store;
use log::{debug, error, info, warn};
use shared::{ClientMessage, GameState, ServerMessage};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// Events sent from connection tasks to the main event loop.
#[derive(Debug)]
pub enum ServerEvent {
    ViewerConnected {
        viewer_id: u32,
        addr: SocketAddr,
        tx: mpsc::UnboundedSender<String>,
    },
    ActionReceived {
        viewer_id: u32,
        action: ClientMessage,
    },
    ViewerDisconnected {
        viewer_id: u32,
    },
}

/// Main server coordinating networking and state dispatch.
pub struct Server {
    listener: Arc<TcpListener>,
    store: Store,
    registry: ViewerRegistry,
    event_tx: mpsc::UnboundedSender<ServerEvent>,
    event_rx: mpsc::UnboundedReceiver<ServerEvent>,
}

impl Server {
    pub async fn new(
        addr: &str,
        pool: Vec<String>,
        max_viewers: usize,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let listener = Arc::new(TcpListener::bind(addr).await?);
        info!("Server listening on {}", listener.local_addr()?);

        let store = Store::new(pool)?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Ok(Server {
            listener,
            store,
            registry: ViewerRegistry::new(max_viewers),
            event_tx,
            event_rx,
        })
    }

    /// The bound address, needed when the server was started on port 0.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Spawns the task that accepts viewer connections and hands each one
    /// its own reader/writer tasks.
    fn spawn_acceptor(&self) {
        let listener = Arc::clone(&self.listener);
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            let mut next_viewer_id: u32 = 1;

            loop {
                match listener.accept().await {
                    Ok((stream, addr)) => {
                        let viewer_id = next_viewer_id;
                        next_viewer_id += 1;
                        debug!("Accepted connection from {}", addr);
                        tokio::spawn(handle_connection(
                            stream,
                            addr,
                            viewer_id,
                            event_tx.clone(),
                        ));
                    }
                    Err(e) => {
                        error!("Error accepting connection: {}", e);
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    }
                }
            }
        });
    }

    /// Main event loop. Runs until every event sender is gone, which in
    /// practice means the process is shutting down.
    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.spawn_acceptor();
        info!("Server started successfully");

        while let Some(event) = self.event_rx.recv().await {
            match event {
                ServerEvent::ViewerConnected { viewer_id, addr, tx } => {
                    if self.registry.add(viewer_id, tx) {
                        info!(
                            "Viewer {} connected from {} ({} online)",
                            viewer_id,
                            addr,
                            self.registry.len()
                        );
                        // Bring the new viewer current immediately.
                        if let Some(snapshot) = encode_state(self.store.state()) {
                            self.registry.send_to(viewer_id, &snapshot);
                        }
                    } else {
                        warn!("Viewer limit reached, refusing {}", addr);
                    }
                }
                ServerEvent::ActionReceived { viewer_id, action } => {
                    if !self.registry.contains(viewer_id) {
                        debug!("Ignoring action from unregistered viewer {}", viewer_id);
                        continue;
                    }
                    match self.store.dispatch(&action) {
                        Some(state) => {
                            if let Some(snapshot) = encode_state(state) {
                                self.registry.broadcast(&snapshot);
                            }
                        }
                        None => {
                            debug!("Rejected action from viewer {}: {:?}", viewer_id, action)
                        }
                    }
                }
                ServerEvent::ViewerDisconnected { viewer_id } => {
                    self.registry.remove(viewer_id);
                }
            }
        }

        info!("Server shutting down");
        Ok(())
    }
}

/// Serializes a full-state broadcast line.
fn encode_state(state: &GameState) -> Option<String> {
    match serde_json::to_string(&ServerMessage::GameState {
        payload: state.clone(),
    }) {
        Ok(text) => Some(text),
        Err(e) => {
            error!("Failed to serialize game state: {}", e);
            None
        }
    }
}

/// Per-connection task: announces the viewer, then forwards parsed actions
/// until the peer goes away.
async fn handle_connection(
    stream: TcpStream,
    addr: SocketAddr,
    viewer_id: u32,
    event_tx: mpsc::UnboundedSender<ServerEvent>,
) {
    let (read_half, write_half) = stream.into_split();
    let (tx, rx) = mpsc::unbounded_channel::<String>();

    // Registration travels on the same channel as this viewer's actions,
    // so the event loop always sees the connect first.
    if event_tx
        .send(ServerEvent::ViewerConnected {
            viewer_id,
            addr,
            tx,
        })
        .is_err()
    {
        return;
    }

    let writer = tokio::spawn(write_outgoing(write_half, rx));

    read_incoming(read_half, viewer_id, &event_tx).await;

    let _ = event_tx.send(ServerEvent::ViewerDisconnected { viewer_id });
    writer.abort();
    debug!("Connection task for viewer {} finished", viewer_id);
}

/// Reads newline-delimited JSON actions. Malformed lines are dropped with
/// a warning and no state change; the connection stays usable.
async fn read_incoming(
    read_half: OwnedReadHalf,
    viewer_id: u32,
    event_tx: &mpsc::UnboundedSender<ServerEvent>,
) {
    let mut lines = BufReader::new(read_half).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match serde_json::from_str::<ClientMessage>(line) {
                    Ok(action) => {
                        if event_tx
                            .send(ServerEvent::ActionReceived { viewer_id, action })
                            .is_err()
                        {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Dropping malformed message from viewer {}: {}", viewer_id, e)
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                debug!("Read error from viewer {}: {}", viewer_id, e);
                break;
            }
        }
    }
}

/// Writer half: drains the viewer's queue, one JSON text line per message.
async fn write_outgoing(mut write_half: OwnedWriteHalf, mut rx: mpsc::UnboundedReceiver<String>) {
    while let Some(message) = rx.recv().await {
        if write_half.write_all(message.as_bytes()).await.is_err() {
            break;
        }
        if write_half.write_all(b"\n").await.is_err() {
            break;
        }
    }
}
