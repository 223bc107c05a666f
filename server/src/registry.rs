//! Viewer connection registry and broadcast fan-out.
//!
//! The registry tracks the send-handle of every live viewer. It is owned
//! by the same event loop that owns the store, so connect/disconnect
//! bookkeeping can never race a broadcast: no send to a handle
//! mid-removal, no double-add.

use log::{info, warn};
use std::collections::HashMap;
use tokio::sync::mpsc::UnboundedSender;

/// A connected viewer's outgoing message queue.
#[derive(Debug)]
pub struct Viewer {
    pub id: u32,
    tx: UnboundedSender<String>,
}

/// All currently connected viewers, keyed by viewer id.
pub struct ViewerRegistry {
    viewers: HashMap<u32, Viewer>,
    max_viewers: usize,
}

impl ViewerRegistry {
    pub fn new(max_viewers: usize) -> Self {
        Self {
            viewers: HashMap::new(),
            max_viewers,
        }
    }

    /// Registers a viewer. Returns false when the registry is at capacity;
    /// the caller drops the handle, which closes the connection's writer.
    pub fn add(&mut self, id: u32, tx: UnboundedSender<String>) -> bool {
        if self.viewers.len() >= self.max_viewers {
            return false;
        }
        self.viewers.insert(id, Viewer { id, tx });
        true
    }

    /// Removes a viewer after disconnect. Returns true if it was present.
    pub fn remove(&mut self, id: u32) -> bool {
        if self.viewers.remove(&id).is_some() {
            info!("Viewer {} removed from registry", id);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.viewers.contains_key(&id)
    }

    /// Queues a message for one viewer (the initial full-state push on
    /// connect). A failed send means the connection already died; the
    /// viewer is dropped from the registry.
    pub fn send_to(&mut self, id: u32, message: &str) {
        let dead = match self.viewers.get(&id) {
            Some(viewer) => viewer.tx.send(message.to_string()).is_err(),
            None => false,
        };
        if dead {
            warn!("Viewer {} vanished before initial send", id);
            self.remove(id);
        }
    }

    /// Queues a message for every registered viewer, pruning any whose
    /// connection has gone away.
    pub fn broadcast(&mut self, message: &str) {
        let dead: Vec<u32> = self
            .viewers
            .values()
            .filter(|viewer| viewer.tx.send(message.to_string()).is_err())
            .map(|viewer| viewer.id)
            .collect();

        for id in dead {
            warn!("Dropping viewer {} after failed broadcast", id);
            self.remove(id);
        }
    }

    pub fn len(&self) -> usize {
        self.viewers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.viewers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_add_and_remove() {
        let mut registry = ViewerRegistry::new(4);
        let (tx, _rx) = mpsc::unbounded_channel();

        assert!(registry.is_empty());
        assert!(registry.add(1, tx));
        assert!(registry.contains(1));
        assert_eq!(registry.len(), 1);

        assert!(registry.remove(1));
        assert!(!registry.contains(1));
        assert!(!registry.remove(1));
    }

    #[test]
    fn test_capacity_enforced() {
        let mut registry = ViewerRegistry::new(1);
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();

        assert!(registry.add(1, tx1));
        assert!(!registry.add(2, tx2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_broadcast_reaches_all_viewers() {
        let mut registry = ViewerRegistry::new(4);
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        registry.add(1, tx1);
        registry.add(2, tx2);

        registry.broadcast("snapshot");

        assert_eq!(rx1.try_recv().unwrap(), "snapshot");
        assert_eq!(rx2.try_recv().unwrap(), "snapshot");
    }

    #[test]
    fn test_broadcast_prunes_dead_viewers() {
        let mut registry = ViewerRegistry::new(4);
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, rx2) = mpsc::unbounded_channel();
        registry.add(1, tx1);
        registry.add(2, tx2);
        drop(rx2);

        registry.broadcast("snapshot");

        assert_eq!(rx1.try_recv().unwrap(), "snapshot");
        assert!(!registry.contains(2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_send_to_single_viewer() {
        let mut registry = ViewerRegistry::new(4);
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        registry.add(1, tx1);
        registry.add(2, tx2);

        registry.send_to(1, "hello");

        assert_eq!(rx1.try_recv().unwrap(), "hello");
        assert!(rx2.try_recv().is_err());
    }
}
