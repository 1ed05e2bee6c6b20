use confapi_core::{EventPublisher, PlatformEvent};

use log::debug;
use tokio::sync::broadcast;

const DEFAULT_CAPACITY: usize = 64;

/// Fans platform events out to every subscriber
#[derive(Debug, Clone)]
pub struct BroadcastEventBus {
    sender: broadcast::Sender<PlatformEvent>,
}

impl BroadcastEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PlatformEvent> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl EventPublisher for BroadcastEventBus {
    fn publish(&self, event: PlatformEvent) {
        match self.sender.send(event.clone()) {
            Ok(receivers) => debug!("Published {:?} to {} subscribers", event, receivers),
            Err(_) => debug!("Published {:?} with no subscribers", event),
        }
    }
}
