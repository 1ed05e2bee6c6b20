use crate::PlatformEvent;

pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: PlatformEvent);
}
