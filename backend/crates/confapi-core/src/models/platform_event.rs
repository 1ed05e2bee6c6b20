/// Events published to the platform event bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Content changed outside normal mutation events; every node must rebuild its search index
    ClusterReindexRequired,
}
