#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("trim channel index {0} is out of range (3 channels)")]
    ChannelOutOfRange(usize),
    #[error("signal '{0}' has no defining write")]
    UnassignedSignal(&'static str),
}
