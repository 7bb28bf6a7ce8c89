use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("stage {0} is already loading")]
    LoadInFlight(usize),
    #[error("stage index {index} out of range ({count} stages)")]
    NoSuchStage { index: usize, count: usize },
    #[error("load ticket does not match the load in flight")]
    StaleTicket,
    #[error("invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
