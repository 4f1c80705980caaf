#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("contract violation: {reason}")]
    Contract { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
