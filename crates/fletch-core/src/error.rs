pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown anchor side: {value}")]
    UnknownAnchorSide { value: String },

    #[error("invalid arrow style: {0}")]
    InvalidStyle(#[from] serde_json::Error),
}
