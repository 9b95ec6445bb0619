/// Failures of the collaborator-facing operations.
///
/// Tapping and angle calculation never fail; only image selection and
/// parsing of user-supplied text can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("image index {index} out of range 1..={count}")]
    ImageIndexOutOfRange { index: u32, count: u32 },

    #[error("invalid tap {0:?}: expected \"x,y\" or \"x y\"")]
    InvalidTap(String),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
