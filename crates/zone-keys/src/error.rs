use crate::context::SignAlgorithm;

#[derive(Debug, thiserror::Error)]
pub enum KeySessionError {
    #[error("unsupported sign algorithm: {0}")]
    UnsupportedAlgorithm(SignAlgorithm),

    #[error("key generation failed: {0}")]
    Generation(String),

    #[error("PKCS#8 encoding failed: {0}")]
    Encode(#[source] pkcs8::Error),

    #[error("invalid key material: {0}")]
    Decode(String),

    #[error("key stream I/O failed: {0}")]
    StreamIo(#[from] std::io::Error),

    #[error("stored {found} key cannot serve the configured {expected} algorithm")]
    KeyMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("signing failed: {0}")]
    Signing(String),
}
