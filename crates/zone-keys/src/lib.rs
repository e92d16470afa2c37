pub mod codec;
pub mod context;
pub mod error;
pub mod session;
pub mod signer;

pub use codec::{KeyRole, PrivateKey, PublicKey};
pub use context::{Context, SignAlgorithm};
pub use error::KeySessionError;
pub use session::{FileSession, KeySession, MemorySession, SigKeys};
pub use signer::{PrivateKeySigner, RecordSigner};
