//! Session abstraction over ZSK/KSK key backends.

mod file;
mod memory;

pub use file::FileSession;
pub use memory::MemorySession;

use crate::codec::codec_for;
use crate::context::Context;
use crate::error::KeySessionError;
use crate::signer::RecordSigner;

/// The ZSK and KSK signing capabilities for one signing run. Owned by the
/// signing pipeline once returned; the session keeps no reference to it.
pub struct SigKeys {
    pub zsk: Box<dyn RecordSigner>,
    pub ksk: Box<dyn RecordSigner>,
}

impl std::fmt::Debug for SigKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigKeys").finish_non_exhaustive()
    }
}

/// A key backend able to produce the ZSK/KSK pair for a signing run.
///
/// Backends differ in where private key material lives (byte streams,
/// memory, hardware); their external behavior is identical, and every
/// operation rejects an algorithm without a registered codec before doing
/// any work.
pub trait KeySession {
    /// The configuration this session was built with.
    fn context(&self) -> &Context;

    /// Returns signing capabilities for ZSK and KSK, generating and
    /// persisting fresh material first when the context asks for it.
    fn keys(&mut self) -> Result<SigKeys, KeySessionError>;

    /// DNSKEY-ready public key bytes for both roles, as `(zsk, ksk)`.
    /// KSK bytes are computed first; a failure there short-circuits.
    fn public_key_bytes(&self, keys: &SigKeys) -> Result<(Vec<u8>, Vec<u8>), KeySessionError> {
        let codec = codec_for(self.context().algorithm)?;
        let ksk_bytes = (codec.encode_public)(&keys.ksk.public_key())?;
        let zsk_bytes = (codec.encode_public)(&keys.zsk.public_key())?;
        Ok((zsk_bytes, ksk_bytes))
    }

    /// Irreversibly removes all key material the backend manages.
    fn destroy_all_keys(&mut self) -> Result<(), KeySessionError>;

    /// Releases session-scoped resources.
    fn end(&mut self) -> Result<(), KeySessionError>;
}
