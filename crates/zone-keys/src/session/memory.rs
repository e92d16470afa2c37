use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::SeedableRng;
use sha2::{Digest, Sha256};
use tracing::info;
use zeroize::Zeroizing;

use crate::codec::{KeyRole, codec_for, decode_private_key_pem, encode_private_key_pem};
use crate::context::Context;
use crate::error::KeySessionError;
use crate::session::{KeySession, SigKeys};
use crate::signer::PrivateKeySigner;

/// In-memory key session derived from a seed string.
///
/// The SHA-256 hash of the seed feeds a deterministic CSPRNG, so equal seeds
/// yield identical key pairs. Key material lives only inside this struct as
/// encoded PEM, decoded on demand like the file backend reads its streams.
/// `destroy_all_keys` and `end` wipe the cached material; a later `keys()`
/// call derives it again from the seed.
pub struct MemorySession<'a> {
    ctx: &'a Context,
    seed: [u8; 32],
    zsk_pem: Option<Zeroizing<String>>,
    ksk_pem: Option<Zeroizing<String>>,
}

impl<'a> MemorySession<'a> {
    pub fn from_seed(ctx: &'a Context, seed: &str) -> Self {
        Self {
            ctx,
            seed: Sha256::digest(seed.as_bytes()).into(),
            zsk_pem: None,
            ksk_pem: None,
        }
    }

    /// Derives both keys from the seed, KSK first, and caches their PEM
    /// encodings.
    fn generate_keys(&mut self) -> Result<(), KeySessionError> {
        let codec = codec_for(self.ctx.algorithm)?;
        let mut rng = ChaCha20Rng::from_seed(self.seed);
        let ksk = (codec.generate)(KeyRole::Ksk, &mut rng)?;
        self.ksk_pem = Some(encode_private_key_pem(&ksk)?);
        let zsk = (codec.generate)(KeyRole::Zsk, &mut rng)?;
        self.zsk_pem = Some(encode_private_key_pem(&zsk)?);
        Ok(())
    }
}

impl KeySession for MemorySession<'_> {
    fn context(&self) -> &Context {
        self.ctx
    }

    fn keys(&mut self) -> Result<SigKeys, KeySessionError> {
        codec_for(self.ctx.algorithm)?;
        if self.ctx.create_keys || self.zsk_pem.is_none() || self.ksk_pem.is_none() {
            info!("deriving in-memory keys from seed");
            self.generate_keys()?;
        }
        let zsk_pem = self
            .zsk_pem
            .as_deref()
            .ok_or_else(|| KeySessionError::Decode("no ZSK material".into()))?;
        let zsk = decode_private_key_pem(zsk_pem)?;
        let ksk_pem = self
            .ksk_pem
            .as_deref()
            .ok_or_else(|| KeySessionError::Decode("no KSK material".into()))?;
        let ksk = decode_private_key_pem(ksk_pem)?;
        Ok(SigKeys {
            zsk: Box::new(PrivateKeySigner::new(zsk)),
            ksk: Box::new(PrivateKeySigner::new(ksk)),
        })
    }

    fn destroy_all_keys(&mut self) -> Result<(), KeySessionError> {
        // Zeroizing wipes the dropped PEM buffers.
        self.zsk_pem = None;
        self.ksk_pem = None;
        Ok(())
    }

    fn end(&mut self) -> Result<(), KeySessionError> {
        self.destroy_all_keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SignAlgorithm;
    use crate::signer::RecordSigner;

    fn ctx(algorithm: SignAlgorithm) -> Context {
        Context {
            algorithm,
            create_keys: false,
        }
    }

    #[test]
    fn same_seed_yields_the_same_keys() {
        let ctx = ctx(SignAlgorithm::EcdsaP256Sha256);
        let mut a = MemorySession::from_seed(&ctx, "shared-seed");
        let mut b = MemorySession::from_seed(&ctx, "shared-seed");
        let keys_a = a.keys().unwrap();
        let keys_b = b.keys().unwrap();
        assert_eq!(keys_a.zsk.public_key(), keys_b.zsk.public_key());
        assert_eq!(keys_a.ksk.public_key(), keys_b.ksk.public_key());
    }

    #[test]
    fn different_seeds_yield_different_keys() {
        let ctx = ctx(SignAlgorithm::EcdsaP256Sha256);
        let keys_a = MemorySession::from_seed(&ctx, "seed-a").keys().unwrap();
        let keys_b = MemorySession::from_seed(&ctx, "seed-b").keys().unwrap();
        assert_ne!(keys_a.zsk.public_key(), keys_b.zsk.public_key());
    }

    #[test]
    fn zsk_and_ksk_are_distinct() {
        let ctx = ctx(SignAlgorithm::EcdsaP256Sha256);
        let keys = MemorySession::from_seed(&ctx, "distinct").keys().unwrap();
        assert_ne!(keys.zsk.public_key(), keys.ksk.public_key());
    }

    #[test]
    fn destroy_then_keys_rederives_the_same_material() {
        let ctx = ctx(SignAlgorithm::EcdsaP256Sha256);
        let mut session = MemorySession::from_seed(&ctx, "destroy-me");
        let before = session.keys().unwrap();
        session.destroy_all_keys().unwrap();
        assert!(session.zsk_pem.is_none());
        assert!(session.ksk_pem.is_none());
        let after = session.keys().unwrap();
        assert_eq!(before.zsk.public_key(), after.zsk.public_key());
    }

    #[test]
    fn unsupported_algorithm_is_rejected() {
        let ctx = ctx(SignAlgorithm::Ed25519);
        let err = MemorySession::from_seed(&ctx, "seed").keys().unwrap_err();
        assert!(matches!(err, KeySessionError::UnsupportedAlgorithm(_)));
    }
}
