use rsa::signature::SignatureEncoding;
use rsa::signature::hazmat::PrehashSigner;
use sha2::Sha256;

use crate::codec::{PrivateKey, PublicKey};
use crate::error::KeySessionError;

/// Capability to sign record digests without exposing private key material.
///
/// Implementations are sync — signing is CPU-bound.
pub trait RecordSigner: Send + Sync {
    /// Sign a precomputed digest. Returns raw signature bytes.
    fn sign_digest(&self, digest: &[u8]) -> Result<Vec<u8>, KeySessionError>;

    /// The public half of the signing key.
    fn public_key(&self) -> PublicKey;
}

/// Signer over a locally held private key, whatever its type. RSA keys sign
/// PKCS#1 v1.5 over SHA-256 digests; P-256 keys produce fixed-size `r || s`
/// ECDSA signatures.
pub struct PrivateKeySigner {
    key: PrivateKey,
}

impl PrivateKeySigner {
    pub fn new(key: PrivateKey) -> Self {
        Self { key }
    }
}

impl RecordSigner for PrivateKeySigner {
    fn sign_digest(&self, digest: &[u8]) -> Result<Vec<u8>, KeySessionError> {
        match &self.key {
            PrivateKey::Rsa(key) => {
                let signing_key = rsa::pkcs1v15::SigningKey::<Sha256>::new(key.clone());
                let signature: rsa::pkcs1v15::Signature = signing_key
                    .sign_prehash(digest)
                    .map_err(|e| KeySessionError::Signing(e.to_string()))?;
                Ok(signature.to_vec())
            }
            PrivateKey::EcdsaP256(key) => {
                let signing_key = p256::ecdsa::SigningKey::from(key);
                let signature: p256::ecdsa::Signature = signing_key
                    .sign_prehash(digest)
                    .map_err(|e| KeySessionError::Signing(e.to_string()))?;
                Ok(signature.to_vec())
            }
        }
    }

    fn public_key(&self) -> PublicKey {
        self.key.public_key()
    }
}
