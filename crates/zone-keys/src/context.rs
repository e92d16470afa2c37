use std::fmt;

/// DNSSEC signing algorithms this crate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignAlgorithm {
    /// DNSSEC algorithm 8: RSA with SHA-256 digests.
    RsaSha256,
    /// DNSSEC algorithm 13: ECDSA on curve P-256 with SHA-256 digests.
    EcdsaP256Sha256,
    /// DNSSEC algorithm 15. Recognized in configuration, but no codec is
    /// registered for it.
    Ed25519,
}

impl fmt::Display for SignAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignAlgorithm::RsaSha256 => "rsa-sha256",
            SignAlgorithm::EcdsaP256Sha256 => "ecdsa-p256-sha256",
            SignAlgorithm::Ed25519 => "ed25519",
        };
        f.write_str(name)
    }
}

/// Signing configuration for one run. Owned by the caller; sessions hold a
/// shared reference and never mutate it.
#[derive(Debug, Clone)]
pub struct Context {
    pub algorithm: SignAlgorithm,
    /// When set, `keys()` generates fresh key material and overwrites
    /// whatever the backend currently stores before handing out signers.
    pub create_keys: bool,
}
