//! SHAKE256 extendable-output function.
//!
//! Falcon needs SHAKE256 in three places:
//! - expanding the key generation seed into Gaussian samples,
//! - hashing `nonce || message` onto a point of Z_q^n,
//! - seeding the ChaCha20 PRNG used by the signing sampler.
//!
//! The sponge is split into two types so that the absorb/squeeze
//! lifecycle is enforced by the compiler: [`Shake256`] only absorbs, and
//! [`Shake256::finalize`] consumes it to produce a [`ShakeReader`] that
//! only squeezes. Restarting requires a fresh [`Shake256`].

use sha3::digest::{ExtendableOutput, Update, XofReader};

/// Rate of SHAKE256 in bytes (1600 - 2*256 bits).
pub const SHAKE256_RATE: usize = 136;

/// SHAKE256 in absorbing mode.
#[derive(Clone, Default)]
pub struct Shake256 {
    inner: sha3::Shake256,
}

impl Shake256 {
    /// Creates a sponge with an all-zero state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorbs more input. Successive calls are equivalent to a single
    /// call on the concatenated input.
    pub fn absorb(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Applies the SHAKE padding and switches to output mode.
    pub fn finalize(self) -> ShakeReader {
        ShakeReader { inner: self.inner.finalize_xof() }
    }

    /// Convenience: absorbs all `parts` in order and finalizes.
    pub fn digest_xof(parts: &[&[u8]]) -> ShakeReader {
        let mut sc = Shake256::new();
        for p in parts {
            sc.absorb(p);
        }
        sc.finalize()
    }
}

/// SHAKE256 in squeezing mode.
#[derive(Clone)]
pub struct ShakeReader {
    inner: sha3::Shake256Reader,
}

impl ShakeReader {
    /// Fills `out` with the next bytes of the output stream.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        self.inner.read(out);
    }

    /// Reads the next 8 output bytes as a little-endian `u64`.
    pub fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.squeeze(&mut buf);
        u64::from_le_bytes(buf)
    }
}
