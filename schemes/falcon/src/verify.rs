//! Signature verification.
//!
//! The verifier hashes `nonce || message` to a point `c`, recomputes
//! `s1 = c - s2*h mod q` with the NTT, and accepts if `(s1, s2)` is within
//! the L2-norm bound of the parameter set.

use crate::error::{FalconError, Result, VerificationFailure};
use crate::hash::hash_message;
use crate::keygen::PublicKey;
use crate::params::Q;
use crate::poly::{to_ntt_monty, verify_raw};
use crate::sign::Signature;

fn fail(reason: VerificationFailure) -> FalconError {
    FalconError::VerificationFailed(reason)
}

/// Verifies a decoded signature against a decoded public key, reporting
/// why it was rejected.
///
/// The reason is meant for diagnostics only. Protocols must not reveal it
/// to the party that supplied the signature.
pub fn verify_detailed_with_public(pk: &PublicKey, message: &[u8], sig: &Signature) -> Result<()> {
    let params = &pk.params;
    let logn = params.log_n;
    if sig.params != *params {
        return Err(fail(VerificationFailure::DegreeMismatch));
    }
    if pk.h.len() != params.n || pk.h.iter().any(|&x| x as u32 >= Q) {
        return Err(fail(VerificationFailure::MalformedPublicKey));
    }
    if sig.s2.len() != params.n || sig.s2.iter().any(|&x| !(-2047..=2047).contains(&x)) {
        return Err(fail(VerificationFailure::MalformedSignature));
    }

    let c0 = hash_message(&sig.nonce, message, logn);
    let mut h = pk.h.clone();
    to_ntt_monty(&mut h, logn);
    if verify_raw(&c0, &sig.s2, &h, logn) {
        Ok(())
    } else {
        Err(fail(VerificationFailure::NormBoundExceeded))
    }
}

/// Verifies a decoded signature against a decoded public key.
pub fn verify_with_public(pk: &PublicKey, message: &[u8], sig: &Signature) -> bool {
    verify_detailed_with_public(pk, message, sig).is_ok()
}

/// Verifies encoded inputs, reporting why they were rejected.
///
/// See [`verify_detailed_with_public`] for how the reason may be used.
pub fn verify_detailed(message: &[u8], sig: &[u8], pk: &[u8]) -> Result<()> {
    let pk = PublicKey::from_bytes(pk).map_err(|_| fail(VerificationFailure::MalformedPublicKey))?;
    let sig =
        Signature::from_bytes(sig).map_err(|_| fail(VerificationFailure::MalformedSignature))?;
    verify_detailed_with_public(&pk, message, &sig)
}

/// Verifies an encoded signature on `message` under an encoded public key.
///
/// Every failure, including malformed input, yields `false`.
pub fn verify(message: &[u8], sig: &[u8], pk: &[u8]) -> bool {
    verify_detailed(message, sig, pk).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::keygen_with_seed;
    use crate::params::{Params, FALCON_512, L2_BOUND, NONCE_SIZE};
    use crate::sign::{sign, sign_with_expanded};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_norm_bound_is_inclusive() {
        // With h = 0, s1 is the centered hashed point itself.
        let logn = 9;
        let n = 512;
        let h = vec![0u16; n];
        let mut s2 = vec![0i16; n];
        s2[..8].fill(2047);
        let mut c0 = vec![0u16; n];
        c0[..4].copy_from_slice(&[716, 19, 6, 1]);

        // 8*2047^2 + 716^2 + 19^2 + 6^2 + 1^2
        assert_eq!(L2_BOUND[logn as usize], 34_034_726);
        assert!(verify_raw(&c0, &s2, &h, logn));

        c0[4] = 1;
        assert!(!verify_raw(&c0, &s2, &h, logn));

        // Negative values of s1, encoded as q - x.
        c0[4] = 0;
        c0[0] = 12289 - 716;
        assert!(verify_raw(&c0, &s2, &h, logn));
    }

    #[test]
    fn test_verify_roundtrip_small() {
        let params = Params::new(6).unwrap();
        let kp = keygen_with_seed(b"verify", &params).unwrap();
        let esk = kp.sk.expand();
        let mut rng = StdRng::seed_from_u64(9);
        let sig = sign_with_expanded(&esk, b"message", &mut rng).unwrap();

        assert!(verify_with_public(&kp.pk, b"message", &sig));
        assert_eq!(
            verify_detailed_with_public(&kp.pk, b"massage", &sig),
            Err(fail(VerificationFailure::NormBoundExceeded))
        );

        let pk_bytes = kp.pk.to_bytes().unwrap();
        let sig_bytes = sig.to_bytes().unwrap();
        assert!(verify(b"message", &sig_bytes, &pk_bytes));
        assert!(!verify(b"message!", &sig_bytes, &pk_bytes));
    }

    #[test]
    fn test_verify_rejects_malformed() {
        let params = Params::new(5).unwrap();
        let kp = keygen_with_seed(b"malformed", &params).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let sk_bytes = kp.sk.to_bytes().unwrap();
        let pk_bytes = kp.pk.to_bytes().unwrap();
        let sig_bytes = sign(b"m", &sk_bytes, &mut rng).unwrap();
        assert!(verify(b"m", &sig_bytes, &pk_bytes));

        assert_eq!(
            verify_detailed(b"m", &sig_bytes, &pk_bytes[1..]),
            Err(fail(VerificationFailure::MalformedPublicKey))
        );
        assert_eq!(
            verify_detailed(b"m", &sig_bytes[..sig_bytes.len() - 1], &pk_bytes),
            Err(fail(VerificationFailure::MalformedSignature))
        );

        let mut trailing = sig_bytes.clone();
        trailing.push(0);
        assert!(!verify(b"m", &trailing, &pk_bytes));

        let mut bad_header = sig_bytes.clone();
        bad_header[1 + NONCE_SIZE] ^= 0x01;
        assert!(!verify(b"m", &bad_header, &pk_bytes));

        assert!(!verify(b"m", &[], &pk_bytes));
        assert!(!verify(b"m", &sig_bytes, &[]));
    }

    #[test]
    fn test_verify_degree_mismatch() {
        let kp6 = keygen_with_seed(b"six", &Params::new(6).unwrap()).unwrap();
        let kp7 = keygen_with_seed(b"seven", &Params::new(7).unwrap()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let sig = sign_with_expanded(&kp6.sk.expand(), b"m", &mut rng).unwrap();
        assert_eq!(
            verify_detailed_with_public(&kp7.pk, b"m", &sig),
            Err(fail(VerificationFailure::DegreeMismatch))
        );
    }

    #[test]
    fn test_verify_falcon_512() {
        let kp = keygen_with_seed(b"verify 512", &FALCON_512).unwrap();
        let esk = kp.sk.expand();
        let mut rng = StdRng::seed_from_u64(512);
        let sig = sign_with_expanded(&esk, b"test", &mut rng).unwrap();
        assert!(verify_with_public(&kp.pk, b"test", &sig));

        let mut forged = sig.clone();
        forged.s2[0] += if forged.s2[0] < 0 { 1 } else { -1 };
        assert!(!verify_with_public(&kp.pk, b"test", &forged));

        let other = keygen_with_seed(b"other key", &FALCON_512).unwrap();
        assert!(!verify_with_public(&other.pk, b"test", &sig));
    }
}
