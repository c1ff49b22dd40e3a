//! End-to-end tests through the public API.

use pqsigs_falcon::verify::verify_detailed;
use pqsigs_falcon::{
    generate_keypair, keygen, keygen_with_seed, sign, sign_dyn, sign_with_expanded, verify,
    verify_with_public, FalconError, Params, PublicKey, SecretKey, Signature, VerificationFailure,
    FALCON_1024, FALCON_512,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const NONCE_SIZE: usize = 40;

#[test]
fn falcon_512_sign_verify_and_corrupted_key() {
    let mut rng = StdRng::seed_from_u64(42);
    let (pk, sk) = generate_keypair(&mut rng, &FALCON_512).unwrap();
    assert_eq!(pk.len(), 897);
    assert_eq!(sk.len(), 1281);

    let sig = sign(b"test", &sk, &mut rng).unwrap();
    println!("Falcon-512 signature: {} bytes", sig.len());
    assert!(sig.len() <= FALCON_512.sig_bytes_max);
    assert!(verify(b"test", &sig, &pk));

    let mut bad_pk = pk.clone();
    bad_pk[100] ^= 0x10;
    assert!(!verify(b"test", &sig, &bad_pk));
}

#[test]
fn falcon_1024_roundtrip() {
    let mut rng = StdRng::seed_from_u64(1024);
    let (pk, sk) = generate_keypair(&mut rng, &FALCON_1024).unwrap();
    assert_eq!(pk.len(), 1793);
    assert_eq!(sk.len(), 2305);

    let sig = sign(b"Falcon-1024", &sk, &mut rng).unwrap();
    println!("Falcon-1024 signature: {} bytes", sig.len());
    assert_eq!(sig[0], 0x3A);
    assert!(verify(b"Falcon-1024", &sig, &pk));
    assert!(!verify(b"Falcon-1025", &sig, &pk));
}

#[test]
fn every_degree_signs_and_verifies() {
    for logn in 1..=10u32 {
        let params = Params::new(logn).unwrap();
        let mut rng = StdRng::seed_from_u64(1000 + logn as u64);
        let kp = keygen(&mut rng, &params).unwrap();
        let esk = kp.sk.expand();
        for i in 0..3u8 {
            let msg = [b'm', logn as u8, i];
            let sig = sign_with_expanded(&esk, &msg, &mut rng).unwrap();
            assert!(verify_with_public(&kp.pk, &msg, &sig), "logn {}", logn);

            let bytes = sig.to_bytes().unwrap();
            assert!(bytes.len() <= params.sig_bytes_max);
            assert_eq!(Signature::from_bytes(&bytes).unwrap(), sig);
        }
    }
}

#[test]
fn single_bit_flips_in_compressed_s2_are_rejected() {
    let params = Params::new(6).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let (pk, sk) = generate_keypair(&mut rng, &params).unwrap();
    let sig = sign(b"tamper", &sk, &mut rng).unwrap();
    assert!(verify(b"tamper", &sig, &pk));

    let body = 2 + NONCE_SIZE;
    for i in body..sig.len() {
        for bit in 0..8 {
            let mut bad = sig.clone();
            bad[i] ^= 1 << bit;
            assert!(!verify(b"tamper", &bad, &pk), "byte {} bit {}", i, bit);
        }
    }
}

#[test]
fn nonce_and_header_tampering_is_rejected() {
    let mut rng = StdRng::seed_from_u64(8);
    let (pk, sk) = generate_keypair(&mut rng, &FALCON_512).unwrap();
    let sig = sign(b"nonce", &sk, &mut rng).unwrap();

    let mut bad = sig.clone();
    bad[5] ^= 0x80;
    assert!(!verify(b"nonce", &bad, &pk));

    let mut bad = sig.clone();
    bad[0] = 0x3A;
    assert!(!verify(b"nonce", &bad, &pk));
    assert_eq!(
        verify_detailed(b"nonce", &bad, &pk),
        Err(FalconError::VerificationFailed(VerificationFailure::MalformedSignature))
    );
}

#[test]
fn dynamic_and_expanded_signing_agree() {
    let kp = keygen_with_seed(b"agreement", &FALCON_512).unwrap();
    let esk = kp.sk.expand();
    let a = sign_with_expanded(&esk, b"same randomness", &mut StdRng::seed_from_u64(3)).unwrap();
    let b = sign_dyn(&kp.sk, b"same randomness", &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(a, b);
    assert!(verify_with_public(&kp.pk, b"same randomness", &a));
}

#[test]
fn keys_survive_encoding() {
    let params = Params::new(8).unwrap();
    let kp = keygen_with_seed(b"encoding", &params).unwrap();

    let pk = PublicKey::from_bytes(&kp.pk.to_bytes().unwrap()).unwrap();
    let sk = SecretKey::from_bytes(&kp.sk.to_bytes().unwrap()).unwrap();
    assert_eq!(pk, kp.pk);
    assert_eq!(sk.public_key().unwrap(), pk);

    let mut rng = StdRng::seed_from_u64(4);
    let sig = sign_dyn(&sk, b"decoded key", &mut rng).unwrap();
    assert!(verify_with_public(&pk, b"decoded key", &sig));
}

#[test]
fn wrong_key_is_rejected() {
    let mut rng = StdRng::seed_from_u64(9);
    let (pk1, sk1) = generate_keypair(&mut rng, &FALCON_512).unwrap();
    let (pk2, _) = generate_keypair(&mut rng, &FALCON_512).unwrap();
    let sig = sign(b"who signed", &sk1, &mut rng).unwrap();
    assert!(verify(b"who signed", &sig, &pk1));
    assert!(!verify(b"who signed", &sig, &pk2));
}
