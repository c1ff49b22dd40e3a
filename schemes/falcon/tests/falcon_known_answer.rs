//! Pinned Falcon-512 known-answer vector.
//!
//! Key generation and signing are deterministic given their seeds, so a
//! fixed keygen seed and a fixed signing byte stream must always give the
//! same encoded keys and signature. The values below were computed
//! independently with IEEE binary64 arithmetic. The sampler, the NTRU
//! solver, SHAKE256 and the encoders all feed into them.

use pqsigs_falcon::{keygen_with_seed, sign, sign_dyn, verify, FALCON_512};
use rand::{CryptoRng, RngCore};
use sha3::digest::{ExtendableOutput, Update, XofReader};

const KEYGEN_SEED: &[u8] = b"pqsigs-falcon known answer";
const SIGNING_STREAM: &[u8] = b"pqsigs-falcon signing";

const PK_DIGEST: &str = "4397749f7f3400bf2a0693e0e39b732561bec953271ca144e7ddedf0950443bd";
const SK_DIGEST: &str = "add667b93ceb24213bd092c872c9d3da1b3aac4b87e750bdb82f0b650fedc22c";
const SIG_DIGEST: &str = "7197cca88974bc6d05a9708ec77aa6376f1147d1c31dbc9738c88f410c434f51";
const SIG_LEN: usize = 652;

/// Deterministic byte source: the SHAKE256 output of a label.
struct XofRng(sha3::Shake256Reader);

impl XofRng {
    fn new(label: &[u8]) -> Self {
        let mut h = sha3::Shake256::default();
        h.update(label);
        XofRng(h.finalize_xof())
    }
}

impl RngCore for XofRng {
    fn next_u32(&mut self) -> u32 {
        let mut b = [0u8; 4];
        self.0.read(&mut b);
        u32::from_le_bytes(b)
    }

    fn next_u64(&mut self) -> u64 {
        let mut b = [0u8; 8];
        self.0.read(&mut b);
        u64::from_le_bytes(b)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.read(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for XofRng {}

fn digest(data: &[u8]) -> String {
    let mut h = sha3::Shake256::default();
    h.update(data);
    let mut out = [0u8; 32];
    h.finalize_xof().read(&mut out);
    hex::encode(out)
}

#[test]
fn falcon_512_known_answer() {
    let kp = keygen_with_seed(KEYGEN_SEED, &FALCON_512).unwrap();
    let pk = kp.pk.to_bytes().unwrap();
    let sk = kp.sk.to_bytes().unwrap();
    assert_eq!(pk.len(), 897);
    assert_eq!(sk.len(), 1281);
    assert_eq!(digest(&pk), PK_DIGEST, "public key");
    assert_eq!(digest(&sk), SK_DIGEST, "secret key");

    let mut rng = XofRng::new(SIGNING_STREAM);
    let sig = sign(b"test", &sk, &mut rng).unwrap();
    println!("known-answer signature: {} bytes", sig.len());
    assert_eq!(sig.len(), SIG_LEN);
    assert_eq!(sig[0], 0x39);
    assert_eq!(sig[41], 0x29);
    assert_eq!(digest(&sig), SIG_DIGEST, "signature");
    assert!(verify(b"test", &sig, &pk));
}

#[test]
fn falcon_512_known_answer_nonce_and_s2() {
    let kp = keygen_with_seed(KEYGEN_SEED, &FALCON_512).unwrap();
    let mut rng = XofRng::new(SIGNING_STREAM);
    let sig = sign_dyn(&kp.sk, b"test", &mut rng).unwrap();

    // The nonce is the first 40 bytes drawn from the signing stream.
    let mut stream = XofRng::new(SIGNING_STREAM);
    let mut nonce = [0u8; 40];
    stream.fill_bytes(&mut nonce);
    assert_eq!(sig.nonce, nonce);
    assert_eq!(&sig.s2[..8], &[122, 61, 68, 75, -242, -65, -162, 24]);
}
