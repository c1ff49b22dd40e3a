//! Falcon end-to-end demo.
//!
//! Usage: `falcon_demo [logn]` (default 9, i.e. Falcon-512).
//!
//! Generates a key pair, signs a message, verifies it, and checks that a
//! modified message and a corrupted public key are rejected.

use std::time::Instant;

use pqsigs_falcon::{generate_keypair, sign, verify, Params};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logn = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u32>()?,
        None => 9,
    };
    let params = Params::new(logn)?;
    println!("=== Falcon-{} ===\n", params.n);

    let mut rng = StdRng::from_entropy();

    println!("1. Key generation...");
    let start = Instant::now();
    let (pk, sk) = generate_keypair(&mut rng, &params)?;
    println!("   public key: {} bytes", pk.len());
    println!("   secret key: {} bytes", sk.len());
    println!("   time: {:.2?}\n", start.elapsed());

    let message = b"Hello, Falcon!";

    println!("2. Signing...");
    let start = Instant::now();
    let sig = sign(message, &sk, &mut rng)?;
    println!("   signature: {} bytes (max {})", sig.len(), params.sig_bytes_max);
    println!("   time: {:.2?}\n", start.elapsed());

    println!("3. Verification...");
    let start = Instant::now();
    let ok = verify(message, &sig, &pk);
    println!("   valid: {}", ok);
    println!("   time: {:.2?}\n", start.elapsed());

    println!("4. Wrong message...");
    let wrong = verify(b"Hello, Falcon?", &sig, &pk);
    println!("   valid: {} (expected false)\n", wrong);

    println!("5. Corrupted public key...");
    let mut bad_pk = pk.clone();
    bad_pk[1] ^= 0x01;
    let corrupted = verify(message, &sig, &bad_pk);
    println!("   valid: {} (expected false)\n", corrupted);

    if ok && !wrong && !corrupted {
        println!("=== ALL CHECKS PASSED ===");
        Ok(())
    } else {
        Err("unexpected verification result".into())
    }
}
