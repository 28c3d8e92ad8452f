extern crate rand;
extern crate rand_pcg;
extern crate sha2;

use self::rand::{Rng, SeedableRng};
use self::rand_pcg::Pcg32;
use self::sha2::{Digest, Sha256};

/// Move the newlines of `encoded` around, repeatably for the same fuzz input.
pub fn rewrap(data: &[u8], encoded: &[u8]) -> Vec<u8> {
    // use sha256 of data as rng seed so it's repeatable
    let sha = Sha256::digest(data);

    let mut seed: [u8; 16] = [0; 16];
    seed.copy_from_slice(&sha.as_slice()[0..16]);

    let mut rng = Pcg32::from_seed(seed);

    let mut rewrapped = Vec::with_capacity(encoded.len() * 2);
    for &byte in encoded.iter().filter(|&&b| b != b'\n') {
        while rng.gen_ratio(1, 8) {
            rewrapped.push(b'\n');
        }
        rewrapped.push(byte);
    }

    rewrapped
}
