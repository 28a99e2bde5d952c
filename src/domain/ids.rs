// src/domain/ids.rs
use rand::rngs::OsRng;
use rand::Rng;

pub const ID_LEN: usize = 13;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a complaint id using the OS RNG.
/// This is what the submission path should call.
pub fn generate_id_default() -> String {
    let mut rng = OsRng;
    generate_id(&mut rng)
}

/// Lowercase base-36 id of `ID_LEN` characters.
/// 36^13 ≈ 1.7e20 possibilities, collisions are not a practical concern.
pub fn generate_id<R: Rng>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
