//! Random hook keys.

use rand::Rng;

/// Symbols a generated key is drawn from.
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of every generated key.
pub const KEY_LEN: usize = 16;

/// Generate a key for a hook registered without one.
///
/// Keys are only meant to be handed back to `remove`. They come from a
/// non-cryptographic generator, so do not use them as tokens or ids
/// anywhere else.
pub fn random_key() -> String {
    let mut rng = rand::thread_rng();
    (0..KEY_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
