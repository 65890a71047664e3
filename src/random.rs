use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draws `len` characters from `[a-zA-Z0-9]` using the caller's generator.
pub fn make_random_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// [`make_random_string`] backed by the thread-local generator.
pub fn random_string(len: usize) -> String {
    make_random_string(&mut rand::thread_rng(), len)
}
