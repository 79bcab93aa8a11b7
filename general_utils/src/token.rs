//! Random token generation

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::distr::Alphanumeric;
use rand::Rng;

/// `length` random alphanumeric characters, base64 encoded
///
/// Returns an empty string for a zero length.
pub fn random_hash(length: usize) -> String {
    if length == 0 {
        return String::new();
    }

    let token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect();

    STANDARD.encode(token)
}
