// Product id generation
// Short url-safe random identifiers, 6 characters over a 64-symbol alphabet

use rand::Rng;

/// Url-safe alphabet: letters, digits, `_` and `-`
const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Identifier length in characters
pub const ID_LEN: usize = 6;

/// Generate a fresh product id
pub fn generate() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            char::from(ALPHABET[idx])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_length() {
        assert_eq!(generate().len(), ID_LEN);
    }

    #[test]
    fn test_id_alphabet() {
        let id = generate();
        assert!(id.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_ids_differ() {
        // 64^6 possible ids, a handful of draws should never collide
        let ids: Vec<String> = (0..16).map(|_| generate()).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }
}
