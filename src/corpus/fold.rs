//! ASCII case folding
//!
//! Folding is byte-wise: only `A`-`Z` (0x41-0x5A) map to lowercase, every
//! other byte passes through unchanged. Multi-byte UTF-8 sequences are left
//! alone, so a folded buffer always has the same length and byte alignment as
//! its source.

/// Fold a single byte
#[inline]
pub const fn fold_byte(b: u8) -> u8 {
    b.to_ascii_lowercase()
}

/// Whether folding changes `b`
#[inline]
pub const fn is_folded(b: u8) -> bool {
    b.is_ascii_uppercase()
}

/// Fold a byte slice into a new buffer of the same length
pub fn fold(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|&b| fold_byte(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_ascii_letters() {
        assert_eq!(fold(b"HeLLo World"), b"hello world");
        for b in b'A'..=b'Z' {
            assert_eq!(fold_byte(b), b + 0x20);
        }
    }

    #[test]
    fn test_is_folded() {
        assert!(is_folded(b'A'));
        assert!(is_folded(b'Z'));
        assert!(!is_folded(b'a'));
        assert!(!is_folded(b'@'));
        assert!(!is_folded(b'['));
        assert!(!is_folded(b'\r'));
        assert!(!is_folded(0xc9));
    }

    #[test]
    fn test_fold_is_idempotent() {
        let input = b"To Be, OR not TO be.\r\n\xc3\x89t\xc3\xa9";
        let once = fold(input);
        assert_eq!(fold(&once), once);
    }

    #[test]
    fn test_fold_preserves_length_and_non_ascii() {
        // "ÉCOLE" - the accented capital is two bytes and must not change
        let input = "\u{c9}COLE".as_bytes();
        let folded = fold(input);
        assert_eq!(folded.len(), input.len());
        assert_eq!(&folded[..2], &input[..2]);
        assert_eq!(&folded[2..], b"cole");
    }

    #[test]
    fn test_fold_leaves_control_bytes() {
        assert_eq!(fold(b"\r\n\t\0[@]"), b"\r\n\t\0[@]");
    }
}
