//! FNV-1 name hashing as used by the authoring tool
//!
//! Generated identifiers are 32-bit FNV-1 hashes of the lowercased
//! authoring object name. Hashing the sanitized symbol instead of the
//! object name gives the same value only when the object name contains
//! no characters the sanitizer rewrote (spaces, punctuation).

use crate::UniqueId;

/// FNV-1 32-bit offset basis
const FNV1_32_OFFSET: u32 = 2_166_136_261;

/// FNV-1 32-bit prime
const FNV1_32_PRIME: u32 = 16_777_619;

/// Hash raw bytes with 32-bit FNV-1
///
/// Multiply-then-xor per byte; an empty input hashes to the offset
/// basis.
#[must_use]
pub const fn fnv1_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV1_32_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash = hash.wrapping_mul(FNV1_32_PRIME);
        hash ^= bytes[i] as u32;
        i += 1;
    }
    hash
}

/// Compute the identifier the authoring tool would assign to `name`
///
/// The name is lowercased before hashing, so lookups are
/// case-insensitive: `"Play_Explosion"` and `"PLAY_EXPLOSION"` map to
/// the same identifier.
#[must_use]
pub fn id_from_name(name: &str) -> UniqueId {
    UniqueId::new(fnv1_32(name.to_lowercase().as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_offset_basis() {
        assert_eq!(fnv1_32(b""), FNV1_32_OFFSET);
    }

    #[test]
    fn test_known_event_hash() {
        assert_eq!(id_from_name("Play_Explosion"), UniqueId::new(4030404899));
        assert_eq!(id_from_name("Play_TANK_Gunfire"), UniqueId::new(3624895801));
    }

    #[test]
    fn test_object_names_with_spaces() {
        // Bus and device objects are named with spaces in the authoring
        // tool; the hash is taken over the real name, not the symbol.
        assert_eq!(id_from_name("Master Audio Bus"), UniqueId::new(3803692087));
        assert_eq!(id_from_name("No_Output"), UniqueId::new(2317455096));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(id_from_name("INIT"), id_from_name("init"));
        assert_eq!(id_from_name("init"), UniqueId::new(1355168291));
    }
}
