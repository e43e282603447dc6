//! UTS-46 name normalization and the ENSIP-1 name hash.

use alloy_primitives::{B256, keccak256};

/// Normalize an ENS name using UTS-46 processing.
///
/// Returns the normalized (case-folded, Unicode-canonical) name, or `None` if
/// the input is empty or contains disallowed code points or malformed labels.
/// Normalization failures never propagate; this function does not panic.
///
/// Normalizing an already-normalized name returns it unchanged.
pub fn normalize_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    // Round-trip through the ASCII (punycode) form so that strict UTS-46
    // checks run, then map back to the Unicode form ENS names use.
    match idna::domain_to_ascii_strict(name) {
        Ok(ascii) => {
            let (unicode, result) = idna::domain_to_unicode(&ascii);
            match result {
                Ok(()) => Some(unicode),
                Err(_) => None,
            }
        }
        Err(_) => {
            log::debug!("name failed UTS-46 normalization: {name:?}");
            None
        }
    }
}

/// Compute the ENSIP-1 namehash of a name.
///
/// The name is normalized first; `None` means it failed normalization. The
/// empty name hashes to 32 zero bytes.
pub fn namehash(name: &str) -> Option<B256> {
    if name.is_empty() {
        return Some(B256::ZERO);
    }
    let normalized = normalize_name(name)?;

    let mut node = B256::ZERO;
    for label in normalized.rsplit('.') {
        let label_hash = keccak256(label.as_bytes());
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(node.as_slice());
        buf[32..].copy_from_slice(label_hash.as_slice());
        node = keccak256(buf);
    }
    Some(node)
}
