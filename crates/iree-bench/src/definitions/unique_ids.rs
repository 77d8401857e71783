use sha2::{Digest, Sha256};

/// Component id that is left out of composite ids.
pub const TRANSPARENT_ID: &str = "00000000000000000000000000000000";

/// Hash the ids of the components that make up a composite record.
///
/// The hash depends on key order. Keys equal to [`TRANSPARENT_ID`] are skipped
/// so a component can be added later without changing existing ids.
pub fn hash_composite_id<S: AsRef<str>>(keys: &[S]) -> String {
    let joined = keys
        .iter()
        .map(AsRef::as_ref)
        .filter(|key| *key != TRANSPARENT_ID)
        .collect::<Vec<_>>()
        .join(":");
    format!("{:x}", Sha256::digest(joined.as_bytes()))
}
