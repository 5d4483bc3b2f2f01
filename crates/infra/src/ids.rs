//! Generated identifiers and object names
//!
//! Mock project ids and remote object names share the same shape: a unix
//! millisecond timestamp plus a short random base36 suffix.

use chrono::Utc;
use rand::Rng;

const BASE36: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

pub(crate) fn unix_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub(crate) fn random_base36(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char).collect()
}

/// Id of the form `{prefix}_{millis}_{9 random base36 chars}`
pub(crate) fn timestamped_id(prefix: &str) -> String {
    format!("{}_{}_{}", prefix, unix_millis(), random_base36(9))
}

/// Object name of the form `{millis}-{9 random base36 chars}.{ext}`
pub(crate) fn timestamped_object_name(ext: &str) -> String {
    format!("{}-{}.{}", unix_millis(), random_base36(9), ext)
}
