use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

/// Serialize `value` to compact JSON with every absent field dropped.
///
/// Keys whose value is `null` are removed at every nesting depth, including
/// inside arrays of objects. Non-null fields — discriminator tags in
/// particular — pass through unchanged. This is the wire form every record
/// written into a drop folder uses: the host treats a missing key and a null
/// key identically, so nulls are never emitted.
pub fn to_compact_json<T: Serialize>(value: &T) -> Result<String, Error> {
    let mut tree = serde_json::to_value(value)?;
    prune_nulls(&mut tree);
    Ok(serde_json::to_string(&tree)?)
}

/// Remove null-valued keys from every object in the tree.
///
/// Objects that become empty are kept as `{}` — an empty record is still a
/// record, only its absent fields are dropped.
fn prune_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for v in map.values_mut() {
                prune_nulls(v);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                prune_nulls(item);
            }
        }
        _ => {}
    }
}
