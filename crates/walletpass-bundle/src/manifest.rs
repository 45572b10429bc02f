//! Manifest generation: a name → SHA-1 digest table over bundle members.
//!
//! The manifest is the byte sequence that gets signed, so its key order is a
//! compatibility concern, not cosmetic: already-signed vendor bundles carry
//! an order-sensitive manifest, and re-signing one must keep the surviving
//! keys in their original order so the emitted JSON stays diffable.

use crate::bundle::{MANIFEST_JSON, SIGNATURE};
use crate::error::BundleError;
use serde_json::{Map, Value};
use sha1::{Digest, Sha1};

/// Compute the manifest JSON for the given members.
///
/// Every member except `manifest.json` and `signature` is digested with
/// SHA-1 and recorded as a lowercase hex string. Without a previous
/// manifest, keys appear in member iteration order. With one, the previous
/// key order is preserved for members that still exist, vanished keys are
/// pruned, and new members are appended after the preserved block — hash
/// values are always freshly computed.
pub fn build<'a, I>(members: I, previous: Option<&[u8]>) -> Result<Vec<u8>, BundleError>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut hashes = Map::new();
    for (name, data) in members {
        if name == MANIFEST_JSON || name == SIGNATURE {
            continue;
        }
        hashes.insert(
            name.to_string(),
            Value::String(hex::encode(Sha1::digest(data))),
        );
    }

    let manifest = match previous {
        Some(previous) => {
            let old: Map<String, Value> = serde_json::from_slice(previous)?;
            let mut merged = Map::new();
            for name in old.keys() {
                if let Some(hash) = hashes.get(name) {
                    merged.insert(name.clone(), hash.clone());
                }
            }
            for (name, hash) in hashes {
                if !merged.contains_key(&name) {
                    merged.insert(name, hash);
                }
            }
            merged
        }
        None => hashes,
    };

    Ok(serde_json::to_vec(&manifest)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members<'a>(entries: &'a [(&'a str, &'a [u8])]) -> impl Iterator<Item = (&'a str, &'a [u8])> {
        entries.iter().copied()
    }

    fn keys(manifest: &[u8]) -> Vec<String> {
        let map: Map<String, Value> = serde_json::from_slice(manifest).unwrap();
        map.keys().cloned().collect()
    }

    #[test]
    fn digests_are_lowercase_hex_sha1() {
        let manifest = build(members(&[("pass.json", b"hello")]), None).unwrap();
        let map: Map<String, Value> = serde_json::from_slice(&manifest).unwrap();
        // sha1("hello")
        assert_eq!(
            map["pass.json"],
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
    }

    #[test]
    fn manifest_and_signature_members_are_excluded() {
        let manifest = build(
            members(&[
                ("pass.json", b"{}"),
                ("manifest.json", b"old"),
                ("signature", b"sig"),
            ]),
            None,
        )
        .unwrap();
        assert_eq!(keys(&manifest), vec!["pass.json"]);
    }

    #[test]
    fn repeated_builds_are_byte_identical() {
        let entries: &[(&str, &[u8])] = &[("icon.png", b"png"), ("pass.json", b"{}")];
        let first = build(members(entries), None).unwrap();
        let second = build(members(entries), None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn previous_order_is_preserved_pruned_and_appended() {
        // old manifest has keys [a, b, c]; new members are {b, c, d}
        let old = build(
            members(&[("a", b"1".as_slice()), ("b", b"2"), ("c", b"3")]),
            None,
        )
        .unwrap();
        assert_eq!(keys(&old), vec!["a", "b", "c"]);

        let merged = build(
            members(&[("b", b"2x".as_slice()), ("c", b"3"), ("d", b"4")]),
            Some(&old),
        )
        .unwrap();
        assert_eq!(keys(&merged), vec!["b", "c", "d"]);

        // hashes are fresh, not carried over from the old manifest
        let map: Map<String, Value> = serde_json::from_slice(&merged).unwrap();
        assert_eq!(map["b"], hex::encode(Sha1::digest(b"2x")));
    }

    #[test]
    fn previous_order_survives_reordered_members() {
        let old = build(members(&[("z.png", b"z".as_slice()), ("a.png", b"a")]), None).unwrap();
        // A fresh build would order [a.png, z.png]; the old manifest pins z first.
        let reordered: &[(&str, &[u8])] = &[("a.png", b"a"), ("z.png", b"z")];
        let merged = build(members(reordered), Some(&old)).unwrap();
        assert_eq!(keys(&merged), keys(&old));
    }

    #[test]
    fn malformed_previous_manifest_is_a_structural_error() {
        let err = build(members(&[("pass.json", b"{}")]), Some(b"not json")).unwrap_err();
        assert!(matches!(err, BundleError::Json(_)));
    }
}
