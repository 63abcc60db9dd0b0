// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Field map merging

use std::hash::Hash;

use indexmap::IndexMap;

/// Copy of `base` with every entry of `overrides` applied on top.
///
/// Keys of `base` keep their position; keys only in `overrides` follow in
/// their own order.
pub fn merge<K, V>(base: &IndexMap<K, V>, overrides: &IndexMap<K, V>) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let mut merged = base.clone();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}
