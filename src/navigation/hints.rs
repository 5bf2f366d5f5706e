// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Spoken navigation hints for detected obstacles

/// Curated hints for labels that deserve a tailored phrase
const CURATED_HINTS: &[(&str, &str)] = &[
    ("person", "Person ahead, proceed with caution"),
    ("chair", "Chair in path"),
    ("couch", "Furniture ahead"),
    ("table", "Table in path"),
    ("stairs", "Stairs detected"),
    ("door", "Door detected"),
    ("car", "Vehicle in area"),
    ("bicycle", "Bicycle in path"),
];

/// Look up the spoken hint for an obstacle label.
///
/// Lookup is case-insensitive. Labels without a curated hint get the
/// generic `"<label> detected ahead"` phrase, keeping the label text as
/// the detector produced it.
pub fn hint_for(label: &str) -> String {
    let key = label.to_lowercase();
    CURATED_HINTS
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, hint)| (*hint).to_string())
        .unwrap_or_else(|| format!("{} detected ahead", label))
}
