// Breed catalog: the breed -> sub-breeds mapping returned by
// `/breeds/list/all`. It is fetched fresh for every menu action and never
// mutated once built.

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Canonical form of a breed or sub-breed name: trimmed and lowercased.
pub fn normalize_name(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Mapping from breed name to its (possibly empty) set of sub-breeds.
///
/// Keys and values are stored normalized and sorted, so iteration order is
/// deterministic and lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, Vec<String>>")]
pub struct BreedCatalog {
    breeds: BTreeMap<String, BTreeSet<String>>,
}

impl BreedCatalog {
    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    /// Breed names in lexicographic order.
    pub fn breeds(&self) -> impl Iterator<Item = &str> {
        self.breeds.keys().map(String::as_str)
    }

    /// Sub-breeds of `breed`, or `None` when the breed is not in the catalog.
    pub fn sub_breeds(&self, breed: &str) -> Option<&BTreeSet<String>> {
        self.breeds.get(&normalize_name(breed))
    }
}

impl From<BTreeMap<String, Vec<String>>> for BreedCatalog {
    fn from(raw: BTreeMap<String, Vec<String>>) -> Self {
        raw.into_iter().collect()
    }
}

impl<B, S> FromIterator<(B, S)> for BreedCatalog
where
    B: AsRef<str>,
    S: IntoIterator,
    S::Item: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (B, S)>>(iter: I) -> Self {
        let mut breeds: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (breed, sub_breeds) in iter {
            breeds
                .entry(normalize_name(breed.as_ref()))
                .or_default()
                .extend(sub_breeds.into_iter().map(|s| normalize_name(s.as_ref())));
        }
        BreedCatalog { breeds }
    }
}
