//! Insertion-ordered name/value storage.

use std::fmt;

use smallvec::SmallVec;

/// Named arguments in the order their names were first seen.
///
/// Names are unique. Inserting an existing name replaces its value in place,
/// so the slot keeps the position of the first occurrence. This is the
/// "concatenate, then collapse duplicate names, last write wins" behaviour
/// that merging relies on.
///
/// Argument lists are short, so lookups are a linear scan over inline
/// storage rather than a hash.
///
/// With the `serde` feature the set serializes as a map in insertion order.
/// Deserializing input that repeats a name is an error.
///
/// # Examples
///
/// ```rust
/// use lambind::arguments::NamedArguments;
///
/// let mut named = NamedArguments::new();
/// named.insert("na_rm", true);
/// named.insert("trim", false);
/// assert_eq!(named.insert("na_rm", false), Some(true));
///
/// let names: Vec<&str> = named.names().collect();
/// assert_eq!(names, vec!["na_rm", "trim"]);
/// assert_eq!(named.get("na_rm"), Some(&false));
/// ```
#[derive(Clone, PartialEq)]
pub struct NamedArguments<V> {
    entries: SmallVec<[(String, V); 4]>,
}

impl<V> NamedArguments<V> {
    /// Creates an empty set of named arguments.
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no names are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `value` under `name`, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        let name = name.into();
        match self.position(&name) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Looks up the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.position(name).map(|index| &self.entries[index].1)
    }

    /// Returns `true` when `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Removes `name`, returning its value and preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<V> {
        self.position(name)
            .map(|index| self.entries.remove(index).1)
    }

    /// Iterates over the names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Overlays `other` onto `self`; values from `other` win on shared names.
    pub fn overlay(&mut self, other: Self) {
        for (name, value) in other {
            self.insert(name, value);
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(existing, _)| existing == name)
    }
}

impl<V> Default for NamedArguments<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for NamedArguments<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<V> IntoIterator for NamedArguments<V> {
    type Item = (String, V);
    type IntoIter = smallvec::IntoIter<[(String, V); 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<N: Into<String>, V> FromIterator<(N, V)> for NamedArguments<V> {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iterator: I) -> Self {
        let mut named = Self::new();
        named.extend(iterator);
        named
    }
}

impl<N: Into<String>, V> Extend<(N, V)> for NamedArguments<V> {
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iterator: I) {
        for (name, value) in iterator {
            self.insert(name, value);
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for NamedArguments<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
struct NamedArgumentsVisitor<V> {
    value_marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<V> NamedArgumentsVisitor<V> {
    const fn new() -> Self {
        Self {
            value_marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, V: serde::Deserialize<'de>> serde::de::Visitor<'de> for NamedArgumentsVisitor<V> {
    type Value = NamedArguments<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of argument names to values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut named = NamedArguments::new();
        while let Some((name, value)) = access.next_entry::<String, V>()? {
            if named.contains(&name) {
                return Err(serde::de::Error::custom(format_args!(
                    "duplicate argument `{name}`"
                )));
            }
            named.insert(name, value);
        }
        Ok(named)
    }
}

#[cfg(feature = "serde")]
impl<'de, V: serde::Deserialize<'de>> serde::Deserialize<'de> for NamedArguments<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(NamedArgumentsVisitor::new())
    }
}
