//! # Common Types

/// Type Alias for hash maps in this crate.
pub type WGHashMap<K, V> = ahash::AHashMap<K, V>;

/// Type Alias for hash sets in this crate.
pub type WGHashSet<V> = ahash::AHashSet<V>;
