//! injective-map: a one-to-one bidirectional hash map.
//!
//! [`InjectiveMap`] pairs domain values with range values so that each side
//! determines the other. Lookups in either direction cost one hash probe plus
//! one slot access. Removals leave garbage slots behind instead of shifting
//! the backing store; [`InjectiveMap::compact`] reclaims them in time
//! proportional to the garbage, either on demand or automatically through a
//! [`CompactionConfig`].
//!
//! The map is a plain single-threaded value: clone it to get an independent
//! copy, wrap it in a lock to share it.
pub mod config;
pub mod dict;
pub mod error;
pub mod map;

pub use config::{CompactionConfig, CompactionPolicy, DEFAULT_GARBAGE_THRESHOLD};
pub use error::InjectiveMapError;
pub use map::{InjectiveMap, Iter};
