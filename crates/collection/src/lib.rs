//! Generic collections: a canonicalizing keyed map and a lockstep multi-sequence zip.

/// Canonicalizing keyed map and its configuration.
pub mod canonical;
/// Forward-sequence capability: cursors and the iterator adapter.
pub mod cursor;
/// Error types for checked collection operations.
pub mod error;
/// Keyed-collection capability trait and map rendering.
pub mod keyed;
/// Immutable (original key, value) tuple.
pub mod pair;
/// Common re-exports for convenience.
pub mod prelude;
/// Runtime type descriptors for loosely-typed lookups.
pub mod type_desc;
/// Lockstep iteration over several sources.
pub mod zip;

pub use canonical::{CanonicalKeyMap, CanonicalMapOptions};
pub use cursor::{Cursor, CursorExt, ForwardSequence, IterCursor};
pub use error::{CollectionError, ValueRole};
pub use keyed::{KeyedCollection, map_to_string};
pub use pair::Pair;
pub use type_desc::TypeDescriptor;
pub use zip::{ZipCursor, ZipSequence};
