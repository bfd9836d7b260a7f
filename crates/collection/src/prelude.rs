pub use crate::canonical::{CanonicalKeyMap, CanonicalMapOptions};
pub use crate::cursor::{Cursor, CursorExt, ForwardSequence};
pub use crate::error::CollectionError;
pub use crate::keyed::KeyedCollection;
pub use crate::pair::Pair;
pub use crate::zip::{ZipCursor, ZipSequence};
