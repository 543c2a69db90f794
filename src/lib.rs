//! # sorted-bags
//!
//! Flat, always-sorted sequences for collections that are read far more often
//! than they are written, typically through paginated listings.
//!
//! ## Overview
//!
//! [`OrderedSequence`] stores its elements in one contiguous `Vec`, kept sorted
//! at all times. It offers:
//!
//! - **Cheap in-order insertion**: appending an element that is not smaller than
//!   the current maximum costs one comparison. Out-of-order insertions fall back
//!   to a full sort.
//! - **Binary-search lookups**: `get_index`, `get`, `contains`, `search_greater`
//!   and `search_by` all run in O(log n).
//! - **Bounded pagination**: `slice` returns up to
//!   [`MAX_PAGE_SIZE`](page::MAX_PAGE_SIZE) elements strictly after a marker,
//!   borrowed straight from the storage.
//! - **On-demand validation**: `check` reports unsorted storage or duplicate
//!   order keys.
//!
//! The way elements are ordered is a strategy type from [`order`]:
//!
//! - [`RawSequence`]: elements ordered by their own `Ord`
//! - [`KeyedSequence`]: elements ordered by a [`PrimaryKey`]
//! - [`ComparatorSequence`]: elements ordered by a [`Compare`] method
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `OrderedSequence`
//! - `rayon`: `par_insert_batch`, sorting batches on the rayon thread pool
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sorted_bags::prelude::*;
//!
//! let mut sequence: RawSequence<i64> = (0..3000).collect();
//! sequence.insert(-1);
//!
//! let page = sequence.slice(&-1, 50);
//! assert_eq!(page.len(), 50);
//! assert_eq!(page[0], 0);
//!
//! let next = sequence.slice(page.last().unwrap(), 50);
//! assert_eq!(next[0], 50);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use sorted_bags::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::CheckError;
    pub use crate::order::{ByComparator, ByKey, Compare, Natural, PrimaryKey, SortOrder};
    pub use crate::page::{MAX_PAGE_SIZE, MIN_PAGE_SIZE};
    pub use crate::sequence::OrderedSequence;
    pub use crate::{ComparatorSequence, KeyedSequence, RawSequence};
}

pub mod error;
pub mod order;
pub mod page;
pub mod sequence;

pub use error::CheckError;
pub use order::{ByComparator, ByKey, Compare, Natural, PrimaryKey, SortOrder};
pub use sequence::OrderedSequence;

/// A sequence of raw values ordered by their [`Ord`] implementation.
pub type RawSequence<T> = OrderedSequence<T, Natural>;

/// A sequence of records ordered by their [`PrimaryKey`].
pub type KeyedSequence<T> = OrderedSequence<T, ByKey>;

/// A sequence of values ordered by their [`Compare`] implementation.
pub type ComparatorSequence<T> = OrderedSequence<T, ByComparator>;
