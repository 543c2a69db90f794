//! Page-size bounds for pagination slicing.
//!
//! [`OrderedSequence::slice`](crate::OrderedSequence::slice) and
//! [`OrderedSequence::first_page`](crate::OrderedSequence::first_page) never
//! return more than [`MAX_PAGE_SIZE`] elements, and always ask for at least
//! [`MIN_PAGE_SIZE`]. Requests outside that range are silently clamped: the
//! ceiling bounds response size, it is not a caller error.
//!
//! # Examples
//!
//! ```rust
//! use sorted_bags::page::{clamp_page_size, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
//!
//! assert_eq!(clamp_page_size(0), MIN_PAGE_SIZE);
//! assert_eq!(clamp_page_size(20), 20);
//! assert_eq!(clamp_page_size(5000), MAX_PAGE_SIZE);
//! ```

/// The smallest number of elements a page request asks for.
pub const MIN_PAGE_SIZE: usize = 1;

/// The hard upper limit on the number of elements returned by one page.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Clamps a requested page size into `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`.
#[inline]
#[must_use]
pub const fn clamp_page_size(requested: usize) -> usize {
    if requested < MIN_PAGE_SIZE {
        MIN_PAGE_SIZE
    } else if requested > MAX_PAGE_SIZE {
        MAX_PAGE_SIZE
    } else {
        requested
    }
}
