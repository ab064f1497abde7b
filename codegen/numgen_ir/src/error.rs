//! Taxonomy validation errors.

use thiserror::Error;

use crate::Category;

/// A defect in a `CategoryTable` that makes generation ambiguous.
///
/// Raised at generation time; generation aborts with no partial output.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two representations in the same category share a dispatch width,
    /// so one `case sizeof(...)` branch would silently shadow the other.
    #[error(
        "duplicate dispatch width {width} in category {category}: \
         {first} and {second} would share one case branch"
    )]
    DuplicateWidth {
        category: Category,
        width: u32,
        first: String,
        second: String,
    },
}
