//! Concrete numeric representations.

use serde::{Deserialize, Serialize};

/// A concrete numeric encoding within one category.
///
/// `byte_width` is the dispatch key inside the category: the generated
/// `case sizeof(type_name):` branch resolves to it at compile time of the
/// emitted code. `boxing_name` is the `NSNumber` factory suffix used by
/// the sample-extraction dispatch (`numberWithChar:`, `numberWithDouble:`
/// and so on).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Representation {
    /// The C type name spelled into the generated source.
    pub type_name: String,
    /// Size of one sample in bytes; must be unique within a category.
    pub byte_width: u32,
    /// `NSNumber` factory suffix for boxing one sample.
    pub boxing_name: String,
}

impl Representation {
    pub fn new(
        type_name: impl Into<String>,
        byte_width: u32,
        boxing_name: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            byte_width,
            boxing_name: boxing_name.into(),
        }
    }
}
