//! Numeric categories.
//!
//! The category set is closed and ordered; the order drives the outer
//! dispatch level of every generated switch, so it must never depend on
//! hash-map iteration or other unstable sources.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric category tag.
///
/// Declaration order is the dispatch order of the generated code and is
/// fixed; see [`Category::ALL`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Undefined,
    Integer,
    UnsignedInteger,
    FloatingPoint,
    ComplexFloatingPoint,
}

impl Category {
    /// All categories, in dispatch order.
    pub const ALL: [Category; 5] = [
        Category::Undefined,
        Category::Integer,
        Category::UnsignedInteger,
        Category::FloatingPoint,
        Category::ComplexFloatingPoint,
    ];

    /// The bare category name, as used in taxonomy files and in the
    /// `{prefix}{name}DataType` dispatch symbols.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Undefined => "Undefined",
            Category::Integer => "Integer",
            Category::UnsignedInteger => "UnsignedInteger",
            Category::FloatingPoint => "FloatingPoint",
            Category::ComplexFloatingPoint => "ComplexFloatingPoint",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dispatch_order_is_stable() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Undefined",
                "Integer",
                "UnsignedInteger",
                "FloatingPoint",
                "ComplexFloatingPoint",
            ]
        );
    }

    #[test]
    fn display_matches_name() {
        for cat in Category::ALL {
            assert_eq!(cat.to_string(), cat.name());
        }
    }
}
