//! The category table: one ordered representation list per category.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{Category, Representation, TableError};

/// Mapping from category to its declared representations.
///
/// Categories absent from the map are empty; the generators turn them into
/// unconditional `UnsupportedCategory` failure branches. Iteration always
/// follows [`Category::ALL`], never map order, so output is deterministic
/// for a fixed table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    categories: FxHashMap<Category, Vec<Representation>>,
}

impl CategoryTable {
    /// An empty table. Every category starts with no representations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a representation to a category, preserving declaration order.
    pub fn push(&mut self, category: Category, repr: Representation) {
        self.categories.entry(category).or_default().push(repr);
    }

    /// The representations declared for a category, in declaration order.
    pub fn representations(&self, category: Category) -> &[Representation] {
        self.categories.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Concrete representations across all categories, in dispatch order.
    pub fn concrete(&self) -> impl Iterator<Item = (Category, &Representation)> + '_ {
        Category::ALL
            .into_iter()
            .flat_map(|cat| self.representations(cat).iter().map(move |r| (cat, r)))
    }

    /// Reject tables where a category has two representations with the
    /// same byte width. Such a table would emit two identical
    /// `case sizeof(...)` keys and the second branch could never match.
    pub fn validate(&self) -> Result<(), TableError> {
        for category in Category::ALL {
            let mut seen: FxHashMap<u32, &str> = FxHashMap::default();
            for repr in self.representations(category) {
                if let Some(first) = seen.insert(repr.byte_width, &repr.type_name) {
                    return Err(TableError::DuplicateWidth {
                        category,
                        width: repr.byte_width,
                        first: first.to_string(),
                        second: repr.type_name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// The hand-maintained Core Plot reference taxonomy.
    ///
    /// Widths are the 64-bit `sizeof` values the emitted keys resolve to.
    /// `long`/`unsigned long` are deliberately omitted: on LP64 they alias
    /// `NSInteger`/`NSUInteger` at width 8 and would collide.
    pub fn core_plot_reference() -> Self {
        let mut table = Self::new();
        table.push(Category::Integer, Representation::new("char", 1, "Char"));
        table.push(Category::Integer, Representation::new("short", 2, "Short"));
        table.push(
            Category::Integer,
            Representation::new("NSInteger", 8, "Integer"),
        );
        table.push(
            Category::UnsignedInteger,
            Representation::new("unsigned char", 1, "UnsignedChar"),
        );
        table.push(
            Category::UnsignedInteger,
            Representation::new("unsigned short", 2, "UnsignedShort"),
        );
        table.push(
            Category::UnsignedInteger,
            Representation::new("NSUInteger", 8, "UnsignedInteger"),
        );
        table.push(
            Category::FloatingPoint,
            Representation::new("float", 4, "Float"),
        );
        table.push(
            Category::FloatingPoint,
            Representation::new("double", 8, "Double"),
        );
        table
    }
}
