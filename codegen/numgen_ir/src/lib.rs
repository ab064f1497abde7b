//! Numeric taxonomy for the numgen dispatch generators.
//!
//! The data model is deliberately small and static:
//!
//! ```text
//! CategoryTable
//!     │  one ordered list per Category
//!     ▼
//! Representation  (concrete C type, byte width, boxing operation)
//! ```
//!
//! A `CategoryTable` is authored once (either the built-in Core Plot
//! reference taxonomy or a JSON file), validated, and then consumed by the
//! generators in `numgen_codegen`. Nothing here mutates after construction.

mod category;
mod error;
mod repr;
mod table;

pub use category::Category;
pub use error::TableError;
pub use repr::Representation;
pub use table::CategoryTable;
