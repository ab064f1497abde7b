//! Dispatch-source generators for the numeric data layer.
//!
//! Two generators, both pure functions over a validated
//! [`CategoryTable`](numgen_ir::CategoryTable):
//!
//! ```text
//! CategoryTable + DispatchTarget
//!        ↓
//! generate_conversion_dispatch   (4 levels: src category, src width,
//!        │                        dst category, dst width)
//! generate_sample_extraction     (2 levels: category, width)
//!        ↓
//! String  (switch-statement source, checked in and diffed)
//! ```
//!
//! Output is byte-identical across runs for a fixed table and target.
//! Empty categories become unconditional `NSInvalidArgumentException`
//! branches on both the source and the destination side of the conversion
//! dispatch; a width collision inside one category aborts generation
//! before anything is emitted.

mod context;
mod convert;
mod extract;
mod target;

pub use context::EmitContext;
pub use convert::generate_conversion_dispatch;
pub use extract::generate_sample_extraction;
pub use target::DispatchTarget;
