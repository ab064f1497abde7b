//! Host-class symbol sets.
//!
//! The framework has carried two structurally identical numeric-data
//! classes: the current `CPNumericData` and the older `BWNumericData`.
//! They differ only in symbol spelling, so the generators take the symbol
//! set as a parameter instead of hard-coding one class.

use numgen_ir::Category;

/// Symbols of the host class the generated dispatch is pasted into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchTarget {
    /// Category symbol prefix (`CP`, `BW`).
    prefix: &'static str,
    /// Accessor returning the receiver's category tag.
    format_accessor: &'static str,
    /// Receiver expression passed to the conversion primitive.
    data_expr: &'static str,
}

impl DispatchTarget {
    /// The `CPNumericData` class.
    pub fn core_plot() -> Self {
        Self {
            prefix: "CP",
            format_accessor: "[self dataTypeFormat]",
            data_expr: "self.data",
        }
    }

    /// The legacy `BWNumericData` class.
    pub fn bw_numeric_data() -> Self {
        Self {
            prefix: "BW",
            format_accessor: "[self dataType]",
            data_expr: "self",
        }
    }

    /// Dispatch symbol for a category, e.g. `CPIntegerDataType`.
    pub fn category_symbol(&self, category: Category) -> String {
        format!("{}{}DataType", self.prefix, category)
    }

    /// Expression yielding the receiver's own category tag.
    pub fn format_accessor(&self) -> &'static str {
        self.format_accessor
    }

    /// Receiver expression for `convert_numeric_data_type`.
    pub fn data_expr(&self) -> &'static str {
        self.data_expr
    }

    /// Paste-location label for the conversion dispatch.
    pub fn conversion_label(&self) -> String {
        format!(
            "[{}NumericData dataByConvertingToType:sampleBytes:byteOrder:]",
            self.prefix
        )
    }

    /// Paste-location label for the sample-extraction dispatch.
    pub fn extraction_label(&self) -> String {
        format!("[{}NumericData sampleValue:]", self.prefix)
    }
}

impl Default for DispatchTarget {
    fn default() -> Self {
        Self::core_plot()
    }
}

#[cfg(test)]
mod tests {
    use numgen_ir::Category;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn core_plot_symbols() {
        let target = DispatchTarget::core_plot();
        assert_eq!(
            target.category_symbol(Category::Integer),
            "CPIntegerDataType"
        );
        assert_eq!(target.format_accessor(), "[self dataTypeFormat]");
        assert_eq!(target.data_expr(), "self.data");
    }

    #[test]
    fn bw_symbols() {
        let target = DispatchTarget::bw_numeric_data();
        assert_eq!(
            target.category_symbol(Category::ComplexFloatingPoint),
            "BWComplexFloatingPointDataType"
        );
        assert_eq!(target.format_accessor(), "[self dataType]");
        assert_eq!(target.data_expr(), "self");
    }
}
