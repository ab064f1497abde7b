//! Sample-extraction dispatch generation.
//!
//! Single-ended version of the conversion dispatch: two levels (category,
//! width), each concrete representation boxing one sample into an
//! `NSNumber` via its configured factory suffix.

use numgen_ir::{Category, CategoryTable, TableError};

use crate::context::EmitContext;
use crate::target::DispatchTarget;

/// Generate the boxed sample-extraction dispatch for `table`.
///
/// Fails with [`TableError::DuplicateWidth`] before emitting anything if
/// two representations in one category share a dispatch width.
pub fn generate_sample_extraction(
    table: &CategoryTable,
    target: &DispatchTarget,
) -> Result<String, TableError> {
    table.validate()?;

    let mut ctx = EmitContext::new();
    ctx.writeln(&format!("switch ( {} ) {{", target.format_accessor()));
    ctx.indent();

    for category in Category::ALL {
        ctx.writeln(&format!("case {}:", target.category_symbol(category)));
        ctx.indent();

        let reprs = table.representations(category);
        if reprs.is_empty() {
            ctx.writeln(&format!(
                "[NSException raise:NSInvalidArgumentException format:@\"Unsupported data type ({})\"];",
                target.category_symbol(category)
            ));
        } else {
            ctx.writeln("switch ( [self sampleBytes] ) {");
            ctx.indent();
            for repr in reprs {
                ctx.writeln(&format!("case sizeof({}):", repr.type_name));
                ctx.indent();
                ctx.writeln(&format!(
                    "result = [NSNumber numberWith{}:*({} *)[self samplePointer:sample]];",
                    repr.boxing_name, repr.type_name
                ));
                ctx.writeln("break;");
                ctx.dedent();
            }
            ctx.dedent();
            ctx.writeln("}");
        }

        ctx.writeln("break;");
        ctx.dedent();
    }

    ctx.dedent();
    ctx.writeln("}");
    Ok(ctx.take_output())
}

#[cfg(test)]
mod tests {
    use numgen_ir::{Category, CategoryTable, Representation, TableError};
    use pretty_assertions::assert_eq;

    use super::*;

    fn small_table() -> CategoryTable {
        let mut table = CategoryTable::new();
        table.push(Category::Integer, Representation::new("int8_t", 1, "Char"));
        table.push(Category::Integer, Representation::new("int16_t", 2, "Short"));
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

    fn generate(table: &CategoryTable) -> String {
        match generate_sample_extraction(table, &DispatchTarget::core_plot()) {
            Ok(code) => code,
            Err(e) => panic!("generation failed: {e}"),
        }
    }

    #[test]
    fn output_is_deterministic() {
        let table = CategoryTable::core_plot_reference();
        assert_eq!(generate(&table), generate(&table));
    }

    #[test]
    fn emits_one_fragment_per_concrete_representation() {
        let code = generate(&small_table());
        assert_eq!(code.matches("[NSNumber numberWith").count(), 4);
        assert_eq!(code.matches("case sizeof(").count(), 4);
    }

    #[test]
    fn boxing_name_matches_the_table() {
        let table = CategoryTable::core_plot_reference();
        let code = generate(&table);
        for (_, repr) in table.concrete() {
            let fragment = format!(
                "[NSNumber numberWith{}:*({} *)[self samplePointer:sample]];",
                repr.boxing_name, repr.type_name
            );
            assert_eq!(code.matches(&fragment).count(), 1, "missing {fragment}");
        }
    }

    #[test]
    fn empty_categories_fail_unconditionally() {
        let code = generate(&small_table());
        for cat in [
            "CPUndefinedDataType",
            "CPUnsignedIntegerDataType",
            "CPComplexFloatingPointDataType",
        ] {
            let line = format!("Unsupported data type ({cat})");
            assert_eq!(code.matches(&line).count(), 1);
        }
    }

    #[test]
    fn reference_table_counts() {
        let code = generate(&CategoryTable::core_plot_reference());
        assert_eq!(code.matches("[NSNumber numberWith").count(), 8);
        assert_eq!(code.matches("Unsupported data type").count(), 2);
    }

    #[test]
    fn duplicate_width_aborts_with_no_output() {
        let mut table = small_table();
        table.push(
            Category::FloatingPoint,
            Representation::new("_Float32", 4, "Float"),
        );
        let result = generate_sample_extraction(&table, &DispatchTarget::core_plot());
        assert_eq!(
            result,
            Err(TableError::DuplicateWidth {
                category: Category::FloatingPoint,
                width: 4,
                first: "float".to_string(),
                second: "_Float32".to_string(),
            })
        );
    }
}
