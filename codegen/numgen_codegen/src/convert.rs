//! Conversion-matrix dispatch generation.
//!
//! Emits the four-level switch that converts a sample buffer from one
//! representation to another: source category, source width, destination
//! category, destination width. Resolving the source's storage shape first
//! lets the emitted code bind a correctly typed read pointer before any
//! destination-side decision, mirroring a two-stage decode/encode cast.

use numgen_ir::{Category, CategoryTable, TableError};

use crate::context::EmitContext;
use crate::target::DispatchTarget;

/// Generate the byte-buffer conversion dispatch for `table`.
///
/// Fails with [`TableError::DuplicateWidth`] before emitting anything if
/// two representations in one category share a dispatch width.
pub fn generate_conversion_dispatch(
    table: &CategoryTable,
    target: &DispatchTarget,
) -> Result<String, TableError> {
    table.validate()?;

    let mut ctx = EmitContext::new();
    ctx.writeln("NSData *result = nil;");
    ctx.writeln(&format!("switch ( {} ) {{", target.format_accessor()));
    ctx.indent();

    for src_cat in Category::ALL {
        ctx.writeln(&format!("case {}:", target.category_symbol(src_cat)));
        ctx.indent();

        let src_reprs = table.representations(src_cat);
        if src_reprs.is_empty() {
            emit_unsupported(&mut ctx, target, src_cat, "source");
        } else {
            ctx.writeln("switch ( [self sampleBytes] ) {");
            ctx.indent();
            for src in src_reprs {
                ctx.writeln(&format!("case sizeof({}):", src.type_name));
                ctx.indent();
                ctx.writeln("switch ( newDataType ) {");
                ctx.indent();

                for dst_cat in Category::ALL {
                    ctx.writeln(&format!("case {}:", target.category_symbol(dst_cat)));
                    ctx.indent();

                    let dst_reprs = table.representations(dst_cat);
                    if dst_reprs.is_empty() {
                        // The destination-side branch was missing in early
                        // revisions of this dispatch; an empty destination
                        // category must fail exactly like an empty source.
                        emit_unsupported(&mut ctx, target, dst_cat, "destination");
                    } else {
                        ctx.writeln("switch ( newSampleBytes ) {");
                        ctx.indent();
                        for dst in dst_reprs {
                            ctx.writeln(&format!("case sizeof({}):", dst.type_name));
                            ctx.indent();
                            ctx.writeln(&format!(
                                "result = coreplot::convert_numeric_data_type<{}, {}>({}, [self byteOrder], newByteOrder);",
                                src.type_name,
                                dst.type_name,
                                target.data_expr()
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

fn emit_unsupported(
    ctx: &mut EmitContext,
    target: &DispatchTarget,
    category: Category,
    side: &str,
) {
    ctx.writeln(&format!(
        "[NSException raise:NSInvalidArgumentException format:@\"Unsupported {side} data type ({})\"];",
        target.category_symbol(category)
    ));
}
