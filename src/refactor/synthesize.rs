use super::{RefactorContext, extract_callback_parameters, find_callback_target};
use crate::domain::ReplacementEdit;
use crate::error::{RefactorError, RefactorResult};
use crate::host::Printer;
use crate::printer::{SyntheticExpr, SyntheticParameter};

/// `(<names>) => <target>(<names>)`
pub fn wrap_in_closure(target: &str, parameter_names: &[String]) -> SyntheticExpr {
    let arguments = parameter_names
        .iter()
        .map(|name| SyntheticExpr::identifier(name.as_str()))
        .collect();
    let parameters = parameter_names
        .iter()
        .map(|name| SyntheticParameter { name: name.clone() })
        .collect();
    SyntheticExpr::arrow(
        parameters,
        SyntheticExpr::call(SyntheticExpr::identifier(target), arguments),
    )
}

/// Compute the single edit replacing the identifier at `offset` with a
/// forwarding closure.
pub fn build_edit(
    ctx: &RefactorContext<'_>,
    printer: &dyn Printer,
    offset: usize,
) -> RefactorResult<ReplacementEdit> {
    let target = find_callback_target(ctx.tree, offset, ctx.strict_argument_position)
        .map_err(|reason| RefactorError::precondition(offset, reason))?;

    let names = extract_callback_parameters(ctx.checker, target.call)?;
    let closure = wrap_in_closure(target.identifier.text(), &names);
    let new_text = printer.render(&closure, ctx.tree);

    log::debug!(
        target: "wrapref::synthesize",
        "Replacing `{}` at {}..{} with `{}`",
        target.identifier.text(),
        target.identifier.start(),
        target.identifier.end(),
        new_text
    );

    Ok(ReplacementEdit {
        file_name: ctx.tree.file_name().to_string(),
        span: target.identifier.span(),
        new_text,
    })
}
