use super::{RefactorContext, descriptor, find_callback_target};
use crate::domain::RefactorDescriptor;

/// Decide whether the wrap action can be offered at `offset`.
///
/// Runs on every cursor move, so it never fails: any rejection simply means
/// "not applicable".
pub fn is_applicable(ctx: &RefactorContext<'_>, offset: usize) -> Option<RefactorDescriptor> {
    let target = match find_callback_target(ctx.tree, offset, ctx.strict_argument_position) {
        Ok(target) => target,
        Err(reason) => {
            log::trace!(
                target: "wrapref::applicability",
                "{}:{} not applicable: {}",
                ctx.tree.file_name(),
                offset,
                reason
            );
            return None;
        }
    };

    if !ctx.checker.type_of(target.identifier).is_callable() {
        log::trace!(
            target: "wrapref::applicability",
            "{}:{} not applicable: `{}` has no call signatures",
            ctx.tree.file_name(),
            offset,
            target.identifier.text()
        );
        return None;
    }

    Some(descriptor())
}
