use crate::error::{RefactorError, RefactorResult};
use crate::host::TypeChecker;
use crate::syntax::{Field, SyntaxKind, SyntaxNode};

/// Names of the callback parameters expected by `call`'s first parameter.
///
/// Resolves the call's overload, takes its first formal parameter and requires
/// its declared type to be a function type. Names come back verbatim and in
/// declaration order; duplicates and empty names are kept.
pub fn extract_callback_parameters(
    checker: &dyn TypeChecker,
    call: SyntaxNode<'_>,
) -> RefactorResult<Vec<String>> {
    let callee = || {
        call.child_by_field(Field::Callee)
            .map_or_else(|| call.text().to_string(), |n| n.text().to_string())
    };

    let signature = checker
        .resolved_signature(call)
        .ok_or_else(|| RefactorError::no_parameter(callee()))?;
    let first = signature
        .parameters
        .first()
        .ok_or_else(|| RefactorError::no_parameter(callee()))?;

    let declaration = first
        .value_declaration
        .filter(|decl| decl.kind() == SyntaxKind::Parameter)
        .ok_or_else(|| {
            RefactorError::not_a_parameter(first.value_declaration.map(|decl| decl.kind()))
        })?;

    let declared_type = declaration.child_by_field(Field::Type);
    let function_type = declared_type
        .filter(|ty| ty.kind() == SyntaxKind::FunctionType)
        .ok_or_else(|| {
            RefactorError::unsupported_parameter_type(declared_type.map(|ty| ty.kind()))
        })?;

    log::debug!(
        target: "wrapref::signature",
        "Callback type for `{}` parameter `{}`: {}",
        callee(),
        first.name,
        function_type.text()
    );

    Ok(function_type
        .children_by_field(Field::Parameter)
        .map(parameter_name)
        .collect())
}

fn parameter_name(parameter: SyntaxNode<'_>) -> String {
    parameter
        .child_by_field(Field::Name)
        .map(|name| name.text().to_string())
        .unwrap_or_default()
}
