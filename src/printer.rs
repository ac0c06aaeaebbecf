//! Synthesized expression nodes and the canonical printer that renders them.

use crate::config::ArrowParens;
use crate::host::Printer;
use crate::syntax::SyntaxTree;

/// Expression built by the engine rather than parsed from source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntheticExpr {
    Identifier(String),
    Call {
        callee: Box<SyntheticExpr>,
        arguments: Vec<SyntheticExpr>,
    },
    ArrowFunction {
        parameters: Vec<SyntheticParameter>,
        body: Box<SyntheticExpr>,
    },
}

/// Parameter of a synthesized arrow function. The name is emitted verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticParameter {
    pub name: String,
}

impl SyntheticExpr {
    pub fn identifier(name: impl Into<String>) -> Self {
        SyntheticExpr::Identifier(name.into())
    }

    pub fn call(callee: SyntheticExpr, arguments: Vec<SyntheticExpr>) -> Self {
        SyntheticExpr::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn arrow(parameters: Vec<SyntheticParameter>, body: SyntheticExpr) -> Self {
        SyntheticExpr::ArrowFunction {
            parameters,
            body: Box::new(body),
        }
    }
}

/// Single-line printer producing JavaScript/TypeScript expression text.
///
/// Output never contains line breaks, so it is newline-convention neutral.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalPrinter {
    arrow_parens: ArrowParens,
}

impl CanonicalPrinter {
    pub fn new(arrow_parens: ArrowParens) -> Self {
        Self { arrow_parens }
    }

    fn write_expr(&self, expr: &SyntheticExpr, out: &mut String) {
        match expr {
            SyntheticExpr::Identifier(name) => out.push_str(name),
            SyntheticExpr::Call { callee, arguments } => {
                let needs_parens = matches!(**callee, SyntheticExpr::ArrowFunction { .. });
                if needs_parens {
                    out.push('(');
                }
                self.write_expr(callee, out);
                if needs_parens {
                    out.push(')');
                }
                out.push('(');
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_expr(argument, out);
                }
                out.push(')');
            }
            SyntheticExpr::ArrowFunction { parameters, body } => {
                self.write_arrow_head(parameters, out);
                out.push_str(" => ");
                self.write_expr(body, out);
            }
        }
    }

    fn write_arrow_head(&self, parameters: &[SyntheticParameter], out: &mut String) {
        if let [only] = parameters
            && self.arrow_parens == ArrowParens::AsNeeded
            && is_plain_identifier(&only.name)
        {
            out.push_str(&only.name);
            return;
        }
        out.push('(');
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&parameter.name);
        }
        out.push(')');
    }
}

impl Printer for CanonicalPrinter {
    fn render(&self, expr: &SyntheticExpr, _source: &SyntaxTree) -> String {
        let mut out = String::new();
        self.write_expr(expr, &mut out);
        out
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
