use crate::ast::ast::Expr;

/// Renders an AST back into concrete syntax.
///
/// The output is a valid re-parseable program; parenthesization mirrors the
/// grammar exactly, original whitespace and comments are not preserved.
/// Top-level expressions are joined with newlines.
pub fn print_source(expr: &Expr) -> String {
    match expr {
        Expr::Program(expressions) => expressions
            .iter()
            .map(print_source)
            .collect::<Vec<String>>()
            .join("\n"),

        Expr::IntLiteral(value) => value.to_string(),
        Expr::StringLiteral(value) => format!("\"{}\"", value),
        Expr::BoolLiteral(value) => value.to_string(),
        Expr::Variable(name) => name.clone(),

        Expr::Def { name, value } => format!("(def {} {})", name, print_source(value)),

        Expr::Defn { name, params, body } => {
            format!("(defn {} ({}) {})", name, params.join(" "), print_source(body))
        }

        Expr::Let { bindings, body } => {
            let bindings = bindings
                .iter()
                .map(|b| format!("{} {}", b.name, print_source(&b.value)))
                .collect::<Vec<String>>()
                .join(" ");
            format!("(let ({}) {})", bindings, print_source(body))
        }

        Expr::If {
            condition,
            then_branch,
            else_branch,
        } => {
            let mut out = format!(
                "(if {} {}",
                print_source(condition),
                print_source(then_branch)
            );
            if let Some(else_branch) = else_branch {
                out.push(' ');
                out.push_str(&print_source(else_branch));
            }
            out.push(')');
            out
        }

        Expr::Do(expressions) => {
            let body = expressions
                .iter()
                .map(print_source)
                .collect::<Vec<String>>()
                .join(" ");
            format!("(do {})", body)
        }

        Expr::Call {
            function_name,
            arguments,
        } => {
            if arguments.is_empty() {
                // No trailing space for zero-argument calls
                return format!("({})", function_name);
            }
            let args = arguments
                .iter()
                .map(print_source)
                .collect::<Vec<String>>()
                .join(" ");
            format!("({} {})", function_name, args)
        }
    }
}
