use crate::ast::ast::Expr;

/// Renders an AST as an indented tree, one labeled line per node.
///
/// Two spaces of indentation per depth level. The depth counter is
/// incremented before descending into a child and restored on return, so
/// sibling nodes always render at the same level.
pub struct TreePrinter {
    depth: usize,
}

impl TreePrinter {
    pub fn new() -> TreePrinter {
        TreePrinter { depth: 0 }
    }

    pub fn print(&mut self, expr: &Expr) -> String {
        self.depth = 0;
        self.node(expr)
    }

    fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }

    fn child(&mut self, expr: &Expr) -> String {
        self.depth += 1;
        let result = self.node(expr);
        self.depth -= 1;
        result
    }

    fn node(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Program(expressions) => {
                let mut out = format!("{}Program\n", self.indent());
                for e in expressions {
                    out.push_str(&self.child(e));
                }
                out
            }

            Expr::IntLiteral(value) => format!("{}Int: {}\n", self.indent(), value),
            Expr::StringLiteral(value) => format!("{}String: \"{}\"\n", self.indent(), value),
            Expr::BoolLiteral(value) => format!("{}Bool: {}\n", self.indent(), value),
            Expr::Variable(name) => format!("{}Var: {}\n", self.indent(), name),

            Expr::Def { name, value } => {
                let mut out = format!("{}Def ({})\n", self.indent(), name);
                out.push_str(&self.child(value));
                out
            }

            Expr::Defn { name, params, body } => {
                let mut out = format!("{}Function ({})\n", self.indent(), name);

                self.depth += 1;
                out.push_str(&format!("{}Params: [{}]\n", self.indent(), params.join(", ")));
                self.depth -= 1;

                out.push_str(&self.child(body));
                out
            }

            Expr::Let { bindings, body } => {
                let mut out = format!("{}Let Scope\n", self.indent());

                self.depth += 1;
                for binding in bindings {
                    out.push_str(&format!("{}Binding: {}\n", self.indent(), binding.name));
                    out.push_str(&self.child(&binding.value));
                }
                self.depth -= 1;

                out.push_str(&format!("{}Body:\n", self.indent()));
                out.push_str(&self.child(body));
                out
            }

            Expr::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let mut out = format!("{}If\n", self.indent());

                out.push_str(&format!("{}  Condition:\n", self.indent()));
                out.push_str(&self.child(condition));

                out.push_str(&format!("{}  Then:\n", self.indent()));
                out.push_str(&self.child(then_branch));

                // No Else label when the branch is absent
                if let Some(else_branch) = else_branch {
                    out.push_str(&format!("{}  Else:\n", self.indent()));
                    out.push_str(&self.child(else_branch));
                }
                out
            }

            Expr::Do(expressions) => {
                let mut out = format!("{}Do Block\n", self.indent());
                for e in expressions {
                    out.push_str(&self.child(e));
                }
                out
            }

            Expr::Call {
                function_name,
                arguments,
            } => {
                let mut out = format!("{}Call: {}\n", self.indent(), function_name);
                for arg in arguments {
                    out.push_str(&self.child(arg));
                }
                out
            }
        }
    }
}

impl Default for TreePrinter {
    fn default() -> Self {
        TreePrinter::new()
    }
}
