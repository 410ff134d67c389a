/// Name/value pair inside a `let` binding list.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub value: Expr,
}

/// The closed set of AST node variants produced by the parser.
///
/// Every non-leaf node exclusively owns its children; construction is
/// strictly bottom-up during parsing, so no sharing and no cycles. The
/// else branch of `If` is the only optional field in the whole tree.
/// `Program` and `Do` bodies preserve source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Program(Vec<Expr>),
    IntLiteral(i64),
    StringLiteral(String),
    BoolLiteral(bool),
    Variable(String),
    Def {
        name: String,
        value: Box<Expr>,
    },
    Defn {
        name: String,
        params: Vec<String>,
        body: Box<Expr>,
    },
    Let {
        bindings: Vec<Binding>,
        body: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Option<Box<Expr>>,
    },
    Do(Vec<Expr>),
    Call {
        function_name: String,
        arguments: Vec<Expr>,
    },
}
