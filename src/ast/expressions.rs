use crate::lexer::tokens::{FunctionName, PredefinedName, Token};

use super::statements::Index;

/// An expression node. One variant per expression form of the grammar,
/// matched exhaustively by the type checker.
#[derive(Debug, Clone)]
pub enum Expr {
    IntLit(IntLitExpr),
    BoolLit(BoolLitExpr),
    Ident(IdentExpr),
    PredefinedName(PredefinedNameExpr),
    PixelSelector(PixelSelectorExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Conditional(ConditionalExpr),
    FunctionAppExpr(FunctionAppExprArg),
    FunctionAppIndex(FunctionAppIndexArg),
}

impl Expr {
    /// The token the expression started at, for diagnostics.
    pub fn first_token(&self) -> &Token {
        match self {
            Expr::IntLit(expr) => &expr.token,
            Expr::BoolLit(expr) => &expr.token,
            Expr::Ident(expr) => &expr.token,
            Expr::PredefinedName(expr) => &expr.token,
            Expr::PixelSelector(expr) => &expr.token,
            Expr::Unary(expr) => &expr.operator,
            Expr::Binary(expr) => expr.left.first_token(),
            Expr::Conditional(expr) => expr.condition.first_token(),
            Expr::FunctionAppExpr(expr) => &expr.token,
            Expr::FunctionAppIndex(expr) => &expr.token,
        }
    }
}

/// An integer literal. The value is parsed out of the token text by the
/// parser, which rejects literals that overflow `i32`.
#[derive(Debug, Clone)]
pub struct IntLitExpr {
    pub value: i32,
    pub token: Token,
}

#[derive(Debug, Clone)]
pub struct BoolLitExpr {
    pub value: bool,
    pub token: Token,
}

#[derive(Debug, Clone)]
pub struct IdentExpr {
    pub name: String,
    pub token: Token,
}

/// One of the predefined coordinate names (`x`, `y`, `r`, `a`, ...),
/// usable without declaration and always integer-typed.
#[derive(Debug, Clone)]
pub struct PredefinedNameExpr {
    pub name: PredefinedName,
    pub token: Token,
}

/// `name[e0,e1]`: one pixel of an image. The index is optional so a
/// bare reference built without a selector can share the node; the
/// parser itself always supplies one.
#[derive(Debug, Clone)]
pub struct PixelSelectorExpr {
    pub name: String,
    pub index: Option<Box<Index>>,
    pub token: Token,
}

#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub operator: Token,
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// `condition ? true_expr : false_expr`, right-associative.
#[derive(Debug, Clone)]
pub struct ConditionalExpr {
    pub condition: Box<Expr>,
    pub true_expr: Box<Expr>,
    pub false_expr: Box<Expr>,
}

/// `fn ( expr )`: application of a built-in function to an expression.
#[derive(Debug, Clone)]
pub struct FunctionAppExprArg {
    pub function: FunctionName,
    pub arg: Box<Expr>,
    pub token: Token,
}

/// `fn [ e0 , e1 ]`: application of a built-in function to a selector.
#[derive(Debug, Clone)]
pub struct FunctionAppIndexArg {
    pub function: FunctionName,
    pub index: Box<Index>,
    pub token: Token,
}
