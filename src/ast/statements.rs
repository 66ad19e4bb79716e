use crate::lexer::tokens::Token;

use super::expressions::Expr;

/// A declaration of a variable, an image, or a url/file source-sink.
#[derive(Debug, Clone)]
pub enum Declaration {
    Variable(VariableDecl),
    Image(ImageDecl),
    SourceSink(SourceSinkDecl),
}

impl Declaration {
    pub fn first_token(&self) -> &Token {
        match self {
            Declaration::Variable(declaration) => &declaration.type_token,
            Declaration::Image(declaration) => &declaration.token,
            Declaration::SourceSink(declaration) => &declaration.type_token,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Declaration::Variable(declaration) => &declaration.name,
            Declaration::Image(declaration) => &declaration.name,
            Declaration::SourceSink(declaration) => &declaration.name,
        }
    }
}

/// `int name` / `boolean name`, with an optional initializer.
#[derive(Debug, Clone)]
pub struct VariableDecl {
    pub type_token: Token,
    pub name: String,
    pub initializer: Option<Expr>,
}

/// `image [xSize,ySize] name <- source`; the size pair and the source
/// are both optional.
#[derive(Debug, Clone)]
pub struct ImageDecl {
    pub token: Token,
    pub size: Option<(Expr, Expr)>,
    pub name: String,
    pub source: Option<Source>,
}

/// `url name = source` / `file name = source`.
#[derive(Debug, Clone)]
pub struct SourceSinkDecl {
    pub type_token: Token,
    pub name: String,
    pub source: Source,
}

/// Where image or value data comes from.
#[derive(Debug, Clone)]
pub enum Source {
    StringLiteral(StringLiteralSource),
    CommandLineParam(CommandLineParamSource),
    Ident(IdentSource),
}

impl Source {
    pub fn first_token(&self) -> &Token {
        match self {
            Source::StringLiteral(source) => &source.token,
            Source::CommandLineParam(source) => &source.token,
            Source::Ident(source) => &source.token,
        }
    }
}

/// A file path or URL, distinguished only during type checking.
#[derive(Debug, Clone)]
pub struct StringLiteralSource {
    pub value: String,
    pub token: Token,
}

/// `@ expr`: the expr-th command-line parameter.
#[derive(Debug, Clone)]
pub struct CommandLineParamSource {
    pub param_num: Box<Expr>,
    pub token: Token,
}

#[derive(Debug, Clone)]
pub struct IdentSource {
    pub name: String,
    pub token: Token,
}

/// Where image or value data goes.
#[derive(Debug, Clone)]
pub enum Sink {
    Ident(IdentSink),
    Screen(ScreenSink),
}

impl Sink {
    pub fn first_token(&self) -> &Token {
        match self {
            Sink::Ident(sink) => &sink.token,
            Sink::Screen(sink) => &sink.token,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IdentSink {
    pub name: String,
    pub token: Token,
}

#[derive(Debug, Clone)]
pub struct ScreenSink {
    pub token: Token,
}

/// A two-expression coordinate pair. Whether it addresses pixels in
/// Cartesian or polar form is decided by the type checker, never here.
#[derive(Debug, Clone)]
pub struct Index {
    pub e0: Expr,
    pub e1: Expr,
}

impl Index {
    pub fn first_token(&self) -> &Token {
        self.e0.first_token()
    }
}

/// The target of an assignment: a declared name with an optional
/// `[[x,y]]` / `[[r,a]]` selector.
#[derive(Debug, Clone)]
pub struct Lhs {
    pub name: String,
    pub token: Token,
    pub index: Option<Index>,
}

/// A top-level statement.
#[derive(Debug, Clone)]
pub enum Statement {
    Assign(AssignStmt),
    In(InStmt),
    Out(OutStmt),
}

impl Statement {
    pub fn first_token(&self) -> &Token {
        match self {
            Statement::Assign(statement) => &statement.lhs.token,
            Statement::In(statement) => &statement.token,
            Statement::Out(statement) => &statement.token,
        }
    }
}

/// `lhs = expr;`
#[derive(Debug, Clone)]
pub struct AssignStmt {
    pub lhs: Lhs,
    pub expr: Expr,
}

/// `name <- source;` reads image or value data into a declared name.
#[derive(Debug, Clone)]
pub struct InStmt {
    pub name: String,
    pub token: Token,
    pub source: Source,
}

/// `name -> sink;` writes a declared name to a sink.
#[derive(Debug, Clone)]
pub struct OutStmt {
    pub name: String,
    pub token: Token,
    pub sink: Sink,
}
