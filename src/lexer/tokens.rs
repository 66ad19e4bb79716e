use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::KwInt);
        map.insert("boolean", TokenKind::KwBoolean);
        map.insert("image", TokenKind::KwImage);
        map.insert("url", TokenKind::KwUrl);
        map.insert("file", TokenKind::KwFile);
        map.insert("SCREEN", TokenKind::KwScreen);
        map.insert("true", TokenKind::BoolLit);
        map.insert("false", TokenKind::BoolLit);
        for function in FunctionName::ALL {
            map.insert(function.text(), TokenKind::Function(function));
        }
        for name in PredefinedName::ALL {
            map.insert(name.text(), TokenKind::Predefined(name));
        }
        map
    };
}

/// The built-in image functions. A closed set: these names are their own
/// token kinds and never fall through to the identifier grammar.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum FunctionName {
    Sin,
    Cos,
    Atan,
    Abs,
    CartX,
    CartY,
    PolarA,
    PolarR,
}

impl FunctionName {
    pub const ALL: [FunctionName; 8] = [
        FunctionName::Sin,
        FunctionName::Cos,
        FunctionName::Atan,
        FunctionName::Abs,
        FunctionName::CartX,
        FunctionName::CartY,
        FunctionName::PolarA,
        FunctionName::PolarR,
    ];

    pub fn text(&self) -> &'static str {
        match self {
            FunctionName::Sin => "sin",
            FunctionName::Cos => "cos",
            FunctionName::Atan => "atan",
            FunctionName::Abs => "abs",
            FunctionName::CartX => "cart_x",
            FunctionName::CartY => "cart_y",
            FunctionName::PolarA => "polar_a",
            FunctionName::PolarR => "polar_r",
        }
    }
}

impl Display for FunctionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// The predefined coordinate/dimension names, usable without declaration.
/// Also a closed set with dedicated token kinds.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PredefinedName {
    X,
    Y,
    R,
    A,
    BigX,
    BigY,
    BigZ,
    BigA,
    BigR,
    DefX,
    DefY,
}

impl PredefinedName {
    pub const ALL: [PredefinedName; 11] = [
        PredefinedName::X,
        PredefinedName::Y,
        PredefinedName::R,
        PredefinedName::A,
        PredefinedName::BigX,
        PredefinedName::BigY,
        PredefinedName::BigZ,
        PredefinedName::BigA,
        PredefinedName::BigR,
        PredefinedName::DefX,
        PredefinedName::DefY,
    ];

    pub fn text(&self) -> &'static str {
        match self {
            PredefinedName::X => "x",
            PredefinedName::Y => "y",
            PredefinedName::R => "r",
            PredefinedName::A => "a",
            PredefinedName::BigX => "X",
            PredefinedName::BigY => "Y",
            PredefinedName::BigZ => "Z",
            PredefinedName::BigA => "A",
            PredefinedName::BigR => "R",
            PredefinedName::DefX => "DEF_X",
            PredefinedName::DefY => "DEF_Y",
        }
    }
}

impl Display for PredefinedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    IntLit,
    BoolLit,
    StringLit,
    Identifier,

    // Reserved
    KwInt,
    KwBoolean,
    KwImage,
    KwUrl,
    KwFile,
    KwScreen,
    Function(FunctionName),
    Predefined(PredefinedName),

    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,

    Semicolon,
    Comma,
    Colon,
    Question,
    At,

    RArrow, // ->
    LArrow, // <-

    Assign,    // =
    Equals,    // ==
    Not,       // !
    NotEquals, // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,
    BitOr,
    BitAnd,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Power, // **
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\nvalue: {},\nposition: {}}}",
            self.kind, self.value, self.position
        )
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::StringLit,
            TokenKind::Identifier,
            TokenKind::IntLit,
            TokenKind::BoolLit,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
