mod scanner;
mod token;

pub use scanner::tokenize;
pub use token::{Token, TokenKind};
