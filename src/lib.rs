//! Lexical scanner for the Lox scripting language.
//!
//! [`scan`] turns a complete source buffer into tokens, handing any lexical
//! problems to a caller-supplied [`Reporter`].

pub mod common;
pub mod error;
pub mod scanner;

pub use error::{ConsoleReporter, Diagnostic, ErrorLog, Reporter, ScanError};
pub use scanner::token::{Literal, Token, TokenKind};
pub use scanner::{scan, Scanner};
