use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::sync::LazyLock;

use ahash::AHasher;

use super::token::TokenKind;

type KeywordTable = HashMap<&'static str, TokenKind, BuildHasherDefault<AHasher>>;

static KEYWORDS: LazyLock<KeywordTable> = LazyLock::new(|| {
    let mut keywords = KeywordTable::with_capacity_and_hasher(16, Default::default());
    keywords.insert("and", TokenKind::And);
    keywords.insert("class", TokenKind::Class);
    keywords.insert("else", TokenKind::Else);
    keywords.insert("false", TokenKind::False);
    keywords.insert("for", TokenKind::For);
    keywords.insert("fun", TokenKind::Fun);
    keywords.insert("if", TokenKind::If);
    keywords.insert("nil", TokenKind::Nil);
    keywords.insert("or", TokenKind::Or);
    keywords.insert("print", TokenKind::Print);
    keywords.insert("return", TokenKind::Return);
    keywords.insert("super", TokenKind::Super);
    keywords.insert("this", TokenKind::This);
    keywords.insert("true", TokenKind::True);
    keywords.insert("var", TokenKind::Var);
    keywords.insert("while", TokenKind::While);
    keywords
});

pub fn lookup(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}
