mod lexer_config;
mod lua_language_level;
mod lua_syntax_kind;
mod lua_token_data;
mod lua_token_kind;
mod lua_tokenize;
mod parser_config;
mod reader;
mod text_range;
mod token_set;

pub use crate::syntax::{
    lexer_config::LexerConfig, lua_language_level::LuaLanguageLevel,
    lua_syntax_kind::LuaSyntaxKind, lua_token_data::LuaTokenData, lua_token_kind::LuaTokenKind,
    lua_tokenize::LuaTokenize, parser_config::ParserConfig, reader::Reader,
    text_range::SourceRange, token_set::TokenSet,
};

/// Tokenize `text`, trivia included.
pub fn tokenize(text: &str, config: LexerConfig) -> Vec<LuaTokenData> {
    LuaTokenize::new(Reader::new(text), config).tokenize()
}
