/// A byte offset into the analyzed source string.
///
/// The lexer and parser both address source text in bytes, not chars or
/// lines: every diagnostic and every [`ast::Node`](../ast/index.html)
/// (via its originating token) carries one of these.
pub type Position = usize;
