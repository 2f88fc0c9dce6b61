//! Chat line parsing and outgoing message splitting.

/// A classified inbound chat line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatLine {
    /// `<username> content`.
    Player { username: String, content: String },
    /// Anything else, verbatim.
    System(String),
}

/// Classifies a raw chat line.
///
/// A line starting with `<` and containing a later `>` is a player line: the
/// username is the text between the brackets and the content is the rest,
/// minus one separating space. Everything else, including a `<` with no
/// closing `>`, is a system line.
pub fn parse_chat_line(line: &str) -> ChatLine {
    if let Some(rest) = line.strip_prefix('<')
        && let Some(end) = rest.find('>')
    {
        let after = &rest[end + 1..];
        return ChatLine::Player {
            username: rest[..end].to_owned(),
            content: after.strip_prefix(' ').unwrap_or(after).to_owned(),
        };
    }
    ChatLine::System(line.to_owned())
}

/// Splits `message` into consecutive pieces of at most `limit` characters.
///
/// Counts `char`s, so a multi-byte code point is never cut. An empty message
/// yields no pieces. A `limit` of zero is treated as one.
pub fn split_chat(message: &str, limit: usize) -> Vec<&str> {
    let limit = limit.max(1);
    let mut pieces = Vec::new();
    let mut rest = message;
    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(limit)
            .map_or(rest.len(), |(index, _)| index);
        let (piece, tail) = rest.split_at(cut);
        pieces.push(piece);
        rest = tail;
    }
    pieces
}
