/// Delimiters and quoting rules for the link syntaxes accepted on entry lines.
pub struct LinkSyntax;

impl LinkSyntax {
    pub const ANGLE_OPEN: char = '<';
    pub const ANGLE_CLOSE: char = '>';
    /// Characters accepted as title quotes in text-style links.
    pub const QUOTES: [char; 2] = ['\'', '"'];

    /// Splits `dest "title"` into destination and unquoted title.
    ///
    /// The body must end with a quote character, and the opening quote of the
    /// same kind must follow a whitespace run. The title may itself contain
    /// whitespace.
    pub fn split_title(body: &str) -> Option<(&str, &str)> {
        let quote = body.chars().next_back().filter(|c| Self::QUOTES.contains(c))?;
        let inner_end = body.len() - quote.len_utf8();
        let open = body[..inner_end].rmatch_indices(quote).find_map(|(at, _)| {
            body[..at]
                .chars()
                .next_back()
                .filter(|c| c.is_whitespace())
                .map(|_| at)
        })?;

        let dest = body[..open].trim_end();
        let title = &body[open + quote.len_utf8()..inner_end];
        Some((dest, title))
    }

    /// Removes a surrounding `<...>` from a destination.
    pub fn unwrap_angle(href: &str) -> &str {
        href.strip_prefix(Self::ANGLE_OPEN)
            .and_then(|inner| inner.strip_suffix(Self::ANGLE_CLOSE))
            .unwrap_or(href)
    }
}
