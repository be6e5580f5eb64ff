use std::sync::OnceLock;

use regex::Regex;

use crate::references::ReferenceRegistry;

use super::{
    kinds::LinkSyntax,
    types::{Link, LinkError},
};

/// Matches the three link forms anchored at the start of the line.
///
/// `href` is greedy, so it runs to the last `)` on the line.
fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| {
        Regex::new(r"^(?P<image>!?)\[(?P<text>.*?)\](?:\((?P<href>.+)\)|\[(?P<reference>.*?)\])")
            .expect("Invalid link regex")
    })
}

/// Parses one entry line into a [`Link`].
///
/// # Precedence
/// Image-style inline links are tried first, then text-style inline links,
/// then reference-style links resolved through `references`.
///
/// # Errors
/// [`LinkError::NoMatch`] when the line fits none of the syntaxes and
/// [`LinkError::UnresolvedReference`] when a reference name is empty or unknown.
pub fn parse_link(line: &str, references: &dyn ReferenceRegistry) -> Result<Link, LinkError> {
    let caps = link_regex()
        .captures(line)
        .ok_or_else(|| LinkError::NoMatch(line.to_string()))?;

    let text = caps["text"].to_string();
    let is_image = !caps["image"].is_empty();

    if let Some(body) = caps.name("href") {
        let (href, title) = if is_image {
            split_image_body(body.as_str())
        } else {
            split_text_body(body.as_str())
        };
        return Ok(Link {
            text,
            href: LinkSyntax::unwrap_angle(href).to_string(),
            title: title.map(str::to_string),
        });
    }

    let name = caps.name("reference").map_or("", |m| m.as_str());
    let reference = references
        .resolve(name)
        .ok_or_else(|| LinkError::UnresolvedReference(name.to_string()))?;

    Ok(Link {
        text,
        href: reference.href.clone(),
        title: reference.title.clone(),
    })
}

/// Splits an image body on its first whitespace run.
///
/// Everything after the run is the title, verbatim.
fn split_image_body(body: &str) -> (&str, Option<&str>) {
    let body = body.trim_start();
    let Some(at) = body.find(char::is_whitespace) else {
        return (body, None);
    };
    let rest = body[at..].trim_start();
    if rest.is_empty() {
        (&body[..at], None)
    } else {
        (&body[..at], Some(rest))
    }
}

/// Splits a text-link body into destination and quoted title.
///
/// Without a trailing quoted title the whole body is the destination, so an
/// unquoted last word stays part of the href.
fn split_text_body(body: &str) -> (&str, Option<&str>) {
    let trimmed = body.trim();
    if !trimmed.contains(char::is_whitespace) {
        return (trimmed, None);
    }
    match LinkSyntax::split_title(trimmed) {
        Some((dest, title)) => (dest, Some(title)),
        None => (body, None),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;
    use crate::references::{LinkReference, ReferenceMap};

    fn no_refs() -> ReferenceMap {
        ReferenceMap::new()
    }

    fn parse(line: &str) -> Result<Link, LinkError> {
        parse_link(line, &no_refs())
    }

    #[test]
    fn text_link_with_quoted_title() {
        let link = parse(r#"[download.mp4](http://x/a.mp4 "My Title")"#).unwrap();
        assert_eq!(link.text, "download.mp4");
        assert_eq!(link.href, "http://x/a.mp4");
        assert_eq!(link.title.as_deref(), Some("My Title"));
    }

    #[rstest]
    #[case(r#"[subtitle.zh.vtt](http://s/zh.vtt "Simplified Chinese")"#, "Simplified Chinese")]
    #[case("[subtitle.zh.vtt](http://s/zh.vtt 'Simplified Chinese')", "Simplified Chinese")]
    #[case(r#"[subtitle.zh.vtt](http://s/zh.vtt "Simplified Chinese"   )"#, "Simplified Chinese")]
    #[case(r#"[subtitle.zh.vtt](  http://s/zh.vtt   "Chinese (Hong Kong)" )"#, "Chinese (Hong Kong)")]
    fn text_link_with_multi_word_title(#[case] line: &str, #[case] title: &str) {
        let link = parse(line).unwrap();
        assert_eq!(link.href, "http://s/zh.vtt");
        assert_eq!(link.title.as_deref(), Some(title));
    }

    #[test]
    fn text_link_with_single_quoted_title() {
        let link = parse("[subtitle.zh.vtt](http://s/zh.vtt 'Chinese')").unwrap();
        assert_eq!(link.href, "http://s/zh.vtt");
        assert_eq!(link.title.as_deref(), Some("Chinese"));
    }

    #[test]
    fn unquoted_trailing_token_stays_in_href() {
        let link = parse("[download.mp4](http://x/a.mp4 notquoted)").unwrap();
        assert_eq!(link.href, "http://x/a.mp4 notquoted");
        assert_eq!(link.title, None);
    }

    #[test]
    fn only_last_token_is_title_candidate() {
        let link = parse(r#"[download.mp4](http://x/fil e.mp4 "English")"#).unwrap();
        assert_eq!(link.href, "http://x/fil e.mp4");
        assert_eq!(link.title.as_deref(), Some("English"));
    }

    #[test]
    fn text_link_without_title() {
        let link = parse("[download.webm](http://x/a.webm)").unwrap();
        assert_eq!(link.href, "http://x/a.webm");
        assert_eq!(link.title, None);
    }

    #[rstest]
    #[case("[download.mp4](<http://x/a.mp4>)", "http://x/a.mp4")]
    #[case(r#"[download.mp4](<http://x/a.mp4> "T")"#, "http://x/a.mp4")]
    #[case("![poster](<http://p/x.png>)", "http://p/x.png")]
    fn angle_brackets_are_unwrapped(#[case] line: &str, #[case] href: &str) {
        assert_eq!(parse(line).unwrap().href, href);
    }

    #[test]
    fn image_link_title_is_verbatim_remainder() {
        let link = parse(r#"![poster](http://p/x.png "Poster" frame)"#).unwrap();
        assert_eq!(link.text, "poster");
        assert_eq!(link.href, "http://p/x.png");
        assert_eq!(link.title.as_deref(), Some(r#""Poster" frame"#));
    }

    #[test]
    fn image_link_without_title() {
        let link = parse("![poster](http://p/x.png)").unwrap();
        assert_eq!(link.href, "http://p/x.png");
        assert_eq!(link.title, None);
    }

    #[test]
    fn image_link_splits_on_first_whitespace() {
        let link = parse("![poster](http://p/my poster.png)").unwrap();
        assert_eq!(link.href, "http://p/my");
        assert_eq!(link.title.as_deref(), Some("poster.png"));
    }

    #[test]
    fn href_runs_to_last_closing_paren() {
        let link = parse("[download.mp4](http://x/a_(1).mp4)").unwrap();
        assert_eq!(link.href, "http://x/a_(1).mp4");
    }

    #[test]
    fn reference_link_resolves_through_registry() {
        let mut refs = ReferenceMap::new();
        refs.insert(
            "ref",
            LinkReference {
                href: "http://s/en.vtt".to_string(),
                title: Some("English".to_string()),
            },
        );

        let link = parse_link("[subtitle.en.vtt][ref]", &refs).unwrap();
        assert_eq!(link.text, "subtitle.en.vtt");
        assert_eq!(link.href, "http://s/en.vtt");
        assert_eq!(link.title.as_deref(), Some("English"));
    }

    #[test]
    fn reference_link_keeps_multi_word_title() {
        let refs = ReferenceMap::from_markdown("[zh]: http://s/zh.vtt \"Simplified Chinese\"\n");

        let link = parse_link("[subtitle.zh.vtt][zh]", &refs).unwrap();
        assert_eq!(link.href, "http://s/zh.vtt");
        assert_eq!(link.title.as_deref(), Some("Simplified Chinese"));
    }

    #[test]
    fn reference_link_from_plain_map() {
        let mut refs = HashMap::new();
        refs.insert(
            "movie".to_string(),
            LinkReference {
                href: "http://v/a.mp4".to_string(),
                title: None,
            },
        );

        let link = parse_link("[download.mp4][movie]", &refs).unwrap();
        assert_eq!(link.href, "http://v/a.mp4");
        assert_eq!(link.title, None);
    }

    #[rstest]
    #[case("[subtitle.en.vtt][missing]", "missing")]
    #[case("[subtitle.en.vtt][]", "")]
    fn unresolved_references_fail(#[case] line: &str, #[case] name: &str) {
        assert_eq!(
            parse(line),
            Err(LinkError::UnresolvedReference(name.to_string()))
        );
    }

    #[rstest]
    #[case("just some text")]
    #[case("[download.mp4]")]
    #[case("[download.mp4]()")]
    #[case("  [download.mp4](http://x/a.mp4)")]
    #[case("")]
    fn non_links_do_not_match(#[case] line: &str) {
        assert!(matches!(parse(line), Err(LinkError::NoMatch(_))));
    }
}
