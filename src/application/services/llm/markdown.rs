//! Cleanup of rewritten Markdown
//!
//! Models are told not to wrap their answer in code fences, but they often do
//! anyway. These helpers recover the document from such a wrapper.

const FENCE: &str = "```";

/// Strip a code fence wrapped around the whole response
///
/// A block tagged `md`/`markdown` (any case) or untagged yields its inner
/// content. A response that opens with a fence but has no tidy close loses
/// its opening fence line and a trailing fence, if any. Anything else is
/// returned trimmed.
pub fn unwrap_markdown(raw: &str) -> String {
    let text = raw.trim();

    if let Some(inner) = fenced_block(text, |tag| {
        tag.eq_ignore_ascii_case("md") || tag.eq_ignore_ascii_case("markdown")
    }) {
        return inner.trim().to_string();
    }

    if let Some(inner) = fenced_block(text, str::is_empty) {
        return inner.trim().to_string();
    }

    if let Some(rest) = text.strip_prefix(FENCE) {
        let body = match rest.find('\n') {
            Some(newline) => &rest[newline + 1..],
            None => "",
        };
        let body = body.strip_suffix(FENCE).unwrap_or(body);
        return body.trim().to_string();
    }

    text.to_string()
}

/// Inner content of a block that opens with a fence line whose tag satisfies
/// `tag_matches` and closes with a fence on its own final line
fn fenced_block(text: &str, tag_matches: impl Fn(&str) -> bool) -> Option<&str> {
    let rest = text.strip_prefix(FENCE)?;

    let tag_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    if !tag_matches(&rest[..tag_end]) {
        return None;
    }

    let after_tag = &rest[tag_end..];
    let leading = &after_tag[..after_tag.len() - after_tag.trim_start().len()];
    let body = &after_tag[leading.rfind('\n')? + 1..];

    body.strip_suffix(FENCE)?.strip_suffix('\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md_fence_is_removed() {
        let raw = "```md\n# Title\n\nBody text\n```";
        assert_eq!(unwrap_markdown(raw), "# Title\n\nBody text");
    }

    #[test]
    fn test_markdown_tag_any_case() {
        let raw = "  ```Markdown  \n## Opening Brief\nText\n```\n";
        assert_eq!(unwrap_markdown(raw), "## Opening Brief\nText");
    }

    #[test]
    fn test_untagged_fence_is_removed() {
        assert_eq!(unwrap_markdown("```\n# Doc\n```"), "# Doc");
    }

    #[test]
    fn test_unclosed_fence_drops_opening_line() {
        assert_eq!(unwrap_markdown("```json\n# Doc\nmore"), "# Doc\nmore");
        assert_eq!(unwrap_markdown("```html\n# Doc\n```"), "# Doc");
    }

    #[test]
    fn test_plain_text_is_trimmed_only() {
        assert_eq!(unwrap_markdown("\n# Doc\n```inline```\n"), "# Doc\n```inline```");
    }

    #[test]
    fn test_inner_fences_survive() {
        let raw = "```md\n# Doc\n```\ncode\n```\nTail\n```";
        assert_eq!(unwrap_markdown(raw), "# Doc\n```\ncode\n```\nTail");
    }
}
