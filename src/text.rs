//! Emphasis rules for free-text content.
//!
//! Descriptions are split on the full-width comma and segments mentioning a
//! highlight keyword are emphasised. Achievement detail lines use a
//! "term：elaboration" convention where the term is emphasised.

pub const FULL_WIDTH_COMMA: char = '，';
pub const FULL_WIDTH_COLON: char = '：';

pub const HIGHLIGHT_KEYWORDS: [&str; 3] = ["0-1", "AI", "品效合一"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub emphasized: bool,
    /// Whether the delimiter that preceded this segment should be re-rendered.
    pub after_delimiter: bool,
}

/// Splits `description` on the full-width comma, emphasising every segment
/// that contains one of `keywords`.
pub fn highlight_segments<'a>(description: &'a str, keywords: &[&str]) -> Vec<Segment<'a>> {
    description
        .split(FULL_WIDTH_COMMA)
        .enumerate()
        .map(|(i, text)| Segment {
            text,
            emphasized: keywords.iter().any(|k| text.contains(k)),
            after_delimiter: i > 0,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailLine<'a> {
    /// `term` is emphasised; `rest` follows the first colon verbatim.
    Term { term: &'a str, rest: &'a str },
    Plain(&'a str),
}

pub fn detail_line(line: &str) -> DetailLine<'_> {
    match line.split_once(FULL_WIDTH_COLON) {
        Some((term, rest)) => DetailLine::Term { term, rest },
        None => DetailLine::Plain(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_highlights_keyword_segment() {
        let segments = highlight_segments("A，B0-1，C", &HIGHLIGHT_KEYWORDS);
        assert_eq!(segments.len(), 3);
        let emphasized = segments
            .iter()
            .filter(|s| s.emphasized)
            .map(|s| s.text)
            .collect::<Vec<_>>();
        assert_eq!(emphasized, vec!["B0-1"]);
        assert!(!segments[0].after_delimiter);
        assert!(segments[1].after_delimiter);
    }

    #[test]
    fn test_description_without_comma_is_one_segment() {
        let segments = highlight_segments("plain text", &HIGHLIGHT_KEYWORDS);
        assert_eq!(
            segments,
            vec![Segment {
                text: "plain text",
                emphasized: false,
                after_delimiter: false,
            }]
        );
    }

    #[test]
    fn test_every_keyword_emphasises() {
        let segments = highlight_segments("结合AI，品效合一，其他", &HIGHLIGHT_KEYWORDS);
        let flags = segments.iter().map(|s| s.emphasized).collect::<Vec<_>>();
        assert_eq!(flags, vec![true, true, false]);
    }

    #[test]
    fn test_segments_rejoin_to_input() {
        let text = "深耕新媒体，主导0-1搭建，，结尾";
        let rebuilt = highlight_segments(text, &HIGHLIGHT_KEYWORDS)
            .iter()
            .map(|s| {
                if s.after_delimiter {
                    format!("{FULL_WIDTH_COMMA}{}", s.text)
                } else {
                    s.text.to_string()
                }
            })
            .collect::<String>();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_detail_line_emphasises_term() {
        assert_eq!(
            detail_line("目标：达成"),
            DetailLine::Term {
                term: "目标",
                rest: "达成"
            }
        );
    }

    #[test]
    fn test_detail_line_splits_on_first_colon_only() {
        assert_eq!(
            detail_line("商务助理阶段：商务管理：预算"),
            DetailLine::Term {
                term: "商务助理阶段",
                rest: "商务管理：预算"
            }
        );
    }

    #[test]
    fn test_detail_line_without_colon_is_plain() {
        assert_eq!(detail_line("没有冒号"), DetailLine::Plain("没有冒号"));
        // ASCII colon is not the delimiter
        assert_eq!(detail_line("a: b"), DetailLine::Plain("a: b"));
    }
}
