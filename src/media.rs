/// Escapes a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Markup for a muted, looping background video.
///
/// Rendered as raw HTML so the boolean media attributes reach the browser
/// exactly as written; every interpolated value is escaped.
pub fn background_video(src: &str, poster: &str, class: &str) -> String {
    format!(
        r#"<video autoplay muted loop playsinline poster="{}" class="{}"><source src="{}" type="video/mp4" /></video>"#,
        escape_attr(poster),
        escape_attr(class),
        escape_attr(src),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths_pass_through() {
        assert_eq!(escape_attr("/videos/hero-video.mp4"), "/videos/hero-video.mp4");
    }

    #[test]
    fn test_quotes_cannot_close_the_attribute() {
        let markup = background_video(r#"/a".mp4"#, "/p&q.svg", "w-full");
        assert!(markup.contains(r#"src="/a&quot;.mp4""#));
        assert!(markup.contains(r#"poster="/p&amp;q.svg""#));
        assert!(!markup.contains(r#"/a".mp4"#));
    }

    #[test]
    fn test_video_is_muted_and_looping() {
        let markup = background_video("/v.mp4", "/p.svg", "object-cover");
        assert!(markup.starts_with("<video autoplay muted loop playsinline "));
        assert!(markup.contains(r#"<source src="/v.mp4" type="video/mp4" />"#));
        assert!(markup.ends_with("</video>"));
    }
}
