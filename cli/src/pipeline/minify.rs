//! # WebRS Output Minification
//!
//! File: cli/src/pipeline/minify.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! Light, line-oriented minifiers applied to compiled CSS and bundled JS in
//! production mode. These are deliberately conservative: strip comments,
//! trim indentation, drop blank lines. They never rewrite identifiers or
//! restructure code — the heavy lifting belongs to the external transform
//! collaborators, not to us. The only guarantee callers rely on is that the
//! output is never larger than the input.
//!

/// Removes `/* ... */` comments, preserving string literal contents.
fn strip_block_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string: Option<char> = None;

    while let Some(ch) = chars.next() {
        if let Some(quote) = in_string {
            out.push(ch);
            if ch == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if ch == quote {
                in_string = None;
            }
            continue;
        }

        match ch {
            '"' | '\'' => {
                in_string = Some(ch);
                out.push(ch);
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next(); // consume '*'
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Minifies CSS: strips comments, then joins trimmed non-empty lines.
pub fn minify_css(input: &str) -> String {
    strip_block_comments(input)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("")
}

/// Minifies JS: strips block comments, drops whole-line `//` comments and
/// blank lines, trims indentation. Lines are kept newline-separated so that
/// statements relying on automatic semicolon insertion stay intact.
pub fn minify_js(input: &str) -> String {
    strip_block_comments(input)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_css_strips_comments_and_whitespace() {
        let input = "/* header */\nbody {\n    color: red;\n}\n\n";
        assert_eq!(minify_css(input), "body {color: red;}");
    }

    #[test]
    fn test_minify_css_never_grows() {
        let input = ".a { margin: 0 auto; /* center */ }\n";
        assert!(minify_css(input).len() <= input.len());
    }

    #[test]
    fn test_minify_js_keeps_statement_boundaries() {
        let input = "// setup\nlet a = 1\n\nlet b = 2 /* two */\n";
        assert_eq!(minify_js(input), "let a = 1\nlet b = 2");
    }

    #[test]
    fn test_comment_markers_inside_strings_survive() {
        let input = "let url = 'http://example.com/*x*/';\n";
        assert_eq!(minify_js(input), "let url = 'http://example.com/*x*/';");
    }
}
