//! Basic rich-text markup accepted in toast messages.
//!
//! Only a small HTML-like subset is understood: `<b>`/`<strong>`,
//! `<i>`/`<em>`, `<br>`, `<font color="#rrggbb">` and the common entities.
//! Anything else is reduced to its text.

use iced::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<Color>,
}

#[derive(Default)]
struct Parser {
    segments: Vec<Segment>,
    buffer: String,
    bold: u32,
    italic: u32,
    // `None` entries keep pushes and pops of invalid colors balanced
    colors: Vec<Option<Color>>,
}

impl Parser {
    fn color(&self) -> Option<Color> {
        self.colors.iter().rev().find_map(|c| *c)
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let text = std::mem::take(&mut self.buffer);
        let (bold, italic, color) = (self.bold > 0, self.italic > 0, self.color());

        match self.segments.last_mut() {
            Some(last) if last.bold == bold && last.italic == italic && last.color == color => {
                last.text.push_str(&text);
            }
            _ => self.segments.push(Segment {
                text,
                bold,
                italic,
                color,
            }),
        }
    }

    fn tag(&mut self, inner: &str) {
        let closing = inner.starts_with('/');
        let body = inner.trim_start_matches('/').trim_end_matches('/').trim();
        let name = body
            .split(|c: char| c.is_whitespace())
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match (name.as_str(), closing) {
            ("br", _) => self.buffer.push('\n'),
            ("b" | "strong", false) => {
                self.flush();
                self.bold += 1;
            }
            ("b" | "strong", true) => {
                self.flush();
                self.bold = self.bold.saturating_sub(1);
            }
            ("i" | "em", false) => {
                self.flush();
                self.italic += 1;
            }
            ("i" | "em", true) => {
                self.flush();
                self.italic = self.italic.saturating_sub(1);
            }
            ("font", false) => {
                self.flush();
                let color = attribute(body, "color").and_then(parse_color);
                self.colors.push(color);
            }
            ("font", true) => {
                self.flush();
                self.colors.pop();
            }
            _ => {}
        }
    }
}

/// Splits `message` into styled segments. Adjacent runs with the same style
/// are merged; line breaks stay inside the text as `\n`.
pub fn parse(message: &str) -> Vec<Segment> {
    let mut parser = Parser::default();
    let mut rest = message;

    while let Some(pos) = rest.find(|c: char| matches!(c, '<' | '&')) {
        parser.buffer.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if rest.starts_with('<') {
            match tag_end(rest) {
                Some(end) => {
                    parser.tag(&rest[1..end]);
                    rest = &rest[end + 1..];
                }
                None => {
                    parser.buffer.push('<');
                    rest = &rest[1..];
                }
            }
        } else {
            match entity(rest) {
                Some((decoded, len)) => {
                    parser.buffer.push(decoded);
                    rest = &rest[len..];
                }
                None => {
                    parser.buffer.push('&');
                    rest = &rest[1..];
                }
            }
        }
    }

    parser.buffer.push_str(rest);
    parser.flush();
    parser.segments
}

/// Visible text of parsed segments.
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

// Index of the `>` closing a tag that starts at `rest[0]`, if `rest` opens one.
fn tag_end(rest: &str) -> Option<usize> {
    let after = rest[1..].trim_start_matches('/');
    if !after.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    rest.find('>')
}

fn entity(rest: &str) -> Option<(char, usize)> {
    let end = rest.char_indices().take(10).find(|(_, c)| *c == ';')?.0;
    let name = &rest[1..end];

    let decoded = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" | "#39" => '\'',
        "nbsp" => '\u{a0}',
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or(name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                name.strip_prefix('#')?.parse().ok()?
            };
            char::from_u32(code)?
        }
    };

    Some((decoded, end + 1))
}

fn attribute<'a>(body: &'a str, name: &str) -> Option<&'a str> {
    let lower = body.to_ascii_lowercase();
    // only a whole attribute name followed by `=` counts, not `bgcolor` or a value
    let value = lower.match_indices(name).find_map(|(start, _)| {
        let boundary = body[..start].ends_with(char::is_whitespace);
        let rest = body[start + name.len()..].trim_start();
        boundary.then(|| rest.strip_prefix('=')).flatten()
    })?;
    let value = value.trim_start();

    let value = value.trim_start_matches(|c: char| matches!(c, '"' | '\''));
    let end = value
        .find(|c: char| matches!(c, '"' | '\'') || c.is_whitespace())
        .unwrap_or(value.len());
    Some(&value[..end])
}

fn parse_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::from_rgb8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let double = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(Color::from_rgb8(double(0)?, double(1)?, double(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Segment {
        Segment {
            text: text.to_string(),
            bold: false,
            italic: false,
            color: None,
        }
    }

    #[test]
    fn plain_message_is_one_segment() {
        assert_eq!(parse("Beeftext is enabled"), vec![plain("Beeftext is enabled")]);
    }

    #[test]
    fn empty_message_has_no_segments() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn bold_and_italic_runs() {
        let segments = parse("Snippet <b>sig</b> <i>expanded</i>");

        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], plain("Snippet "));
        assert!(segments[1].bold && !segments[1].italic);
        assert_eq!(segments[1].text, "sig");
        assert_eq!(segments[2], plain(" "));
        assert!(segments[3].italic);
        assert_eq!(plain_text(&segments), "Snippet sig expanded");
    }

    #[test]
    fn tags_are_case_insensitive_and_nest() {
        let segments = parse("<STRONG>a<EM>b</EM></strong>");

        assert_eq!(segments.len(), 2);
        assert!(segments[0].bold && !segments[0].italic);
        assert!(segments[1].bold && segments[1].italic);
    }

    #[test]
    fn line_breaks() {
        let segments = parse("one<br>two<br/>three<BR />four");
        assert_eq!(plain_text(&segments), "one\ntwo\nthree\nfour");
    }

    #[test]
    fn unknown_tags_keep_their_text() {
        assert_eq!(parse("<u>under</u><span>x</span>"), vec![plain("underx")]);
    }

    #[test]
    fn stray_closing_tag_is_ignored() {
        assert_eq!(parse("a</b>b"), vec![plain("ab")]);
    }

    #[test]
    fn unclosed_tag_runs_to_the_end() {
        let segments = parse("x<b>y");
        assert_eq!(segments.len(), 2);
        assert!(segments[1].bold);
    }

    #[test]
    fn lone_angle_brackets_are_literal() {
        assert_eq!(plain_text(&parse("1 < 2")), "1 < 2");
        assert_eq!(plain_text(&parse("a < b > c")), "a < b > c");
    }

    #[test]
    fn entities() {
        assert_eq!(
            plain_text(&parse("&lt;tag&gt; &amp; &quot;q&quot; &#39;s&#39; &#x41;")),
            "<tag> & \"q\" 's' A"
        );
        assert_eq!(plain_text(&parse("fish & chips &bogus;")), "fish & chips &bogus;");
    }

    #[test]
    fn font_color() {
        let segments = parse(r##"<font color="#ff0000">red</font><font color='#0f0'>g</font>"##);

        assert_eq!(segments[0].color, Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(segments[1].color, Some(Color::from_rgb8(0, 255, 0)));
    }

    #[test]
    fn font_color_needs_the_whole_attribute_name() {
        let red = Some(Color::from_rgb8(255, 0, 0));

        let segments = parse(r##"<font bgcolor="#000000" color="#ff0000">x</font>"##);
        assert_eq!(segments[0].color, red);

        let segments = parse(r##"<font face="colorful" color="#ff0000">x</font>"##);
        assert_eq!(segments[0].color, red);

        let segments = parse(r##"<font bgcolor="#000000">x</font>"##);
        assert_eq!(segments, vec![plain("x")]);
    }

    #[test]
    fn invalid_font_color_is_ignored_but_balanced() {
        let segments = parse(r##"<font color="#ff0000">a<font color="red">b</font>c</font>d"##);

        assert_eq!(plain_text(&segments), "abcd");
        assert_eq!(segments[0].color, Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(segments[0].text, "abc");
        assert_eq!(segments[1], plain("d"));
    }
}
