use super::types::Section;

/// Header grammar: `[` DIGIT+ `.` WS TEXT `]`, where WS is exactly one
/// whitespace character and TEXT runs to the first `]` without crossing a
/// newline.
///
/// Returns the byte length of the header token starting at the beginning of
/// `input`, or `None` if no token starts there.
fn header_len(input: &str) -> Option<usize> {
    let rest = input.strip_prefix('[')?;

    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let rest = rest[digits..].strip_prefix('.')?;

    let ws = rest.chars().next()?;
    if !ws.is_whitespace() {
        return None;
    }
    let rest = &rest[ws.len_utf8()..];

    let close = rest.find(']')?;
    if rest[..close].contains('\n') {
        return None;
    }

    Some(1 + digits + 1 + ws.len_utf8() + close + 1)
}

#[derive(Debug, PartialEq)]
enum Segment<'a> {
    Header(&'a str),
    Text(&'a str),
}

/// Splits the response into an interleaved sequence of text and header
/// segments. Header tokens are kept as their own segments; empty text runs
/// between adjacent headers produce no segment.
fn tokenize(response: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < response.len() {
        if let Some(len) = header_len(&response[pos..]) {
            if text_start < pos {
                segments.push(Segment::Text(&response[text_start..pos]));
            }
            segments.push(Segment::Header(&response[pos..pos + len]));
            pos += len;
            text_start = pos;
        } else {
            pos += response[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if text_start < response.len() {
        segments.push(Segment::Text(&response[text_start..]));
    }

    segments
}

/// Pairs each header with the text that follows it, in first-occurrence
/// order. Text encountered outside a header position (preamble, stray
/// fragments) is discarded. A header with nothing after it gets an empty
/// body. Zero headers yields an empty Vec; the caller falls back to the raw
/// response text.
pub fn parse_sections(response: &str) -> Vec<Section> {
    let segments = tokenize(response);
    let mut sections = Vec::new();

    let mut i = 0;
    while i < segments.len() {
        match segments[i] {
            Segment::Header(title) => {
                let body = match segments.get(i + 1) {
                    Some(Segment::Text(text)) => {
                        i += 2;
                        text.trim().to_string()
                    }
                    _ => {
                        i += 1;
                        String::new()
                    }
                };
                sections.push(Section {
                    title: title.to_string(),
                    body,
                });
            }
            Segment::Text(_) => i += 1,
        }
    }

    sections
}
