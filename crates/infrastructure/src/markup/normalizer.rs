use cotendo_dns_domain::MarkupConfig;

/// Tolerant repair pass that turns provider markup into well-formed XML.
///
/// The provider does not guarantee well-formed output. Before the strict
/// parser sees the text, this pass:
///
/// * emits every tag listed as self-closing as `<tag .../>` and drops its
///   explicit close tags
/// * lower-cases tag and attribute names
/// * quotes unquoted or valueless attributes (`flag` becomes `flag=""`) and
///   keeps only the first of duplicated attributes
/// * drops close tags that match no open element; a close tag for an outer
///   element closes everything opened inside it
/// * never nests an element inside an open element of the same name; the
///   earlier one is closed first
/// * closes elements still open at end of input
/// * escapes stray `<` and bare `&`
/// * drops XML declarations, processing instructions and doctypes
///
/// Comments and CDATA sections pass through unchanged.
#[derive(Debug, Clone)]
pub struct MarkupNormalizer {
    self_closing_tags: Vec<String>,
}

struct OpenTag {
    name: String,
    attributes: Vec<(String, String)>,
    self_closed: bool,
}

impl MarkupNormalizer {
    pub fn new(config: &MarkupConfig) -> Self {
        Self::with_self_closing_tags(config.self_closing_tags.iter().map(String::as_str))
    }

    pub fn with_self_closing_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            self_closing_tags: tags.into_iter().map(str::to_ascii_lowercase).collect(),
        }
    }

    pub fn self_closing_tags(&self) -> &[String] {
        &self.self_closing_tags
    }

    pub fn is_self_closing(&self, tag: &str) -> bool {
        self.self_closing_tags.iter().any(|t| t == tag)
    }

    pub fn normalize(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len() + raw.len() / 8);
        let mut open: Vec<String> = Vec::new();
        let mut rest = raw;

        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix("<!--") {
                let (body, tail) = split_until(after, "-->");
                out.push_str("<!--");
                out.push_str(body);
                out.push_str("-->");
                rest = tail;
            } else if let Some(after) = rest.strip_prefix("<![CDATA[") {
                let (body, tail) = split_until(after, "]]>");
                out.push_str("<![CDATA[");
                out.push_str(body);
                out.push_str("]]>");
                rest = tail;
            } else if let Some(after) = rest.strip_prefix("<?") {
                rest = split_until(after, "?>").1;
            } else if let Some(after) = rest.strip_prefix("<!") {
                rest = split_until(after, ">").1;
            } else if let Some(after) = rest.strip_prefix("</") {
                let (name, tail) = take_name(after);
                if name.is_empty() {
                    out.push_str("&lt;/");
                    rest = after;
                } else {
                    rest = split_until(tail, ">").1;
                    self.close(&name.to_ascii_lowercase(), &mut open, &mut out);
                }
            } else if let Some(after) = rest.strip_prefix('<').filter(|a| starts_name(a)) {
                let (tag, tail) = parse_open_tag(after);
                rest = tail;
                self.open(tag, &mut open, &mut out);
            } else if let Some(after) = rest.strip_prefix('<') {
                out.push_str("&lt;");
                rest = after;
            } else {
                let end = rest.find('<').unwrap_or(rest.len());
                push_escaped(&mut out, &rest[..end], false);
                rest = &rest[end..];
            }
        }

        while let Some(name) = open.pop() {
            push_close(&mut out, &name);
        }

        out
    }

    fn open(&self, tag: OpenTag, open: &mut Vec<String>, out: &mut String) {
        // Same-name elements never nest; an earlier one still open is
        // closed first, along with everything inside it.
        self.close(&tag.name, open, out);

        out.push('<');
        out.push_str(&tag.name);
        for (name, value) in &tag.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            push_escaped(out, value, true);
            out.push('"');
        }

        if tag.self_closed || self.is_self_closing(&tag.name) {
            out.push_str("/>");
        } else {
            out.push('>');
            open.push(tag.name);
        }
    }

    fn close(&self, name: &str, open: &mut Vec<String>, out: &mut String) {
        if self.is_self_closing(name) {
            return;
        }
        let Some(index) = open.iter().rposition(|n| n == name) else {
            return;
        };
        while open.len() > index {
            if let Some(inner) = open.pop() {
                push_close(out, &inner);
            }
        }
    }
}

fn push_close(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Splits at the first `delim`, consuming it. Without a match the whole
/// input is the body.
fn split_until<'a>(input: &'a str, delim: &str) -> (&'a str, &'a str) {
    match input.find(delim) {
        Some(index) => (&input[..index], &input[index + delim.len()..]),
        None => (input, ""),
    }
}

fn starts_name(input: &str) -> bool {
    input
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}

fn take_name(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| !is_name_char(c))
        .unwrap_or(input.len());
    input.split_at(end)
}

fn take_attribute_name(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| {
            c.is_whitespace() || matches!(c, '=' | '>' | '/' | '<' | '"' | '\'')
        })
        .unwrap_or(input.len());
    input.split_at(end)
}

fn parse_open_tag(input: &str) -> (OpenTag, &str) {
    let (name, mut rest) = take_name(input);
    let mut tag = OpenTag {
        name: name.to_ascii_lowercase(),
        attributes: Vec::new(),
        self_closed: false,
    };

    loop {
        rest = rest.trim_start();
        let Some(next) = rest.chars().next() else {
            break;
        };

        match next {
            '>' => {
                rest = &rest[1..];
                break;
            }
            '/' => {
                rest = &rest[1..];
                if let Some(tail) = rest.strip_prefix('>') {
                    tag.self_closed = true;
                    rest = tail;
                    break;
                }
            }
            // Unterminated tag: let the next tag start on its own.
            '<' => break,
            _ => {
                let (attr_name, tail) = take_attribute_name(rest);
                if attr_name.is_empty() {
                    rest = &rest[next.len_utf8()..];
                    continue;
                }
                rest = tail.trim_start();

                let mut value = "";
                if let Some(after_eq) = rest.strip_prefix('=') {
                    let after_eq = after_eq.trim_start();
                    let quoted = after_eq.starts_with(['"', '\'']);
                    let (raw_value, tail) = parse_attribute_value(after_eq);
                    rest = tail;
                    value = raw_value;
                    // `<result value=x/>`: the slash belongs to the tag.
                    if !quoted && rest.starts_with('>') {
                        if let Some(stripped) = value.strip_suffix('/') {
                            value = stripped;
                            tag.self_closed = true;
                        }
                    }
                }
                push_attribute(&mut tag, attr_name, value);
            }
        }
    }

    (tag, rest)
}

fn push_attribute(tag: &mut OpenTag, name: &str, value: &str) {
    if !starts_name(name) {
        return;
    }
    let name = name.to_ascii_lowercase();
    if tag.attributes.iter().any(|(n, _)| *n == name) {
        return;
    }
    tag.attributes.push((name, value.to_string()));
}

/// Quoted values run to the matching quote, or to the next `>` when the
/// quote is never closed. Unquoted values stop at whitespace or `>`.
fn parse_attribute_value(input: &str) -> (&str, &str) {
    if let Some(quote) = input.chars().next().filter(|c| *c == '"' || *c == '\'') {
        let body = &input[1..];
        return match body.find(quote) {
            Some(end) => (&body[..end], &body[end + 1..]),
            None => {
                let end = body.find('>').unwrap_or(body.len());
                (&body[..end], &body[end..])
            }
        };
    }

    let end = input
        .find(|c: char| c.is_whitespace() || c == '>')
        .unwrap_or(input.len());
    input.split_at(end)
}

fn push_escaped(out: &mut String, text: &str, in_attribute: bool) {
    for (index, c) in text.char_indices() {
        match c {
            '&' if !starts_entity(&text[index + 1..]) => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Recognizes the five predefined XML entities and numeric references.
fn starts_entity(after_amp: &str) -> bool {
    let Some(end) = after_amp.find(';') else {
        return false;
    };
    let body = &after_amp[..end];
    if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if let Some(dec) = body.strip_prefix('#') {
        return !dec.is_empty() && dec.chars().all(|c| c.is_ascii_digit());
    }
    matches!(body, "amp" | "lt" | "gt" | "quot" | "apos")
}
