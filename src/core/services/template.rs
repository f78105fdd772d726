//! Message templates
//!
//! Renders diagnostics with pylint's `msg-template` syntax, which is the
//! Python `str.format` mini-language: `{field}` or `{field:spec}`, with
//! `{{` and `}}` for literal braces.
//!
//! Supported fields: `C`, `category`, `msg_id`, `symbol`, `msg`, `line`,
//! `column`, `end_line`, `end_column`, `path`, `abspath`, `module`, `obj`.
//! Unknown fields are left in the output verbatim.

use std::path::Path;

use crate::core::models::Diagnostic;

/// Template used when the rcfile does not set `msg-template`
pub const DEFAULT_TEMPLATE: &str = "{C}:{line:3d},{column:2d}: {msg} ({symbol})";

/// A parsed message template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    pieces: Vec<Piece>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Field { name: String, spec: FormatSpec, raw: String },
}

enum Value<'a> {
    Int(i64),
    Char(char),
    Str(&'a str),
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE)
    }
}

impl MessageTemplate {
    /// Parse a template string
    ///
    /// Parsing never fails: an unterminated `{` and a lone `}` are kept
    /// as literal text.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(pos) = rest.find(&['{', '}'][..]) {
            literal.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            if tail.starts_with("{{") || tail.starts_with("}}") {
                literal.push_str(&tail[..1]);
                rest = &tail[2..];
                continue;
            }
            if tail.starts_with('}') {
                literal.push('}');
                rest = &tail[1..];
                continue;
            }

            let Some(end) = tail.find('}') else {
                literal.push_str(tail);
                rest = "";
                break;
            };

            if !literal.is_empty() {
                pieces.push(Piece::Literal(std::mem::take(&mut literal)));
            }
            let raw = &tail[..=end];
            let inner = &tail[1..end];
            let (name, spec) = inner.split_once(':').unwrap_or((inner, ""));
            // Conversions (`!r`, `!s`) do not change how our values render
            let name = name.split_once('!').map_or(name, |(n, _)| n);
            pieces.push(Piece::Field {
                name: name.trim().to_string(),
                spec: FormatSpec::parse(spec),
                raw: raw.to_string(),
            });
            rest = &tail[end + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }
        Self { pieces }
    }

    /// Parse `template`, or fall back to [`DEFAULT_TEMPLATE`]
    #[must_use]
    pub fn from_option(template: Option<&str>) -> Self {
        template.map_or_else(Self::default, Self::parse)
    }

    /// Render one diagnostic
    ///
    /// `{abspath}` shows the path pylint reported, as no linted file is known.
    #[must_use]
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        self.render_with(diagnostic, &diagnostic.path)
    }

    /// Render one diagnostic of the linted `file`
    #[must_use]
    pub fn render_for(&self, diagnostic: &Diagnostic, file: &Path) -> String {
        self.render_with(diagnostic, &file.to_string_lossy())
    }

    /// Render the diagnostics of the linted `file` one per line
    #[must_use]
    pub fn render_all(&self, diagnostics: &[Diagnostic], file: &Path) -> String {
        diagnostics.iter().map(|d| self.render_for(d, file)).collect::<Vec<_>>().join("\n")
    }

    fn render_with(&self, diagnostic: &Diagnostic, abspath: &str) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Field { name, spec, raw } => match field_value(diagnostic, abspath, name) {
                    Some(value) => out.push_str(&spec.apply(&value)),
                    None => out.push_str(raw),
                },
            }
        }
        out
    }
}

fn field_value<'a>(diagnostic: &'a Diagnostic, abspath: &'a str, name: &str) -> Option<Value<'a>> {
    let value = match name {
        "C" => Value::Char(diagnostic.code()),
        "category" => Value::Str(diagnostic.category.as_str()),
        "msg_id" => Value::Str(&diagnostic.msg_id),
        "symbol" => Value::Str(&diagnostic.symbol),
        "msg" => Value::Str(&diagnostic.message),
        "line" => Value::Int(i64::from(diagnostic.line)),
        "column" => Value::Int(i64::from(diagnostic.column)),
        "end_line" => optional_int(diagnostic.end_line),
        "end_column" => optional_int(diagnostic.end_column),
        "path" => Value::Str(&diagnostic.path),
        "abspath" => Value::Str(abspath),
        "module" => Value::Str(&diagnostic.module),
        "obj" => Value::Str(&diagnostic.obj),
        _ => return None,
    };
    Some(value)
}

fn optional_int<'a>(value: Option<u32>) -> Value<'a> {
    value.map_or(Value::Str("None"), |v| Value::Int(i64::from(v)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
    AfterSign,
}

impl Align {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Left),
            '>' => Some(Self::Right),
            '^' => Some(Self::Center),
            '=' => Some(Self::AfterSign),
            _ => None,
        }
    }
}

/// `[[fill]align][sign][#][0][width][,][.precision][type]`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct FormatSpec {
    fill: Option<char>,
    align: Option<Align>,
    sign: Option<char>,
    zero: bool,
    width: usize,
    precision: Option<usize>,
}

impl FormatSpec {
    fn parse(spec: &str) -> Self {
        let chars: Vec<char> = spec.chars().collect();
        let mut out = Self::default();
        let mut i = 0;

        if let Some(align) = chars.get(1).copied().and_then(Align::from_char) {
            out.fill = Some(chars[0]);
            out.align = Some(align);
            i = 2;
        } else if let Some(align) = chars.first().copied().and_then(Align::from_char) {
            out.align = Some(align);
            i = 1;
        }
        if let Some(&c @ ('+' | '-' | ' ')) = chars.get(i) {
            out.sign = Some(c);
            i += 1;
        }
        if chars.get(i) == Some(&'#') {
            i += 1;
        }
        if chars.get(i) == Some(&'0') {
            out.zero = true;
            i += 1;
        }
        let (width, used) = leading_number(&chars[i..]);
        out.width = width;
        i += used;
        if matches!(chars.get(i), Some(',' | '_')) {
            i += 1;
        }
        if chars.get(i) == Some(&'.') {
            let (precision, _) = leading_number(&chars[i + 1..]);
            out.precision = Some(precision);
        }
        // The trailing type character (d, s) needs no handling
        out
    }

    fn apply(&self, value: &Value<'_>) -> String {
        let (sign, body, numeric) = match value {
            Value::Int(n) => {
                let sign = if *n < 0 {
                    "-"
                } else {
                    match self.sign {
                        Some('+') => "+",
                        Some(' ') => " ",
                        _ => "",
                    }
                };
                (sign, n.unsigned_abs().to_string(), true)
            },
            Value::Char(c) => ("", c.to_string(), false),
            Value::Str(s) => {
                let body = match self.precision {
                    Some(p) => s.chars().take(p).collect(),
                    None => (*s).to_string(),
                };
                ("", body, false)
            },
        };

        let pad = self.width.saturating_sub(sign.len() + body.chars().count());
        if pad == 0 {
            return format!("{sign}{body}");
        }

        let fill = self.fill.unwrap_or(if self.zero { '0' } else { ' ' });
        let align = match self.align {
            Some(align) => align,
            None if numeric && self.zero => Align::AfterSign,
            None if numeric => Align::Right,
            None => Align::Left,
        };
        let padding = |n: usize| fill.to_string().repeat(n);

        match align {
            Align::Left => format!("{sign}{body}{}", padding(pad)),
            Align::Right => format!("{}{sign}{body}", padding(pad)),
            Align::Center => {
                let left = pad / 2;
                format!("{}{sign}{body}{}", padding(left), padding(pad - left))
            },
            Align::AfterSign => format!("{sign}{}{body}", padding(pad)),
        }
    }
}

fn leading_number(chars: &[char]) -> (usize, usize) {
    let digits: Vec<u32> = chars.iter().map_while(|c| c.to_digit(10)).collect();
    let value = digits.iter().fold(0usize, |acc, &d| acc.saturating_mul(10).saturating_add(d as usize));
    (value, digits.len())
}
