//! The `a + b = sum` readout and the learner's committed values.

use hashbrown::HashMap;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{Result, TapeError};
use crate::problem::Field;

pub const DEFAULT_PATTERN: &str = "{a} + {b} = {sum}";
pub const DEFAULT_PLACEHOLDER: &str = "?";

/// Last value the learner committed per field. Only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InputValues {
    values: HashMap<Field, i64>,
}

impl InputValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, field: Field, value: i64) {
        self.values.insert(field, value);
    }

    pub fn get(&self, field: Field) -> Option<i64> {
        self.values.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Field, i64)> for InputValues {
    fn from_iter<I: IntoIterator<Item = (Field, i64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Parse the way a browser's `parseInt(s, 10)` does: leading whitespace, an
/// optional sign, then as many decimal digits as there are. Trailing junk is
/// ignored; no digits at all is `None`.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(Field),
}

/// A pattern such as `"{a} + {b} = {sum}"`, split into literal text and
/// named slots once so rendering is plain concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionTemplate {
    segments: Vec<Segment>,
    placeholder: String,
}

impl ExpressionTemplate {
    /// Slots are `{name}`; a `{` with no closing brace is kept as text.
    pub fn parse(pattern: &str, placeholder: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut rest = pattern;

        while let Some(open) = rest.find('{') {
            let Some(len) = rest[open + 1..].find('}') else {
                break;
            };
            text.push_str(&rest[..open]);
            let name = &rest[open + 1..open + 1 + len];
            let field =
                Field::from_slot(name).ok_or_else(|| TapeError::UnknownSlot(name.to_string()))?;
            if !text.is_empty() {
                segments.push(Segment::Text(std::mem::take(&mut text)));
            }
            segments.push(Segment::Slot(field));
            rest = &rest[open + len + 2..];
        }
        text.push_str(rest);
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Ok(Self {
            segments,
            placeholder: placeholder.to_string(),
        })
    }

    pub fn render(&self, values: &InputValues) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            match seg {
                Segment::Text(t) => out.push_str(t),
                Segment::Slot(field) => match values.get(*field) {
                    Some(v) => out.push_str(&v.to_string()),
                    None => out.push_str(&self.placeholder),
                },
            }
        }
        out
    }
}

impl Default for ExpressionTemplate {
    fn default() -> Self {
        let slot = Segment::Slot;
        let text = |t: &str| Segment::Text(t.to_string());
        Self {
            segments: vec![
                slot(Field::A),
                text(" + "),
                slot(Field::B),
                text(" = "),
                slot(Field::Sum),
            ],
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/// Render the stock `"{a} + {b} = {sum}"` readout.
pub fn render_expression(values: &InputValues) -> String {
    ExpressionTemplate::default().render(values)
}
