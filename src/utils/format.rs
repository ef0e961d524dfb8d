//! Bounded printf-style rendering
//!
//! Format strings come from the bar configuration and carry renderer markup
//! (`^fg(cyan)` and friends) that must come out byte for byte. Only the
//! `%` directives are interpreted; everything else is copied verbatim.

use crate::error::{Result, SwiftstatusError};
use std::fmt;

/// Size of the scratch buffer every fragment is rendered into
pub const FRAGMENT_CAPACITY: usize = 1024;

/// A value substituted for one `%` directive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    Int(i64),
    Float(f64),
    Str(&'a str),
}

/// `fmt::Write` sink that refuses to grow past `limit` bytes
#[derive(Debug)]
pub struct BoundedBuf {
    buf: String,
    limit: usize,
    overflowed: bool,
}

impl BoundedBuf {
    pub fn new(limit: usize) -> Self {
        Self {
            buf: String::with_capacity(limit.min(256)),
            limit,
            overflowed: false,
        }
    }

    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    fn push(&mut self, s: &str) -> Result<()> {
        fmt::Write::write_str(self, s).map_err(|_| SwiftstatusError::Overflow { limit: self.limit })
    }

    fn pad(&mut self, fill: char, count: usize) -> Result<()> {
        for _ in 0..count {
            let mut tmp = [0u8; 4];
            self.push(fill.encode_utf8(&mut tmp))?;
        }
        Ok(())
    }
}

impl fmt::Write for BoundedBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.buf.len() + s.len() > self.limit {
            self.overflowed = true;
            return Err(fmt::Error);
        }
        self.buf.push_str(s);
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    left: bool,
    zero: bool,
    plus: bool,
    space: bool,
    width: usize,
    precision: Option<usize>,
}

/// Render `fmt` with `args` into a string of at most `limit` bytes
pub fn render(fmt: &str, args: &[Arg<'_>], limit: usize) -> Result<String> {
    let mut out = BoundedBuf::new(limit);
    let mut args = args.iter();
    let mut rest = fmt;

    while let Some(pos) = rest.find('%') {
        out.push(&rest[..pos])?;
        let (spec, conversion, consumed) = parse_directive(&rest[pos + 1..])?;
        rest = &rest[pos + 1 + consumed..];

        if conversion == '%' {
            out.push("%")?;
            continue;
        }

        let arg = args
            .next()
            .ok_or_else(|| SwiftstatusError::Format(format!("missing argument for %{}", conversion)))?;
        write_directive(&mut out, &spec, conversion, arg)?;
    }
    out.push(rest)?;

    Ok(out.into_string())
}

/// Parse flags, width, precision, length modifiers and the conversion
/// character following a `%`. Returns the number of bytes consumed.
fn parse_directive(s: &str) -> Result<(Spec, char, usize)> {
    let bytes = s.as_bytes();
    let mut spec = Spec::default();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'-' => spec.left = true,
            b'0' => spec.zero = true,
            b'+' => spec.plus = true,
            b' ' => spec.space = true,
            b'#' => {}
            _ => break,
        }
        i += 1;
    }

    let start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i > start {
        spec.width = s[start..i]
            .parse()
            .map_err(|_| SwiftstatusError::Format(format!("bad width in %{}", s)))?;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        // "%.f" means precision 0, as in C
        spec.precision = Some(s[start..i].parse().unwrap_or(0));
    }

    while i < bytes.len() && matches!(bytes[i], b'h' | b'l' | b'j' | b'z' | b't' | b'L' | b'q') {
        i += 1;
    }

    match s[i..].chars().next() {
        Some(c) => Ok((spec, c, i + c.len_utf8())),
        None => Err(SwiftstatusError::Format("format ends inside a directive".to_string())),
    }
}

fn write_directive(out: &mut BoundedBuf, spec: &Spec, conversion: char, arg: &Arg<'_>) -> Result<()> {
    match (conversion, arg) {
        // C ignores the 0 flag on integers once a precision is given
        ('d' | 'i', Arg::Int(n)) => {
            write_number(out, spec, *n < 0, &int_digits(n.unsigned_abs(), spec), spec.precision.is_none())
        }
        ('u', Arg::Int(n)) => write_number(out, spec, false, &int_digits(*n as u64, spec), spec.precision.is_none()),
        ('f' | 'F', Arg::Float(x)) => {
            let body = float_digits(*x, spec.precision.unwrap_or(6), conversion == 'F');
            write_number(out, spec, x.is_sign_negative() && !x.is_nan(), &body, x.is_finite())
        }
        ('s', Arg::Str(s)) => {
            let s: &str = s;
            let s = match spec.precision {
                Some(p) => truncate_chars(s, p),
                None => s,
            };
            let fill = spec.width.saturating_sub(s.chars().count());
            if !spec.left {
                out.pad(' ', fill)?;
            }
            out.push(s)?;
            if spec.left {
                out.pad(' ', fill)?;
            }
            Ok(())
        }
        ('d' | 'i' | 'u' | 'f' | 'F' | 's', other) => Err(SwiftstatusError::Format(format!(
            "%{} does not accept {:?}",
            conversion, other
        ))),
        (c, _) => Err(SwiftstatusError::Format(format!("unsupported conversion %{}", c))),
    }
}

fn int_digits(n: u64, spec: &Spec) -> String {
    let digits = n.to_string();
    match spec.precision {
        // "%.0d" with zero prints nothing
        Some(0) if n == 0 => String::new(),
        Some(p) if p > digits.len() => format!("{}{}", "0".repeat(p - digits.len()), digits),
        _ => digits,
    }
}

fn float_digits(x: f64, precision: usize, upper: bool) -> String {
    let body = if x.is_nan() {
        "nan".to_string()
    } else if x.is_infinite() {
        "inf".to_string()
    } else {
        format!("{:.*}", precision, x.abs())
    };
    if upper {
        body.to_uppercase()
    } else {
        body
    }
}

fn write_number(out: &mut BoundedBuf, spec: &Spec, negative: bool, body: &str, zero_ok: bool) -> Result<()> {
    let sign = if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    };
    let fill = spec.width.saturating_sub(sign.len() + body.len());

    if spec.left {
        out.push(sign)?;
        out.push(body)?;
        out.pad(' ', fill)
    } else if spec.zero && zero_ok {
        out.push(sign)?;
        out.pad('0', fill)?;
        out.push(body)
    } else {
        out.pad(' ', fill)?;
        out.push(sign)?;
        out.push(body)
    }
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
