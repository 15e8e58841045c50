//! printf-style substitution of positional arguments into a message template.
//!
//! Directives follow `%[flags][width][.precision]verb`. Malformed templates never
//! fail: a missing argument, a verb the argument can't satisfy, or leftover
//! arguments are rendered inline as `%!` markers so the line still goes out.

use std::fmt::{self, Write as _};

/// One positional argument. Call sites normally build these through `From`
/// (the logging macros do it for every argument expression).
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Arg {
    /// Type name shown inside error markers, e.g. `%!d(string=abc)`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float64",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
        }
    }
}

/// Default (`%v`) rendering.
impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(x) => f.write_str(&float(*x, 'g', &Spec::default())),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Char(c) => write!(f, "{c}"),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

macro_rules! from_lossless {
    ($variant:ident, $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Arg {
                fn from(v: $source) -> Self {
                    Self::$variant(<$target>::from(v))
                }
            }
        )*
    };
}

from_lossless!(Int, i64: i8, i16, i32, i64);
from_lossless!(Uint, u64: u8, u16, u32, u64);
from_lossless!(Float, f64: f32, f64);

impl From<isize> for Arg {
    fn from(v: isize) -> Self {
        i64::try_from(v).map_or_else(|_| Self::Str(v.to_string()), Self::Int)
    }
}

impl From<usize> for Arg {
    fn from(v: usize) -> Self {
        u64::try_from(v).map_or_else(|_| Self::Str(v.to_string()), Self::Uint)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<char> for Arg {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

/// Widths and precisions above this render `%!(BADWIDTH)` / `%!(BADPREC)` and are ignored.
const MAX_WIDTH: usize = 1_000_000;

/// Flags, width and precision of a single directive.
#[derive(Debug, Clone, Copy, Default)]
struct Spec {
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Substitutes `args` into `template`, left to right.
///
/// ```
/// use tintlog::fmt::{Arg, sprintf};
///
/// assert_eq!(sprintf("disk at %d%%", &[Arg::from(87)]), "disk at 87%");
/// assert_eq!(sprintf("%-5s|%05.1f", &[Arg::from("ab"), Arg::from(7.56)]), "ab   |007.6");
/// assert_eq!(sprintf("%d", &[]), "%!d(MISSING)");
/// ```
#[must_use]
pub fn sprintf(template: &str, args: &[Arg]) -> String {
    let chars: Vec<char> = template.chars().collect();
    let mut out = String::with_capacity(template.len());
    let mut next_arg = 0;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '%' {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        i += 1;

        let mut spec = Spec::default();
        while let Some(&c) = chars.get(i) {
            match c {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                '0' => spec.zero = true,
                '#' => spec.sharp = true,
                _ => break,
            }
            i += 1;
        }
        spec.width = read_number(&chars, &mut i);
        if spec.width.is_some_and(|w| w > MAX_WIDTH) {
            out.push_str("%!(BADWIDTH)");
            spec.width = None;
        }
        if chars.get(i) == Some(&'.') {
            i += 1;
            spec.precision = Some(read_number(&chars, &mut i).unwrap_or(0));
            if spec.precision.is_some_and(|p| p > MAX_WIDTH) {
                out.push_str("%!(BADPREC)");
                spec.precision = None;
            }
        }

        let Some(&verb) = chars.get(i) else {
            out.push_str("%!(NOVERB)");
            break;
        };
        i += 1;

        if verb == '%' {
            out.push('%');
            continue;
        }

        let Some(arg) = args.get(next_arg) else {
            let _ = write!(out, "%!{verb}(MISSING)");
            continue;
        };
        next_arg += 1;

        match render(verb, &spec, arg) {
            Some(rendered) => out.push_str(&rendered),
            None => {
                let _ = write!(out, "%!{verb}({}={arg})", arg.type_name());
            }
        }
    }

    if next_arg < args.len() {
        out.push_str("%!(EXTRA ");
        for (n, arg) in args[next_arg..].iter().enumerate() {
            if n > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={arg}", arg.type_name());
        }
        out.push(')');
    }

    out
}

fn read_number(chars: &[char], i: &mut usize) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.get(*i).and_then(|c| c.to_digit(10)) {
        let acc = value.unwrap_or(0);
        value = Some(acc.saturating_mul(10).saturating_add(digit as usize));
        *i += 1;
    }
    value
}

/// `None` means the verb doesn't apply to this argument type.
fn render(verb: char, spec: &Spec, arg: &Arg) -> Option<String> {
    match verb {
        'v' => match arg {
            Arg::Int(_) | Arg::Uint(_) => integer(arg, 10, false, spec),
            Arg::Float(x) => Some(float(*x, 'g', spec)),
            _ => Some(text(&arg.to_string(), spec)),
        },
        's' => Some(text(&arg.to_string(), spec)),
        'q' => quoted(arg).map(|q| pad(&q, spec)),
        'd' | 'i' => integer(arg, 10, false, spec),
        'x' | 'X' => match arg {
            Arg::Str(s) => {
                let hex: String = s
                    .bytes()
                    .map(|b| {
                        if verb == 'X' {
                            format!("{b:02X}")
                        } else {
                            format!("{b:02x}")
                        }
                    })
                    .collect();
                Some(pad(&hex, spec))
            }
            _ => integer(arg, 16, verb == 'X', spec),
        },
        'o' => integer(arg, 8, false, spec),
        'b' => integer(arg, 2, false, spec),
        'c' => character(arg).map(|c| pad(&c.to_string(), spec)),
        'f' | 'F' | 'e' | 'E' | 'g' | 'G' => match arg {
            Arg::Float(x) => Some(float(*x, verb, spec)),
            _ => None,
        },
        't' => match arg {
            Arg::Bool(b) => Some(pad(&b.to_string(), spec)),
            _ => None,
        },
        _ => None,
    }
}

fn text(s: &str, spec: &Spec) -> String {
    match spec.precision {
        Some(max) => pad(&s.chars().take(max).collect::<String>(), spec),
        None => pad(s, spec),
    }
}

fn pad(s: &str, spec: &Spec) -> String {
    let len = s.chars().count();
    let width = spec.width.unwrap_or(0);
    if len >= width {
        return s.to_string();
    }

    let fill = if spec.zero && !spec.minus { "0" } else { " " }.repeat(width - len);
    if spec.minus {
        format!("{s}{fill}")
    } else {
        format!("{fill}{s}")
    }
}

fn quoted(arg: &Arg) -> Option<String> {
    match arg {
        Arg::Str(s) => Some(quote(s.chars(), '"')),
        Arg::Char(c) => Some(quote([*c], '\'')),
        Arg::Int(_) | Arg::Uint(_) => character(arg).map(|c| quote([c], '\'')),
        Arg::Float(_) | Arg::Bool(_) => None,
    }
}

/// Wraps `chars` in `delim` with C-style escapes; other control characters
/// become `\xNN` (ASCII) or `\uNNNN`.
fn quote(chars: impl IntoIterator<Item = char>, delim: char) -> String {
    let mut out = String::new();
    out.push(delim);
    for c in chars {
        match c {
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            '\\' => out.push_str("\\\\"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let code = u32::from(c);
                let _ = if code < 0x80 {
                    write!(out, "\\x{code:02x}")
                } else {
                    write!(out, "\\u{code:04x}")
                };
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

fn character(arg: &Arg) -> Option<char> {
    let code = match *arg {
        Arg::Char(c) => return Some(c),
        Arg::Int(n) => u32::try_from(n).ok(),
        Arg::Uint(n) => u32::try_from(n).ok(),
        _ => return None,
    };
    Some(code.and_then(char::from_u32).unwrap_or('\u{FFFD}'))
}

const fn sign(negative: bool, spec: &Spec) -> &'static str {
    if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    }
}

fn integer(arg: &Arg, radix: u32, upper: bool, spec: &Spec) -> Option<String> {
    let (negative, magnitude) = match *arg {
        Arg::Int(n) => (n < 0, n.unsigned_abs()),
        Arg::Uint(n) => (false, n),
        Arg::Char(c) => (false, u64::from(u32::from(c))),
        _ => return None,
    };
    if magnitude == 0 && spec.precision == Some(0) {
        return Some(pad("", &Spec { zero: false, ..*spec }));
    }

    let digits = match radix {
        16 if upper => format!("{magnitude:X}"),
        16 => format!("{magnitude:x}"),
        8 => format!("{magnitude:o}"),
        2 => format!("{magnitude:b}"),
        _ => magnitude.to_string(),
    };
    let prefix = match radix {
        _ if !spec.sharp => "",
        16 if upper => "0X",
        16 => "0x",
        8 if magnitude != 0 => "0",
        2 => "0b",
        _ => "",
    };

    Some(number(sign(negative, spec), prefix, digits, spec, true))
}

/// Applies integer precision (minimum digits) and width padding to a signed number body.
fn number(sign: &str, prefix: &str, digits: String, spec: &Spec, is_integer: bool) -> String {
    let mut digits = digits;
    if is_integer
        && let Some(min_digits) = spec.precision
        && digits.len() < min_digits
    {
        digits = format!("{}{digits}", "0".repeat(min_digits - digits.len()));
    }

    let body_len = sign.len() + prefix.len() + digits.chars().count();
    let width = spec.width.unwrap_or(0);
    if body_len >= width {
        return format!("{sign}{prefix}{digits}");
    }

    let fill = width - body_len;
    if spec.minus {
        format!("{sign}{prefix}{digits}{}", " ".repeat(fill))
    } else if spec.zero && !(is_integer && spec.precision.is_some()) {
        format!("{sign}{prefix}{}{digits}", "0".repeat(fill))
    } else {
        format!("{}{sign}{prefix}{digits}", " ".repeat(fill))
    }
}

fn float(x: f64, verb: char, spec: &Spec) -> String {
    let spaced = Spec { zero: false, ..*spec };
    if x.is_nan() {
        return pad("NaN", &spaced);
    }
    if x.is_infinite() {
        return pad(if x > 0.0 { "+Inf" } else { "-Inf" }, &spaced);
    }

    let abs = x.abs();
    let mut digits = match verb {
        'f' | 'F' => format!("{abs:.prec$}", prec = spec.precision.unwrap_or(6)),
        'e' | 'E' => exponent(abs, spec.precision.unwrap_or(6)),
        _ => general(abs, spec.precision),
    };
    if verb.is_ascii_uppercase() {
        digits = digits.to_uppercase();
    }

    number(sign(x.is_sign_negative(), spec), "", digits, spec, false)
}

fn exponent(abs: f64, precision: usize) -> String {
    c_exponent(&format!("{abs:.precision$e}"))
}

/// `%g`: shortest representation without precision, `precision` significant digits with it.
/// Exponent form is used when the exponent is below -4 or at least the precision
/// (6 for the shortest form).
fn general(abs: f64, precision: Option<usize>) -> String {
    let Some(precision) = precision else {
        let sci = format!("{abs:e}");
        let exp = sci
            .split_once('e')
            .and_then(|(_, e)| e.parse::<i64>().ok())
            .unwrap_or(0);
        if exp < -4 || exp >= 6 {
            return c_exponent(&sci);
        }
        return abs.to_string();
    };

    let significant = precision.max(1);
    let sci = format!("{abs:.prec$e}", prec = significant - 1);
    let exp = sci
        .split_once('e')
        .and_then(|(_, e)| e.parse::<i64>().ok())
        .unwrap_or(0);
    let limit = i64::try_from(significant).unwrap_or(i64::MAX);

    if exp < -4 || exp >= limit {
        let (mantissa, _) = sci.split_once('e').unwrap_or((sci.as_str(), ""));
        c_exponent(&format!("{}e{exp}", trim_fraction(mantissa)))
    } else {
        let decimals = usize::try_from(limit - 1 - exp).unwrap_or(0);
        trim_fraction(&format!("{abs:.decimals$}")).to_string()
    }
}

/// Rewrites Rust's `1.5e3` exponent form into C's `1.5e+03`.
fn c_exponent(rust_form: &str) -> String {
    let Some((mantissa, exp)) = rust_form.split_once('e') else {
        return rust_form.to_string();
    };
    let exp: i64 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
