//! Path-data serialization.
//!
//! Output shape: `"<letter> <arg> <arg> <letter> ..."`, single spaces everywhere, close-path
//! emitting only its letter.

use std::fmt;

use crate::command::{ArgRole, Command, Path};

/// Formats like JavaScript's `Number#toString` (`10`, `0.5`, `1e+21`, `NaN`), printing `-0`
/// as `0`.
pub fn js_number_to_string(mut v: f64, buf: &mut ryu_js::Buffer) -> &str {
    if v == -0.0 {
        v = 0.0;
    }
    buf.format(v)
}

/// Formats with exactly `precision` fractional digits, printing `-0.00` as `0.00`.
///
/// Below `1e21` this is JavaScript's `Number#toFixed`: ties round away from zero on the exact
/// binary value (`0.5` -> `1`, `2.5` -> `3`, `-2.5` -> `-3`). Larger magnitudes, which `toFixed`
/// would print in exponent form, are written positionally.
pub fn fmt_fixed_into(out: &mut String, v: f64, precision: usize) {
    use std::fmt::Write as _;

    let start = out.len();
    if v.is_finite() && v.abs() >= 1e21 {
        let _ = write!(out, "{v:.precision$}");
    } else {
        let digits = u8::try_from(precision).unwrap_or(u8::MAX);
        out.push_str(ryu_js::Buffer::new().format_to_fixed(v, digits));
    }
    let written = &out[start..];
    if written.starts_with('-') && written[1..].bytes().all(|b| b == b'0' || b == b'.') {
        out.remove(start);
    }
}

pub fn fmt_fixed(v: f64, precision: usize) -> String {
    let mut out = String::new();
    fmt_fixed_into(&mut out, v, precision);
    out
}

pub(crate) fn write_path_into(
    out: &mut String,
    path: &Path,
    mut write_arg: impl FnMut(&mut String, Option<ArgRole>, f64),
) {
    for (i, cmd) in path.commands().iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_command_into(out, cmd, &mut write_arg);
    }
}

fn write_command_into(
    out: &mut String,
    cmd: &Command,
    write_arg: &mut impl FnMut(&mut String, Option<ArgRole>, f64),
) {
    out.push(cmd.letter());
    for (i, &v) in cmd.args.iter().enumerate() {
        out.push(' ');
        write_arg(out, cmd.kind.role(i), v);
    }
}

impl Path {
    /// Serializes back to path-data text. Parsing the result reproduces the same values.
    pub fn to_path_data(&self) -> String {
        let mut out = String::new();
        let mut buf = ryu_js::Buffer::new();
        write_path_into(&mut out, self, |out, _, v| {
            out.push_str(js_number_to_string(v, &mut buf));
        });
        out
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_data())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        let mut buf = ryu_js::Buffer::new();
        write_command_into(&mut out, self, &mut |out: &mut String, _, v| {
            out.push_str(js_number_to_string(v, &mut buf));
        });
        f.write_str(&out)
    }
}
