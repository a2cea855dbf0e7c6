use std::io::{self, Write};

/// Render bytes as a decimal list: `[97 98 99]`.
pub fn format_bytes(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(2 + bytes.len() * 4);
    let mut buf = itoa::Buffer::new();
    s.push('[');
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        s.push_str(buf.format(b));
    }
    s.push(']');
    s
}

/// Write a byte list followed by a newline.
pub fn write_bytes_line(out: &mut impl Write, bytes: &[u8]) -> io::Result<()> {
    out.write_all(format_bytes(bytes).as_bytes())?;
    out.write_all(b"\n")
}

/// Printable rendering of a candidate, escaping non-ASCII bytes as `\xNN`.
pub fn escape_bytes(bytes: &[u8]) -> String {
    bytes.escape_ascii().to_string()
}
