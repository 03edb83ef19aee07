// src/csv.rs
use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Whole table as a string.
/// - `headers`: emitted first when `include_headers` is set
/// - `sep`: field/cell separator
pub fn to_export_string(
    headers: &[String],
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, headers, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("Refund - Store, A"), s!("$1.00"), s!("say \"hi\"")], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"Refund - Store, A\",$1.00,\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn comma_is_plain_in_tsv() {
        let out = to_export_string(&[s!("A"), s!("B")], &[vec![s!("x,y"), s!("z")]], true, '\t');
        assert_eq!(out, "A\tB\nx,y\tz\n");
    }
}
