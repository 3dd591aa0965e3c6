//! Minimal RFC 4180 CSV reader
//!
//! Handles quoted fields, escaped quotes, and embedded commas/newlines,
//! which the training exports use freely. Nothing more: no type inference,
//! no streaming, the training files are small enough to read whole.

use mailsift_domain::{MailsiftError, Result};

/// Parse `input` into records of string fields.
///
/// # Errors
/// Returns `MailsiftError::Training` for an unterminated quoted field.
pub fn parse(input: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(MailsiftError::Training("unterminated quoted field in CSV".to_string()));
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    // A file ending in a newline is not a trailing empty record.
    records.retain(|r| !(r.len() == 1 && r[0].is_empty()));
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_and_rows() {
        let rows = parse("a,b,c\nd,e,f\n").unwrap();
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
    }

    #[test]
    fn quoted_field_with_comma_and_newline() {
        let rows = parse("\"hello, world\",x\n\"line one\nline two\",y\n").unwrap();
        assert_eq!(rows[0][0], "hello, world");
        assert_eq!(rows[1][0], "line one\nline two");
        assert_eq!(rows[1][1], "y");
    }

    #[test]
    fn escaped_quotes_inside_quoted_field() {
        let rows = parse("\"she said \"\"hi\"\"\",z\n").unwrap();
        assert_eq!(rows[0][0], "she said \"hi\"");
    }

    #[test]
    fn crlf_line_endings() {
        let rows = parse("a,b\r\nc,d\r\n").unwrap();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn missing_final_newline() {
        let rows = parse("a,b\nc,d").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["c", "d"]);
    }

    #[test]
    fn empty_fields_are_kept() {
        let rows = parse("a,,c\n").unwrap();
        assert_eq!(rows[0], vec!["a", "", "c"]);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        let err = parse("\"dangling,b\n").unwrap_err();
        assert!(matches!(err, MailsiftError::Training(_)));
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse("").unwrap().is_empty());
    }
}
