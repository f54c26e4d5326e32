use crate::Result;
use memsim_error::errinput;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a reference trace: one decimal logical address per line. Any line
/// that does not parse as an unsigned address aborts the run.
pub fn read_reference_trace(path: impl AsRef<Path>) -> Result<Vec<u32>> {
    let file = File::open(path.as_ref())?;
    parse_reference_trace(BufReader::new(file))
}

pub fn parse_reference_trace<R: BufRead>(reader: R) -> Result<Vec<u32>> {
    let mut references = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        match line.trim().parse::<u32>() {
            Ok(address) => references.push(address),
            Err(_) => return errinput!("line {}: not a logical address: {:?}", number + 1, line),
        }
    }
    Ok(references)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_addresses() {
        let input = Cursor::new("16916\n62493\n30198\n");
        assert_eq!(
            parse_reference_trace(input).unwrap(),
            vec![16916, 62493, 30198]
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let input = Cursor::new("  42\n7\t\n");
        assert_eq!(parse_reference_trace(input).unwrap(), vec![42, 7]);
    }

    #[test]
    fn test_empty_trace() {
        let input = Cursor::new("");
        assert_eq!(parse_reference_trace(input).unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let input = Cursor::new("123\nabc\n456\n");
        assert!(parse_reference_trace(input).is_err());
    }

    #[test]
    fn test_negative_address_is_fatal() {
        let input = Cursor::new("-5\n");
        assert!(parse_reference_trace(input).is_err());
    }
}
