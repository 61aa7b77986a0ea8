//! Line parser for `root;parent;child` relationship lists.
//!
//! Blank lines are separators and are skipped. Every other line must split on
//! `;` into exactly three fields, each non-empty after trimming.

use crate::domain::entities::Triplet;
use crate::domain::error::{DomainError, DomainResult, Field};

/// Field separator within a relationship line.
pub const DELIMITER: char = ';';

/// Lazy iterator over the triplets of a relationship list.
///
/// Yields triplets in input order. After the first error the iterator is
/// exhausted.
#[derive(Debug)]
pub struct Triplets<'a> {
    lines: std::iter::Enumerate<std::vec::IntoIter<&'a str>>,
    total: usize,
    failed: bool,
}

/// Byte-order mark some editors put at the start of UTF-8 files.
const BOM: char = '\u{feff}';

/// Parse `text` into triplets. A leading byte-order mark is ignored.
pub fn triplets(text: &str) -> Triplets<'_> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let lines: Vec<&str> = text.lines().collect();
    let total = lines.len();
    Triplets {
        lines: lines.into_iter().enumerate(),
        total,
        failed: false,
    }
}

/// Parse a single, already trimmed, non-blank line.
///
/// `line` is the 1-based position and `total` the input line count; both are
/// only used for diagnostics.
pub fn parse_line(content: &str, line: usize, total: usize) -> DomainResult<Triplet<'_>> {
    let fields: Vec<&str> = content.split(DELIMITER).map(str::trim).collect();
    let &[root, parent, child] = fields.as_slice() else {
        return Err(DomainError::FieldCount {
            line,
            total,
            found: fields.len(),
            content: content.to_string(),
        });
    };

    for (value, field) in [(root, Field::Root), (parent, Field::Parent), (child, Field::Child)] {
        if value.is_empty() {
            return Err(DomainError::EmptyField {
                line,
                total,
                field,
                content: content.to_string(),
            });
        }
    }

    Ok(Triplet::new(root, parent, child))
}

impl<'a> Iterator for Triplets<'a> {
    type Item = DomainResult<Triplet<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for (idx, raw) in self.lines.by_ref() {
            let content = raw.trim();
            if content.is_empty() {
                continue;
            }
            let parsed = parse_line(content, idx + 1, self.total);
            self.failed = parsed.is_err();
            return Some(parsed);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_leading_byte_order_mark_when_parsing_then_not_part_of_root() {
        let parsed: Vec<_> = triplets("\u{feff}A;B;C\r\nA;B;D")
            .collect::<DomainResult<_>>()
            .unwrap();

        assert_eq!(parsed[0], Triplet::new("A", "B", "C"));
        assert_eq!(parsed[1].root, parsed[0].root);
    }

    #[test]
    fn given_valid_lines_when_parsing_then_yields_in_order() {
        let text = "SUP_PR1;Cronjobs;Archive\nSAS_PR1;Process;node.js\n";
        let parsed: Vec<_> = triplets(text).collect::<DomainResult<_>>().unwrap();

        assert_eq!(
            parsed,
            vec![
                Triplet::new("SUP_PR1", "Cronjobs", "Archive"),
                Triplet::new("SAS_PR1", "Process", "node.js"),
            ]
        );
    }

    #[test]
    fn given_blank_and_padded_lines_when_parsing_then_trims_and_skips() {
        let text = "\n   \n  A ; B ;C  \r\n\n";
        let parsed: Vec<_> = triplets(text).collect::<DomainResult<_>>().unwrap();

        assert_eq!(parsed, vec![Triplet::new("A", "B", "C")]);
    }

    #[rstest]
    #[case("A;B", 2)]
    #[case("A;B;C;D", 4)]
    #[case("A", 1)]
    fn given_wrong_field_count_when_parsing_then_errors(#[case] line: &str, #[case] found: usize) {
        let err = parse_line(line, 1, 1).unwrap_err();

        assert_eq!(
            err,
            DomainError::FieldCount {
                line: 1,
                total: 1,
                found,
                content: line.to_string()
            }
        );
    }

    #[rstest]
    #[case(";B;C", Field::Root)]
    #[case("A; ;C", Field::Parent)]
    #[case("A;B;", Field::Child)]
    fn given_empty_field_when_parsing_then_errors(#[case] line: &str, #[case] expected: Field) {
        let err = parse_line(line, 3, 7).unwrap_err();

        match err {
            DomainError::EmptyField {
                line, total, field, ..
            } => {
                assert_eq!((line, total, field), (3, 7, expected));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn given_bad_line_when_iterating_then_reports_position_and_stops() {
        let text = "A;B;C\n\nA;B\nX;Y;Z\n";
        let mut iter = triplets(text);

        assert!(iter.next().unwrap().is_ok());
        let err = iter.next().unwrap().unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert!(err.to_string().contains("3/4"));
        assert!(iter.next().is_none());
    }
}
