//! Parser for plain-text edge lists.
//!
//! The format is line oriented:
//!
//! ```text
//! # comment lines and blank lines are ignored
//! 9          # first data line: vertex count
//! 1 2        # every other data line: source target
//! 1 4
//! ```
//!
//! A `#` anywhere on a line starts a comment. The labelling convention is
//! not part of the file; callers pass it to [`GraphSpec::build`].

use std::fs;
use std::path::Path;

use super::types::{GraphSpec, ParseError, ParseResult};

/// Parses an edge list file from a file path.
pub fn parse_file(path: &Path) -> ParseResult<GraphSpec> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses an edge list from a string.
///
/// # Example
///
/// ```
/// use graphscope::parser::edge_list::parse_str;
///
/// let spec = parse_str("3\n1 2\n2 3 # tail\n").unwrap();
/// assert_eq!(spec.vertex_count, 3);
/// assert_eq!(spec.edges, vec![(1, 2), (2, 3)]);
/// ```
pub fn parse_str(content: &str) -> ParseResult<GraphSpec> {
    let mut vertex_count: Option<i64> = None;
    let mut edges = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let data = raw.split('#').next().unwrap_or("").trim();
        if data.is_empty() {
            continue;
        }

        let fields: Vec<&str> = data.split_whitespace().collect();

        if vertex_count.is_none() {
            let [count] = fields.as_slice() else {
                return Err(syntax(line, "expected a single vertex count"));
            };
            vertex_count = Some(parse_int(line, count)?);
            continue;
        }

        let [u, v] = fields.as_slice() else {
            return Err(syntax(
                line,
                format!("expected two vertices, found {} fields", fields.len()),
            ));
        };
        edges.push((parse_int(line, u)?, parse_int(line, v)?));
    }

    let vertex_count = vertex_count.ok_or(ParseError::MissingVertexCount)?;

    Ok(GraphSpec {
        vertex_count,
        index_base: None,
        edges,
    })
}

fn parse_int(line: usize, token: &str) -> ParseResult<i64> {
    token
        .parse::<i64>()
        .map_err(|_| syntax(line, format!("'{}' is not an integer", token)))
}

fn syntax(line: usize, message: impl Into<String>) -> ParseError {
    ParseError::Syntax {
        line,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_EDGE_LIST: &str = "\
# reference graph
9
1 2
1 4

2 3   # trailing comment
";

    #[test]
    fn test_parse_str_valid() {
        let spec = parse_str(SAMPLE_EDGE_LIST).unwrap();

        assert_eq!(spec.vertex_count, 9);
        assert_eq!(spec.edges, vec![(1, 2), (1, 4), (2, 3)]);
        assert!(spec.index_base.is_none());
    }

    #[test]
    fn test_parse_str_vertex_count_only() {
        let spec = parse_str("0\n").unwrap();
        assert_eq!(spec.vertex_count, 0);
        assert!(spec.edges.is_empty());
    }

    #[test]
    fn test_parse_str_keeps_negative_count_for_validation() {
        let spec = parse_str("-4").unwrap();
        assert_eq!(spec.vertex_count, -4);
    }

    #[test]
    fn test_parse_str_missing_vertex_count() {
        let result = parse_str("# nothing here\n\n");
        assert!(matches!(result.unwrap_err(), ParseError::MissingVertexCount));
    }

    #[test]
    fn test_parse_str_bad_header() {
        let err = parse_str("9 10\n").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 1, .. }));
    }

    #[test]
    fn test_parse_str_bad_edge_reports_line() {
        let err = parse_str("3\n1 2\n2\n").unwrap_err();
        match err {
            ParseError::Syntax { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("expected two vertices"));
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_str_non_integer() {
        let err = parse_str("3\n1 b\n").unwrap_err();
        assert_eq!(err.to_string(), "Line 2: 'b' is not an integer");
    }

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE_EDGE_LIST).unwrap();

        let spec = parse_file(file.path()).unwrap();
        assert_eq!(spec.edges.len(), 3);
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file(Path::new("/definitely/not/here.txt"));
        assert!(matches!(result.unwrap_err(), ParseError::IoError(_)));
    }
}
