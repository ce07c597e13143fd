//! Indented block collection.
//!
//! MkDocs block constructs (admonitions, tabs) own every following line that
//! is blank or indented by one nesting level. This module slices such a body
//! out of a line array and de-indents it.

/// Indentation width of one nesting level in the source dialect.
pub const BLOCK_INDENT: usize = 4;

/// Body of an indented block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentedBlock<'a> {
    /// De-indented body lines, without trailing blank lines.
    pub lines: Vec<&'a str>,
    /// Index of the first line that was not consumed.
    pub next: usize,
}

/// Collect the indented block starting at `start`.
///
/// A line belongs to the block if it is empty, starts with `indent` spaces,
/// or starts with a tab. Exactly `indent` spaces are removed from each line;
/// tab-prefixed lines lose all their leading tabs. Collection stops at the
/// first line that does not belong, and that line is left for the caller.
///
/// # Example
///
/// ```
/// use docshift_convert::collect_indented;
///
/// let lines = ["    first", "", "        nested", "", "after"];
/// let block = collect_indented(&lines, 0, 4);
///
/// assert_eq!(block.lines, vec!["first", "", "    nested"]);
/// assert_eq!(block.next, 4);
/// ```
#[must_use]
pub fn collect_indented<'a>(lines: &[&'a str], start: usize, indent: usize) -> IndentedBlock<'a> {
    let mut body = Vec::new();
    let mut idx = start;

    while let Some(&line) = lines.get(idx) {
        let Some(stripped) = strip_indent(line, indent) else {
            break;
        };
        body.push(stripped);
        idx += 1;
    }

    while body.last().is_some_and(|line| line.trim().is_empty()) {
        body.pop();
    }

    IndentedBlock {
        lines: body,
        next: idx,
    }
}

/// De-indent a line, or `None` if it is not part of an indented block.
fn strip_indent(line: &str, indent: usize) -> Option<&str> {
    if line.is_empty() {
        return Some(line);
    }

    let spaces = line.bytes().take_while(|&b| b == b' ').count();
    if spaces >= indent {
        return Some(&line[indent..]);
    }

    if line.starts_with('\t') {
        return Some(line.trim_start_matches('\t'));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_until_dedent() {
        let lines = ["    one", "    two", "three"];
        let block = collect_indented(&lines, 0, BLOCK_INDENT);

        assert_eq!(block.lines, vec!["one", "two"]);
        assert_eq!(block.next, 2);
    }

    #[test]
    fn test_starts_at_offset() {
        let lines = ["!!! note", "    body", "rest"];
        let block = collect_indented(&lines, 1, BLOCK_INDENT);

        assert_eq!(block.lines, vec!["body"]);
        assert_eq!(block.next, 2);
    }

    #[test]
    fn test_blank_lines_inside_body_are_kept() {
        let lines = ["    a", "", "    b"];
        let block = collect_indented(&lines, 0, BLOCK_INDENT);

        assert_eq!(block.lines, vec!["a", "", "b"]);
        assert_eq!(block.next, 3);
    }

    #[test]
    fn test_trailing_blank_lines_are_trimmed() {
        let lines = ["    a", "", "", "next"];
        let block = collect_indented(&lines, 0, BLOCK_INDENT);

        assert_eq!(block.lines, vec!["a"]);
        // Blank lines are still consumed
        assert_eq!(block.next, 3);
    }

    #[test]
    fn test_whitespace_only_tail_is_trimmed() {
        let lines = ["    a", "        ", "x"];
        let block = collect_indented(&lines, 0, BLOCK_INDENT);

        assert_eq!(block.lines, vec!["a"]);
        assert_eq!(block.next, 2);
    }

    #[test]
    fn test_nested_indentation_preserved() {
        let lines = ["    - item", "        - child"];
        let block = collect_indented(&lines, 0, BLOCK_INDENT);

        assert_eq!(block.lines, vec!["- item", "    - child"]);
    }

    #[test]
    fn test_tab_prefixed_lines() {
        let lines = ["\tone", "\t\ttwo", "end"];
        let block = collect_indented(&lines, 0, BLOCK_INDENT);

        assert_eq!(block.lines, vec!["one", "two"]);
        assert_eq!(block.next, 2);
    }

    #[test]
    fn test_insufficient_indent_stops() {
        let lines = ["  two spaces"];
        let block = collect_indented(&lines, 0, BLOCK_INDENT);

        assert!(block.lines.is_empty());
        assert_eq!(block.next, 0);
    }

    #[test]
    fn test_other_widths() {
        let lines = ["  a", "    b", " c"];
        let block = collect_indented(&lines, 0, 2);

        assert_eq!(block.lines, vec!["a", "  b"]);
        assert_eq!(block.next, 2);
    }

    #[test]
    fn test_start_past_end() {
        let lines = ["a"];
        let block = collect_indented(&lines, 5, BLOCK_INDENT);

        assert!(block.lines.is_empty());
        assert_eq!(block.next, 5);
    }

    #[test]
    fn test_reindent_reconstructs_source() {
        let source = ["    Do not touch.", "", "    ```sh", "        rm -rf", "    ```", "", ""];
        let block = collect_indented(&source, 0, BLOCK_INDENT);

        assert!(!block.lines.last().unwrap().trim().is_empty());

        let rebuilt: Vec<String> = block
            .lines
            .iter()
            .map(|l| {
                if l.is_empty() {
                    String::new()
                } else {
                    format!("    {l}")
                }
            })
            .collect();
        let original: Vec<&str> = source
            .iter()
            .copied()
            .filter(|l| !l.trim().is_empty())
            .collect();
        let rebuilt: Vec<&str> = rebuilt
            .iter()
            .map(String::as_str)
            .filter(|l| !l.trim().is_empty())
            .collect();
        assert_eq!(rebuilt, original);
    }
}
