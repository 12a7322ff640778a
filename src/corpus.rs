// Document collection input — where the ordered list of paths comes from.
//
// A document's position in the list is its identity for the whole run, so
// every source preserves input order and never deduplicates.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Read paths from a manifest file, one per line.
///
/// Blank lines and lines starting with `#` are skipped. Surrounding
/// whitespace is trimmed.
pub fn read_manifest(path: &Path) -> Result<Vec<PathBuf>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    Ok(parse_manifest(&contents))
}

pub fn parse_manifest(contents: &str) -> Vec<PathBuf> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect()
}

/// Prompt for `count` paths, one line each.
///
/// Each answer is taken as-is apart from the line terminator, so an empty
/// answer becomes an empty path (which later fails to open). Running out of
/// input before `count` answers is an error.
pub fn prompt_paths<R, W>(mut input: R, mut output: W, count: usize) -> Result<Vec<PathBuf>>
where
    R: BufRead,
    W: Write,
{
    let mut paths = Vec::with_capacity(count);
    let mut line = String::new();

    for i in 0..count {
        write!(output, "Enter the path for Book-Txt{}: ", i + 1)?;
        output.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read document path")?;
        if read == 0 {
            anyhow::bail!("Input ended after {i} of {count} document paths");
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        paths.push(PathBuf::from(answer));
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_manifest_skips_blank_and_comments() {
        let paths = parse_manifest("books/a.txt\n\n# comment\n  books/b.txt  \r\nbooks/a.txt\n");
        assert_eq!(
            paths,
            vec![
                PathBuf::from("books/a.txt"),
                PathBuf::from("books/b.txt"),
                PathBuf::from("books/a.txt"),
            ]
        );
    }

    #[test]
    fn test_prompt_paths_reads_in_order() {
        let input = Cursor::new("one.txt\r\ntwo.txt\nthree.txt");
        let mut out = Vec::new();
        let paths = prompt_paths(input, &mut out, 3).unwrap();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("one.txt"),
                PathBuf::from("two.txt"),
                PathBuf::from("three.txt"),
            ]
        );
        let prompts = String::from_utf8(out).unwrap();
        assert_eq!(
            prompts,
            "Enter the path for Book-Txt1: Enter the path for Book-Txt2: Enter the path for Book-Txt3: "
        );
    }

    #[test]
    fn test_prompt_paths_keeps_empty_answers() {
        let input = Cursor::new("\nb.txt\n");
        let paths = prompt_paths(input, Vec::new(), 2).unwrap();
        assert_eq!(paths, vec![PathBuf::new(), PathBuf::from("b.txt")]);
    }

    #[test]
    fn test_prompt_paths_fails_on_early_eof() {
        let input = Cursor::new("only.txt\n");
        let err = prompt_paths(input, Vec::new(), 2).unwrap_err();
        assert!(err.to_string().contains("1 of 2"), "got {err}");
    }
}
