use anyhow::{Context, Result};
use std::io::{self, BufRead};
use std::path::Path;

/// Read a newline-separated wordlist. Surrounding whitespace is trimmed and
/// blank lines are skipped; anything else is returned as-is, since the index
/// does its own filtering.
pub fn load_wordlist<P>(filename: P) -> Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let filename = filename.as_ref();
    let file = std::fs::File::open(filename)
        .with_context(|| format!("failed to open wordlist {}", filename.display()))?;
    read_wordlist(io::BufReader::new(file))
        .with_context(|| format!("failed to read wordlist {}", filename.display()))
}

pub fn read_wordlist<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = vec![];
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn reads_lines() {
        let input = "stop\n  tops \n\n\r\nA-1\n";
        let words = read_wordlist(input.as_bytes()).unwrap();
        assert_eq!(words, vec!["stop", "tops", "A-1"]);
    }

    #[test]
    fn loads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "listen").unwrap();
        writeln!(file, "silent").unwrap();
        file.flush().unwrap();

        let words = load_wordlist(file.path()).unwrap();
        assert_eq!(words, vec!["listen", "silent"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = load_wordlist(&path).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }
}
