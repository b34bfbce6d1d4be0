use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read the newline-delimited bearer token list. Lines are trimmed and blank
/// lines skipped, so an empty credential is never sent to the API. A missing
/// file or a file with no usable tokens is a fatal configuration error.
pub fn load_bearer_tokens(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bearer token file {}", path.display()))?;

    let tokens: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if tokens.is_empty() {
        anyhow::bail!("No bearer tokens found in {}", path.display());
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn reads_one_token_per_line() {
        let file = write_file("token-one\ntoken-two\ntoken-three\n");
        let tokens = load_bearer_tokens(file.path()).unwrap();
        assert_eq!(tokens, vec!["token-one", "token-two", "token-three"]);
    }

    #[test]
    fn skips_blank_lines_and_trims_whitespace() {
        let file = write_file("  token-one  \n\n   \ntoken-two\n\n");
        let tokens = load_bearer_tokens(file.path()).unwrap();
        assert_eq!(tokens, vec!["token-one", "token-two"]);
    }

    #[test]
    fn empty_file_is_an_error() {
        let file = write_file("");
        assert!(load_bearer_tokens(file.path()).is_err());
    }

    #[test]
    fn whitespace_only_file_is_an_error() {
        let file = write_file("\n   \n\t\n");
        assert!(load_bearer_tokens(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_bearer_tokens(Path::new("/nonexistent/data.txt")).unwrap_err();
        assert!(err.to_string().contains("bearer token file"));
    }
}
