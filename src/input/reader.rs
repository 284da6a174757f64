use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

/// Upper bound on text sent in one request.
const MAX_INPUT_SIZE: usize = 64 * 1024; // 64KB

pub struct InputReader;

impl InputReader {
    /// Reads the text to translate.
    ///
    /// Positional words win over `--file`, which wins over stdin.
    pub fn read(words: &[String], file_path: Option<&str>) -> Result<String> {
        if !words.is_empty() {
            return Self::read_words(words);
        }
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    fn read_words(words: &[String]) -> Result<String> {
        let text = words.join(" ");
        check_size(text.len(), "Argument")?;
        Ok(text)
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        check_size(metadata.len() as usize, "File")?;

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);
            check_size(buffer.len(), "Input")?;
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn check_size(size: usize, what: &str) -> Result<()> {
    if size > MAX_INPUT_SIZE {
        bail!(
            "{what} size ({:.1} KB) exceeds maximum allowed size (64 KB).\n\n\
             Translate a shorter selection.",
            size as f64 / 1024.0
        );
    }
    Ok(())
}
