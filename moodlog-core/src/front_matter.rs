//! YAML front matter holding an entry's metadata.
//!
//! ```text
//! ---
//! seconds: 120
//! lowmood: 2
//! highmood: 4
//! averagemood: 3
//! ---
//! Body text, kept byte for byte.
//! ```

use crate::entry::Metadata;
use crate::prompt::RatingField;
use strum::IntoEnumIterator;

const DELIMITER: &[u8] = b"---";

#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    #[error("metadata block is not closed by a `---` line")]
    Unterminated,
    #[error("metadata block is not valid UTF-8")]
    NotUtf8,
    #[error("invalid metadata: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{field} must be between 1 and 5 (or 0 when unset), found {value}")]
    MoodOutOfRange { field: &'static str, value: u8 },
}

/// Renders the metadata block, delimiters included, ready to be followed by the body.
pub fn render(metadata: &Metadata) -> Result<Vec<u8>, serde_yaml::Error> {
    let yaml = serde_yaml::to_string(metadata)?;
    let mut out = Vec::with_capacity(yaml.len() + 8);
    out.extend_from_slice(DELIMITER);
    out.push(b'\n');
    out.extend_from_slice(yaml.as_bytes());
    out.extend_from_slice(DELIMITER);
    out.push(b'\n');
    Ok(out)
}

/// Splits `content` into its metadata and the body that follows the closing delimiter.
///
/// Content that does not open with a `---` line has no metadata block: the
/// metadata is all zeroes and the whole content is the body.
pub fn split(content: &[u8]) -> Result<(Metadata, &[u8]), FrontMatterError> {
    let (first, mut rest) = next_line(content);
    if !is_delimiter(first) {
        return Ok((Metadata::default(), content));
    }

    let header_start = content.len() - rest.len();
    loop {
        if rest.is_empty() {
            return Err(FrontMatterError::Unterminated);
        }
        let line_start = content.len() - rest.len();
        let (line, after) = next_line(rest);
        if is_delimiter(line) {
            let header = &content[header_start..line_start];
            let metadata = parse_header(header)?;
            return Ok((metadata, after));
        }
        rest = after;
    }
}

fn parse_header(header: &[u8]) -> Result<Metadata, FrontMatterError> {
    let header = std::str::from_utf8(header).map_err(|_| FrontMatterError::NotUtf8)?;
    if header.trim().is_empty() {
        return Ok(Metadata::default());
    }
    let metadata: Metadata = serde_yaml::from_str(header)?;
    for field in RatingField::iter() {
        let value = field.get(&metadata);
        if value > 5 {
            return Err(FrontMatterError::MoodOutOfRange {
                field: field.key(),
                value,
            });
        }
    }
    Ok(metadata)
}

/// Returns the next line without its terminator, and the bytes after the terminator.
fn next_line(bytes: &[u8]) -> (&[u8], &[u8]) {
    match bytes.iter().position(|&b| b == b'\n') {
        Some(i) => (&bytes[..i], &bytes[i + 1..]),
        None => (bytes, &[]),
    }
}

fn is_delimiter(line: &[u8]) -> bool {
    line.strip_suffix(b"\r").unwrap_or(line) == DELIMITER
}
