//! Console question/answer loop that fills in unset mood ratings.

use once_cell::sync::Lazy;
use regex::bytes::Regex;
use std::io::{self, BufRead, Write};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};
use tracing::debug;

use crate::entry::Metadata;
use crate::error::EntryError;

static RATING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-5]$").expect("rating pattern is valid"));

pub const UNRECOGNIZED_INPUT: &str = "Unrecognized input";

/// A mood rating that can be asked for and set. Variants iterate in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
pub enum RatingField {
    HighMood,
    LowMood,
    AverageMood,
}

impl RatingField {
    pub fn prompt(self) -> &'static str {
        match self {
            RatingField::HighMood => "High mood for the day? (1-5) ",
            RatingField::LowMood => "Low mood for the day? (1-5) ",
            RatingField::AverageMood => "Average mood for the day? (1-5) ",
        }
    }

    /// Key of this field in the metadata block.
    pub fn key(self) -> &'static str {
        match self {
            RatingField::HighMood => "highmood",
            RatingField::LowMood => "lowmood",
            RatingField::AverageMood => "averagemood",
        }
    }

    pub fn get(self, metadata: &Metadata) -> u8 {
        match self {
            RatingField::HighMood => metadata.high_mood,
            RatingField::LowMood => metadata.low_mood,
            RatingField::AverageMood => metadata.average_mood,
        }
    }

    pub fn set(self, metadata: &mut Metadata, rating: u8) {
        match self {
            RatingField::HighMood => metadata.high_mood = rating,
            RatingField::LowMood => metadata.low_mood = rating,
            RatingField::AverageMood => metadata.average_mood = rating,
        }
    }

    /// Fields of `metadata` still at 0, in prompt order.
    pub fn unset(metadata: &Metadata) -> Vec<RatingField> {
        RatingField::iter()
            .filter(|field| field.get(metadata) == 0)
            .collect()
    }
}

/// Asks for each unset rating on `output` and reads answers line by line from `input`.
///
/// An answer must be a single digit from 1 to 5 once surrounding whitespace is
/// trimmed; anything else is rejected and the same question is asked again.
/// Ratings already set are never asked for nor overwritten. If `input` fails or
/// runs dry the error is returned, keeping whatever was answered so far.
pub fn prompt_for_metadata<R: BufRead, W: Write>(
    metadata: &mut Metadata,
    input: &mut R,
    output: &mut W,
) -> Result<(), EntryError> {
    for field in RatingField::unset(metadata) {
        loop {
            write!(output, "{}", field.prompt()).map_err(EntryError::OutputStream)?;
            output.flush().map_err(EntryError::OutputStream)?;

            let answer = read_answer(input)?;
            let answer = answer.trim_ascii();
            if RATING.is_match(answer) {
                // a single ASCII digit
                let rating = answer[0] - b'0';
                field.set(metadata, rating);
                debug!(field = field.as_ref(), rating, "rating set");
                break;
            }
            writeln!(output, "{UNRECOGNIZED_INPUT}").map_err(EntryError::OutputStream)?;
        }
    }
    Ok(())
}

/// Reads one raw line. Answers are not required to be UTF-8; those that aren't
/// simply never match a rating.
fn read_answer<R: BufRead>(input: &mut R) -> Result<Vec<u8>, EntryError> {
    let mut line = Vec::new();
    let read = input
        .read_until(b'\n', &mut line)
        .map_err(EntryError::InputStream)?;
    if read == 0 {
        return Err(EntryError::InputStream(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before an answer was given",
        )));
    }
    Ok(line)
}
