use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::RangeInclusive;
use std::path::Path;

use crate::error::SourceError;

/// Values accepted by a [`TextSource`] unless configured otherwise.
pub const DEFAULT_VALUE_RANGE: RangeInclusive<i32> = 1..=1000;

/**
A stream of integers that announces up front how many values it will yield.
The announced count is what a heap gets sized with.
*/
pub trait IntegerSource: Iterator<Item = Result<i32, SourceError>> {
    fn declared_count(&self) -> usize;
}

/**
Reads a leading count followed by that many integers from a text stream.
Tokens may be separated by commas, whitespace or both, and may be spread over
any number of lines. Lines are read lazily, one at a time.
*/
#[derive(Debug)]
pub struct TextSource<R> {
    reader: R,
    declared: usize,
    pending: VecDeque<String>,
    range: RangeInclusive<i32>,
    exhausted: bool,
}

impl TextSource<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead> TextSource<R> {
    pub fn new(reader: R) -> Result<Self, SourceError> {
        let mut source = Self {
            reader,
            declared: 0,
            pending: VecDeque::new(),
            range: DEFAULT_VALUE_RANGE,
            exhausted: false,
        };
        let token = source.next_token()?.ok_or(SourceError::MissingCount)?;
        source.declared = token
            .parse()
            .map_err(|_| SourceError::Parse { token })?;
        Ok(source)
    }

    pub fn with_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.range = range;
        self
    }

    fn next_token(&mut self) -> Result<Option<String>, SourceError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            if self.exhausted {
                return Ok(None);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                self.exhausted = true;
                return Ok(None);
            }
            self.pending.extend(
                line.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|token| !token.is_empty())
                    .map(str::to_owned),
            );
        }
    }

    fn parse_value(&self, token: String) -> Result<i32, SourceError> {
        let value: i32 = token
            .parse()
            .map_err(|_| SourceError::Parse { token })?;
        if !self.range.contains(&value) {
            return Err(SourceError::OutOfRange {
                value,
                min: *self.range.start(),
                max: *self.range.end(),
            });
        }
        Ok(value)
    }
}

impl<R: BufRead> Iterator for TextSource<R> {
    type Item = Result<i32, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Some(token)) => Some(self.parse_value(token)),
            Ok(None) => None,
            Err(error) => {
                // A failed read ends the stream
                self.exhausted = true;
                self.pending.clear();
                Some(Err(error))
            }
        }
    }
}

impl<R: BufRead> IntegerSource for TextSource<R> {
    fn declared_count(&self) -> usize {
        self.declared
    }
}
