//! Tag-Length-Value record reader.
//!
//! A stream is a sequence of `tag(2) + length(2) + value(length)` records.
//! The same reader is used for the top level and for nested sub-templates.

use crate::error::QrError;

/// One record of a TLV stream, borrowing from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvRecord<'a> {
    /// Two-digit tag.
    pub tag: &'a str,
    /// Value of exactly the declared length.
    pub value: &'a str,
    /// Offset of the record header within the stream.
    pub offset: usize,
}

/// Iterator over the records of a TLV stream.
///
/// Yields `Err` once on the first structural problem and then stops.
pub struct TlvReader<'a> {
    data: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> TlvReader<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            data,
            pos: 0,
            failed: false,
        }
    }

    fn read_record(&mut self) -> Result<TlvRecord<'a>, QrError> {
        let offset = self.pos;
        let header = self
            .data
            .get(offset..offset + 4)
            .ok_or(QrError::Truncated { offset })?;

        let bytes = header.as_bytes();
        if !bytes[..2].iter().all(u8::is_ascii_digit) {
            return Err(QrError::InvalidTag {
                offset,
                tag: header.chars().take(2).collect(),
            });
        }
        // The tag is ASCII, so both slices fall on char boundaries.
        let tag = &header[..2];

        let length_field = &header[2..];
        if !is_ascii_digits(length_field) {
            return Err(QrError::InvalidLength {
                offset,
                length: length_field.to_string(),
            });
        }
        // Two ASCII digits always fit.
        let declared: usize = length_field.parse().unwrap_or_default();

        let start = offset + 4;
        let remaining = self.data.len() - start;
        if declared > remaining {
            return Err(QrError::LengthOverrun {
                offset,
                declared,
                remaining,
            });
        }

        let value = self
            .data
            .get(start..start + declared)
            .ok_or(QrError::LengthOverrun {
                offset,
                declared,
                remaining,
            })?;

        self.pos = start + declared;
        Ok(TlvRecord { tag, value, offset })
    }
}

impl<'a> Iterator for TlvReader<'a> {
    type Item = Result<TlvRecord<'a>, QrError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.data.len() {
            return None;
        }

        let record = self.read_record();
        if record.is_err() {
            self.failed = true;
        }
        Some(record)
    }
}

/// Read a whole stream, failing on the first malformed record.
pub fn parse_records(data: &str) -> Result<Vec<TlvRecord<'_>>, QrError> {
    TlvReader::new(data).collect()
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
