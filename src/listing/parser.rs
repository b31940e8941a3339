//! Listing text parser
//!
//! Turns comma separated text (header line first) into a [`RecordSet`].
//! There is no quoting or escaping: every comma is a column separator.

use memchr::memchr;
use serde::Deserialize;

use super::field::Field;
use super::record::{Listing, RecordSet};
use crate::error::{BikeDashError, RowError};

/// What to do with data lines that do not fit the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Keep the row: short rows are padded with absent values, extra columns
    /// are dropped, non-numeric numbers stay as text. Issues become warnings.
    #[default]
    Lenient,
    /// Drop any row with an issue and report it as rejected
    Strict,
}

/// Outcome of parsing a listing source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parsed {
    pub records: RecordSet,
    /// Issues found on rows that were kept
    pub warnings: Vec<RowError>,
    /// First issue of every row that was dropped
    pub rejected: Vec<RowError>,
    /// Header names that are not part of the listing schema
    pub ignored_columns: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListingParser {
    policy: RowPolicy,
}

impl ListingParser {
    pub fn new(policy: RowPolicy) -> Self {
        Self { policy }
    }

    pub fn parse(&self, text: &str) -> Result<Parsed, BikeDashError> {
        let mut lines = Lines::new(text).filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines.next().ok_or(BikeDashError::MissingHeader)?;
        let mut parsed = Parsed::default();
        let columns = resolve_header(header, &mut parsed.ignored_columns)?;

        let mut listings = Vec::new();
        for (line_number, line) in lines {
            let (listing, issues) = parse_row(line_number, line, &columns);

            if issues.is_empty() {
                listings.push(listing);
                continue;
            }

            match self.policy {
                RowPolicy::Lenient => {
                    for issue in &issues {
                        log::warn!("Keeping malformed row: {}", issue);
                    }
                    parsed.warnings.extend(issues);
                    listings.push(listing);
                }
                RowPolicy::Strict => {
                    if let Some(first) = issues.into_iter().next() {
                        log::warn!("Rejecting malformed row: {}", first);
                        parsed.rejected.push(first);
                    }
                }
            }
        }

        log::debug!(
            "Parsed {} listings ({} warnings, {} rejected)",
            listings.len(),
            parsed.warnings.len(),
            parsed.rejected.len()
        );

        parsed.records = RecordSet::new(listings);
        Ok(parsed)
    }
}

/// Parse with the lenient policy
pub fn parse(text: &str) -> Result<Parsed, BikeDashError> {
    ListingParser::default().parse(text)
}

/// Map header columns to schema fields; `None` marks an ignored column
fn resolve_header(
    header: &str,
    ignored: &mut Vec<String>,
) -> Result<Vec<Option<Field>>, BikeDashError> {
    let mut seen = [false; Field::COUNT];
    let mut columns = Vec::new();

    for name in header.split(',').map(str::trim) {
        match name.parse::<Field>() {
            Ok(field) => {
                if seen[field.index()] {
                    return Err(BikeDashError::DuplicateColumn(name.to_string()));
                }
                seen[field.index()] = true;
                columns.push(Some(field));
            }
            Err(_) => {
                log::warn!("Ignoring unknown column '{}'", name);
                ignored.push(name.to_string());
                columns.push(None);
            }
        }
    }

    Ok(columns)
}

fn parse_row(
    line_number: usize,
    line: &str,
    columns: &[Option<Field>],
) -> (Listing, Vec<RowError>) {
    let mut listing = Listing::new();
    let mut issues = Vec::new();
    let mut found = 0;

    for (index, raw) in line.split(',').enumerate() {
        found += 1;
        let Some(Some(field)) = columns.get(index) else {
            continue;
        };

        // An empty cell carries no value, same as a short row
        let value = raw.trim();
        if value.is_empty() {
            continue;
        }
        if field.is_numeric() && !is_number(value) {
            issues.push(RowError::InvalidNumber {
                line: line_number,
                field: *field,
                value: value.to_string(),
            });
        }
        listing.set(*field, value);
    }

    if found != columns.len() {
        issues.insert(
            0,
            RowError::ColumnCount {
                line: line_number,
                expected: columns.len(),
                found,
            },
        );
    }

    (listing, issues)
}

fn is_number(value: &str) -> bool {
    value.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Line iterator yielding 1-based line numbers, tolerant of `\r\n`
struct Lines<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line: 0,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        let rest = &self.text[self.pos..];
        let line = match memchr(b'\n', rest.as_bytes()) {
            Some(end) => {
                self.pos += end + 1;
                &rest[..end]
            }
            None => {
                self.pos = self.text.len();
                rest
            }
        };
        self.line += 1;

        Some((self.line, line.strip_suffix('\r').unwrap_or(line)))
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
