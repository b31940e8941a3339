//! Fallback listings used when the real source cannot be loaded

use crate::config::FallbackData;
use crate::listing::RecordSet;
use crate::listing::parser::parse;

/// Bundled sample listings
pub const SAMPLE_LISTINGS: &str = include_str!("../../data/sample_listings.csv");

pub fn fallback_records(kind: FallbackData) -> RecordSet {
    match kind {
        FallbackData::Empty => RecordSet::empty(),
        FallbackData::Sample => match parse(SAMPLE_LISTINGS) {
            Ok(parsed) => parsed.records,
            Err(e) => {
                log::error!("Bundled sample listings are unreadable: {}", e);
                RecordSet::empty()
            }
        },
    }
}
