//! Filter state and evaluation
//!
//! `FilterState` holds one [`Selection`] per field. Constraints on different
//! fields combine with AND; a field without an entry is unconstrained.

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use super::selection::Selection;
use crate::error::BikeDashError;
use crate::listing::{Field, Listing, RecordSet};

/// Active equality constraints
///
/// Only non-wildcard selections are stored, so the default state is
/// all-wildcard and filters nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<Field, String>")]
pub struct FilterState {
    constraints: BTreeMap<Field, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, selection: Selection) {
        match selection {
            Selection::All => {
                self.constraints.remove(&field);
            }
            Selection::Exactly(value) => {
                self.constraints.insert(field, value);
            }
        }
    }

    /// Return one field to the wildcard
    pub fn clear(&mut self, field: Field) {
        self.constraints.remove(&field);
    }

    /// Return every field to the wildcard
    pub fn reset(&mut self) {
        self.constraints.clear();
    }

    pub fn selection(&self, field: Field) -> Selection {
        self.constraints
            .get(&field)
            .map_or(Selection::All, |value| Selection::Exactly(value.clone()))
    }

    pub fn is_unfiltered(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Non-wildcard constraints in field order
    pub fn active(&self) -> impl Iterator<Item = (Field, &str)> {
        self.constraints
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.constraints
            .iter()
            .all(|(field, value)| listing.get(*field) == Some(value.as_str()))
    }

    /// The listings of `records` that satisfy every constraint, in order
    pub fn apply(&self, records: &RecordSet) -> RecordSet {
        if self.is_unfiltered() {
            return records.clone();
        }
        records.retain_matching(|listing| self.matches(listing))
    }
}

impl From<BTreeMap<Field, String>> for FilterState {
    fn from(table: BTreeMap<Field, String>) -> Self {
        let mut state = FilterState::new();
        for (field, value) in table {
            state.set(field, Selection::parse(&value));
        }
        state
    }
}

/// Parse a `FIELD=VALUE` filter expression
///
/// The value is taken verbatim (apart from surrounding whitespace), so it may
/// itself contain `=`. A value of `all` yields the wildcard.
pub fn parse_expression(expression: &str) -> Result<(Field, Selection), BikeDashError> {
    let (name, value) = expression
        .split_once('=')
        .ok_or_else(|| BikeDashError::InvalidFilter(expression.to_string()))?;

    let value = value.trim();
    if value.is_empty() {
        return Err(BikeDashError::InvalidFilter(expression.to_string()));
    }

    let field = name.parse::<Field>()?;
    Ok((field, Selection::parse(value)))
}

/// Distinct present values of `field`, in order of first occurrence
///
/// These are the choices offered when picking a selection for the field.
pub fn options(records: &RecordSet, field: Field) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(|listing| listing.get(field))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "filter_state_tests.rs"]
mod filter_state_tests;
