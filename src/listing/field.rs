//! The closed set of listing fields

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BikeDashError;

/// A column of the listing schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Name and model of the bike
    BikeName,
    /// Asking price in INR
    Price,
    /// City the bike is listed in
    City,
    /// Total kilometres driven
    KmsDriven,
    /// Ownership, e.g. "First Owner"
    Owner,
    /// Age in years
    Age,
    /// Engine displacement in cc
    Power,
    /// Manufacturer, e.g. "Royal Enfield"
    Brand,
}

impl Field {
    pub const COUNT: usize = 8;

    /// All fields in source column order
    pub const ALL: [Field; Field::COUNT] = [
        Field::BikeName,
        Field::Price,
        Field::City,
        Field::KmsDriven,
        Field::Owner,
        Field::Age,
        Field::Power,
        Field::Brand,
    ];

    /// Header name used in the source data
    pub fn name(self) -> &'static str {
        match self {
            Field::BikeName => "bike_name",
            Field::Price => "price",
            Field::City => "city",
            Field::KmsDriven => "kms_driven",
            Field::Owner => "owner",
            Field::Age => "age",
            Field::Power => "power",
            Field::Brand => "brand",
        }
    }

    /// Human readable name for headings
    pub fn title(self) -> &'static str {
        match self {
            Field::BikeName => "Bike Name",
            Field::Price => "Price",
            Field::City => "City",
            Field::KmsDriven => "Kms Driven",
            Field::Owner => "Owner",
            Field::Age => "Age",
            Field::Power => "Power",
            Field::Brand => "Brand",
        }
    }

    pub fn names() -> [&'static str; Field::COUNT] {
        Field::ALL.map(Field::name)
    }

    /// Fields whose values must read as numbers
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Field::Price | Field::KmsDriven | Field::Age | Field::Power
        )
    }

    /// Position in `Field::ALL`, used to index per-field storage
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = BikeDashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Field::ALL
            .into_iter()
            .find(|field| field.name() == trimmed)
            .ok_or_else(|| BikeDashError::UnknownField(trimmed.to_string()))
    }
}
