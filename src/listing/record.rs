use std::sync::Arc;

use super::field::Field;

/// One bike listing
///
/// Each field is either absent (the source row had no column for it, or the
/// column was short) or holds the trimmed source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    values: [Option<String>; Field::COUNT],
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for fixtures
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = Some(value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    /// Numeric reading of a field, `None` when absent or not a finite number
    pub fn number(&self, field: Field) -> Option<f64> {
        self.get(field)
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|n| n.is_finite())
    }

    pub fn price(&self) -> Option<f64> {
        self.number(Field::Price)
    }
}

/// An ordered, immutable collection of listings
///
/// Cloning is cheap: listings are shared, so a filtered set holds handles to
/// the same listings as the set it was filtered from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    listings: Vec<Arc<Listing>>,
}

impl RecordSet {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: listings.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter().map(Arc::as_ref)
    }

    pub fn get(&self, index: usize) -> Option<&Listing> {
        self.listings.get(index).map(Arc::as_ref)
    }

    /// Keep the listings for which `predicate` holds, preserving order
    pub fn retain_matching<P>(&self, mut predicate: P) -> RecordSet
    where
        P: FnMut(&Listing) -> bool,
    {
        RecordSet {
            listings: self
                .listings
                .iter()
                .filter(|listing| predicate(listing))
                .cloned()
                .collect(),
        }
    }
}

impl FromIterator<Listing> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Listing>>(iter: I) -> Self {
        RecordSet::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_listing_has_no_values() {
        let listing = Listing::new();
        for field in Field::ALL {
            assert_eq!(listing.get(field), None);
        }
    }

    #[test]
    fn test_number_parses_numeric_text() {
        let listing = Listing::new()
            .with(Field::Price, "35000.0")
            .with(Field::Power, "150");
        assert_eq!(listing.price(), Some(35000.0));
        assert_eq!(listing.number(Field::Power), Some(150.0));
    }

    #[test]
    fn test_number_rejects_non_numeric_and_non_finite() {
        let listing = Listing::new()
            .with(Field::Price, "call for price")
            .with(Field::Age, "NaN")
            .with(Field::KmsDriven, "inf");
        assert_eq!(listing.price(), None);
        assert_eq!(listing.number(Field::Age), None);
        assert_eq!(listing.number(Field::KmsDriven), None);
    }

    #[test]
    fn test_retain_matching_preserves_order_and_shares_listings() {
        let set: RecordSet = ["Delhi", "Mumbai", "Delhi"]
            .into_iter()
            .map(|city| Listing::new().with(Field::City, city))
            .collect();

        let delhi = set.retain_matching(|l| l.get(Field::City) == Some("Delhi"));

        assert_eq!(delhi.len(), 2);
        assert!(Arc::ptr_eq(&delhi.listings[0], &set.listings[0]));
        assert!(Arc::ptr_eq(&delhi.listings[1], &set.listings[2]));
    }
}
