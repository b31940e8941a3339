//! Shared test utilities for bikedash
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::config::Config;
    use crate::dashboard::Dashboard;
    use crate::listing::parser::parse;
    use crate::listing::{Field, Listing, RecordSet};

    /// Three-row listing text with only city and brand columns
    pub const SCENARIO_CSV: &str = "city,brand\nDelhi,Hero\nMumbai,Honda\nDelhi,Honda";

    /// Test fixture with every schema column
    pub const TEST_CSV: &str = "\
bike_name,price,city,kms_driven,owner,age,power,brand
TVS Star City Plus Dual Tone 110cc,35000.0,Ahmedabad,17654.0,First Owner,3.0,110.0,TVS
Royal Enfield Classic 350cc,119900.0,Delhi,11000.0,First Owner,4.0,350.0,Royal Enfield
Triumph Daytona 675R,600000.0,Delhi,110.0,First Owner,8.0,675.0,Triumph
TVS Apache RTR 180cc,65000.0,Bangalore,16329.0,First Owner,4.0,180.0,TVS
Yamaha FZ S V 2.0 150cc-Ltd. Edition,80000.0,Bangalore,10000.0,First Owner,3.0,150.0,Yamaha
Yamaha FZs 150cc,53499.0,Delhi,25000.0,First Owner,6.0,150.0,Yamaha
Honda CB Hornet 160R  ABS DLX,85000.0,Delhi,8200.0,First Owner,3.0,160.0,Honda
Hero Splendor Plus Self Alloy 100cc,45000.0,Delhi,12645.0,First Owner,3.0,100.0,Hero
Royal Enfield Thunderbird X 350cc,145000.0,Bangalore,9190.0,First Owner,3.0,350.0,Royal Enfield
Royal Enfield Classic Desert Storm 500cc,88000.0,Delhi,19000.0,Second Owner,7.0,500.0,Royal Enfield
";

    pub fn scenario_records() -> RecordSet {
        parse(SCENARIO_CSV).unwrap().records
    }

    /// Build a record set from (field, value) pairs per listing
    pub fn listings(rows: &[&[(Field, &str)]]) -> RecordSet {
        rows.iter()
            .map(|row| {
                row.iter()
                    .fold(Listing::new(), |listing, (field, value)| listing.with(*field, *value))
            })
            .collect()
    }

    /// Helper to create a Dashboard over the full fixture with default config
    pub fn test_dashboard() -> Dashboard {
        Dashboard::from_parsed(parse(TEST_CSV).unwrap(), &Config::default())
    }
}
