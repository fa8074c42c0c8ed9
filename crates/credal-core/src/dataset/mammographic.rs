//! Mammographic mass dataset (UCI), embedded.
//!
//! Columns: BI-RADS assessment, patient age, mass shape, mass margin, mass
//! density, severity (0 benign, 1 malignant). Age is bucketed and two
//! BI-RADS typos in the raw file are corrected on load.

use credal_common::{Code, Domain, Result, Row};

use super::parse_rows;

pub const COL_BIRADS: usize = 0;
pub const COL_AGE: usize = 1;
pub const COL_SHAPE: usize = 2;
pub const COL_MARGIN: usize = 3;
pub const COL_DENSITY: usize = 4;
pub const COL_SEVERITY: usize = 5;

pub const NUM_COLUMNS: usize = 6;

/// Every non-class column, for severity prediction.
pub const ATTRIBUTE_COLUMNS: [usize; 5] = [COL_BIRADS, COL_AGE, COL_SHAPE, COL_MARGIN, COL_DENSITY];

const RAW: &str = include_str!("../../data/mammographic_masses.data");

/// Raw embedded CSV text.
pub fn raw() -> &'static str {
    RAW
}

/// Legal codes for each column, after [`process_row`].
pub fn domains() -> Vec<Domain> {
    vec![
        Domain::range(1, 7),
        Domain::new([0, 45, 55, 75]),
        Domain::range(1, 5),
        Domain::range(1, 6),
        Domain::range(1, 5),
        Domain::range(0, 2),
    ]
}

/// Bucket a raw age in years.
pub fn discretize_age(age: Code) -> Code {
    if age >= 75 {
        75
    } else if age >= 55 {
        55
    } else if age >= 45 {
        45
    } else {
        0
    }
}

/// Discretize age and fix BI-RADS typos (0 → 1, 55 → 5).
pub fn process_row(mut row: Row) -> Row {
    if let Some(age) = row.get_mut(COL_AGE) {
        *age = discretize_age(*age);
    }
    if let Some(birads) = row.get_mut(COL_BIRADS) {
        *birads = match *birads {
            0 => 1,
            55 => 5,
            other => other,
        };
    }
    row
}

/// Parse mammographic-layout text (six columns, raw ages).
pub fn parse(text: &str) -> Result<Vec<Row>> {
    parse_rows(text, NUM_COLUMNS, process_row)
}

/// The embedded dataset: 830 complete rows.
pub fn load() -> Result<Vec<Row>> {
    parse(RAW)
}
