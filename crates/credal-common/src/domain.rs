//! Categorical codes and the finite column domains they are drawn from.
//!
//! Every column of a dataset carries an enumerated set of legal integer
//! codes. Domains may be sparse or non-contiguous (age buckets are
//! `{0, 45, 55, 75}`), so they are stored as ordered value lists rather
//! than ranges. The order of a class domain fixes the order of prediction
//! flags.

use serde::{Deserialize, Serialize};

/// Integer code of a categorical value.
pub type Code = i64;

/// One observation: one code per column.
pub type Row = Vec<Code>;

/// Ordered, duplicate-free set of legal codes for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Code>", into = "Vec<Code>")]
pub struct Domain {
    values: Vec<Code>,
}

impl Domain {
    /// Create a domain from values in enumeration order.
    ///
    /// Repeated values keep their first position.
    pub fn new(values: impl IntoIterator<Item = Code>) -> Self {
        let mut unique: Vec<Code> = Vec::new();
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        Self { values: unique }
    }

    /// Contiguous domain `start..end` (end exclusive).
    pub fn range(start: Code, end: Code) -> Self {
        Self::new(start..end)
    }

    /// Number of legal values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: Code) -> bool {
        self.values.contains(&value)
    }

    /// Position of `value` in enumeration order.
    pub fn index_of(&self, value: Code) -> Option<usize> {
        self.values.iter().position(|&v| v == value)
    }

    pub fn values(&self) -> &[Code] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = Code> + '_ {
        self.values.iter().copied()
    }
}

impl From<Vec<Code>> for Domain {
    fn from(values: Vec<Code>) -> Self {
        Domain::new(values)
    }
}

impl From<Domain> for Vec<Code> {
    fn from(domain: Domain) -> Self {
        domain.values
    }
}

impl FromIterator<Code> for Domain {
    fn from_iter<I: IntoIterator<Item = Code>>(iter: I) -> Self {
        Domain::new(iter)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "{{{}}}", parts.join(","))
    }
}
