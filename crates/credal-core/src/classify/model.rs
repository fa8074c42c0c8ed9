//! Frequency model: raw class and (attribute, class) counts.
//!
//! Counts are stored in hash maps keyed by code; a key that never occurred
//! in training reads as zero. No smoothing happens here.

use std::collections::HashMap;

use credal_common::{Code, Domain, Error, Result, Row};
use tracing::debug;

/// Everything needed to train a model except the rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSetup {
    pub domains: Vec<Domain>,
    pub class_column: usize,
    pub attribute_columns: Vec<usize>,
    /// Imprecise Dirichlet perturbation `s`.
    pub perturbation: f64,
}

impl TrainingSetup {
    pub fn new(
        domains: Vec<Domain>,
        class_column: usize,
        attribute_columns: Vec<usize>,
        perturbation: f64,
    ) -> Self {
        Self {
            domains,
            class_column,
            attribute_columns,
            perturbation,
        }
    }

    pub fn train(&self, rows: &[Row]) -> Result<FrequencyModel> {
        FrequencyModel::train(
            &self.domains,
            rows,
            self.class_column,
            &self.attribute_columns,
            self.perturbation,
        )
    }
}

/// Immutable counts from one training partition.
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    domains: Vec<Domain>,
    class_column: usize,
    attribute_columns: Vec<usize>,
    n: usize,
    class_counts: HashMap<Code, usize>,
    joint_counts: HashMap<usize, HashMap<(Code, Code), usize>>,
    perturbation: f64,
}

/// Check every value of every row against its column domain.
pub fn check_rows(domains: &[Domain], rows: &[Row]) -> Result<()> {
    for (index, row) in rows.iter().enumerate() {
        if row.len() != domains.len() {
            return Err(Error::RowWidth {
                row: index,
                expected: domains.len(),
                found: row.len(),
            });
        }
        for (column, (&value, domain)) in row.iter().zip(domains).enumerate() {
            if !domain.contains(value) {
                return Err(Error::DomainViolation {
                    row: index,
                    column,
                    value,
                });
            }
        }
    }
    Ok(())
}

fn check_column(column: usize, domains: &[Domain]) -> Result<()> {
    if column >= domains.len() {
        return Err(Error::InvalidColumn {
            column,
            columns: domains.len(),
        });
    }
    if domains[column].is_empty() {
        return Err(Error::invalid_parameter(
            "domains",
            format!("column {} has an empty domain", column),
        ));
    }
    Ok(())
}

impl FrequencyModel {
    /// Count classes and (attribute, class) pairs over `rows`.
    ///
    /// Fails if any row value lies outside its column domain, if a column
    /// index is out of range, or if `perturbation` is negative or not finite.
    pub fn train(
        domains: &[Domain],
        rows: &[Row],
        class_column: usize,
        attribute_columns: &[usize],
        perturbation: f64,
    ) -> Result<Self> {
        if !perturbation.is_finite() || perturbation < 0.0 {
            return Err(Error::invalid_parameter(
                "perturbation",
                format!("must be finite and non-negative, got {}", perturbation),
            ));
        }
        check_column(class_column, domains)?;
        for &column in attribute_columns {
            check_column(column, domains)?;
        }
        check_rows(domains, rows)?;

        let mut class_counts: HashMap<Code, usize> = HashMap::new();
        let mut joint_counts: HashMap<usize, HashMap<(Code, Code), usize>> = attribute_columns
            .iter()
            .map(|&column| (column, HashMap::new()))
            .collect();

        for row in rows {
            let class = row[class_column];
            *class_counts.entry(class).or_insert(0) += 1;
            for &column in attribute_columns {
                if let Some(table) = joint_counts.get_mut(&column) {
                    *table.entry((row[column], class)).or_insert(0) += 1;
                }
            }
        }

        debug!(
            rows = rows.len(),
            classes = class_counts.len(),
            attributes = attribute_columns.len(),
            "frequency model trained"
        );

        Ok(Self {
            domains: domains.to_vec(),
            class_column,
            attribute_columns: attribute_columns.to_vec(),
            n: rows.len(),
            class_counts,
            joint_counts,
            perturbation,
        })
    }

    /// Total number of training rows.
    pub fn n(&self) -> usize {
        self.n
    }

    /// `n(c)`; zero for a class never seen.
    pub fn class_count(&self, class: Code) -> usize {
        self.class_counts.get(&class).copied().unwrap_or(0)
    }

    /// `n(a = value, c)`; zero for a pair never seen.
    pub fn joint_count(&self, column: usize, value: Code, class: Code) -> usize {
        self.joint_counts
            .get(&column)
            .and_then(|table| table.get(&(value, class)))
            .copied()
            .unwrap_or(0)
    }

    pub fn perturbation(&self) -> f64 {
        self.perturbation
    }

    pub fn class_column(&self) -> usize {
        self.class_column
    }

    pub fn attribute_columns(&self) -> &[usize] {
        &self.attribute_columns
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Domain of the class column; its order fixes prediction flag order.
    pub fn class_domain(&self) -> &Domain {
        &self.domains[self.class_column]
    }

    /// Domain of any column.
    pub fn domain(&self, column: usize) -> Option<&Domain> {
        self.domains.get(column)
    }

    /// Value of attribute `column` in a test row.
    pub fn attribute_value(&self, row: &[Code], column: usize) -> Result<Code> {
        row.get(column).copied().ok_or(Error::InvalidColumn {
            column,
            columns: row.len(),
        })
    }

    /// Position of the row's true class in the class domain.
    pub fn true_class_index(&self, row: &[Code]) -> Result<usize> {
        let class = self.attribute_value(row, self.class_column)?;
        self.class_domain().index_of(class).ok_or_else(|| {
            Error::invalid_parameter(
                "row",
                format!(
                    "class value {} is not in the class domain {}",
                    class,
                    self.class_domain()
                ),
            )
        })
    }
}
