//! Fuzz target for training and prediction on small categorical tables.
//!
//! Any in-domain training set and test row must give a non-empty
//! prediction from every method when the perturbation is positive.

#![no_main]

use arbitrary::Arbitrary;
use credal_common::{Domain, Row};
use credal_config::Method;
use credal_core::classify::{FrequencyModel, Predictor};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    rows: Vec<[u8; 3]>,
    test: [u8; 3],
    perturbation: u8,
}

fn to_row(raw: [u8; 3]) -> Row {
    vec![i64::from(raw[0] % 3), i64::from(raw[1] % 2), i64::from(raw[2] % 4)]
}

fuzz_target!(|input: Input| {
    let domains = vec![Domain::range(0, 3), Domain::range(0, 2), Domain::range(0, 4)];
    let rows: Vec<Row> = input.rows.iter().copied().map(to_row).collect();
    let s = 0.25 + f64::from(input.perturbation) / 16.0;

    let Ok(model) = FrequencyModel::train(&domains, &rows, 0, &[1, 2], s) else {
        return;
    };
    let test = to_row(input.test);
    for method in Method::ALL {
        if let Ok(prediction) = method.predict(&model, &test) {
            assert!(prediction.set_size() >= 1, "{} predicted no class", method);
        }
    }
});
