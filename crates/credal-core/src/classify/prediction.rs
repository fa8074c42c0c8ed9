//! Set-valued class predictions.

use credal_common::{Code, Domain};
use serde::{Deserialize, Serialize};

/// One flag per class, in class-domain order. A flagged class is plausible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prediction {
    flags: Vec<bool>,
}

impl Prediction {
    pub fn from_flags(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Number of flagged classes.
    pub fn set_size(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }

    /// Exactly one class flagged.
    pub fn is_determinate(&self) -> bool {
        self.set_size() == 1
    }

    pub fn is_flagged(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Flagged class codes, given the class domain the flags refer to.
    pub fn classes(&self, class_domain: &Domain) -> Vec<Code> {
        class_domain
            .iter()
            .zip(&self.flags)
            .filter(|(_, flag)| **flag)
            .map(|(code, _)| code)
            .collect()
    }
}

impl From<Vec<bool>> for Prediction {
    fn from(flags: Vec<bool>) -> Self {
        Self::from_flags(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_size_and_determinacy() {
        let p = Prediction::from_flags(vec![true, false, true]);
        assert_eq!(p.set_size(), 2);
        assert!(!p.is_determinate());
        assert!(Prediction::from(vec![false, true]).is_determinate());
    }

    #[test]
    fn classes_follow_domain_order() {
        let domain = Domain::new([0, 45, 55, 75]);
        let p = Prediction::from_flags(vec![false, true, false, true]);
        assert_eq!(p.classes(&domain), vec![45, 75]);
    }

    #[test]
    fn out_of_range_index_not_flagged() {
        assert!(!Prediction::from_flags(vec![true]).is_flagged(3));
    }

    #[test]
    fn serializes_as_flag_list() {
        let json = serde_json::to_string(&Prediction::from_flags(vec![true, false])).unwrap();
        assert_eq!(json, "[true,false]");
    }
}
