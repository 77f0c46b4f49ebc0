//! Store name lists
//!
//! Store-hours and price-change requests can cover several stores at once. The
//! wire format accepts either a single string or an array of strings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreNames {
    One(String),
    Many(Vec<String>),
}

impl Default for StoreNames {
    fn default() -> Self {
        StoreNames::Many(Vec::new())
    }
}

impl StoreNames {
    /// Trim the inputs and drop blank ones; a single store collapses to `One`
    pub fn from_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = inputs
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if names.len() == 1 {
            StoreNames::One(names.remove(0))
        } else {
            StoreNames::Many(names)
        }
    }

    pub fn names(&self) -> Vec<&str> {
        match self {
            StoreNames::One(name) => vec![name.as_str()],
            StoreNames::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names().iter().all(|n| n.trim().is_empty())
    }

    /// Comma separated, as the back office list expects
    pub fn joined(&self) -> String {
        self.names().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_inputs_collapses_single() {
        assert_eq!(
            StoreNames::from_inputs(["  Downtown LA ", ""]),
            StoreNames::One("Downtown LA".into())
        );
        assert!(StoreNames::from_inputs(["", " "]).is_empty());
    }

    #[test]
    fn test_wire_accepts_string_or_list() {
        let one: StoreNames = serde_json::from_str("\"Irvine\"").unwrap();
        let many: StoreNames = serde_json::from_str("[\"Irvine\",\"Tustin\"]").unwrap();
        assert_eq!(one.joined(), "Irvine");
        assert_eq!(many.joined(), "Irvine, Tustin");
    }
}
