//! The five search structures measured by the benchmark harness.
//!
//! Each timing line in the log starts with the algorithm's tag digit:
//! 1 linear search, 2 binary search tree, 3 red-black tree, 4 hash table, 5 multimap.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Algorithm {
    LinearSearch,
    BinarySearchTree,
    RbTree,
    HashTable,
    Multimap,
}

impl Algorithm {
    /// All algorithms in tag order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::LinearSearch,
        Algorithm::BinarySearchTree,
        Algorithm::RbTree,
        Algorithm::HashTable,
        Algorithm::Multimap,
    ];

    /// Map the leading character of a timing line to its algorithm.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            '1' => Some(Algorithm::LinearSearch),
            '2' => Some(Algorithm::BinarySearchTree),
            '3' => Some(Algorithm::RbTree),
            '4' => Some(Algorithm::HashTable),
            '5' => Some(Algorithm::Multimap),
            _ => None,
        }
    }

    /// Name of the Dataset series holding this algorithm's timings.
    pub fn series_name(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "LinearSearch",
            Algorithm::BinarySearchTree => "BinarySearchTree",
            Algorithm::RbTree => "RbTree",
            Algorithm::HashTable => "HashTable",
            Algorithm::Multimap => "Multimap",
        }
    }

    /// Short legend label used in charts.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "linear",
            Algorithm::BinarySearchTree => "binary",
            Algorithm::RbTree => "rb",
            Algorithm::HashTable => "hash",
            Algorithm::Multimap => "multimap",
        }
    }

    /// Fixed chart colour (CSS colour name).
    pub fn color(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "blue",
            Algorithm::BinarySearchTree => "red",
            Algorithm::RbTree => "green",
            Algorithm::HashTable => "purple",
            Algorithm::Multimap => "orange",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.series_name())
    }
}
