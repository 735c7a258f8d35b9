//! Dataset model: index-aligned series built from complete log blocks.

pub mod algorithm;

pub use algorithm::Algorithm;

use crate::log::BlockRecord;
use serde::Serialize;

/// Series names in output order.
pub const SERIES_NAMES: [&str; 7] = [
    "Size",
    "LinearSearch",
    "BinarySearchTree",
    "RbTree",
    "HashTable",
    "Multimap",
    "Collisions",
];

/// Parsed benchmark results, one entry per block in every series.
///
/// Only constructible from complete blocks, so all series always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    #[serde(rename = "Size")]
    size: Vec<u64>,
    #[serde(rename = "LinearSearch")]
    linear_search: Vec<f64>,
    #[serde(rename = "BinarySearchTree")]
    binary_search_tree: Vec<f64>,
    #[serde(rename = "RbTree")]
    rb_tree: Vec<f64>,
    #[serde(rename = "HashTable")]
    hash_table: Vec<f64>,
    #[serde(rename = "Multimap")]
    multimap: Vec<f64>,
    #[serde(rename = "Collisions")]
    collisions: Vec<u64>,
}

/// A borrowed view of one named series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Series<'a> {
    Int(&'a [u64]),
    Float(&'a [f64]),
}

impl Series<'_> {
    pub fn len(&self) -> usize {
        match self {
            Series::Int(v) => v.len(),
            Series::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Dataset {
    pub fn from_blocks(blocks: &[BlockRecord]) -> Self {
        let mut ds = Dataset::default();
        for b in blocks {
            ds.size.push(b.size);
            ds.linear_search.push(b.linear);
            ds.binary_search_tree.push(b.bst);
            ds.rb_tree.push(b.rb_tree);
            ds.hash_table.push(b.hash);
            ds.multimap.push(b.multimap);
            ds.collisions.push(b.collisions);
        }
        ds
    }

    /// Number of blocks (the common length of every series).
    pub fn len(&self) -> usize {
        self.size.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    pub fn sizes(&self) -> &[u64] {
        &self.size
    }

    pub fn collisions(&self) -> &[u64] {
        &self.collisions
    }

    pub fn timings(&self, algorithm: Algorithm) -> &[f64] {
        match algorithm {
            Algorithm::LinearSearch => &self.linear_search,
            Algorithm::BinarySearchTree => &self.binary_search_tree,
            Algorithm::RbTree => &self.rb_tree,
            Algorithm::HashTable => &self.hash_table,
            Algorithm::Multimap => &self.multimap,
        }
    }

    /// Look up a series by its name (see `SERIES_NAMES`).
    pub fn series(&self, name: &str) -> Option<Series<'_>> {
        match name {
            "Size" => Some(Series::Int(&self.size)),
            "Collisions" => Some(Series::Int(&self.collisions)),
            _ => Algorithm::ALL
                .into_iter()
                .find(|alg| alg.series_name() == name)
                .map(|alg| Series::Float(self.timings(alg))),
        }
    }

    /// Per-block view, the inverse of `from_blocks`.
    pub fn blocks(&self) -> Vec<BlockRecord> {
        (0..self.len())
            .map(|i| BlockRecord {
                size: self.size[i],
                linear: self.linear_search[i],
                bst: self.binary_search_tree[i],
                rb_tree: self.rb_tree[i],
                hash: self.hash_table[i],
                multimap: self.multimap[i],
                collisions: self.collisions[i],
            })
            .collect()
    }
}
