use crate::log::{Field, FormatError, Measurement};
use crate::model::Algorithm;
use serde::Serialize;

/// All measurements for one dataset size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockRecord {
    pub size: u64,
    pub linear: f64,
    pub bst: f64,
    pub rb_tree: f64,
    pub hash: f64,
    pub multimap: f64,
    pub collisions: u64,
}

impl BlockRecord {
    pub fn timing(&self, algorithm: Algorithm) -> f64 {
        match algorithm {
            Algorithm::LinearSearch => self.linear,
            Algorithm::BinarySearchTree => self.bst,
            Algorithm::RbTree => self.rb_tree,
            Algorithm::HashTable => self.hash,
            Algorithm::Multimap => self.multimap,
        }
    }
}

/// A block still being read. Slots fill in any order; `finish` checks that all are present.
#[derive(Debug, Clone)]
pub struct BlockBuilder {
    size: u64,
    /// Indexed like `Algorithm::ALL`.
    timings: [Option<f64>; 5],
    collisions: Option<u64>,
}

impl BlockBuilder {
    pub fn new(size: u64) -> Self {
        Self {
            size,
            timings: [None; 5],
            collisions: None,
        }
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn record(&mut self, measurement: Measurement) -> Result<(), FormatError> {
        let duplicate = match measurement {
            Measurement::Timing { algorithm, seconds } => {
                self.timings[slot(algorithm)].replace(seconds).is_some()
            }
            Measurement::Collisions(count) => self.collisions.replace(count).is_some(),
        };

        if duplicate {
            return Err(FormatError::DuplicateField {
                size: self.size,
                field: measurement.field(),
            });
        }
        Ok(())
    }

    pub fn finish(self) -> Result<BlockRecord, FormatError> {
        match (self.timings, self.collisions) {
            (
                [
                    Some(linear),
                    Some(bst),
                    Some(rb_tree),
                    Some(hash),
                    Some(multimap),
                ],
                Some(collisions),
            ) => Ok(BlockRecord {
                size: self.size,
                linear,
                bst,
                rb_tree,
                hash,
                multimap,
                collisions,
            }),
            _ => Err(FormatError::IncompleteBlock {
                size: self.size,
                missing: self.missing(),
            }),
        }
    }

    fn missing(&self) -> Vec<Field> {
        let mut missing: Vec<Field> = Algorithm::ALL
            .iter()
            .zip(&self.timings)
            .filter(|(_, t)| t.is_none())
            .map(|(alg, _)| Field::Timing(*alg))
            .collect();
        if self.collisions.is_none() {
            missing.push(Field::Collisions);
        }
        missing
    }
}

fn slot(algorithm: Algorithm) -> usize {
    match algorithm {
        Algorithm::LinearSearch => 0,
        Algorithm::BinarySearchTree => 1,
        Algorithm::RbTree => 2,
        Algorithm::HashTable => 3,
        Algorithm::Multimap => 4,
    }
}
