#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TapeError};
use crate::prng::Prng;

/// Largest value printed on the stock tape asset.
pub const DEFAULT_MAX_NUMBER: u32 = 20;

/// One of the three blanks the learner fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    A,
    B,
    Sum,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[Field::A, Field::B, Field::Sum]
    }

    /// Slot name used in the expression pattern.
    pub fn slot(self) -> &'static str {
        match self {
            Field::A => "a",
            Field::B => "b",
            Field::Sum => "sum",
        }
    }

    pub fn from_slot(name: &str) -> Option<Field> {
        Field::all().iter().copied().find(|f| f.slot() == name)
    }

    /// Id of the input element the page provides for this field.
    pub fn element_id(self) -> &'static str {
        match self {
            Field::A => "firstNumber",
            Field::B => "secondNumber",
            Field::Sum => "lastNumber",
        }
    }
}

/// A solvable addition problem. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Problem {
    a: u32,
    b: u32,
    sum: u32,
}

impl Problem {
    /// Build a fixed problem, checking it fits on a tape running to `max`.
    pub fn new(a: u32, b: u32, max: u32) -> Result<Self> {
        let fits = a >= 1 && a <= max / 2 && b >= 1 && b <= max.saturating_sub(a);
        if !fits {
            return Err(TapeError::InvalidProblem { a, b, max });
        }
        Ok(Self { a, b, sum: a + b })
    }

    /// Pick `a` in `[1, max/2]`, then `b` in `[1, max - a]`.
    ///
    /// `max` below 2 leaves no valid problem; it is raised to 2 so the result
    /// is always `1 + 1`.
    pub fn generate(rng: &mut Prng, max: u32) -> Self {
        let max = max.max(2);
        let a = rng.gen_range_inclusive(1, max / 2);
        let b = rng.gen_range_inclusive(1, max - a);
        tracing::debug!(a, b, max, "generated problem");
        Self { a, b, sum: a + b }
    }

    pub fn a(&self) -> u32 {
        self.a
    }

    pub fn b(&self) -> u32 {
        self.b
    }

    pub fn sum(&self) -> u32 {
        self.sum
    }

    /// Value the learner must type for `field`.
    pub fn expected(&self, field: Field) -> u32 {
        match field {
            Field::A => self.a,
            Field::B => self.b,
            Field::Sum => self.sum,
        }
    }
}
