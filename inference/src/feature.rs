use std::{fmt, ops::RangeInclusive};

use ndarray::Array2;

/// The column order every artifact must have been trained on.
pub const FEATURE_NAMES: [&str; FeatureVector::LEN] = ["age", "bmi", "smoker", "children"];

/// Documented input bounds. The presentation layer enforces them, the adapter doesn't.
pub const AGE_RANGE: RangeInclusive<i32> = 0..=100;
pub const BMI_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const CHILDREN_RANGE: RangeInclusive<i32> = 0..=10;

/// The two answers to "are you a smoker?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmokerChoice {
    #[default]
    No,
    Yes,
}

impl SmokerChoice {
    /// The choices in the order they are offered to the user.
    pub const CHOICES: [SmokerChoice; 2] = [SmokerChoice::No, SmokerChoice::Yes];

    pub fn as_str(self) -> &'static str {
        match self {
            SmokerChoice::No => "No",
            SmokerChoice::Yes => "Yes",
        }
    }

    /// Binary encoding used by the model.
    pub fn flag(self) -> f64 {
        match self {
            SmokerChoice::No => 0.0,
            SmokerChoice::Yes => 1.0,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SmokerChoice::No => SmokerChoice::Yes,
            SmokerChoice::Yes => SmokerChoice::No,
        }
    }
}

impl From<&str> for SmokerChoice {
    /// Only the exact literal `"Yes"` marks a smoker, anything else reads as `No`.
    fn from(value: &str) -> Self {
        if value == SmokerChoice::Yes.as_str() {
            SmokerChoice::Yes
        } else {
            SmokerChoice::No
        }
    }
}

impl fmt::Display for SmokerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four values a user provides for one premium request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawInput {
    pub age: i32,
    pub bmi: f64,
    pub smoker: SmokerChoice,
    pub children: i32,
}

impl RawInput {
    /// Returns whether every value lies within its documented bounds.
    pub fn within_bounds(&self) -> bool {
        AGE_RANGE.contains(&self.age)
            && BMI_RANGE.contains(&self.bmi)
            && CHILDREN_RANGE.contains(&self.children)
    }
}

/// The numeric encoding of a [`RawInput`], in [`FEATURE_NAMES`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FeatureVector::LEN]);

impl FeatureVector {
    pub const LEN: usize = 4;

    /// Encodes a raw input as `[age, bmi, smoker_flag, children]`.
    ///
    /// # Arguments
    /// * `input` - The raw user input, passed through as is even when out of bounds.
    ///
    /// # Returns
    /// The encoded feature vector.
    pub fn encode(input: &RawInput) -> Self {
        Self([
            f64::from(input.age),
            input.bmi,
            input.smoker.flag(),
            f64::from(input.children),
        ])
    }

    pub fn as_array(&self) -> &[f64; FeatureVector::LEN] {
        &self.0
    }

    /// Lays the vector out as a batch with a single row.
    pub fn to_batch(&self) -> Array2<f64> {
        Array2::from_shape_fn((1, Self::LEN), |(_, j)| self.0[j])
    }
}

impl From<&RawInput> for FeatureVector {
    fn from(value: &RawInput) -> Self {
        Self::encode(value)
    }
}
