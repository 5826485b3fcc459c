//! Shared nutrient mapping
//!
//! Used for table values, derived recipe totals, and query results.

use serde::{Deserialize, Serialize};

/// Nutrient keys in their canonical order
pub const NUTRIENT_KEYS: [&str; 4] = ["kcal", "fat", "kh", "prot"];

/// The four tracked nutrients
///
/// Any field may be `NaN`, meaning the value could not be determined.
/// serde_json writes `NaN` as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    pub kcal: f64,
    pub fat: f64,  // grams
    pub kh: f64,   // grams of carbohydrates
    pub prot: f64, // grams
}

impl Nutrients {
    pub fn new(kcal: f64, fat: f64, kh: f64, prot: f64) -> Self {
        Self { kcal, fat, kh, prot }
    }

    /// All zeros, the starting point of a sum
    pub fn zero() -> Self {
        Self::default()
    }

    /// All `NaN`, the result for anything that cannot be resolved
    pub fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }

    /// Scale every value by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            kcal: self.kcal * multiplier,
            fat: self.fat * multiplier,
            kh: self.kh * multiplier,
            prot: self.prot * multiplier,
        }
    }

    /// Look up a value by its key
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "kcal" => Some(self.kcal),
            "fat" => Some(self.fat),
            "kh" => Some(self.kh),
            "prot" => Some(self.prot),
            _ => None,
        }
    }

    /// `(key, value)` pairs in canonical order
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("kcal", self.kcal),
            ("fat", self.fat),
            ("kh", self.kh),
            ("prot", self.prot),
        ]
    }

    /// True when every value is a finite number
    pub fn is_finite(&self) -> bool {
        self.entries().iter().all(|(_, v)| v.is_finite())
    }
}

impl std::ops::Add for Nutrients {
    type Output = Nutrients;

    fn add(self, other: Nutrients) -> Nutrients {
        Nutrients {
            kcal: self.kcal + other.kcal,
            fat: self.fat + other.fat,
            kh: self.kh + other.kh,
            prot: self.prot + other.prot,
        }
    }
}

impl std::ops::AddAssign for Nutrients {
    fn add_assign(&mut self, other: Nutrients) {
        *self = *self + other;
    }
}
