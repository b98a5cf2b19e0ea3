//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque strings: product ids are chosen by the caller (or
//! generated from a category prefix), movement ids are generated at insertion.

use core::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a product (e.g. `A-001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a movement (history) record (e.g. `H-001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovementId(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw identifier without validation.
            ///
            /// Use `str::parse` when the value comes from user input.
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::validation(format!("{} cannot be empty", $name)));
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

impl_string_newtype!(ProductId, "ProductId");
impl_string_newtype!(MovementId, "MovementId");

impl ProductId {
    /// Generate an id of the form `<P>-<NNN>`.
    ///
    /// `<P>` is the upper-cased first character of `category` (`X` when empty) and
    /// `<NNN>` is a random number in `100..=999`. Collisions are possible; the
    /// ledger rejects them at registration.
    pub fn generate(category: &str) -> Self {
        Self::generate_with(category, &mut rand::rng())
    }

    pub fn generate_with<R: Rng>(category: &str, rng: &mut R) -> Self {
        let prefix: String = category
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "X".to_string());
        let number: u16 = rng.random_range(100..=999);
        Self(format!("{prefix}-{number}"))
    }
}

impl MovementId {
    /// Create a new movement identifier.
    ///
    /// Uses UUIDv7 (time-ordered), so ids generated in sequence sort in insertion order.
    pub fn generate() -> Self {
        Self(format!("H-{}", Uuid::now_v7().simple()))
    }
}
