//! Type-safe wrappers and enums for watchlist data.

/// Serialize through `Display` and deserialize through `FromStr`, so JSON
/// uses the same spellings as the command line.
macro_rules! serde_via_str {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod filters;
pub mod ids;
pub mod position;

pub use filters::{FilterCriterion, SortKey};
pub use ids::PlayerId;
pub use position::Position;
