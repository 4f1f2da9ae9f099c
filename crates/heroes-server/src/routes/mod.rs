//! Route handlers for the HTTP API.

pub mod health;
pub mod heroes;
pub mod teams;

use serde::{Deserialize, Deserializer};

/// Largest page a list endpoint will return.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Query parameters shared by the list endpoints.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Number of records to skip.
    #[serde(default)]
    #[param(minimum = 0, default = 0)]
    pub offset: i64,
    /// Maximum number of records to return.
    #[serde(default = "default_limit")]
    #[param(minimum = 0, maximum = 100, default = 100)]
    pub limit: i64,
}

fn default_limit() -> i64 {
    MAX_PAGE_SIZE
}

impl Pagination {
    /// Reject out-of-range values rather than silently clamping them.
    pub fn validate(&self) -> heroes_core::Result<()> {
        if self.offset < 0 {
            return Err(heroes_core::Error::Validation(
                "offset must be greater than or equal to 0".into(),
            ));
        }
        if !(0..=MAX_PAGE_SIZE).contains(&self.limit) {
            return Err(heroes_core::Error::Validation(format!(
                "limit must be between 0 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok(())
    }
}

/// Deserialize a field that may be absent, `null`, or a value.
///
/// Pair with `#[serde(default)]`: an absent key stays `None`, while an explicit
/// `null` becomes `Some(None)`.
pub(crate) fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
