//! Opaque routing-provider response

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DomainError;

/// One routing leg as returned by the routing provider
///
/// The document is kept verbatim and serialized back out unchanged. Only two
/// paths are ever read: `routes[0].summary.duration` and
/// `routes[0].segments[0].steps[*].instruction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteDocument(Value);

impl RouteDocument {
    /// Wrap a provider document, checking it carries a first route
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedDocument` if `routes[0]` is not an object.
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        if value.pointer("/routes/0").is_some_and(Value::is_object) {
            Ok(Self(value))
        } else {
            Err(DomainError::missing("routes[0]"))
        }
    }

    /// Travel time of the first route in seconds
    ///
    /// The provider omits `duration` for zero-length routes, so a summary
    /// without it counts as zero.
    pub fn duration_seconds(&self) -> Result<f64, DomainError> {
        let summary = self
            .0
            .pointer("/routes/0/summary")
            .and_then(Value::as_object)
            .ok_or_else(|| DomainError::missing("routes[0].summary"))?;

        match summary.get("duration") {
            None => Ok(0.0),
            Some(duration) => duration
                .as_f64()
                .ok_or_else(|| DomainError::missing("routes[0].summary.duration")),
        }
    }

    /// Turn-by-turn instructions of the first segment, in order
    pub fn instructions(&self) -> Result<Vec<String>, DomainError> {
        let steps = self
            .0
            .pointer("/routes/0/segments/0/steps")
            .and_then(Value::as_array)
            .ok_or_else(|| DomainError::missing("routes[0].segments[0].steps"))?;

        steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                step.get("instruction")
                    .and_then(Value::as_str)
                    .map(ToString::to_string)
                    .ok_or_else(|| {
                        DomainError::missing(format!("routes[0].segments[0].steps[{i}].instruction"))
                    })
            })
            .collect()
    }
}
