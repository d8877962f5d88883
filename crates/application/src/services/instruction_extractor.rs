//! Turn-by-turn instruction extraction

use domain::CompositeItinerary;
use serde::Serialize;

use crate::error::ApplicationError;

/// Flattened instructions of a composite itinerary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionSet {
    /// Instructions of every leg, in travel order
    pub instructions: Vec<String>,
    /// Sum of the leg durations in seconds
    pub total_duration_secs: f64,
}

/// Flatten an itinerary into its instructions and total duration
///
/// # Errors
///
/// Returns `MalformedUpstreamResponse` if a leg lacks its steps or summary.
pub fn extract_instructions(
    itinerary: &CompositeItinerary,
) -> Result<InstructionSet, ApplicationError> {
    let mut instructions = Vec::new();
    let mut total_duration_secs = 0.0;

    for leg in itinerary.itinerary().legs() {
        instructions.extend(leg.instructions()?);
        total_duration_secs += leg.duration_seconds()?;
    }

    Ok(InstructionSet {
        instructions,
        total_duration_secs,
    })
}
