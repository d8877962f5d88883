//! Application services - Use case implementations

mod instruction_extractor;
mod itinerary_service;
mod suggestion_service;

pub use instruction_extractor::{InstructionSet, extract_instructions};
pub use itinerary_service::{
    COMPOSITION_FAILED, ItineraryConfig, ItineraryFailure, ItineraryResponse, ItineraryService,
    select_destination_station, select_origin_station,
};
pub use suggestion_service::{DEFAULT_COUNTRY_SUFFIX, SuggestionService};
