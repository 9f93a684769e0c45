use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
pub enum Interest {
    Sightseeing,
    Adventure,
    Food,
    Culture,
    Relaxation,
    Nightlife,
    #[value(name = "study-related")]
    StudyRelated,
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Interest::Sightseeing => "Sightseeing",
            Interest::Adventure => "Adventure",
            Interest::Food => "Food",
            Interest::Culture => "Culture",
            Interest::Relaxation => "Relaxation",
            Interest::Nightlife => "Nightlife",
            Interest::StudyRelated => "Study-related",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TripError {
    #[error("Please enter a destination.")]
    MissingDestination,

    #[error("Minimum budget {min} is above maximum budget {max}")]
    BudgetRange { min: u32, max: u32 },

    #[error("Trip ends ({end}) before it starts ({start})")]
    DateRange { start: NaiveDate, end: NaiveDate },
}

/// The parameters a student fills in to plan one trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRequest {
    pub starting_location: String,
    pub destination: String,
    pub budget_min: u32,
    pub budget_max: u32,
    pub currency: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub interests: Vec<Interest>,
}

impl TripRequest {
    pub const DEFAULT_BUDGET_MIN: u32 = 500;
    pub const DEFAULT_BUDGET_MAX: u32 = 2000;
    pub const DEFAULT_CURRENCY: &'static str = "USD";

    /// A same-day trip with the default budget and no interests.
    pub fn new(starting_location: &str, destination: &str, date: NaiveDate) -> Self {
        Self {
            starting_location: starting_location.to_string(),
            destination: destination.to_string(),
            budget_min: Self::DEFAULT_BUDGET_MIN,
            budget_max: Self::DEFAULT_BUDGET_MAX,
            currency: Self::DEFAULT_CURRENCY.to_string(),
            start_date: date,
            end_date: date,
            interests: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), TripError> {
        if self.destination.trim().is_empty() {
            return Err(TripError::MissingDestination);
        }
        if self.budget_min > self.budget_max {
            return Err(TripError::BudgetRange {
                min: self.budget_min,
                max: self.budget_max,
            });
        }
        if self.end_date < self.start_date {
            return Err(TripError::DateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    pub fn prompt(&self) -> String {
        let interests = self
            .interests
            .iter()
            .map(Interest::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Create a personalized, budget-friendly travel itinerary for a student trip \
             from {} to {} from {} to {}. The budget is between {} and {} {}. \
             The student is interested in {}. Include cost-effective transportation, \
             affordable accommodation, and student-friendly activities. The itinerary \
             should be structured with daily plans, estimated costs for each \
             activity/transportation/accommodation, and time allocations. Please present \
             the output in a clear, visually appealing markdown format with headings for \
             each day and bullet points for activities.",
            self.starting_location,
            self.destination,
            self.start_date,
            self.end_date,
            self.budget_min,
            self.budget_max,
            self.currency,
            interests,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn prompt_carries_every_parameter() {
        let mut trip = TripRequest::new("Rennes", "Lisbon", date(2026, 7, 1));
        trip.end_date = date(2026, 7, 5);
        trip.currency = "EUR".into();
        trip.interests = vec![Interest::Food, Interest::StudyRelated];

        let prompt = trip.prompt();
        assert!(prompt.contains("from Rennes to Lisbon from 2026-07-01 to 2026-07-05"));
        assert!(prompt.contains("between 500 and 2000 EUR"));
        assert!(prompt.contains("interested in Food, Study-related."));
        assert!(prompt.contains("markdown"));
    }

    #[test]
    fn serializes_dates_as_iso_strings() {
        let mut trip = TripRequest::new("Rennes", "Lisbon", date(2026, 7, 1));
        trip.interests = vec![Interest::Nightlife];
        let json = serde_json::to_value(&trip).unwrap();
        assert_eq!(json["start_date"], "2026-07-01");
        assert_eq!(json["end_date"], "2026-07-01");
        assert_eq!(json["budget_max"], 2000);
    }

    #[test]
    fn destination_is_required() {
        let trip = TripRequest::new("Rennes", "  ", date(2026, 7, 1));
        assert_eq!(trip.validate(), Err(TripError::MissingDestination));
        assert_eq!(
            TripError::MissingDestination.to_string(),
            "Please enter a destination."
        );
    }

    #[test]
    fn starting_location_is_optional() {
        let trip = TripRequest::new("", "Lisbon", date(2026, 7, 1));
        assert_eq!(trip.validate(), Ok(()));
    }

    #[test]
    fn rejects_inverted_ranges() {
        let mut trip = TripRequest::new("Rennes", "Lisbon", date(2026, 7, 5));
        trip.budget_min = 3000;
        assert!(matches!(trip.validate(), Err(TripError::BudgetRange { .. })));

        trip.budget_min = 100;
        trip.end_date = date(2026, 7, 1);
        assert!(matches!(trip.validate(), Err(TripError::DateRange { .. })));
    }
}
