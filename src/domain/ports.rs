use crate::domain::model::SupportTimeline;
use chrono::NaiveDate;

/// Rules deriving support periods for a generation from its release date and
/// the release date of the generation that follows it, if any.
///
/// Implementations must be total: every pair of dates yields a timeline.
pub trait SupportPolicy {
    fn calculate_timeline(
        &self,
        initial_release_date: NaiveDate,
        next_release_date: Option<NaiveDate>,
    ) -> SupportTimeline;
}
