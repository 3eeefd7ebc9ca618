use crate::core::{SupportPeriod, SupportPolicy, SupportTimeline};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

const MAX_MONTHS: u32 = 600;

/// Support policy expressed as month counts.
///
/// Open-source support runs `oss_support_months` from the initial release.
/// When `successor_overlap_months` is set and a next generation exists, it
/// also lasts at least that long past the next release. Commercial support
/// starts where open-source support ends and runs `commercial_support_months`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermPolicy {
    #[serde(default = "default_oss_support_months")]
    pub oss_support_months: u32,
    #[serde(default = "default_commercial_support_months")]
    pub commercial_support_months: u32,
    #[serde(default)]
    pub successor_overlap_months: Option<u32>,
}

fn default_oss_support_months() -> u32 {
    12
}

fn default_commercial_support_months() -> u32 {
    12
}

impl Default for TermPolicy {
    fn default() -> Self {
        Self {
            oss_support_months: default_oss_support_months(),
            commercial_support_months: default_commercial_support_months(),
            successor_overlap_months: None,
        }
    }
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

impl SupportPolicy for TermPolicy {
    fn calculate_timeline(
        &self,
        initial_release_date: NaiveDate,
        next_release_date: Option<NaiveDate>,
    ) -> SupportTimeline {
        let mut oss_end = add_months(initial_release_date, self.oss_support_months);
        if let (Some(next), Some(overlap)) = (next_release_date, self.successor_overlap_months) {
            oss_end = oss_end.max(add_months(next, overlap));
        }
        let commercial_end = add_months(oss_end, self.commercial_support_months);

        SupportTimeline {
            open_source_support: SupportPeriod {
                start: initial_release_date,
                end: oss_end,
            },
            commercial_support: SupportPeriod {
                start: oss_end,
                end: commercial_end,
            },
        }
    }
}

impl Validate for TermPolicy {
    fn validate(&self) -> Result<()> {
        validate_range("policy.oss_support_months", self.oss_support_months, 1, MAX_MONTHS)?;
        validate_range(
            "policy.commercial_support_months",
            self.commercial_support_months,
            1,
            MAX_MONTHS,
        )?;
        if let Some(overlap) = self.successor_overlap_months {
            validate_range("policy.successor_overlap_months", overlap, 0, MAX_MONTHS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_fixed_terms_without_successor() {
        let policy = TermPolicy {
            oss_support_months: 12,
            commercial_support_months: 15,
            successor_overlap_months: None,
        };

        let timeline = policy.calculate_timeline(date(2022, 5, 19), None);

        assert_eq!(timeline.open_source_support.start, date(2022, 5, 19));
        assert_eq!(timeline.open_source_support.end, date(2023, 5, 19));
        assert_eq!(timeline.commercial_support.start, date(2023, 5, 19));
        assert_eq!(timeline.commercial_support.end, date(2024, 8, 19));
    }

    #[test]
    fn test_successor_ignored_without_overlap() {
        let policy = TermPolicy::default();

        let timeline = policy.calculate_timeline(date(2020, 1, 1), Some(date(2022, 1, 1)));

        assert_eq!(timeline.open_source_support.end, date(2021, 1, 1));
    }

    #[test]
    fn test_overlap_extends_past_late_successor() {
        let policy = TermPolicy {
            successor_overlap_months: Some(3),
            ..TermPolicy::default()
        };

        let timeline = policy.calculate_timeline(date(2020, 1, 1), Some(date(2021, 6, 1)));

        assert_eq!(timeline.open_source_support.end, date(2021, 9, 1));
        assert_eq!(timeline.commercial_support.end, date(2022, 9, 1));
    }

    #[test]
    fn test_overlap_never_shortens_support() {
        let policy = TermPolicy {
            successor_overlap_months: Some(1),
            ..TermPolicy::default()
        };

        let timeline = policy.calculate_timeline(date(2020, 1, 1), Some(date(2020, 3, 1)));

        assert_eq!(timeline.open_source_support.end, date(2021, 1, 1));
    }

    #[test]
    fn test_month_end_clamps() {
        let policy = TermPolicy {
            oss_support_months: 1,
            ..TermPolicy::default()
        };

        let timeline = policy.calculate_timeline(date(2021, 1, 31), None);

        assert_eq!(timeline.open_source_support.end, date(2021, 2, 28));
    }

    #[test]
    fn test_saturates_at_max_date() {
        let policy = TermPolicy::default();

        let timeline = policy.calculate_timeline(NaiveDate::MAX, None);

        assert_eq!(timeline.open_source_support.end, NaiveDate::MAX);
        assert_eq!(timeline.commercial_support.end, NaiveDate::MAX);
    }

    #[test]
    fn test_validation_bounds() {
        assert!(TermPolicy::default().validate().is_ok());
        assert!(TermPolicy {
            oss_support_months: 0,
            ..TermPolicy::default()
        }
        .validate()
        .is_err());
        assert!(TermPolicy {
            successor_overlap_months: Some(0),
            ..TermPolicy::default()
        }
        .validate()
        .is_ok());
        assert!(TermPolicy {
            commercial_support_months: 601,
            ..TermPolicy::default()
        }
        .validate()
        .is_err());
    }
}
