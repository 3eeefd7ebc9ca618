use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Name of a generation (e.g. `2.7.x`), ordered version-aware.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationName(String);

impl GenerationName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(['.', '-'])
    }
}

fn compare_segment(left: &str, right: &str) -> Ordering {
    match (left.parse::<u64>(), right.parse::<u64>()) {
        (Ok(l), Ok(r)) => l.cmp(&r),
        // 數字段排在文字段之前
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => left.cmp(right),
    }
}

impl Ord for GenerationName {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut left = self.segments();
        let mut right = other.segments();
        loop {
            match (left.next(), right.next()) {
                (Some(l), Some(r)) => match compare_segment(l, r) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                },
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                // "01" == "1" numerically; keep Ord consistent with Eq
                (None, None) => return self.0.cmp(&other.0),
            }
        }
    }
}

impl PartialOrd for GenerationName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GenerationName {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for GenerationName {}

impl fmt::Display for GenerationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GenerationName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for GenerationName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A release line of a project with its support end dates.
///
/// The name is the generation's key inside `GenerationsInfo` and is fixed
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    name: GenerationName,
    pub initial_release_date: NaiveDate,
    #[serde(default)]
    pub oss_support_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub commercial_support_end_date: Option<NaiveDate>,
}

impl Generation {
    pub fn new(name: impl Into<GenerationName>, initial_release_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            initial_release_date,
            oss_support_end_date: None,
            commercial_support_end_date: None,
        }
    }

    /// The generation's key; it cannot be reassigned.
    ///
    /// ```compile_fail
    /// use chrono::NaiveDate;
    /// use project_generations::Generation;
    ///
    /// let mut generation = Generation::new("1.0.x", NaiveDate::MIN);
    /// generation.name = "9.0.x".into();
    /// ```
    pub fn name(&self) -> &GenerationName {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTimeline {
    pub open_source_support: SupportPeriod,
    pub commercial_support: SupportPeriod,
}
