use crate::domain::model::{Generation, GenerationName};
use crate::domain::ports::SupportPolicy;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The generations of a project, kept sorted by name, plus the instant the
/// set last changed.
///
/// The container owns its generations: removing one moves it out to the
/// caller, nothing else holds a reference to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "GenerationsInfoRecord", into = "GenerationsInfoRecord")]
pub struct GenerationsInfo {
    generations: BTreeMap<GenerationName, Generation>,
    last_modified: DateTime<Utc>,
}

/// Serialized form: generations as an ascending list.
#[derive(Serialize, Deserialize)]
struct GenerationsInfoRecord {
    generations: Vec<Generation>,
    last_modified: DateTime<Utc>,
}

impl GenerationsInfo {
    pub fn new() -> Self {
        Self {
            generations: BTreeMap::new(),
            last_modified: Utc::now(),
        }
    }

    /// Generations in ascending order.
    pub fn generations(&self) -> impl ExactSizeIterator<Item = &Generation> {
        self.generations.values()
    }

    /// Replaces the whole set. A later entry with an already-seen name
    /// replaces the earlier one.
    pub fn set_generations(&mut self, generations: impl IntoIterator<Item = Generation>) {
        self.generations = generations
            .into_iter()
            .map(|generation| (generation.name().clone(), generation))
            .collect();
    }

    pub fn insert(&mut self, generation: Generation) -> Option<Generation> {
        self.generations.insert(generation.name().clone(), generation)
    }

    pub fn remove(&mut self, name: &GenerationName) -> Option<Generation> {
        self.generations.remove(name)
    }

    pub fn get(&self, name: &GenerationName) -> Option<&Generation> {
        self.generations.get(name)
    }

    /// Only the dates of the returned generation can change; its name (the
    /// key) is fixed.
    pub fn get_mut(&mut self, name: &GenerationName) -> Option<&mut Generation> {
        self.generations.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    pub fn set_last_modified(&mut self, last_modified: DateTime<Utc>) {
        self.last_modified = last_modified;
    }

    /// Stamps the set as modified now.
    pub fn record_modification(&mut self) {
        self.last_modified = Utc::now();
    }

    /// Derives support end dates for every generation, using the release date
    /// of the following generation as the boundary. The last generation has
    /// no successor.
    ///
    /// Does not touch `last_modified`.
    pub fn compute_support_policy_dates<P: SupportPolicy + ?Sized>(&mut self, policy: &P) {
        let release_dates: Vec<NaiveDate> = self
            .generations
            .values()
            .map(|generation| generation.initial_release_date)
            .collect();

        for (index, generation) in self.generations.values_mut().enumerate() {
            let next_release_date = release_dates.get(index + 1).copied();
            let timeline =
                policy.calculate_timeline(generation.initial_release_date, next_release_date);

            tracing::debug!(
                "Generation {}: released {}, next {:?} -> OSS until {}, commercial until {}",
                generation.name(),
                generation.initial_release_date,
                next_release_date,
                timeline.open_source_support.end,
                timeline.commercial_support.end
            );

            generation.oss_support_end_date = Some(timeline.open_source_support.end);
            generation.commercial_support_end_date = Some(timeline.commercial_support.end);
        }
    }
}

impl Default for GenerationsInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl From<GenerationsInfoRecord> for GenerationsInfo {
    fn from(record: GenerationsInfoRecord) -> Self {
        let mut info = Self::new();
        info.set_generations(record.generations);
        info.last_modified = record.last_modified;
        info
    }
}

impl From<GenerationsInfo> for GenerationsInfoRecord {
    fn from(info: GenerationsInfo) -> Self {
        Self {
            generations: info.generations.into_values().collect(),
            last_modified: info.last_modified,
        }
    }
}
