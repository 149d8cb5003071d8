//! Catalogue filtering.
//!
//! A [`ClimbFilter`] combines three independent predicates: discipline, grade range
//! and location. Applying it is a single pass that keeps the input order.
//!
//! The grade range only exists while a graded discipline (boulder or sport) is
//! selected. Selecting a discipline through [`ClimbFilter::select_discipline`] resets
//! the range to that discipline's full scale, mirroring how the range control is
//! redrawn whenever the discipline changes.

use crate::grade::{self, GradeScale};
use crate::model::{Climb, Discipline};

/// Discipline selector; `All` disables discipline and grade filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisciplineFilter {
    #[default]
    All,
    Only(Discipline),
}

impl DisciplineFilter {
    pub fn matches(&self, discipline: Discipline) -> bool {
        match self {
            DisciplineFilter::All => true,
            DisciplineFilter::Only(wanted) => *wanted == discipline,
        }
    }
}

/// Inclusive numeric grade bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeRange {
    pub lo: u32,
    pub hi: u32,
}

impl GradeRange {
    pub fn new(lo: u32, hi: u32) -> Self {
        if lo <= hi {
            Self { lo, hi }
        } else {
            Self { lo: hi, hi: lo }
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.lo && value <= self.hi
    }
}

impl From<GradeScale> for GradeRange {
    fn from(scale: GradeScale) -> Self {
        Self {
            lo: scale.min,
            hi: scale.max,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClimbFilter {
    pub discipline: DisciplineFilter,
    pub grade_range: Option<GradeRange>,
    pub location: String,
}

impl ClimbFilter {
    /// Switches discipline and resets the grade range to the discipline's full scale.
    /// `All` and `Trad` have no range.
    pub fn select_discipline(&mut self, discipline: DisciplineFilter) {
        self.discipline = discipline;
        self.grade_range = match discipline {
            DisciplineFilter::All => None,
            DisciplineFilter::Only(d) => GradeScale::for_discipline(d).map(GradeRange::from),
        };
    }

    pub fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.select_discipline(DisciplineFilter::Only(discipline));
        self
    }

    /// Narrows the grade range. Ignored unless a graded discipline is selected.
    pub fn with_grade_range(mut self, lo: u32, hi: u32) -> Self {
        if self.range_enabled() {
            self.grade_range = Some(GradeRange::new(lo, hi));
        }
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Whether the grade range control applies to the current discipline.
    pub fn range_enabled(&self) -> bool {
        matches!(
            self.discipline,
            DisciplineFilter::Only(Discipline::Boulder) | DisciplineFilter::Only(Discipline::Sport)
        )
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn matches(&self, climb: &Climb) -> bool {
        if !self.discipline.matches(climb.discipline) {
            return false;
        }

        if let (DisciplineFilter::Only(discipline), Some(range)) =
            (self.discipline, self.grade_range)
        {
            match grade::grade_value(discipline, &climb.grade) {
                Some(value) if range.contains(value) => {}
                _ => return false,
            }
        }

        let wanted = self.location.trim().to_lowercase();
        if !wanted.is_empty() && climb.location.trim().to_lowercase() != wanted {
            return false;
        }

        true
    }

    /// Filters a catalogue, preserving its order.
    pub fn apply(&self, catalogue: &[Climb]) -> Vec<Climb> {
        catalogue
            .iter()
            .filter(|climb| self.matches(climb))
            .cloned()
            .collect()
    }
}

/// Filtered climbs split by completion, each half in filtered order.
#[derive(Debug, Clone, Default)]
pub struct CompletionSplit {
    pub incomplete: Vec<Climb>,
    pub completed: Vec<Climb>,
}

impl CompletionSplit {
    pub fn len(&self) -> usize {
        self.incomplete.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn partition(climbs: Vec<Climb>) -> CompletionSplit {
    let (completed, incomplete) = climbs.into_iter().partition(|c| c.completed);
    CompletionSplit {
        incomplete,
        completed,
    }
}

/// A location the user can filter by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationOption {
    pub value: String,
    pub label: String,
}

/// Distinct primary locations of a catalogue, lowercased, in first-seen order.
pub fn location_options(catalogue: &[Climb]) -> Vec<LocationOption> {
    let mut options: Vec<LocationOption> = Vec::new();
    for climb in catalogue {
        let value = climb.location.trim().to_lowercase();
        if value.is_empty() || options.iter().any(|o| o.value == value) {
            continue;
        }
        let mut chars = value.chars();
        let label = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        options.push(LocationOption { value, label });
    }
    options
}
