//! Grade validation for sendlog.
//!
//! Each discipline has its own grade syntax:
//! - Boulder: V scale, `V0` through `V17`. Case-sensitive, no suffixes (`V4+`) or decimals.
//! - Sport: numeric (Ewbank) scale, `1` through `35`.
//! - Trad: free text. No scale is enforced for trad grades.
//!
//! [`check_grade`] is the single source of truth. It is invoked by
//! [`crate::model::validate_fields`], which every create, edit and copy path goes
//! through before anything is written.
//!
//! The filter engine needs a looser reading of grades: [`grade_value`] extracts a
//! number from whatever text was stored, so that legacy entries still sort into
//! a grade range.

use crate::model::Discipline;

/// Inclusive numeric bounds of a discipline's grade scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeScale {
    pub min: u32,
    pub max: u32,
}

impl GradeScale {
    pub const BOULDER: GradeScale = GradeScale { min: 0, max: 17 };
    pub const SPORT: GradeScale = GradeScale { min: 1, max: 35 };

    /// The scale for a discipline, or `None` for trad.
    pub fn for_discipline(discipline: Discipline) -> Option<GradeScale> {
        match discipline {
            Discipline::Boulder => Some(Self::BOULDER),
            Discipline::Sport => Some(Self::SPORT),
            Discipline::Trad => None,
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Returns true when `grade` is acceptable for `discipline`.
///
/// # Examples
/// ```
/// use sendlogapp::grade::validate;
/// use sendlogapp::model::Discipline;
///
/// assert!(validate(Discipline::Boulder, "V0"));
/// assert!(validate(Discipline::Boulder, "V17"));
/// assert!(validate(Discipline::Sport, "24"));
/// assert!(validate(Discipline::Trad, "E3 5c"));
///
/// assert!(!validate(Discipline::Boulder, "V18"));
/// assert!(!validate(Discipline::Boulder, "v5"));
/// assert!(!validate(Discipline::Sport, "36"));
/// assert!(!validate(Discipline::Sport, "moderate"));
/// ```
pub fn validate(discipline: Discipline, grade: &str) -> bool {
    check_grade(discipline, grade).is_ok()
}

/// Validates a grade and reports why it was rejected.
pub fn check_grade(discipline: Discipline, grade: &str) -> Result<(), GradeError> {
    match discipline {
        Discipline::Boulder => check_boulder(grade),
        Discipline::Sport => check_sport(grade),
        Discipline::Trad => Ok(()),
    }
}

fn check_boulder(grade: &str) -> Result<(), GradeError> {
    if grade.is_empty() {
        return Err(GradeError::Empty);
    }

    let digits = grade
        .strip_prefix('V')
        .ok_or_else(|| GradeError::BadBoulderFormat(grade.to_string()))?;

    // Canonical form only: no sign, no leading zeros, digits only.
    let canonical = !digits.is_empty()
        && digits.chars().all(|ch| ch.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'));
    if !canonical {
        return Err(GradeError::BadBoulderFormat(grade.to_string()));
    }

    let value = parse_bounded(digits).ok_or(GradeError::OutOfRange {
        discipline: Discipline::Boulder,
        scale: GradeScale::BOULDER,
    })?;
    if !GradeScale::BOULDER.contains(value) {
        return Err(GradeError::OutOfRange {
            discipline: Discipline::Boulder,
            scale: GradeScale::BOULDER,
        });
    }
    Ok(())
}

fn check_sport(grade: &str) -> Result<(), GradeError> {
    if grade.is_empty() {
        return Err(GradeError::Empty);
    }
    if !grade.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(GradeError::NotNumeric(grade.to_string()));
    }

    let out_of_range = GradeError::OutOfRange {
        discipline: Discipline::Sport,
        scale: GradeScale::SPORT,
    };
    let value = parse_bounded(grade).ok_or_else(|| out_of_range.clone())?;
    if !GradeScale::SPORT.contains(value) {
        return Err(out_of_range);
    }
    Ok(())
}

/// Parses a digit run, treating anything that overflows as out of every scale.
fn parse_bounded(digits: &str) -> Option<u32> {
    digits.parse::<u32>().ok()
}

/// Extracts the numeric value of a stored grade for range filtering.
///
/// - Boulder: the digits following the `V` (either case).
/// - Sport: the first run of digits anywhere in the text.
/// - Trad: never has a numeric value.
pub fn grade_value(discipline: Discipline, grade: &str) -> Option<u32> {
    match discipline {
        Discipline::Boulder => {
            let start = grade.find(|ch: char| ch == 'V' || ch == 'v')? + 1;
            leading_digits(&grade[start..])
        }
        Discipline::Sport => {
            let start = grade.find(|ch: char| ch.is_ascii_digit())?;
            leading_digits(&grade[start..])
        }
        Discipline::Trad => None,
    }
}

fn leading_digits(text: &str) -> Option<u32> {
    let end = text
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    parse_bounded(&text[..end])
}

/// Formats a numeric grade for display in the discipline's notation.
pub fn format_grade(discipline: Discipline, value: u32) -> String {
    match discipline {
        Discipline::Boulder => format!("V{}", value),
        Discipline::Sport => value.to_string(),
        Discipline::Trad => String::new(),
    }
}

/// Error type for grade validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeError {
    /// Grade text is empty
    Empty,
    /// Boulder grade is not of the form `V<number>`
    BadBoulderFormat(String),
    /// Sport grade is not a whole number
    NotNumeric(String),
    /// Grade is well-formed but outside the discipline's scale
    OutOfRange {
        discipline: Discipline,
        scale: GradeScale,
    },
}

impl std::fmt::Display for GradeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeError::Empty => write!(f, "grade cannot be empty"),
            GradeError::BadBoulderFormat(grade) => write!(
                f,
                "'{}' is not a valid V grade (e.g., V0, V1, V2, etc.)",
                grade
            ),
            GradeError::NotNumeric(grade) => {
                write!(f, "'{}' is not a valid sport grade (1-35)", grade)
            }
            GradeError::OutOfRange { discipline, scale } => write!(
                f,
                "{} grades must be between {} and {}",
                discipline,
                format_grade(*discipline, scale.min),
                format_grade(*discipline, scale.max)
            ),
        }
    }
}

impl std::error::Error for GradeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boulder_accepts_whole_v_scale() {
        for value in 0..=17 {
            let grade = format!("V{}", value);
            assert!(validate(Discipline::Boulder, &grade), "{} rejected", grade);
        }
    }

    #[test]
    fn boulder_rejects_out_of_scale_and_malformed() {
        assert!(!validate(Discipline::Boulder, "V18"));
        assert!(!validate(Discipline::Boulder, "v5"));
        assert!(!validate(Discipline::Boulder, "5.10a"));
        assert!(!validate(Discipline::Boulder, ""));
        assert!(!validate(Discipline::Boulder, "V"));
        assert!(!validate(Discipline::Boulder, "V4+"));
        assert!(!validate(Discipline::Boulder, "V4.5"));
        assert!(!validate(Discipline::Boulder, "V05"));
        assert!(!validate(Discipline::Boulder, "V-1"));
        assert!(!validate(Discipline::Boulder, "V99999999999999999999"));
    }

    #[test]
    fn sport_accepts_one_to_thirty_five() {
        for value in 1..=35 {
            assert!(validate(Discipline::Sport, &value.to_string()));
        }
    }

    #[test]
    fn sport_rejects_out_of_scale_and_text() {
        assert!(!validate(Discipline::Sport, "0"));
        assert!(!validate(Discipline::Sport, "36"));
        assert!(!validate(Discipline::Sport, "moderate"));
        assert!(!validate(Discipline::Sport, ""));
        assert!(!validate(Discipline::Sport, "21a"));
        assert!(!validate(Discipline::Sport, "-3"));
    }

    #[test]
    fn trad_is_permissive() {
        assert!(validate(Discipline::Trad, "HVS 5a"));
        assert!(validate(Discipline::Trad, "5.10a"));
        assert!(validate(Discipline::Trad, ""));
    }

    #[test]
    fn check_grade_reports_reason() {
        assert_eq!(check_grade(Discipline::Boulder, ""), Err(GradeError::Empty));
        assert_eq!(
            check_grade(Discipline::Boulder, "v5"),
            Err(GradeError::BadBoulderFormat("v5".into()))
        );
        assert_eq!(
            check_grade(Discipline::Sport, "36"),
            Err(GradeError::OutOfRange {
                discipline: Discipline::Sport,
                scale: GradeScale::SPORT,
            })
        );
        assert_eq!(
            check_grade(Discipline::Sport, "hard"),
            Err(GradeError::NotNumeric("hard".into()))
        );
    }

    #[test]
    fn error_display() {
        assert_eq!(GradeError::Empty.to_string(), "grade cannot be empty");
        assert_eq!(
            GradeError::OutOfRange {
                discipline: Discipline::Boulder,
                scale: GradeScale::BOULDER,
            }
            .to_string(),
            "Boulder grades must be between V0 and V17"
        );
    }

    #[test]
    fn grade_value_extraction() {
        assert_eq!(grade_value(Discipline::Boulder, "V4"), Some(4));
        assert_eq!(grade_value(Discipline::Boulder, "v11"), Some(11));
        assert_eq!(grade_value(Discipline::Boulder, "V"), None);
        assert_eq!(grade_value(Discipline::Boulder, "7A"), None);
        assert_eq!(grade_value(Discipline::Sport, "24"), Some(24));
        assert_eq!(grade_value(Discipline::Sport, "grade 21 (soft)"), Some(21));
        assert_eq!(grade_value(Discipline::Sport, "moderate"), None);
        assert_eq!(grade_value(Discipline::Trad, "22"), None);
    }

    #[test]
    fn scales() {
        assert_eq!(
            GradeScale::for_discipline(Discipline::Boulder),
            Some(GradeScale { min: 0, max: 17 })
        );
        assert_eq!(
            GradeScale::for_discipline(Discipline::Sport),
            Some(GradeScale { min: 1, max: 35 })
        );
        assert_eq!(GradeScale::for_discipline(Discipline::Trad), None);
    }
}
