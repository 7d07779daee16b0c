//! Skill catalog loading
//!
//! A catalog is a CSV file with one row per skill. Row order is preserved and
//! defines the index space shared by the vectorizer and the similarity matrix.

use crate::features;
use crate::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub const COL_SKILL: &str = "Skill";
pub const COL_RELATED_SKILLS: &str = "Related Skills";
pub const COL_EXPLANATION: &str = "Explanation";
pub const COL_POPULARITY_TREND: &str = "Popularity Trend";
pub const COL_INDUSTRY_FOCUS: &str = "Industry Focus";
pub const COL_RESOURCES: &str = "Resources";

/// Columns every catalog file must carry, in canonical order
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_SKILL,
    COL_RELATED_SKILLS,
    COL_EXPLANATION,
    COL_POPULARITY_TREND,
    COL_INDUSTRY_FOCUS,
    COL_RESOURCES,
];

/// One row of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub skill: String,
    pub related_skills: String,
    pub explanation: String,
    pub popularity_trend: String,
    pub industry_focus: String,
    pub resources: String,
    /// Searchable text blob, derived once from the other fields
    pub combined_features: String,
}

impl SkillRecord {
    #[must_use]
    pub fn new(
        skill: impl Into<String>,
        related_skills: impl Into<String>,
        explanation: impl Into<String>,
        popularity_trend: impl Into<String>,
        industry_focus: impl Into<String>,
        resources: impl Into<String>,
    ) -> Self {
        let mut record = Self {
            skill: skill.into(),
            related_skills: related_skills.into(),
            explanation: explanation.into(),
            popularity_trend: popularity_trend.into(),
            industry_focus: industry_focus.into(),
            resources: resources.into(),
            combined_features: String::new(),
        };
        record.combined_features = features::compose(&record);
        record
    }

    /// Fail on an empty value in any field that feeds the combined text.
    /// `row` is 1-based and only used for the error message.
    fn validate(&self, row: usize) -> Result<()> {
        let composed = [
            (COL_SKILL, &self.skill),
            (COL_RELATED_SKILLS, &self.related_skills),
            (COL_EXPLANATION, &self.explanation),
            (COL_INDUSTRY_FOCUS, &self.industry_focus),
        ];
        for (column, value) in composed {
            if value.is_empty() {
                return Err(Error::MissingField {
                    row,
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Ordered, immutable set of skill records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<SkillRecord>,
    // lowercased skill name -> first row carrying it
    lookup: AHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from records already in memory
    pub fn from_records(records: Vec<SkillRecord>) -> Result<Self> {
        let mut lookup = AHashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            record.validate(idx + 1)?;
            lookup.entry(record.skill.to_lowercase()).or_insert(idx);
        }
        Ok(Self { records, lookup })
    }

    /// Load a catalog from a CSV file with a header row
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading catalog from {:?}", path);
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse CSV data with a header row from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers()?.clone();

        // Resolve every required column up front so a bad header fails before any row is read
        let mut positions = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, column) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| Error::MissingColumn(column.to_string()))?;
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let field = |i: usize| row.get(positions[i]).unwrap_or_default();
            records.push(SkillRecord::new(
                field(0),
                field(1),
                field(2),
                field(3),
                field(4),
                field(5),
            ));
        }

        debug!("Parsed {} catalog rows", records.len());
        Self::from_records(records)
    }

    /// Index of the first record whose skill name matches, ignoring case
    #[inline]
    pub fn find(&self, name: &str) -> Option<usize> {
        self.lookup.get(&name.to_lowercase()).copied()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&SkillRecord> {
        self.records.get(idx)
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[SkillRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillRecord> {
        self.records.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Skill,Related Skills,Explanation,Popularity Trend,Industry Focus,Resources\n";

    #[test]
    fn test_load_preserves_order() {
        let data = format!(
            "{HEADER}Python,Data Science,general purpose,Rising,Tech,python.org\n\
             Welding,Metalwork,joins metal,Stable,Manufacturing,\n"
        );
        let catalog = Catalog::from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().skill, "Python");
        assert_eq!(catalog.get(1).unwrap().skill, "Welding");
        assert_eq!(catalog.get(1).unwrap().resources, "");
    }

    #[test]
    fn test_column_order_is_irrelevant() {
        let data = "Resources,Industry Focus,Skill,Explanation,Related Skills,Popularity Trend,Extra\n\
                    docs,Tech,Rust,systems language,C++,Rising,ignored\n";
        let catalog = Catalog::from_reader(data.as_bytes()).unwrap();
        let record = catalog.get(0).unwrap();
        assert_eq!(record.skill, "Rust");
        assert_eq!(record.related_skills, "C++");
        assert_eq!(record.popularity_trend, "Rising");
        assert_eq!(record.combined_features, "Rust C++ systems language Tech");
    }

    #[test]
    fn test_missing_column() {
        let data = "Skill,Related Skills,Explanation,Industry Focus,Resources\n\
                    Rust,C++,systems,Tech,docs\n";
        match Catalog::from_reader(data.as_bytes()) {
            Err(Error::MissingColumn(column)) => assert_eq!(column, "Popularity Trend"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_composed_field_is_fatal() {
        let data = format!("{HEADER}Python,Data Science,,Rising,Tech,docs\n");
        match Catalog::from_reader(data.as_bytes()) {
            Err(Error::MissingField { row, column }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "Explanation");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let data = format!("{HEADER}Python,Data Science\n");
        assert!(matches!(
            Catalog::from_reader(data.as_bytes()),
            Err(Error::Csv { .. })
        ));
    }

    #[test]
    fn test_find_is_case_insensitive_and_first_match_wins() {
        let catalog = Catalog::from_records(vec![
            SkillRecord::new("Python", "a", "b", "", "c", ""),
            SkillRecord::new("Go", "a", "b", "", "c", ""),
            SkillRecord::new("PYTHON", "x", "y", "", "z", ""),
        ])
        .unwrap();
        assert_eq!(catalog.find("python"), Some(0));
        assert_eq!(catalog.find("pYtHoN"), Some(0));
        assert_eq!(catalog.find("go"), Some(1));
        assert_eq!(catalog.find("Rust"), None);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Catalog::load("/definitely/not/here.csv"),
            Err(Error::Io(_))
        ));
    }
}
