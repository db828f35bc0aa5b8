// 🌱 Seed Import - Populate a ledger from a JSON document
//
// References between records are by name/title, resolved against the
// seed itself. The whole document is checked before the ledger is touched.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{non_empty, non_negative, Result, ValidationError, ValidationResult};
use crate::ledger::Ledger;

// ============================================================================
// SEED DOCUMENT
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub creators: Vec<String>,

    #[serde(default)]
    pub works: Vec<String>,

    #[serde(default)]
    pub relations: Vec<SeedRelation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRelation {
    /// Creator name
    pub creator: String,

    /// Work title
    pub work: String,

    pub date: String,

    pub amount: i64,
}

/// What a successful [`Seed::apply`] registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub creators: usize,
    pub works: usize,
    pub relations: usize,
}

impl Seed {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every record without registering anything
    pub fn validate(&self) -> Result<()> {
        for name in &self.creators {
            non_empty("Creator", "name", name)?;
        }
        for title in &self.works {
            non_empty("Work", "title", title)?;
        }

        let creators = index(&self.creators);
        let works = index(&self.works);

        for relation in &self.relations {
            resolve(&creators, "creator", &relation.creator)?;
            resolve(&works, "work", &relation.work)?;
            non_negative("Relation", "amount", relation.amount)?;
        }

        Ok(())
    }

    /// Register creators and works in document order, then the relations.
    ///
    /// Names resolve to the first matching entry of this seed, so a ledger
    /// that already holds a creator with the same name is not confused.
    pub fn apply(&self, ledger: &Ledger) -> Result<SeedSummary> {
        self.validate()?;

        let creators = self
            .creators
            .iter()
            .map(|name| ledger.add_creator(name.as_str()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let works = self
            .works
            .iter()
            .map(|title| ledger.add_work(title.as_str()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let creator_index = index(&self.creators);
        let work_index = index(&self.works);

        for relation in &self.relations {
            let creator = &creators[resolve(&creator_index, "creator", &relation.creator)?];
            let work = &works[resolve(&work_index, "work", &relation.work)?];
            creator.establish_relation(ledger, work, relation.date.as_str(), relation.amount)?;
        }

        let summary = SeedSummary {
            creators: creators.len(),
            works: works.len(),
            relations: self.relations.len(),
        };
        tracing::info!(
            creators = summary.creators,
            works = summary.works,
            relations = summary.relations,
            "seed applied"
        );
        Ok(summary)
    }
}

/// Position of the first entry for each name
fn index(names: &[String]) -> HashMap<&str, usize> {
    let mut positions = HashMap::new();
    for (i, name) in names.iter().enumerate() {
        positions.entry(name.as_str()).or_insert(i);
    }
    positions
}

fn resolve(index: &HashMap<&str, usize>, field: &str, name: &str) -> ValidationResult<usize> {
    index.get(name).copied().ok_or_else(|| {
        ValidationError::new("Relation", field, format!("unknown {} '{}'", field, name))
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;

    const SAMPLE: &str = r#"{
        "creators": ["Ann", "Bob"],
        "works": ["Book1", "Book2"],
        "relations": [
            { "creator": "Ann", "work": "Book1", "date": "2023-05-01", "amount": 1500 },
            { "creator": "Bob", "work": "Book1", "date": "2023-05-01", "amount": 700 },
            { "creator": "Ann", "work": "Book2", "date": "2023-06-01", "amount": 200 }
        ]
    }"#;

    #[test]
    fn test_apply_sample() {
        let ledger = Ledger::new();
        let summary = Seed::from_json(SAMPLE).unwrap().apply(&ledger).unwrap();

        assert_eq!(
            summary,
            SeedSummary { creators: 2, works: 2, relations: 3 }
        );

        let ann = ledger.find_creator_by_name("Ann").unwrap();
        let book1 = ledger.find_work_by_title("Book1").unwrap();
        assert_eq!(ann.total_amount(&ledger), 1700);
        assert_eq!(book1.creators(&ledger).len(), 2);
    }

    #[test]
    fn test_resolve_first_entry_wins() {
        let names = vec!["Ann".to_string(), "Bob".to_string(), "Ann".to_string()];
        let positions = index(&names);

        assert_eq!(resolve(&positions, "creator", "Ann").unwrap(), 0);
        assert_eq!(resolve(&positions, "creator", "Bob").unwrap(), 1);

        let err = resolve(&positions, "creator", "Carol").unwrap_err();
        assert_eq!(err.field, "creator");
        assert_eq!(err.message, "unknown creator 'Carol'");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let seed = Seed::from_json(r#"{ "creators": ["Ann"] }"#).unwrap();
        assert!(seed.works.is_empty());
        assert!(seed.relations.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = Seed::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LedgerError::Seed(_)));
    }

    #[test]
    fn test_unknown_work_leaves_ledger_untouched() {
        let seed = Seed::from_json(
            r#"{
                "creators": ["Ann"],
                "works": ["Book1"],
                "relations": [
                    { "creator": "Ann", "work": "not a work", "date": "2023-05-01", "amount": 1500 }
                ]
            }"#,
        )
        .unwrap();

        let ledger = Ledger::new();
        let err = seed.apply(&ledger).unwrap_err();

        assert!(matches!(err, LedgerError::Validation(ref e) if e.field == "work"));
        assert_eq!(ledger.creator_count(), 0);
        assert_eq!(ledger.work_count(), 0);
        assert_eq!(ledger.relation_count(), 0);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let seed = Seed {
            creators: vec!["Ann".to_string()],
            works: vec!["Book1".to_string()],
            relations: vec![SeedRelation {
                creator: "Ann".to_string(),
                work: "Book1".to_string(),
                date: "2023-05-01".to_string(),
                amount: -1,
            }],
        };

        let ledger = Ledger::new();
        assert!(seed.apply(&ledger).is_err());
        assert_eq!(ledger.relation_count(), 0);
    }

    #[test]
    fn test_empty_name_rejected() {
        let seed = Seed {
            creators: vec!["".to_string()],
            ..Seed::default()
        };
        assert!(seed.validate().is_err());
    }
}
