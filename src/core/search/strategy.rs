//! Per-category search strategy.
//!
//! Each query category maps to one strategy that decides which
//! fields are searched, which field the rank is judged on, and which
//! field supplies the tie-break length.

use crate::core::error::Result;
use crate::core::script::Category;
use crate::core::search::ranking::{rank_values, CandidateHits, CandidateSet, MatchScore};
use crate::core::types::{Field, FieldHit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    Kanji,
    Kana,
    English,
    Mixed,
}

impl SearchStrategy {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Kanji => SearchStrategy::Kanji,
            Category::Kana => SearchStrategy::Kana,
            Category::English => SearchStrategy::English,
            Category::Mixed => SearchStrategy::Mixed,
        }
    }

    /// Target fields, in tie-break precedence order
    pub fn fields(&self) -> &'static [Field] {
        match self {
            SearchStrategy::Kanji => &[Field::Kanji],
            SearchStrategy::Kana => &[Field::Reading],
            SearchStrategy::English => &[Field::Meaning],
            SearchStrategy::Mixed => &Field::ALL,
        }
    }

    /// Field the rank is judged on. For `Mixed` this is kanji, so an
    /// entry found only through its readings or meanings ranks 3.
    pub fn ranked_field(&self) -> Field {
        self.fields()[0]
    }

    /// Run `lookup` over every target field and union the hits
    pub fn collect<F>(&self, mut lookup: F) -> Result<CandidateSet>
    where
        F: FnMut(Field) -> Result<Vec<FieldHit>>,
    {
        let mut candidates = CandidateSet::new();
        for &field in self.fields() {
            for hit in lookup(field)? {
                candidates.insert(field, hit);
            }
        }
        Ok(candidates)
    }

    /// Score one candidate.
    ///
    /// The tie-break length comes from the first target field that
    /// produced any hit, not the shortest across all fields.
    pub fn score(&self, query: &str, hits: &CandidateHits) -> MatchScore {
        let rank = rank_values(query, hits.values(self.ranked_field()));
        let length = self
            .fields()
            .iter()
            .map(|&field| hits.values(field))
            .find(|values| !values.is_empty())
            .and_then(|values| values.iter().map(|v| v.chars().count()).min())
            .unwrap_or(usize::MAX);

        MatchScore { rank, length }
    }
}
