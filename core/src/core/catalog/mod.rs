//! In-memory catalog of movie records.
//!
//! Insertion order is not the display order; the view layer re-derives the
//! sort on every render. Mutation is append-only and id-unique.

use crate::error::CatalogError;
use crate::types::{MovieId, MovieRecord};
use chrono::{DateTime, Duration, Utc};

pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    /// Wraps a previously persisted collection.
    pub fn from_records(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    /// First-run bootstrap: the built-in demo records.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            movies: seed_records(now),
        }
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Prepends a record.
    ///
    /// Returns `Err(DuplicateId)` if a record with the same id is already
    /// present. The id generator makes this unreachable in practice; the
    /// check keeps the uniqueness invariant explicit.
    pub fn insert(&mut self, record: MovieRecord) -> Result<(), CatalogError> {
        if self.movies.iter().any(|m| m.id == record.id) {
            return Err(CatalogError::DuplicateId(record.id.to_string()));
        }
        self.movies.insert(0, record);
        Ok(())
    }
}

/// The 4-record demo set. Timestamps decrease in strict 100-second steps so
/// the seed display order is deterministic.
fn seed_records(now: DateTime<Utc>) -> Vec<MovieRecord> {
    let seed = |title: &str, year: i32, rating: f64, poster: &str, age_secs: i64| MovieRecord {
        id: MovieId::generate(),
        title: title.to_string(),
        year,
        rating,
        poster: poster.to_string(),
        url: "#".to_string(),
        file_size: None,
        created_at: now - Duration::seconds(age_secs),
    };

    vec![
        seed(
            "Dune: Part Two",
            2024,
            8.8,
            "https://images.unsplash.com/photo-1542204165-65bf26472b9b?q=80&w=700&auto=format&fit=crop",
            0,
        ),
        seed(
            "Inception",
            2010,
            8.8,
            "https://images.unsplash.com/photo-1626814026160-2237a95fc5a0?q=80&w=700&auto=format&fit=crop",
            100,
        ),
        seed(
            "Interstellar",
            2014,
            8.6,
            "https://images.unsplash.com/photo-1451187580459-43490279c0fa?q=80&w=700&auto=format&fit=crop",
            200,
        ),
        seed(
            "The Dark Knight",
            2008,
            9.0,
            "https://images.unsplash.com/photo-1509281373149-e957c6296406?q=80&w=700&auto=format&fit=crop",
            300,
        ),
    ]
}
