//! Domain types for the hero API.
//!
//! # Design
//! `Hero` mirrors the mock-server's schema but is defined independently;
//! integration tests catch schema drift between the two crates. An id of `0`
//! means "not yet assigned" — create payloads may omit the field entirely and
//! the backend assigns the real id.

use serde::{Deserialize, Serialize};

/// The sole domain entity: an integer id plus a display name.
///
/// The backend is the source of truth for id uniqueness; no invariants are
/// enforced client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    /// `0` stands for "unassigned" on a create payload.
    #[serde(default)]
    pub id: u64,
    pub name: String,
}

/// Either a full `Hero` or a bare id. `DataService::remove` accepts both and
/// resolves the id either way.
#[derive(Debug, Clone)]
pub enum HeroTarget {
    Id(u64),
    Hero(Hero),
}

impl HeroTarget {
    pub fn id(&self) -> u64 {
        match self {
            HeroTarget::Id(id) => *id,
            HeroTarget::Hero(hero) => hero.id,
        }
    }
}

impl From<u64> for HeroTarget {
    fn from(id: u64) -> Self {
        HeroTarget::Id(id)
    }
}

impl From<Hero> for HeroTarget {
    fn from(hero: Hero) -> Self {
        HeroTarget::Hero(hero)
    }
}

impl From<&Hero> for HeroTarget {
    fn from(hero: &Hero) -> Self {
        HeroTarget::Hero(hero.clone())
    }
}
