//! Fixture-backed mock backend for the hero REST contract.
//!
//! Seeds the classic ten-hero fixture by default, can simulate per-request
//! latency, and tolerates requests for paths it does not recognize (a plain
//! 404, never a crash), matching the reference mock's pass-through
//! configuration. Id assignment is the server's job: a create payload with
//! id 0 gets `max(id)+1`, or 11 on an empty collection.

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Hero {
    /// 0 means "let the server assign one".
    #[serde(default)]
    pub id: u64,
    pub name: String,
}

pub type Db = Arc<RwLock<BTreeMap<u64, Hero>>>;

#[derive(Clone)]
struct AppState {
    db: Db,
    delay: Duration,
}

/// Query-style collection filters: `?id=` or `?name=`.
#[derive(Deserialize)]
struct HeroFilter {
    id: Option<u64>,
    name: Option<String>,
}

/// The ten-hero fixture the reference application ships with.
pub fn default_heroes() -> Vec<Hero> {
    [
        (11, "Dr Nice"),
        (12, "Narco"),
        (13, "Bombasto"),
        (14, "Celeritas"),
        (15, "Magneta"),
        (16, "RubberMan"),
        (17, "Dynama"),
        (18, "Dr IQ"),
        (19, "Magma"),
        (20, "Tornado"),
    ]
    .into_iter()
    .map(|(id, name)| Hero {
        id,
        name: name.to_string(),
    })
    .collect()
}

/// Router seeded with the default fixture and no artificial latency.
pub fn app() -> Router {
    app_with(default_heroes(), Duration::ZERO)
}

/// Router with explicit seed data and a per-request delay.
pub fn app_with(heroes: Vec<Hero>, delay: Duration) -> Router {
    let db = heroes.into_iter().map(|hero| (hero.id, hero)).collect();
    let state = AppState {
        db: Arc::new(RwLock::new(db)),
        delay,
    };
    Router::new()
        .route(
            "/api/heroes",
            get(list_heroes).post(create_hero).put(update_hero),
        )
        .route("/api/heroes/", get(filter_heroes))
        .route("/api/heroes/{id}", get(get_hero).delete(delete_hero))
        .fallback(unknown_path)
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn simulate_latency(state: &AppState) {
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
}

fn next_id(db: &BTreeMap<u64, Hero>) -> u64 {
    db.keys().max().map_or(11, |max| max + 1)
}

async fn list_heroes(State(state): State<AppState>) -> Json<Vec<Hero>> {
    simulate_latency(&state).await;
    let heroes = state.db.read().await;
    Json(heroes.values().cloned().collect())
}

async fn filter_heroes(
    State(state): State<AppState>,
    Query(filter): Query<HeroFilter>,
) -> Json<Vec<Hero>> {
    simulate_latency(&state).await;
    let heroes = state.db.read().await;
    let matches = if let Some(id) = filter.id {
        heroes.get(&id).cloned().into_iter().collect()
    } else if let Some(name) = filter.name {
        let needle = name.to_lowercase();
        heroes
            .values()
            .filter(|hero| hero.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    } else {
        heroes.values().cloned().collect()
    };
    Json(matches)
}

async fn get_hero(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Hero>, StatusCode> {
    simulate_latency(&state).await;
    let heroes = state.db.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_hero(
    State(state): State<AppState>,
    Json(input): Json<Hero>,
) -> (StatusCode, Json<Hero>) {
    simulate_latency(&state).await;
    let mut heroes = state.db.write().await;
    let id = if input.id == 0 {
        next_id(&heroes)
    } else {
        input.id
    };
    let hero = Hero {
        id,
        name: input.name,
    };
    heroes.insert(hero.id, hero.clone());
    (StatusCode::CREATED, Json(hero))
}

async fn update_hero(
    State(state): State<AppState>,
    Json(input): Json<Hero>,
) -> Result<Json<Hero>, StatusCode> {
    simulate_latency(&state).await;
    let mut heroes = state.db.write().await;
    let hero = heroes.get_mut(&input.id).ok_or(StatusCode::NOT_FOUND)?;
    hero.name = input.name;
    Ok(Json(hero.clone()))
}

async fn delete_hero(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Hero>, StatusCode> {
    simulate_latency(&state).await;
    let mut heroes = state.db.write().await;
    heroes.remove(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

// Unrecognized paths answer 404 and keep serving; the reference mock is
// configured to pass unknown URLs through rather than reject hard.
async fn unknown_path() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_serializes_to_json() {
        let hero = Hero {
            id: 11,
            name: "Dr Nice".to_string(),
        };
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(json["id"], 11);
        assert_eq!(json["name"], "Dr Nice");
    }

    #[test]
    fn hero_id_defaults_to_zero() {
        let hero: Hero = serde_json::from_str(r#"{"name":"Nameless"}"#).unwrap();
        assert_eq!(hero.id, 0);
    }

    #[test]
    fn hero_rejects_missing_name() {
        let result: Result<Hero, _> = serde_json::from_str(r#"{"id":3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn next_id_is_max_plus_one() {
        let db: BTreeMap<u64, Hero> = default_heroes()
            .into_iter()
            .map(|hero| (hero.id, hero))
            .collect();
        assert_eq!(next_id(&db), 21);
    }

    #[test]
    fn next_id_starts_at_eleven_when_empty() {
        assert_eq!(next_id(&BTreeMap::new()), 11);
    }

    #[test]
    fn fixture_is_ordered_by_id() {
        let heroes = default_heroes();
        assert_eq!(heroes.len(), 10);
        assert_eq!(heroes.first().unwrap().id, 11);
        assert_eq!(heroes.last().unwrap().id, 20);
    }
}
