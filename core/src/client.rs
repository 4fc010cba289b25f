//! Stateless HTTP request builder and response parser for the hero API.
//!
//! # Design
//! `HeroApi` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`;
//! the round-trip in between belongs to a `Transport`. Splitting the two
//! keeps request construction and status interpretation deterministic and
//! free of I/O dependencies.
//!
//! The resource path is fixed at `api/heroes`. Two lookup styles exist on
//! purpose: `get_by_id` uses the per-id path and surfaces a missing hero as
//! a 404, while `get_optional` filters the collection with `?id=` and gets
//! an empty array back for a miss.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Hero;

const HEROES_PATH: &str = "api/heroes";

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Stateless request builder / response parser for the hero REST contract.
#[derive(Debug, Clone)]
pub struct HeroApi {
    base_url: String,
}

impl HeroApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{HEROES_PATH}", self.base_url)
    }

    pub fn build_list_all(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_optional(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/?id={id}", self.collection_url()),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_by_id(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{id}", self.collection_url()),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_search(&self, term: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/?name={term}", self.collection_url()),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(hero).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_remove(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.collection_url()),
            headers: json_headers(),
            body: None,
        }
    }

    /// The update goes to the collection path, not the per-id path; the id
    /// travels in the payload.
    pub fn build_update(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(hero).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn parse_list_all(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// The filtered lookup answers with a zero-or-one-element array; an
    /// empty array is a valid "not found", not an error.
    pub fn parse_get_optional(&self, response: HttpResponse) -> Result<Option<Hero>, ApiError> {
        check_status(&response, 200)?;
        let heroes: Vec<Hero> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(heroes.into_iter().next())
    }

    pub fn parse_get_by_id(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_search(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// The contract allows "Hero or empty" on delete.
    pub fn parse_remove(&self, response: HttpResponse) -> Result<Option<Hero>, ApiError> {
        check_status(&response, 200)?;
        if response.body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// The update response shape is unspecified by the contract; hand back
    /// whatever JSON the server sent (Null for an empty body).
    pub fn parse_update(&self, response: HttpResponse) -> Result<serde_json::Value, ApiError> {
        check_status(&response, 200)?;
        if response.body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
