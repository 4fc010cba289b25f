//! Client-side data-access layer for the hero service.
//!
//! # Overview
//! `DataService` translates intent ("get all", "search", "create", ...) into
//! REST calls against a fixed `api/heroes` resource path and presents a
//! uniform, non-failing result to UI callers: on any backend failure it logs
//! one line to the injected `MessageLog` and resolves with a fallback value.
//!
//! # Design
//! - `HeroApi` builds `HttpRequest` values and parses `HttpResponse` values
//!   without touching the network; the `Transport` trait is the I/O seam,
//!   so the whole request/response pipeline is testable with scripted data.
//! - `TextResolver` is a pre-warmed dictionary: log-message wording is
//!   resolved synchronously, with no load race.
//! - The swallow-and-continue failure policy lives only in `DataService`'s
//!   public methods; typed errors exist underneath for callers that need
//!   to tell failure kinds apart.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod log;
pub mod service;
pub mod texts;
pub mod types;

pub use client::HeroApi;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use log::MessageLog;
pub use service::DataService;
pub use texts::{keys, TextResolver};
pub use types::{Hero, HeroTarget};
