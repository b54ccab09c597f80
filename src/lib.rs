//! Malayalam OTT catalog addon
//!
//! A small adapter between TMDB and the Stremio catalog protocol: a
//! background refresh pipeline discovers regionally available Malayalam
//! movies, enriches them with watch-provider and IMDb-id lookups, and a
//! handful of read-only endpoints serve the accumulated snapshot.

pub mod cache;
pub mod config;
pub mod models;
pub mod refresher;
pub mod tmdb;
pub mod web;
