//! Travel recommender server.
//!
//! A web application that answers: "Given what I like, where should I go,
//! and what else is near it?" Attractions are scored against the user's
//! vibe, budget and time preferences, and a trip plan is composed around
//! the chosen one with nearby sights, food, buses and trains.

pub mod config;
pub mod data;
pub mod domain;
pub mod lookup;
pub mod recommend;
pub mod web;
