//! Astrogation library entry points.
//!
//! This crate exposes helpers to load a galaxy map from disk, search for the
//! cheapest hyperspace route between two planets, and derive a travel report
//! (time, distance, difficulty dice, plotting rounds, fuel) from that route.
//! Higher-level consumers (CLI, chat bridges) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod friction;
pub mod galaxy;
pub mod grid;
pub mod output;
pub mod routing;
pub mod travel;

pub use error::{Error, Result};
pub use galaxy::{load_galaxy, Galaxy, Lane, Planet, PlanetId, Region};
pub use grid::GridSquare;
pub use output::render_report;
pub use routing::{find_optimal_route, Route};
pub use travel::{calculate_travel, DifficultyTally, TravelModifiers, TravelReport};
