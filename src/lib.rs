//! Zombie Chase - geospatial pursuit game simulation engine

pub mod core;
pub mod geo;
pub mod model;
pub mod simulation;
