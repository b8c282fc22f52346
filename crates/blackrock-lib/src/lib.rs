//! Black Rock City route planning library entry points.
//!
//! This crate models the city's radial TimeLetter address scheme, parses
//! the compact textual notation, and computes the shortest walking route
//! between two addresses. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod address;
pub mod city;
pub mod error;
pub mod output;
pub mod routing;

pub use address::parse_address;
pub use city::{Position, Ring};
pub use error::{Error, Result};
pub use output::{RouteStep, RouteSummary, StepMode};
pub use routing::{
    angular_displacement, plan_route, AnglePolicy, Direction, Displacement, RoutePlan,
    RouteCandidate,
};
