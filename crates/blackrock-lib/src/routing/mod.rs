//! Route planning for the city's radial street grid.
//!
//! This module provides:
//! - [`AnglePolicy`] - How angular displacement between two clock positions is derived
//! - [`Displacement`] - Direction plus swept angle for one query
//! - [`RouteCandidate`] - The two competing path topologies
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! Every query prices exactly two candidates: staying on the perimeter
//! (one arc along a ring plus one radial line, ordered by the ring-order
//! heuristic) or cutting through the hub (radially in to the Esplanade,
//! across it on a straight chord, and radially back out). The cheaper of
//! the two wins.
//!
//! # Example
//!
//! ```
//! use blackrock_lib::{parse_address, plan_route, AnglePolicy};
//!
//! let current = parse_address("2A").unwrap();
//! let desired = parse_address("2C").unwrap();
//! let plan = plan_route(&current, &desired, AnglePolicy::Legacy);
//! assert_eq!(plan.distance_ft, 500.0);
//! ```

mod candidate;

pub use candidate::RouteCandidate;

use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::city::Position;

/// Direction of travel along an arc, seen from above the city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Clockwise,
    Anticlockwise,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Direction::Clockwise => "clockwise",
            Direction::Anticlockwise => "anticlockwise",
        };
        f.write_str(value)
    }
}

/// How the angular displacement between two clock positions is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnglePolicy {
    /// Reproduces the historical planner exactly: the raw angle difference
    /// is never wrapped into [0, 2π), and the anticlockwise branch keeps
    /// the raw magnitude instead of reflecting it to 2π − θ. A desired
    /// clock position whose angle is smaller than the current one yields a
    /// negative magnitude on the clockwise branch.
    #[default]
    Legacy,
    /// Geometrically sound variant: the difference is wrapped into
    /// [0, 2π) and the anticlockwise leg sweeps 2π − θ.
    Corrected,
}

impl fmt::Display for AnglePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            AnglePolicy::Legacy => "legacy",
            AnglePolicy::Corrected => "corrected",
        };
        f.write_str(value)
    }
}

/// Direction and swept angle between two clock positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Displacement {
    pub direction: Direction,
    /// Swept angle in radians. Under [`AnglePolicy::Legacy`] this can be
    /// negative or exceed π; under [`AnglePolicy::Corrected`] it lies in
    /// [0, π].
    pub angle_rad: f64,
}

/// Derive direction and swept angle under the requested policy.
pub fn angular_displacement(
    current: &Position,
    desired: &Position,
    policy: AnglePolicy,
) -> Displacement {
    match policy {
        AnglePolicy::Legacy => legacy_angular_displacement(current, desired),
        AnglePolicy::Corrected => corrected_angular_displacement(current, desired),
    }
}

/// The historical displacement rule, kept bit-for-bit reproducible.
fn legacy_angular_displacement(current: &Position, desired: &Position) -> Displacement {
    let raw = desired.angle_rad() - current.angle_rad();
    if raw <= PI {
        Displacement {
            direction: Direction::Clockwise,
            angle_rad: raw,
        }
    } else {
        // The magnitude stays raw; only the label flips.
        Displacement {
            direction: Direction::Anticlockwise,
            angle_rad: raw,
        }
    }
}

/// The geometrically sound displacement rule.
fn corrected_angular_displacement(current: &Position, desired: &Position) -> Displacement {
    let wrapped = (desired.angle_rad() - current.angle_rad()).rem_euclid(2.0 * PI);
    if wrapped <= PI {
        Displacement {
            direction: Direction::Clockwise,
            angle_rad: wrapped,
        }
    } else {
        Displacement {
            direction: Direction::Anticlockwise,
            angle_rad: 2.0 * PI - wrapped,
        }
    }
}

/// Travel mode for one leg of a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegMode {
    /// Straight walk, radial or chord.
    Line,
    /// Walk along a ring's circumference.
    Arc(Direction),
}

/// A point a route passes through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waypoint {
    /// A full TimeLetter address.
    Address(Position),
    /// A crossing of the Esplanade at the given clock position.
    Esplanade { hour: u8, minute: u8 },
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Waypoint::Address(position) => position.fmt(f),
            Waypoint::Esplanade { hour, minute } => {
                if *minute == 0 {
                    write!(f, "{hour} & Esplanade")
                } else {
                    write!(f, "{hour}:{minute:02} & Esplanade")
                }
            }
        }
    }
}

/// One step of a planned route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub mode: LegMode,
    pub from: Waypoint,
    pub to: Waypoint,
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub policy: AnglePolicy,
    pub displacement: Displacement,
    /// Total walking distance in feet. Negative only under
    /// [`AnglePolicy::Legacy`] for pairs whose raw angle is negative.
    pub distance_ft: f64,
    pub legs: Vec<Leg>,
}

/// Compute the shortest of the two candidate topologies and describe it.
///
/// Pure function of its inputs; safe to call concurrently.
pub fn plan_route(current: &Position, desired: &Position, policy: AnglePolicy) -> RoutePlan {
    let displacement = angular_displacement(current, desired, policy);

    // Same ring and no angular travel: nothing to walk, and no zero-length
    // arc leg naming the origin.
    if current.ring() == desired.ring() && displacement.angle_rad == 0.0 {
        return RoutePlan {
            policy,
            displacement,
            distance_ft: 0.0,
            legs: Vec::new(),
        };
    }

    let perimeter = RouteCandidate::perimeter(current, desired, &displacement);
    let hub = RouteCandidate::hub(current, desired, displacement.angle_rad);

    tracing::debug!(
        perimeter_ft = perimeter.distance_ft(),
        hub_ft = hub.distance_ft(),
        %displacement.direction,
        "evaluated route candidates"
    );

    // Strict comparison: an exact tie selects the hub route.
    let winner = if perimeter.distance_ft() < hub.distance_ft() {
        perimeter
    } else {
        hub
    };

    RoutePlan {
        policy,
        displacement,
        distance_ft: winner.distance_ft(),
        legs: winner.legs(current, desired),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::address::parse_address;

    use super::*;

    #[test]
    fn legacy_keeps_raw_negative_angle_on_clockwise_branch() {
        let current = parse_address("10L").unwrap();
        let desired = parse_address("2A").unwrap();
        let displacement = angular_displacement(&current, &desired, AnglePolicy::Legacy);

        assert_eq!(displacement.direction, Direction::Clockwise);
        assert_relative_eq!(displacement.angle_rad, -4.0 * PI / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn legacy_does_not_reflect_anticlockwise_magnitude() {
        let current = parse_address("2A").unwrap();
        let desired = parse_address("9A").unwrap();
        let displacement = angular_displacement(&current, &desired, AnglePolicy::Legacy);

        assert_eq!(displacement.direction, Direction::Anticlockwise);
        assert_relative_eq!(displacement.angle_rad, 7.0 * PI / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn corrected_wraps_negative_angles() {
        let current = parse_address("10L").unwrap();
        let desired = parse_address("2A").unwrap();
        let displacement = angular_displacement(&current, &desired, AnglePolicy::Corrected);

        assert_eq!(displacement.direction, Direction::Clockwise);
        assert_relative_eq!(displacement.angle_rad, 2.0 * PI / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn corrected_reflects_anticlockwise_magnitude() {
        let current = parse_address("2A").unwrap();
        let desired = parse_address("9A").unwrap();
        let displacement = angular_displacement(&current, &desired, AnglePolicy::Corrected);

        assert_eq!(displacement.direction, Direction::Anticlockwise);
        assert_relative_eq!(displacement.angle_rad, 5.0 * PI / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn half_turn_boundary_is_clockwise() {
        let current = parse_address("2A").unwrap();
        let desired = parse_address("8A").unwrap();
        for policy in [AnglePolicy::Legacy, AnglePolicy::Corrected] {
            let displacement = angular_displacement(&current, &desired, policy);
            assert_eq!(displacement.direction, Direction::Clockwise);
            assert_relative_eq!(displacement.angle_rad, PI);
        }
    }

    #[test]
    fn same_position_plans_to_zero_with_no_legs() {
        let position = parse_address("4:30F").unwrap();
        for policy in [AnglePolicy::Legacy, AnglePolicy::Corrected] {
            let plan = plan_route(&position, &position, policy);
            assert_eq!(plan.distance_ft, 0.0);
            assert!(plan.legs.is_empty());
        }
    }

    #[test]
    fn selection_picks_the_cheaper_candidate() {
        let current = parse_address("2A").unwrap();
        let desired = parse_address("8A").unwrap();
        let plan = plan_route(&current, &desired, AnglePolicy::Legacy);

        let displacement = angular_displacement(&current, &desired, AnglePolicy::Legacy);
        let perimeter = RouteCandidate::perimeter(&current, &desired, &displacement);
        let hub = RouteCandidate::hub(&current, &desired, displacement.angle_rad);
        assert_relative_eq!(
            plan.distance_ft,
            perimeter.distance_ft().min(hub.distance_ft())
        );
    }

    #[test]
    fn esplanade_waypoints_display_with_time_label() {
        let crossing = Waypoint::Esplanade { hour: 9, minute: 30 };
        assert_eq!(crossing.to_string(), "9:30 & Esplanade");
        let bare = Waypoint::Esplanade { hour: 2, minute: 0 };
        assert_eq!(bare.to_string(), "2 & Esplanade");
    }
}
