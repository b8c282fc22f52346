//! The two competing route topologies and their distance formulas.

use crate::city::constants::MAN_TO_ESPLANADE_FT;
use crate::city::{Position, Ring};

use super::{Direction, Displacement, Leg, LegMode, Waypoint};

/// A candidate route topology, fully evaluated for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteCandidate {
    /// One arc along a ring plus one radial line between rings.
    Perimeter {
        /// Whether the arc comes before the radial line.
        arc_first: bool,
        /// Ring hosting the arc.
        pivot: Ring,
        direction: Direction,
        angle_rad: f64,
        /// Radial distance between the two rings, in feet.
        radial_delta_ft: f64,
    },
    /// Radially in to the Esplanade, straight across it on a chord, and
    /// radially back out.
    Hub {
        from_offset_ft: f64,
        to_offset_ft: f64,
        chord_ft: f64,
    },
}

/// Ring-order heuristic: arc before line exactly when the current ring is
/// the inner one. The ordering is picked by comparing ring indices; the two
/// orderings are never both costed.
fn ring_order_heuristic(current: &Position, desired: &Position) -> bool {
    current.ring() < desired.ring()
}

impl RouteCandidate {
    /// Evaluate the perimeter candidate, ordered by [`ring_order_heuristic`].
    pub fn perimeter(current: &Position, desired: &Position, displacement: &Displacement) -> Self {
        let arc_first = ring_order_heuristic(current, desired);
        let (pivot, radial_delta_ft) = if arc_first {
            (
                current.ring(),
                desired.ring().offset_ft() - current.ring().offset_ft(),
            )
        } else {
            (
                desired.ring(),
                current.ring().offset_ft() - desired.ring().offset_ft(),
            )
        };

        Self::Perimeter {
            arc_first,
            pivot,
            direction: displacement.direction,
            angle_rad: displacement.angle_rad,
            radial_delta_ft,
        }
    }

    /// Evaluate the hub candidate. The chord across the Esplanade circle
    /// comes from the law of cosines on two Man-to-Esplanade radii
    /// separated by the swept angle:
    ///
    /// ```text
    /// chord = sqrt(2 · r² · (1 − cos θ)),  r = MAN_TO_ESPLANADE_FT
    /// ```
    pub fn hub(current: &Position, desired: &Position, angle_rad: f64) -> Self {
        let chord_ft =
            (2.0 * MAN_TO_ESPLANADE_FT * MAN_TO_ESPLANADE_FT * (1.0 - angle_rad.cos())).sqrt();
        Self::Hub {
            from_offset_ft: current.ring().offset_ft(),
            to_offset_ft: desired.ring().offset_ft(),
            chord_ft,
        }
    }

    /// Total walking distance in feet.
    pub fn distance_ft(&self) -> f64 {
        match *self {
            Self::Perimeter {
                pivot,
                angle_rad,
                radial_delta_ft,
                ..
            } => {
                let radius_ft = MAN_TO_ESPLANADE_FT + pivot.offset_ft();
                radius_ft * angle_rad + radial_delta_ft
            }
            Self::Hub {
                from_offset_ft,
                to_offset_ft,
                chord_ft,
            } => from_offset_ft + to_offset_ft + chord_ft,
        }
    }

    /// Step sequence for this candidate between the two endpoints.
    pub fn legs(&self, current: &Position, desired: &Position) -> Vec<Leg> {
        match *self {
            Self::Perimeter {
                arc_first: true,
                direction,
                ..
            } => {
                let corner = Waypoint::Address(Position::new(
                    desired.hour(),
                    desired.minute(),
                    current.ring(),
                ));
                vec![
                    Leg {
                        mode: LegMode::Arc(direction),
                        from: Waypoint::Address(*current),
                        to: corner,
                    },
                    Leg {
                        mode: LegMode::Line,
                        from: corner,
                        to: Waypoint::Address(*desired),
                    },
                ]
            }
            Self::Perimeter {
                arc_first: false,
                direction,
                ..
            } => {
                let corner = Waypoint::Address(Position::new(
                    current.hour(),
                    current.minute(),
                    desired.ring(),
                ));
                vec![
                    Leg {
                        mode: LegMode::Line,
                        from: Waypoint::Address(*current),
                        to: corner,
                    },
                    Leg {
                        mode: LegMode::Arc(direction),
                        from: corner,
                        to: Waypoint::Address(*desired),
                    },
                ]
            }
            Self::Hub { .. } => {
                let inbound = Waypoint::Esplanade {
                    hour: current.hour(),
                    minute: current.minute(),
                };
                let outbound = Waypoint::Esplanade {
                    hour: desired.hour(),
                    minute: desired.minute(),
                };
                vec![
                    Leg {
                        mode: LegMode::Line,
                        from: Waypoint::Address(*current),
                        to: inbound,
                    },
                    Leg {
                        mode: LegMode::Line,
                        from: inbound,
                        to: outbound,
                    },
                    Leg {
                        mode: LegMode::Line,
                        from: outbound,
                        to: Waypoint::Address(*desired),
                    },
                ]
            }
        }
    }
}
