use std::fmt::Write;

use serde::Serialize;

use crate::city::Position;
use crate::routing::{AnglePolicy, Direction, LegMode, RoutePlan};

/// Travel mode label for a rendered step.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepMode {
    Line,
    Arc,
}

/// One rendered step of a route description.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub mode: StepMode,
    /// Present for arc steps only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    pub from: String,
    pub to: String,
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise or render as the classic step-by-step text.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub from: String,
    pub to: String,
    pub policy: AnglePolicy,
    pub direction: Direction,
    pub angle_rad: f64,
    pub distance_ft: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with display-ready endpoints.
    pub fn from_plan(current: &Position, desired: &Position, plan: &RoutePlan) -> Self {
        let steps = plan
            .legs
            .iter()
            .map(|leg| RouteStep {
                mode: match leg.mode {
                    LegMode::Line => StepMode::Line,
                    LegMode::Arc(_) => StepMode::Arc,
                },
                direction: match leg.mode {
                    LegMode::Arc(direction) => Some(direction),
                    LegMode::Line => None,
                },
                from: leg.from.to_string(),
                to: leg.to.to_string(),
            })
            .collect();

        Self {
            from: current.to_string(),
            to: desired.to_string(),
            policy: plan.policy,
            direction: plan.displacement.direction,
            angle_rad: plan.displacement.angle_rad,
            distance_ft: plan.distance_ft,
            steps,
        }
    }

    /// Render the step-by-step text description:
    ///
    /// ```text
    /// - current location 2A to 2 & Esplanade (line)
    /// - then go to 8 & Esplanade (line)
    /// - and then go to 8A (line)
    /// = 5800.0 feet
    /// ```
    pub fn render(&self) -> String {
        if self.steps.is_empty() {
            return format!("You are already at {}.", self.to);
        }

        let mut buffer = String::new();
        let last = self.steps.len() - 1;
        for (index, step) in self.steps.iter().enumerate() {
            let mode = match (step.mode, step.direction) {
                (StepMode::Arc, Some(direction)) => format!("({direction} arc)"),
                _ => "(line)".to_string(),
            };
            if index == 0 {
                let _ = writeln!(
                    buffer,
                    "- current location {} to {} {}",
                    step.from, step.to, mode
                );
            } else if index == last {
                let _ = writeln!(buffer, "- and then go to {} {}", step.to, mode);
            } else {
                let _ = writeln!(buffer, "- then go to {} {}", step.to, mode);
            }
        }
        let _ = write!(buffer, "= {:.1} feet", self.distance_ft);
        buffer
    }
}

#[cfg(test)]
mod tests {
    use crate::address::parse_address;
    use crate::routing::plan_route;

    use super::*;

    fn summary(from: &str, to: &str) -> RouteSummary {
        let current = parse_address(from).unwrap();
        let desired = parse_address(to).unwrap();
        let plan = plan_route(&current, &desired, AnglePolicy::Legacy);
        RouteSummary::from_plan(&current, &desired, &plan)
    }

    #[test]
    fn renders_arc_then_line_description() {
        let rendered = summary("2A", "2C").render();
        assert_eq!(
            rendered,
            "- current location 2A to 2A (clockwise arc)\n\
             - and then go to 2C (line)\n\
             = 500.0 feet"
        );
    }

    #[test]
    fn renders_hub_description_with_esplanade_crossings() {
        let rendered = summary("2A", "8A").render();
        assert_eq!(
            rendered,
            "- current location 2A to 2 & Esplanade (line)\n\
             - then go to 8 & Esplanade (line)\n\
             - and then go to 8A (line)\n\
             = 5800.0 feet"
        );
    }

    #[test]
    fn renders_same_position_as_already_there() {
        let rendered = summary("2A", "2A").render();
        assert_eq!(rendered, "You are already at 2A.");
    }

    #[test]
    fn serializes_steps_with_modes_and_endpoints() {
        let value = serde_json::to_value(summary("2A", "8A")).expect("summary serializes");

        assert_eq!(value["from"], "2A");
        assert_eq!(value["to"], "8A");
        assert_eq!(value["policy"], "legacy");
        assert_eq!(value["distance_ft"], 5800.0);
        assert_eq!(value["steps"][0]["mode"], "line");
        assert_eq!(value["steps"][1]["to"], "8 & Esplanade");
        assert!(value["steps"][0].get("direction").is_none());
    }

    #[test]
    fn serializes_arc_direction() {
        let value = serde_json::to_value(summary("2A", "2C")).expect("summary serializes");
        assert_eq!(value["steps"][0]["mode"], "arc");
        assert_eq!(value["steps"][0]["direction"], "clockwise");
    }
}
