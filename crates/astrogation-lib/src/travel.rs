//! Travel report derivation.
//!
//! Turns a planned route into the final report: travel hours, parsec
//! distance, the astrogation difficulty dice tally, plotting rounds, and
//! fuel consumption, modulated by the situational modifiers the crew
//! declares for the jump.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::galaxy::{Galaxy, Region};
use crate::routing::{Route, HOP_TIME_FACTOR, LANE_BONUS, LANE_CONNECTION_BONUS};

/// Parsecs per grid unit of chart separation.
const PARSECS_PER_GRID: f64 = 1500.0;

/// Situational modifiers declared per jump. All seven flags are explicit so
/// a renamed or missing flag is a compile error, not a silently absent key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TravelModifiers {
    /// The ship has a working navigation computer. Plotting without one
    /// upgrades the difficulty twice.
    pub nav_computer: bool,
    /// Rush the plot: fewer rounds, one difficulty upgrade.
    pub quick_calc: bool,
    pub light_damage: bool,
    pub heavy_damage: bool,
    pub hyperdrive_malfunction: bool,
    /// Plot by raw chart adjacency instead of the optimal lane-assisted
    /// route.
    pub non_optimal_route: bool,
    /// Take additional time plotting: more rounds, one difficulty downgrade.
    pub extra_time: bool,
}

/// Four independent non-negative dice counters composing the astrogation
/// check: difficulty, challenge, boost, and setback dice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DifficultyTally {
    pub difficulty: u32,
    pub challenge: u32,
    pub boost: u32,
    pub setback: u32,
}

impl DifficultyTally {
    /// Convert one difficulty die into a challenge die, or add a fresh
    /// difficulty die when none remain. Upgrades never reduce the total.
    pub fn upgrade(&mut self) {
        if self.difficulty > 0 {
            self.difficulty -= 1;
            self.challenge += 1;
        } else {
            self.difficulty = 1;
        }
    }

    /// Convert one challenge die back into a difficulty die, or drop a
    /// difficulty die when no challenge dice remain. No-op on an empty
    /// tally.
    pub fn downgrade(&mut self) {
        if self.challenge > 0 {
            self.challenge -= 1;
            self.difficulty += 1;
        } else if self.difficulty > 0 {
            self.difficulty -= 1;
        }
    }

    /// Total difficulty and challenge dice in the tally.
    pub fn total_difficulty(&self) -> u32 {
        self.difficulty + self.challenge
    }
}

impl fmt::Display for DifficultyTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}dd, {}cd, {}bd, {}sbd",
            self.difficulty, self.challenge, self.boost, self.setback
        )
    }
}

/// Final immutable output of a travel calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelReport {
    /// Travel time in hours.
    pub travel_hours: f64,
    /// Distance in parsecs.
    pub parsecs: f64,
    pub dice: DifficultyTally,
    /// Rounds spent plotting the jump.
    pub plotting_rounds: u32,
    /// Fuel units consumed by the jump.
    pub fuel_units: u32,
    /// Human-readable route description from the search.
    pub route_text: String,
}

/// Derive the travel report for a planned route.
///
/// The adjustments are order-sensitive and applied exactly as the
/// astrogation rules sequence them: distance tiers, route mode, plotting
/// time, extra time, ship damage, missing nav computer, quick calculation,
/// then hyperdrive malfunction. An empty route is a caller error reported
/// as [`Error::EmptyRoute`].
pub fn calculate_travel(
    galaxy: &Galaxy,
    route: &Route,
    hyperdrive_rating: f64,
    modifiers: &TravelModifiers,
) -> Result<TravelReport> {
    let (&origin_id, &destination_id) = match (route.steps.first(), route.steps.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(Error::EmptyRoute),
    };
    let origin = galaxy.planet(origin_id);
    let destination = galaxy.planet(destination_id);

    // Total chart distance, re-deriving the same co-location substitution
    // used by the search so both stages agree on every hop.
    let total_grid: f64 = route
        .steps
        .windows(2)
        .map(|pair| galaxy.separation(pair[0], pair[1]))
        .sum();
    let parsecs = total_grid * PARSECS_PER_GRID;

    let mut dice = DifficultyTally {
        difficulty: destination.region.base_difficulty(),
        ..DifficultyTally::default()
    };

    // Distance tiers work on the rounded figure. The per-4-unit block bonus
    // is tallied now but only lands after the route-mode upgrade, which must
    // see the base difficulty.
    let rounded = total_grid.round() as u32;
    let distance_blocks = rounded / 4;
    if rounded == 0 {
        dice.boost += 2;
        dice.difficulty = dice.difficulty.saturating_sub(1);
    } else if rounded <= 3 {
        dice.boost += 1;
    }

    if !modifiers.non_optimal_route {
        dice.boost += 2;
        match destination.region {
            Region::CoreWorlds | Region::Colonies | Region::InnerRim => dice.boost += 1,
            Region::OuterRim => dice.setback += 1,
            Region::UnknownRegions => dice.setback += 2,
            _ => {}
        }
    } else {
        match destination.region {
            Region::ExpansionRegion | Region::MidRim => dice.setback += 1,
            Region::OuterRim => dice.setback += 2,
            Region::UnknownRegions => dice.setback += 3,
            _ => {}
        }
        dice.upgrade();
    }
    dice.difficulty += distance_blocks;

    let mut plotting_rounds = base_plotting_rounds(total_grid, modifiers);
    if modifiers.extra_time {
        plotting_rounds += 5;
        dice.downgrade();
        // Taking extra time never drops the check below a single die.
        if dice.total_difficulty() < 1 {
            dice.difficulty = 1;
        }
    }

    if modifiers.light_damage {
        dice.setback += 1;
    }
    if modifiers.heavy_damage {
        dice.setback += 2;
    }

    if !modifiers.nav_computer {
        dice.upgrade();
        dice.upgrade();
    }

    if modifiers.quick_calc {
        plotting_rounds = plotting_rounds.saturating_sub(3).max(1);
        dice.upgrade();
    }

    if modifiers.hyperdrive_malfunction {
        dice.upgrade();
    }

    let fuel_units = 1 + (total_grid * 2.0).ceil() as u32;

    // Whole-route lane bonus, on top of the per-hop bonuses already inside
    // the search cost. Deliberately kept as the rules state it even though
    // single-hop lane routes end up counting the bonus twice.
    let mut travel_hours = parsecs * (HOP_TIME_FACTOR / PARSECS_PER_GRID) * hyperdrive_rating;
    if !modifiers.non_optimal_route && origin.on_lane && destination.on_lane {
        travel_hours *= LANE_BONUS;
        if origin.connects_to.as_deref() == Some(destination.name.as_str()) {
            travel_hours *= LANE_CONNECTION_BONUS;
        }
    }

    debug!(
        origin = %origin.name,
        destination = %destination.name,
        total_grid,
        dice = %dice,
        "travel report derived"
    );

    Ok(TravelReport {
        travel_hours,
        parsecs,
        dice,
        plotting_rounds,
        fuel_units,
        route_text: route.describe(galaxy),
    })
}

/// Base rounds spent plotting: one for a standing start, two once there is
/// any distance to cover, plus one per started 2-unit block, all scaled by
/// half again (rounded up) when the route is non-optimal.
fn base_plotting_rounds(total_grid: f64, modifiers: &TravelModifiers) -> u32 {
    let mut rounds: u32 = if total_grid > 0.0 { 2 } else { 1 };
    rounds += (total_grid / 2.0).ceil() as u32;
    if modifiers.non_optimal_route {
        rounds = ((rounds as f64) * 1.5).ceil() as u32;
    }
    rounds
}
