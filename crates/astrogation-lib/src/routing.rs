use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::galaxy::{Galaxy, Planet, PlanetId};

/// Hours per grid unit of separation, before the hyperdrive rating scales it.
pub(crate) const HOP_TIME_FACTOR: f64 = 3.0;
/// Speed bonus applied when both endpoints of a hop sit on a hyperspace lane.
pub(crate) const LANE_BONUS: f64 = 0.7;
/// Further bonus when the hop follows a planet's dedicated lane connection.
pub(crate) const LANE_CONNECTION_BONUS: f64 = 0.8;

/// Cheapest route found between two planets.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    /// Planets visited in order, start and destination inclusive. The search
    /// guarantees no planet appears twice.
    pub steps: Vec<PlanetId>,
    /// Accumulated hop cost of the whole route.
    pub cost: f64,
}

impl Route {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Render the route as `"Name (grid) -> Name (grid)"`.
    pub fn describe(&self, galaxy: &Galaxy) -> String {
        self.steps
            .iter()
            .map(|&id| {
                let planet = galaxy.planet(id);
                format!("{} ({})", planet.name, planet.grid_label)
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Find the cheapest route between two planets by name.
///
/// Names resolve case-insensitively. With `avoid_lanes` set, only
/// 8-connected chart adjacency is explored; otherwise lane-step neighbours
/// are considered as well. The lane speed bonus applies to hop costs in both
/// modes: avoiding lanes only restricts which hops are reachable, not the
/// economics of the hops actually taken.
pub fn find_optimal_route(
    galaxy: &Galaxy,
    start: &str,
    destination: &str,
    hyperdrive_rating: f64,
    avoid_lanes: bool,
) -> Result<Route> {
    if !hyperdrive_rating.is_finite() || hyperdrive_rating <= 0.0 {
        return Err(Error::InvalidHyperdriveRating {
            value: hyperdrive_rating,
        });
    }

    let start_id = resolve_planet(galaxy, start)?;
    let goal_id = resolve_planet(galaxy, destination)?;

    let mut visited: HashSet<PlanetId> = HashSet::new();
    let mut best_cost: HashMap<PlanetId, f64> = HashMap::new();
    let mut parents: HashMap<PlanetId, Option<PlanetId>> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    best_cost.insert(start_id, 0.0);
    parents.insert(start_id, None);
    frontier.push(FrontierEntry::new(start_id, 0.0));

    while let Some(entry) = frontier.pop() {
        // Accepting the destination only when popped, combined with the
        // min-heap ordering, makes the reported cost the cheapest explored.
        if entry.planet == goal_id {
            debug!(start, destination, cost = entry.cost.0, "route found");
            return Ok(Route {
                steps: reconstruct_path(&parents, start_id, goal_id),
                cost: entry.cost.0,
            });
        }

        // Duplicate frontier entries for the same planet are allowed; the
        // cheapest wins here and stragglers are skipped.
        if !visited.insert(entry.planet) {
            continue;
        }

        let planet = galaxy.planet(entry.planet);
        for neighbour in neighbours(galaxy, planet, avoid_lanes) {
            if visited.contains(&neighbour) {
                continue;
            }

            let hop = hop_time(galaxy, entry.planet, neighbour, hyperdrive_rating);
            let next_cost = entry.cost.0 + hop;
            if next_cost < *best_cost.get(&neighbour).unwrap_or(&f64::INFINITY) {
                best_cost.insert(neighbour, next_cost);
                parents.insert(neighbour, Some(entry.planet));
                frontier.push(FrontierEntry::new(neighbour, next_cost));
            }
        }
    }

    Err(Error::RouteNotFound {
        start: start.to_string(),
        destination: destination.to_string(),
    })
}

fn resolve_planet(galaxy: &Galaxy, name: &str) -> Result<PlanetId> {
    galaxy.planet_by_name(name).ok_or_else(|| Error::UnknownPlanet {
        name: name.to_string(),
    })
}

/// Discover the planets reachable in one hop.
///
/// Lane neighbours step one waypoint forward or backward along every lane
/// containing the planet's square; chart adjacency contributes every other
/// planet within one square in any direction, co-located planets included.
/// A planet may be discovered via both; the visited set keeps that harmless.
fn neighbours(galaxy: &Galaxy, planet: &Planet, avoid_lanes: bool) -> Vec<PlanetId> {
    let mut found = Vec::new();

    if !avoid_lanes {
        for lane in &galaxy.lanes {
            for (index, square) in lane.route.iter().enumerate() {
                if *square != planet.grid {
                    continue;
                }
                if index > 0 {
                    if let Some(id) = galaxy.planet_at(lane.route[index - 1]) {
                        found.push(id);
                    }
                }
                if index + 1 < lane.route.len() {
                    if let Some(id) = galaxy.planet_at(lane.route[index + 1]) {
                        found.push(id);
                    }
                }
            }
        }
    }

    for other in &galaxy.planets {
        if other.id != planet.id && other.grid.is_adjacent_to(&planet.grid) {
            found.push(other.id);
        }
    }

    found
}

/// Cost of a single hop: separation times three times the hyperdrive rating,
/// with the lane bonus when both endpoints are on a lane.
fn hop_time(galaxy: &Galaxy, from: PlanetId, to: PlanetId, hyperdrive_rating: f64) -> f64 {
    let start = galaxy.planet(from);
    let end = galaxy.planet(to);

    let mut time = galaxy.separation(from, to) * HOP_TIME_FACTOR * hyperdrive_rating;
    if start.on_lane && end.on_lane {
        time *= LANE_BONUS;
        if start.connects_to.as_deref() == Some(end.name.as_str()) {
            time *= LANE_CONNECTION_BONUS;
        }
    }
    time
}

fn reconstruct_path(
    parents: &HashMap<PlanetId, Option<PlanetId>>,
    start: PlanetId,
    goal: PlanetId,
) -> Vec<PlanetId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(id) = current {
        path.push(id);
        if id == start {
            break;
        }
        current = parents.get(&id).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    planet: PlanetId,
    cost: FloatOrd,
}

impl FrontierEntry {
    fn new(planet: PlanetId, cost: f64) -> Self {
        Self {
            planet,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.planet.cmp(&self.planet))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
