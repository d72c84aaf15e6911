use std::collections::HashSet;

use astrogation_lib::{find_optimal_route, Error};

mod common;

#[test]
fn route_runs_from_start_to_destination_without_repeats() {
    let galaxy = common::fixture_galaxy();
    let route =
        find_optimal_route(&galaxy, "Coruscant", "Kuat", 1.0, false).expect("route exists");

    let names: Vec<&str> = route
        .steps
        .iter()
        .map(|&id| galaxy.planet(id).name.as_str())
        .collect();
    assert_eq!(names.first().copied(), Some("Coruscant"));
    assert_eq!(names.last().copied(), Some("Kuat"));

    let unique: HashSet<&str> = names.iter().copied().collect();
    assert_eq!(unique.len(), names.len(), "no planet visited twice");
}

#[test]
fn search_is_deterministic() {
    let galaxy = common::fixture_galaxy();
    let first = find_optimal_route(&galaxy, "Coruscant", "Ryloth", 2.0, false).expect("route");
    let second = find_optimal_route(&galaxy, "Coruscant", "Ryloth", 2.0, false).expect("route");
    assert_eq!(first.steps, second.steps);
    assert_eq!(first.cost, second.cost);
}

#[test]
fn lane_hop_reaches_where_adjacency_cannot() {
    let galaxy = common::fixture_galaxy();

    // Kuat (N9) and Ryloth (R9) are four squares apart, bridged only by the
    // Corellian Run.
    let via_lane =
        find_optimal_route(&galaxy, "Kuat", "Ryloth", 2.0, false).expect("lane route exists");
    assert_eq!(via_lane.hop_count(), 1);
    // 4 units x 3 x rating 2, with the lane bonus for two lane planets.
    assert!((via_lane.cost - 4.0 * 3.0 * 2.0 * 0.7).abs() < 1e-9);

    let err = find_optimal_route(&galaxy, "Kuat", "Ryloth", 2.0, true)
        .expect_err("adjacency-only search cannot reach Ryloth");
    assert!(matches!(err, Error::RouteNotFound { .. }));
}

#[test]
fn lane_connection_bonus_applies_to_hop_cost() {
    let galaxy = common::fixture_galaxy();
    // Coruscant's dedicated connection to Corellia stacks the 0.8 bonus on
    // top of the 0.7 lane bonus.
    let route = find_optimal_route(&galaxy, "Coruscant", "Corellia", 1.0, false).expect("route");
    assert_eq!(route.hop_count(), 1);
    assert!((route.cost - 1.0 * 3.0 * 0.7 * 0.8).abs() < 1e-9);
}

#[test]
fn lane_bonus_applies_even_when_avoiding_lanes() {
    let galaxy = common::fixture_galaxy();
    // Avoiding lanes restricts discovery to adjacency, but Coruscant and
    // Corellia are adjacent lane planets, so the hop keeps its bonus.
    let route = find_optimal_route(&galaxy, "Coruscant", "Corellia", 1.0, true).expect("route");
    assert_eq!(route.hop_count(), 1);
    assert!((route.cost - 1.0 * 3.0 * 0.7 * 0.8).abs() < 1e-9);
}

#[test]
fn co_located_planets_use_stable_friction() {
    let galaxy = common::fixture_galaxy();
    let a = galaxy.planet_by_name("Coruscant").unwrap();
    let b = galaxy.planet_by_name("Hosnian Prime").unwrap();

    let separation = galaxy.separation(a, b);
    assert!((0.2..0.8).contains(&separation), "fraction in range");
    assert_eq!(separation, galaxy.separation(b, a), "pair order irrelevant");
    assert_eq!(separation, galaxy.separation(a, b), "stable across lookups");

    let route =
        find_optimal_route(&galaxy, "Coruscant", "Hosnian Prime", 1.0, false).expect("route");
    assert_eq!(route.hop_count(), 1);
    // Hosnian Prime is off-lane, so the hop is the bare friction cost.
    assert!((route.cost - separation * 3.0).abs() < 1e-9);
}

#[test]
fn start_equals_destination_yields_single_step() {
    let galaxy = common::fixture_galaxy();
    let route = find_optimal_route(&galaxy, "Naboo", "naboo", 1.0, false).expect("route");
    assert_eq!(route.steps.len(), 1);
    assert_eq!(route.cost, 0.0);
    assert_eq!(route.describe(&galaxy), "Naboo (O10)");
}

#[test]
fn unknown_planets_are_reported() {
    let galaxy = common::fixture_galaxy();

    let err = find_optimal_route(&galaxy, "Alderaan", "Kuat", 1.0, false)
        .expect_err("unknown start fails");
    assert!(matches!(err, Error::UnknownPlanet { name } if name == "Alderaan"));

    let err = find_optimal_route(&galaxy, "Kuat", "Dantooine", 1.0, false)
        .expect_err("unknown destination fails");
    assert!(matches!(err, Error::UnknownPlanet { name } if name == "Dantooine"));
}

#[test]
fn disconnected_destination_is_not_found() {
    let galaxy = common::fixture_galaxy();
    for avoid_lanes in [false, true] {
        let err = find_optimal_route(&galaxy, "Coruscant", "Ilum", 1.0, avoid_lanes)
            .expect_err("Ilum is unreachable");
        assert!(matches!(err, Error::RouteNotFound { .. }));
    }
}

#[test]
fn non_positive_rating_is_rejected() {
    let galaxy = common::fixture_galaxy();
    for rating in [0.0, -1.0, f64::NAN] {
        let err = find_optimal_route(&galaxy, "Coruscant", "Kuat", rating, false)
            .expect_err("bad rating fails");
        assert!(matches!(err, Error::InvalidHyperdriveRating { .. }));
    }
}

#[test]
fn route_description_lists_names_and_grids() {
    let galaxy = common::fixture_galaxy();
    let route = find_optimal_route(&galaxy, "Coruscant", "Kuat", 1.0, false).expect("route");
    let text = route.describe(&galaxy);
    assert!(text.starts_with("Coruscant (L9)"));
    assert!(text.ends_with("Kuat (N9)"));
    assert!(text.contains(" -> "));
}
