use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::friction;
use crate::grid::GridSquare;

/// Index of a planet within the loaded galaxy.
pub type PlanetId = usize;

/// Region tier a planet belongs to. The tier drives the base astrogation
/// difficulty and the route-mode bonuses in the travel report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Region {
    #[serde(rename = "Deep Core Worlds")]
    DeepCoreWorlds,
    #[serde(rename = "Core Worlds")]
    CoreWorlds,
    #[serde(rename = "Colonies")]
    Colonies,
    #[serde(rename = "Inner Rim")]
    InnerRim,
    #[serde(rename = "Expansion Region")]
    ExpansionRegion,
    #[serde(rename = "Mid Rim")]
    MidRim,
    #[serde(rename = "Outer Rim")]
    OuterRim,
    #[serde(rename = "Unknown Regions")]
    UnknownRegions,
    /// Catch-all for region strings the chart does not classify.
    #[serde(other)]
    Uncharted,
}

impl Region {
    /// Base difficulty dice imposed by jumping into this region.
    pub fn base_difficulty(self) -> u32 {
        match self {
            Region::DeepCoreWorlds | Region::UnknownRegions => 3,
            Region::CoreWorlds | Region::Colonies | Region::MidRim | Region::OuterRim => 2,
            Region::InnerRim | Region::ExpansionRegion | Region::Uncharted => 1,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Region::DeepCoreWorlds => "Deep Core Worlds",
            Region::CoreWorlds => "Core Worlds",
            Region::Colonies => "Colonies",
            Region::InnerRim => "Inner Rim",
            Region::ExpansionRegion => "Expansion Region",
            Region::MidRim => "Mid Rim",
            Region::OuterRim => "Outer Rim",
            Region::UnknownRegions => "Unknown Regions",
            Region::Uncharted => "Uncharted",
        };
        f.write_str(value)
    }
}

/// A named location on the galactic chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    /// Original chart label, kept for display (`"L9"`).
    pub grid_label: String,
    pub grid: GridSquare,
    pub region: Region,
    /// Whether the planet sits on a hyperspace lane; both endpoints of a hop
    /// must be on a lane for the speed bonus to apply.
    pub on_lane: bool,
    /// Name of the planet this one has a dedicated lane connection to, if
    /// any. Following that connection grants a further speed bonus.
    pub connects_to: Option<String>,
}

/// A hyperspace lane: an ordered chain of grid squares offering shortcut
/// connectivity between distant planets.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub name: String,
    pub route: Vec<GridSquare>,
}

/// In-memory representation of the galaxy map.
///
/// Planets and lanes are immutable once loaded; lookups by name are
/// case-insensitive and lookups by grid square resolve to the first planet
/// recorded on that square.
#[derive(Debug, Clone, Default)]
pub struct Galaxy {
    pub planets: Vec<Planet>,
    pub lanes: Vec<Lane>,
    name_index: HashMap<String, PlanetId>,
    grid_index: HashMap<GridSquare, PlanetId>,
}

impl Galaxy {
    /// Access a planet by identifier.
    ///
    /// # Panics
    /// Panics if the identifier did not come from this galaxy.
    pub fn planet(&self, id: PlanetId) -> &Planet {
        &self.planets[id]
    }

    /// Lookup a planet identifier by its case-insensitive name.
    pub fn planet_by_name(&self, name: &str) -> Option<PlanetId> {
        self.name_index.get(&name.to_lowercase()).copied()
    }

    /// Lookup the planet occupying a grid square, if any.
    pub fn planet_at(&self, square: GridSquare) -> Option<PlanetId> {
        self.grid_index.get(&square).copied()
    }

    /// Grid distance between two planets, substituting the stable friction
    /// fraction when they share a square.
    pub fn separation(&self, a: PlanetId, b: PlanetId) -> f64 {
        let from = self.planet(a);
        let to = self.planet(b);
        let distance = from.grid.distance_to(&to.grid);
        if distance == 0.0 {
            friction::same_grid_fraction(&from.name, &to.name)
        } else {
            distance
        }
    }
}

#[derive(Debug, Deserialize)]
struct PlanetRecord {
    name: String,
    grid: String,
    region: Region,
    #[serde(default)]
    on_lane: bool,
    #[serde(default)]
    connects_to: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LaneRecord {
    name: String,
    route: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GalaxyFile {
    planets: Vec<PlanetRecord>,
    #[serde(default)]
    lanes: Vec<LaneRecord>,
}

/// Load the galaxy map from a JSON data file.
///
/// Validation happens here rather than during routing: the file must contain
/// at least one planet and every grid label (planet or lane waypoint) must
/// parse, so a corrupt chart fails loudly at load time. Duplicate
/// case-folded planet names keep the first entry and log a warning.
pub fn load_galaxy(path: &Path) -> Result<Galaxy> {
    let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => Error::DatasetNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    })?;
    let file: GalaxyFile = serde_json::from_str(&raw)?;

    if file.planets.is_empty() {
        return Err(Error::EmptyDataset {
            path: path.to_path_buf(),
        });
    }
    debug!(
        path = %path.display(),
        planets = file.planets.len(),
        lanes = file.lanes.len(),
        "loading galaxy data"
    );

    let mut planets = Vec::with_capacity(file.planets.len());
    let mut name_index = HashMap::new();
    let mut grid_index = HashMap::new();

    for record in file.planets {
        let grid = GridSquare::parse(&record.grid)?;
        let key = record.name.to_lowercase();
        if name_index.contains_key(&key) {
            warn!(name = %record.name, "duplicate planet name; keeping the first entry");
            continue;
        }

        let id = planets.len();
        name_index.insert(key, id);
        grid_index.entry(grid).or_insert(id);
        planets.push(Planet {
            id,
            name: record.name,
            grid_label: record.grid,
            grid,
            region: record.region,
            on_lane: record.on_lane,
            connects_to: record.connects_to,
        });
    }

    let lanes = file
        .lanes
        .into_iter()
        .map(|record| {
            let route = record
                .route
                .iter()
                .map(|label| GridSquare::parse(label))
                .collect::<Result<Vec<_>>>()?;
            Ok(Lane {
                name: record.name,
                route,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Galaxy {
        planets,
        lanes,
        name_index,
        grid_index,
    })
}
