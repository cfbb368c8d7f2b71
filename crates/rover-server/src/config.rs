//! Server configuration (TOML).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use rover_core::{Rover, RoverBuilder};
use rover_fleet::Fleet;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Top-level server configuration.
///
/// Missing fields default to a local server on port 8080 managing a
/// single rover `r1`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind: String,

    /// Port to listen on.
    pub port: u16,

    /// Base seed for obstacle sensors. Rover `i` (in file order) uses
    /// `seed + i` unless it sets its own. Unset means entropy.
    pub seed: Option<u64>,

    /// Rovers registered at startup.
    pub rovers: Vec<RoverEntry>,
}

/// One rover registered at startup.
///
/// Values are passed to the rover builder as given; out-of-range ones are
/// corrected there, not rejected here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoverEntry {
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub orientation: String,
    pub obstacle_probability: f64,
    pub grid_width: i64,
    pub grid_height: i64,
    pub seed: Option<u64>,
}

impl Default for RoverEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            x: 0,
            y: 0,
            orientation: "N".to_string(),
            obstacle_probability: 0.0,
            grid_width: i64::from(rover_core::DEFAULT_GRID_WIDTH),
            grid_height: i64::from(rover_core::DEFAULT_GRID_HEIGHT),
            seed: None,
        }
    }
}

impl RoverEntry {
    /// Builder for this entry. `fallback_seed` applies when the entry has
    /// no seed of its own.
    pub fn builder(&self, fallback_seed: Option<u64>) -> RoverBuilder {
        let builder = Rover::builder()
            .position(self.x, self.y)
            .orientation(self.orientation.clone())
            .obstacle_probability(self.obstacle_probability)
            .grid(self.grid_width, self.grid_height);
        match self.seed.or(fallback_seed) {
            Some(seed) => builder.seed(seed),
            None => builder,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
            seed: Some(1234),
            rovers: vec![RoverEntry {
                name: "r1".to_string(),
                obstacle_probability: 0.1,
                ..RoverEntry::default()
            }],
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(anyhow!("port must be > 0"));
        }
        if self.bind.trim().is_empty() {
            return Err(anyhow!("bind must not be empty"));
        }
        let mut seen = HashSet::new();
        for (i, rover) in self.rovers.iter().enumerate() {
            if rover.name.trim().is_empty() {
                return Err(anyhow!("rovers[{i}].name must not be empty"));
            }
            if !seen.insert(rover.name.as_str()) {
                return Err(anyhow!("duplicate rover name '{}'", rover.name));
            }
        }
        Ok(())
    }

    /// Seed for the rover at `index`, derived from the base seed.
    pub fn seed_for(&self, index: usize) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(index as u64))
    }

    /// Register every configured rover in `fleet`.
    pub fn populate(&self, fleet: &Fleet) -> Result<()> {
        for (i, entry) in self.rovers.iter().enumerate() {
            let handle = fleet
                .create(entry.name.clone(), entry.builder(self.seed_for(i)))
                .with_context(|| format!("register rover '{}'", entry.name))?;
            let rover = handle.lock()?;
            for warning in rover.diagnostics().warnings() {
                warn!(rover = %entry.name, %warning, "configured value corrected");
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ServerConfig::default()`.
pub fn load_config(path: &Path) -> Result<ServerConfig> {
    if !path.exists() {
        info!(path = %path.display(), "config file not found, using defaults");
        let cfg = ServerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ServerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
