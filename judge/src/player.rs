use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_RATING: f64 = 2500.0;
pub const DEFAULT_K_FACTOR: u32 = 20;
pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 9999.0;
pub const MIN_K_FACTOR: u32 = 10;
pub const MAX_K_FACTOR: u32 = 40;

/// A registered player and their rating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub rating: f64,
    /// Controls how fast the rating moves, see [`crate::update_ratings()`].
    pub k_factor: u32,
}

impl PlayerProfile {
    /// Creates a profile, clamping rating and K-factor into their valid ranges.
    pub fn new(name: &str, rating: f64, k_factor: u32) -> Self {
        Self {
            name: String::from(name),
            rating: clamp_rating(rating),
            k_factor: k_factor.clamp(MIN_K_FACTOR, MAX_K_FACTOR),
        }
    }

    pub fn with_defaults(name: &str) -> Self {
        Self::new(name, DEFAULT_RATING, DEFAULT_K_FACTOR)
    }
}

pub fn clamp_rating(rating: f64) -> f64 {
    rating.clamp(MIN_RATING, MAX_RATING)
}

/// All known players, keyed by name.
///
/// Stored on disk as a JSON list of [`PlayerProfile`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    players: BTreeMap<String, PlayerProfile>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let profiles: Vec<PlayerProfile> = serde_json::from_reader(reader)?;
        let mut roster = Self::new();
        for profile in profiles {
            if roster.get(&profile.name).is_some() {
                anyhow::bail!(
                    "Player '{}' appears twice in '{}'",
                    profile.name,
                    path.display()
                );
            }
            roster.insert(PlayerProfile::new(
                &profile.name,
                profile.rating,
                profile.k_factor,
            ));
        }
        Ok(roster)
    }

    /// Loads the roster if the file exists, and starts an empty one otherwise.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &self.standings())?;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&PlayerProfile> {
        self.players.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PlayerProfile> {
        self.players.get_mut(name)
    }

    pub fn insert(&mut self, profile: PlayerProfile) {
        self.players.insert(profile.name.clone(), profile);
    }

    /// Adds a player with the default rating unless they are already known.
    pub fn register(&mut self, name: &str) -> &PlayerProfile {
        self.players
            .entry(String::from(name))
            .or_insert_with(|| PlayerProfile::with_defaults(name))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All players, highest rating first.
    pub fn standings(&self) -> Vec<&PlayerProfile> {
        let mut profiles: Vec<&PlayerProfile> = self.players.values().collect();
        profiles.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        profiles
    }
}
