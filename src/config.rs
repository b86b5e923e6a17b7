//! Configuration of a [`ParticleField`](crate::field::ParticleField).
//!
//! Every value is fixed when the field is created. The presets reproduce the four swarm variants:
//!
//! - [`SwarmConfig::swarm`]: 100 particles drifting at a fixed speed, lost past 400
//! - [`SwarmConfig::orbit`]: 100 particles on near-circular orbits, lost past 1600
//! - [`SwarmConfig::piloted`]: the orbit swarm plus a ship in slot 0, respawned when lost
//! - [`SwarmConfig::anchored`]: the orbit swarm plus a ship in slot 0 that is never respawned
//!
//! With the `serde` feature, configurations can be read from YAML:
//!
//! ```yaml
//! particle_count: 101
//! escape_radius: 1600.0
//! central_radius: 30.0
//! seed: 42
//! gravity:
//!   k: 0.001
//!   min_separation: 0.5
//! spawn:
//!   distance_range: [90.0, 120.0]
//!   speed: circular
//! pilot:
//!   respawn: spawn
//!   spawn:
//!     radius: 2.0
//!     distance: 800.0
//!     speed: circular
//! ```

use thiserror::Error;

use crate::{gravity::GravityLaw, pilot::PilotTuning, spawn::SpawnParams};

/// Errors caused by an inconsistent [`SwarmConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The field has no slot.
    #[error("the field needs at least one particle")]
    NoParticles,
    /// The central body has no size.
    #[error("central body radius must be positive, got {0}")]
    CentralRadius(f64),
    /// The escape radius lies inside the central body.
    #[error("escape radius {escape} must exceed the central body radius {central}")]
    #[allow(missing_docs)]
    EscapeRadius { escape: f64, central: f64 },
    /// Bodies would not attract each other.
    #[error("gravitational constant must be positive, got {0}")]
    GravitationalConstant(f64),
    /// The numerical guard would have no effect.
    #[error("minimum separation must be positive, got {0}")]
    MinSeparation(f64),
    /// A fixed particle radius has no size.
    #[error("particle radius must be positive, got {0}")]
    ParticleRadius(f64),
    /// Orbit distances cannot be drawn from the range.
    #[error("orbit distance range [{0}, {1}] is empty or not positive")]
    DistanceRange(f64, f64),
    /// Particles would be respawned as soon as they are spawned.
    #[error("spawn distance {distance} lies outside the band ({central}, {escape})")]
    #[allow(missing_docs)]
    SpawnDistance {
        distance: f64,
        central: f64,
        escape: f64,
    },
}

/// What happens to the piloted slot when it collides or escapes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PilotRespawn {
    /// Respawn the ship from the pilot spawn parameters.
    #[default]
    Spawn,
    /// Never respawn the ship.
    Exempt,
}

/// Configuration of the piloted slot 0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PilotConfig {
    /// Distribution the ship is spawned from.
    pub spawn: SpawnParams,
    /// Boundary policy of the ship.
    pub respawn: PilotRespawn,
    /// Strength of the ship controls.
    pub tuning: PilotTuning,
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            spawn: SpawnParams::pilot(),
            respawn: PilotRespawn::Spawn,
            tuning: PilotTuning::default(),
        }
    }
}

/// Configuration of a particle field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwarmConfig {
    /// Number of slots, including the piloted one.
    pub particle_count: usize,
    /// Distance past which a particle is lost and respawned.
    pub escape_radius: f64,
    /// Radius of the central body.
    pub central_radius: f64,
    /// Force law between bodies.
    pub gravity: GravityLaw,
    /// Distribution regular particles are spawned from.
    pub spawn: SpawnParams,
    /// Piloted slot 0, if any.
    pub pilot: Option<PilotConfig>,
    /// Seed of the random number generator used for spawning.
    pub seed: u64,
}

impl SwarmConfig {
    /// Number of regular particles in every preset.
    pub const SWARM_SIZE: usize = 100;

    /// The plain swarm.
    pub fn swarm() -> Self {
        Self {
            particle_count: Self::SWARM_SIZE,
            escape_radius: 400.0,
            central_radius: 30.0,
            gravity: GravityLaw::default(),
            spawn: SpawnParams::swarm(),
            pilot: None,
            seed: 0,
        }
    }

    /// The swarm on near-circular orbits with a wider escape band.
    pub fn orbit() -> Self {
        Self {
            escape_radius: 1600.0,
            spawn: SpawnParams::orbit(),
            ..Self::swarm()
        }
    }

    /// The orbit swarm with a ship in slot 0, respawned when it collides or escapes.
    pub fn piloted() -> Self {
        Self {
            particle_count: Self::SWARM_SIZE + 1,
            pilot: Some(PilotConfig::default()),
            ..Self::orbit()
        }
    }

    /// The orbit swarm with a ship in slot 0 that is exempt from the boundary policy.
    pub fn anchored() -> Self {
        Self {
            pilot: Some(PilotConfig {
                respawn: PilotRespawn::Exempt,
                ..PilotConfig::default()
            }),
            ..Self::piloted()
        }
    }

    /// Returns the configuration with another seed.
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// Whether slot 0 is piloted.
    #[inline]
    pub fn is_piloted(&self) -> bool {
        self.pilot.is_some()
    }

    /// Checks that the configuration describes a field that can be simulated.
    ///
    /// ```
    /// # use gravity_swarm::prelude::*;
    /// let mut config = SwarmConfig::swarm();
    /// assert!(config.validate().is_ok());
    ///
    /// config.escape_radius = 10.0;
    /// assert!(matches!(config.validate(), Err(ConfigError::EscapeRadius { .. })));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }

        let central = self.central_radius;
        let escape = self.escape_radius;

        if !(central > 0.0) {
            return Err(ConfigError::CentralRadius(central));
        }
        if !(escape > central) {
            return Err(ConfigError::EscapeRadius { escape, central });
        }
        if !(self.gravity.k > 0.0) {
            return Err(ConfigError::GravitationalConstant(self.gravity.k));
        }
        if let Some(min) = self.gravity.min_separation {
            if !(min > 0.0) {
                return Err(ConfigError::MinSeparation(min));
            }
        }

        self.validate_spawn(&self.spawn)?;
        if let Some(pilot) = &self.pilot {
            self.validate_spawn(&pilot.spawn)?;
        }

        Ok(())
    }

    fn validate_spawn(&self, spawn: &SpawnParams) -> Result<(), ConfigError> {
        if let Some(radius) = spawn.radius {
            if !(radius > 0.0) {
                return Err(ConfigError::ParticleRadius(radius));
            }
        }

        let in_band = |distance: f64| {
            if distance > self.central_radius && distance < self.escape_radius {
                Ok(())
            } else {
                Err(ConfigError::SpawnDistance {
                    distance,
                    central: self.central_radius,
                    escape: self.escape_radius,
                })
            }
        };

        match spawn.distance {
            Some(distance) => in_band(distance),
            None => {
                let [min, max] = spawn.distance_range;
                if !(min > 0.0 && min <= max) {
                    return Err(ConfigError::DistanceRange(min, max));
                }
                in_band(min)?;
                in_band(max)
            }
        }
    }
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self::swarm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for config in [
            SwarmConfig::swarm(),
            SwarmConfig::orbit(),
            SwarmConfig::piloted(),
            SwarmConfig::anchored(),
        ] {
            assert_eq!(config.validate(), Ok(()));
        }
    }

    #[test]
    fn presets_match_the_variants() {
        assert_eq!(SwarmConfig::swarm().particle_count, 100);
        assert_eq!(SwarmConfig::swarm().escape_radius, 400.0);
        assert_eq!(SwarmConfig::orbit().escape_radius, 1600.0);
        assert_eq!(SwarmConfig::piloted().particle_count, 101);
        assert_eq!(
            SwarmConfig::anchored().pilot.map(|pilot| pilot.respawn),
            Some(PilotRespawn::Exempt)
        );
    }

    #[test]
    fn empty_field_is_rejected() {
        let config = SwarmConfig {
            particle_count: 0,
            ..SwarmConfig::swarm()
        };

        assert_eq!(config.validate(), Err(ConfigError::NoParticles));
    }

    #[test]
    fn pilot_outside_escape_band_is_rejected() {
        // The ship spawns at 800, past the escape radius of the plain swarm.
        let config = SwarmConfig {
            pilot: Some(PilotConfig::default()),
            ..SwarmConfig::swarm()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnDistance { distance, .. }) if distance == 800.0
        ));
    }

    #[test]
    fn nan_constants_are_rejected() {
        let config = SwarmConfig {
            gravity: GravityLaw::new(f64::NAN),
            ..SwarmConfig::swarm()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::GravitationalConstant(_))
        ));
    }

    #[test]
    fn inverted_distance_range_is_rejected() {
        let mut config = SwarmConfig::swarm();
        config.spawn.distance_range = [120.0, 90.0];

        assert_eq!(
            config.validate(),
            Err(ConfigError::DistanceRange(120.0, 90.0))
        );
    }
}
