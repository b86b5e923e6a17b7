//! # Gravity Swarm
//!
//! Gravity Swarm simulates a swarm of particles orbiting an immovable central body under mutual
//! gravity, as used by small interactive orbit toys.
//!
//! ## Goals
//!
//! The crate only contains the simulation: the force law, the time integration and the lifecycle
//! of the particles. Drawing, lighting, camera orientation and input device protocols belong to
//! the host application, which talks to the simulation through plain data
//! ([`ControlInput`](input::ControlInput)) and a small [`Renderer`](render::Renderer) trait.
//!
//! Every body has unit density, so its mass is proxied by the cube of its radius. The central body
//! attracts every particle, and every particle attracts every other one, which costs `O(n²)` per
//! step. Particles that fall into the central body or escape past a configured radius are replaced
//! in place by freshly spawned ones, which also takes care of the numerical blow-ups of close
//! encounters.
//!
//! The attraction can be computed on multiple CPU threads thanks to
//! [rayon](https://github.com/rayon-rs/rayon). Enable the "parallel" feature to access the
//! available compute methods.
//!
//! # Using Gravity Swarm
//!
//! ## Setting up the field
//!
//! Start from one of the [`SwarmConfig`](config::SwarmConfig) presets and create a
//! [`ParticleField`](field::ParticleField) from it:
//!
//! ```
//! # use gravity_swarm::prelude::*;
//! let config = SwarmConfig::orbit().with_seed(42);
//! let mut field = ParticleField::new(config)?;
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! ## Stepping the simulation
//!
//! Each call to [`step`](field::ParticleField::step) advances every particle by one step: the
//! velocities are first updated from the current positions, the positions are then advanced with
//! the new velocities, and particles outside the band between the central body and the escape
//! radius are respawned.
//!
//! ```
//! # use gravity_swarm::prelude::*;
//! # let mut field = ParticleField::new(SwarmConfig::orbit())?;
//! let report = field.step(None);
//!
//! for respawn in &report.respawns {
//!     println!("slot {} was replaced: {:?}", respawn.slot, respawn.cause);
//! }
//!
//! let radius = field.central().radius();
//! let escape = field.config().escape_radius;
//! assert!(field.particles().iter().all(|p| (radius..=escape).contains(&p.distance())));
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! ## Piloting a ship
//!
//! Piloted configurations designate slot 0 as a ship. A [`PilotCommand`](pilot::PilotCommand)
//! given to the step changes its velocity between the velocity and position updates.
//!
//! ```
//! # use gravity_swarm::prelude::*;
//! let mut field = ParticleField::new(SwarmConfig::piloted())?;
//! let command = PilotCommand { thrust: Some(Thrust::Forward), ..PilotCommand::IDLE };
//!
//! field.step(Some(&command));
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! For a whole toy with a start gate and camera controls, see [`Session`](session::Session).

#![warn(missing_docs)]

/// Bodies, and the central body in particular.
pub mod body;

/// Trait for computing the attraction between particles and types implementing it.
pub mod compute_method;

pub mod config;

/// The particle field and its step.
pub mod field;

/// The force law.
pub mod gravity;

/// Controls read from the input devices.
pub mod input;

/// State of the particles.
pub mod particle;

/// Ship controls.
pub mod pilot;

/// Seam between the simulation and a renderer.
pub mod render;

/// Start gate and per-frame driver.
pub mod session;

/// Spawning of new particles.
pub mod spawn;

/// Derive macro for types representing bodies.
pub mod gravity_swarm_derive {
    pub use gravity_swarm_derive::Body;
}

/// Everything needed to use the crate.
pub mod prelude {
    pub use crate::body::{Body, CentralBody};
    pub use crate::compute_method::*;
    pub use crate::config::{ConfigError, PilotConfig, PilotRespawn, SwarmConfig};
    pub use crate::field::{ParticleField, Respawn, RespawnCause, StepReport};
    pub use crate::gravity::GravityLaw;
    pub use crate::gravity_swarm_derive::*;
    pub use crate::input::{ControlInput, OrbitAngles};
    pub use crate::particle::Particle;
    pub use crate::pilot::{PilotCommand, PilotTuning, Thrust};
    pub use crate::render::{Renderer, SphereInstance};
    pub use crate::session::Session;
    pub use crate::spawn::{spawn_particle, OrbitalSpeed, SpawnParams};
}
