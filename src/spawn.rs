use std::f64::consts::TAU;

use glam::DVec3;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::particle::Particle;

/// Tangential speed given to a freshly spawned particle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OrbitalSpeed {
    /// The same speed at every distance.
    Fixed(f64),
    /// Speed of a circular orbit around the central body, `√(k·M / r)`.
    Circular,
}

/// Parameters of the distribution new particles are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnParams {
    /// Radius of every spawned particle. Drawn from a long-tailed distribution if `None`.
    pub radius: Option<f64>,
    /// Orbit distance of every spawned particle. Drawn from `distance_range` if `None`.
    pub distance: Option<f64>,
    /// Bounds of the uniform orbit distance distribution.
    pub distance_range: [f64; 2],
    /// Standard deviation of the height above the orbital plane.
    pub vertical_scatter: f64,
    /// Standard deviation of the vertical velocity.
    pub vertical_speed_scatter: f64,
    /// Tangential speed of spawned particles.
    pub speed: OrbitalSpeed,
}

impl SpawnParams {
    /// Particles of the plain swarm: a thin disk between 90 and 120 drifting at a fixed speed.
    pub const fn swarm() -> Self {
        Self {
            radius: None,
            distance: None,
            distance_range: [90.0, 120.0],
            vertical_scatter: 10.0,
            vertical_speed_scatter: 0.01,
            speed: OrbitalSpeed::Fixed(0.5),
        }
    }

    /// Particles of the orbit variants: the same disk, but on near-circular orbits.
    pub const fn orbit() -> Self {
        Self {
            speed: OrbitalSpeed::Circular,
            ..Self::swarm()
        }
    }

    /// The piloted ship: a fixed-size body on a circular orbit far outside the swarm.
    pub const fn pilot() -> Self {
        Self {
            radius: Some(2.0),
            distance: Some(800.0),
            ..Self::orbit()
        }
    }

    /// Spawns a particle from these parameters.
    ///
    /// `gm` is the gravitational constant times the mass proxy of the central body, used by
    /// [`OrbitalSpeed::Circular`].
    #[inline]
    pub fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, gm: f64) -> Particle {
        spawn_particle(rng, self.radius, self.distance, self, gm)
    }
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self::swarm()
    }
}

/// Draws a particle radius: `1 − ln(0.01 + 0.99·U)` with `U` uniform on `[0, 1)`.
///
/// Radii lie in `(1, 1 + ln 100]`, with large radii being rare.
#[inline]
pub fn draw_radius<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u: f64 = rng.gen();
    1.0 - (0.01 + 0.99 * u).ln()
}

/// Spawns a particle in the orbital disk around the origin.
///
/// The particle is placed at distance `r` and angle `θ` in the xy-plane with a gaussian height,
/// and moves tangentially, counter-clockwise seen from `+z`. A fixed radius or distance replaces
/// the corresponding random draw.
///
/// ```
/// # use gravity_swarm::prelude::*;
/// # use rand::{rngs::StdRng, SeedableRng};
/// let mut rng = StdRng::seed_from_u64(7);
/// let params = SpawnParams::swarm();
///
/// let particle = spawn_particle(&mut rng, None, Some(100.0), &params, 27.0);
/// let planar = particle.position.truncate().length();
///
/// assert!((planar - 100.0).abs() < 1e-9);
/// assert!(particle.radius() >= 1.0);
/// ```
pub fn spawn_particle<R: Rng + ?Sized>(
    rng: &mut R,
    fixed_radius: Option<f64>,
    fixed_distance: Option<f64>,
    params: &SpawnParams,
    gm: f64,
) -> Particle {
    let radius = fixed_radius.unwrap_or_else(|| draw_radius(&mut *rng));

    let r = fixed_distance.unwrap_or_else(|| {
        let [min, max] = params.distance_range;
        min + (max - min) * rng.gen::<f64>()
    });
    let theta = rng.gen::<f64>() * TAU;
    let (sin, cos) = theta.sin_cos();

    let height: f64 = rng.sample(StandardNormal);
    let position = DVec3::new(r * cos, r * sin, params.vertical_scatter * height);

    let speed = match params.speed {
        OrbitalSpeed::Fixed(speed) => speed,
        OrbitalSpeed::Circular => (gm / r).sqrt(),
    };
    let climb: f64 = rng.sample(StandardNormal);
    let velocity = DVec3::new(
        -speed * sin,
        speed * cos,
        params.vertical_speed_scatter * climb,
    );

    Particle::new(position, velocity, radius)
}
