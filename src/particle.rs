use glam::DVec3;

use crate::body::Body;
use gravity_swarm_derive::Body;

/// A mobile body of the swarm.
///
/// The velocity of a particle is the one from half a step in the future: the accelerate pass
/// advances it using the positions of everything now, and the move pass then integrates the
/// position with it.
#[derive(Debug, Clone, Copy, PartialEq, Body)]
pub struct Particle {
    /// Position of the particle.
    pub position: DVec3,
    /// Velocity of the particle, in distance per step.
    pub velocity: DVec3,
    pub(crate) radius: f64,
    pub(crate) radius_cubed: f64,
    pub(crate) squared_distance: f64,
}

impl Particle {
    /// Creates a new particle, caching its mass proxy and its squared distance from the origin.
    ///
    /// ```
    /// # use gravity_swarm::prelude::*;
    /// # use glam::DVec3;
    /// let particle = Particle::new(DVec3::new(3.0, 4.0, 0.0), DVec3::ZERO, 2.0);
    ///
    /// assert_eq!(particle.radius_cubed(), 8.0);
    /// assert_eq!(particle.distance(), 5.0);
    /// ```
    #[inline]
    pub fn new(position: DVec3, velocity: DVec3, radius: f64) -> Self {
        Self {
            position,
            velocity,
            radius,
            radius_cubed: radius * radius * radius,
            squared_distance: position.length_squared(),
        }
    }

    /// Radius of the particle.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// `radius³`, the mass proxy of the particle.
    #[inline]
    pub fn radius_cubed(&self) -> f64 {
        self.radius_cubed
    }

    /// Squared distance from the origin, as cached at the start of the last accelerate pass.
    ///
    /// It lags behind [`position`](Particle::position) by one move.
    #[inline]
    pub fn squared_distance(&self) -> f64 {
        self.squared_distance
    }

    /// Distance from the origin computed from the cached squared distance.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.squared_distance.sqrt()
    }

    /// Recomputes the cached squared distance from the current position.
    #[inline]
    pub fn refresh_squared_distance(&mut self) {
        self.squared_distance = self.position.length_squared();
    }

    /// Integrates one step forward using the current velocity.
    #[inline]
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Position and mass proxy of the particle.
    #[inline]
    pub fn point_mass(&self) -> (DVec3, f64) {
        (self.position, self.radius_cubed)
    }
}
