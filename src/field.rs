use rand::{rngs::StdRng, SeedableRng};

use crate::{
    body::CentralBody,
    compute_method::{sequential, ComputeMethod},
    config::{ConfigError, PilotRespawn, SwarmConfig},
    particle::Particle,
    pilot::PilotCommand,
};

/// Why a slot was respawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnCause {
    /// The particle fell inside the central body.
    Collision,
    /// The particle went past the escape radius.
    Escape,
}

/// A slot replaced during the boundary pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Respawn {
    /// Index of the replaced particle.
    pub slot: usize,
    /// Why it was replaced.
    pub cause: RespawnCause,
}

/// What happened during a step.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Slots replaced by the boundary pass, in slot order.
    pub respawns: Vec<Respawn>,
}

impl StepReport {
    /// Number of particles that collided with the central body.
    pub fn collisions(&self) -> usize {
        self.count(RespawnCause::Collision)
    }

    /// Number of particles that escaped.
    pub fn escapes(&self) -> usize {
        self.count(RespawnCause::Escape)
    }

    fn count(&self, cause: RespawnCause) -> usize {
        self.respawns.iter().filter(|r| r.cause == cause).count()
    }
}

/// A fixed number of particles orbiting a [`CentralBody`].
///
/// The field owns its particles and the random number generator used to spawn them. Slots are
/// never added or removed: a particle that collides with the central body or escapes is replaced
/// in place by a fresh one.
///
/// ```
/// # use gravity_swarm::prelude::*;
/// let mut field = ParticleField::new(SwarmConfig::swarm().with_seed(3))?;
///
/// for _ in 0..100 {
///     field.step(None);
/// }
///
/// assert_eq!(field.len(), 100);
/// assert_eq!(field.steps(), 100);
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: SwarmConfig,
    central: CentralBody,
    particles: Vec<Particle>,
    rng: StdRng,
    steps: u64,
}

impl ParticleField {
    /// Creates a field from a validated configuration, seeding its generator with
    /// [`seed`](SwarmConfig::seed).
    pub fn new(config: SwarmConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(config.seed))
    }

    /// Creates a field spawning its particles with the given generator.
    pub fn with_rng(config: SwarmConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut field = Self {
            config,
            central: CentralBody::new(config.central_radius),
            particles: Vec::with_capacity(config.particle_count),
            rng,
            steps: 0,
        };

        for slot in 0..config.particle_count {
            let particle = field.spawn(slot);
            field.particles.push(particle);
        }

        log::info!(
            "spawned {} particles around a central body of radius {} (escape radius {}, piloted: {})",
            field.particles.len(),
            config.central_radius,
            config.escape_radius,
            config.is_piloted(),
        );

        Ok(field)
    }

    /// Creates a field from explicit particles, bypassing spawning for the initial state.
    ///
    /// The particle count of the configuration is replaced by the number of particles given.
    pub fn from_particles(
        config: SwarmConfig,
        particles: Vec<Particle>,
    ) -> Result<Self, ConfigError> {
        let config = SwarmConfig {
            particle_count: particles.len(),
            ..config
        };
        config.validate()?;

        Ok(Self {
            config,
            central: CentralBody::new(config.central_radius),
            particles,
            rng: StdRng::seed_from_u64(config.seed),
            steps: 0,
        })
    }

    /// The configuration of the field.
    #[inline]
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// The central body.
    #[inline]
    pub fn central(&self) -> &CentralBody {
        &self.central
    }

    /// All particles, in slot order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The particle in slot `slot`, if it exists.
    #[inline]
    pub fn particle(&self, slot: usize) -> Option<&Particle> {
        self.particles.get(slot)
    }

    /// The ship, if slot 0 is piloted.
    #[inline]
    pub fn pilot(&self) -> Option<&Particle> {
        self.config.pilot.and(self.particles.first())
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field has no slot. Always false for a field built from a valid configuration.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of steps simulated so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Advances the field by one step with the [`sequential::BruteForce`] method.
    ///
    /// See [`step_with`](ParticleField::step_with).
    #[inline]
    pub fn step(&mut self, pilot: Option<&PilotCommand>) -> StepReport {
        self.step_with(&mut sequential::BruteForce, pilot)
    }

    /// Advances the field by one step, computing the attraction with the given [`ComputeMethod`].
    ///
    /// The step runs as full passes over the slots:
    /// 1. every cached squared distance is refreshed and every velocity is advanced from the
    ///    current positions;
    /// 2. the pilot command, if any, is applied to the ship;
    /// 3. every position is advanced with the new velocity;
    /// 4. particles whose cached distance lies outside the band between the central body and the
    ///    escape radius are respawned in place.
    ///
    /// The boundary test uses the distance cached before the move, so a particle can end a step
    /// outside the band and be respawned at the end of the next one.
    pub fn step_with<C>(&mut self, cm: &mut C, pilot: Option<&PilotCommand>) -> StepReport
    where
        C: ComputeMethod + ?Sized,
    {
        self.accelerate(cm);

        if let (Some(command), Some(config)) = (pilot, self.config.pilot) {
            if let Some(ship) = self.particles.first_mut() {
                command.apply(ship, &config.tuning);
            }
        }

        for particle in self.particles.iter_mut() {
            particle.advance();
        }

        let report = self.enforce_boundary();
        self.steps += 1;

        log::trace!(
            "step {}: {} collisions, {} escapes",
            self.steps,
            report.collisions(),
            report.escapes()
        );

        report
    }

    fn accelerate<C>(&mut self, cm: &mut C)
    where
        C: ComputeMethod + ?Sized,
    {
        let point_masses: Vec<_> = self
            .particles
            .iter_mut()
            .map(|particle| {
                particle.refresh_squared_distance();
                particle.point_mass()
            })
            .collect();

        let velocity_changes = cm.compute(&self.config.gravity, &self.central, &point_masses);

        for (particle, dv) in self.particles.iter_mut().zip(velocity_changes) {
            particle.velocity += dv;
        }
    }

    fn enforce_boundary(&mut self) -> StepReport {
        let mut report = StepReport::default();

        for slot in 0..self.particles.len() {
            let distance = self.particles[slot].distance();

            let cause = if (self.central.radius()..=self.config.escape_radius).contains(&distance) {
                continue;
            } else if distance < self.central.radius() {
                RespawnCause::Collision
            } else {
                // Also catches a non-finite distance.
                RespawnCause::Escape
            };

            if self.is_exempt(slot) {
                continue;
            }

            log::debug!("respawning slot {slot} ({cause:?} at distance {distance:.1})");

            self.particles[slot] = self.spawn(slot);
            report.respawns.push(Respawn { slot, cause });
        }

        report
    }

    #[inline]
    fn is_exempt(&self, slot: usize) -> bool {
        slot == 0
            && self
                .config
                .pilot
                .is_some_and(|pilot| pilot.respawn == PilotRespawn::Exempt)
    }

    /// Spawns a fresh particle for `slot`.
    fn spawn(&mut self, slot: usize) -> Particle {
        let gm = self.config.gravity.k * self.central.radius_cubed();

        match self.config.pilot {
            Some(pilot) if slot == 0 => pilot.spawn.spawn(&mut self.rng, gm),
            _ => self.config.spawn.spawn(&mut self.rng, gm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pilot::Thrust;
    use glam::DVec3;

    fn lone_particle(position: DVec3, velocity: DVec3) -> ParticleField {
        ParticleField::from_particles(
            SwarmConfig::swarm(),
            vec![Particle::new(position, velocity, 1.0)],
        )
        .unwrap()
    }

    #[test]
    fn single_step_applies_central_pull_then_moves() {
        let spawn_position = DVec3::new(100.0, 0.0, 0.0);
        let spawn_velocity = DVec3::new(0.0, 0.5, 0.0);
        let mut field = lone_particle(spawn_position, spawn_velocity);

        field.step(None);

        let particle = field.particle(0).unwrap();
        let expected_vx = spawn_velocity.x - 0.001 * 27_000.0 / 1_000_000.0 * 100.0;

        assert!((particle.velocity.x - expected_vx).abs() < 1e-15);
        assert_eq!(particle.velocity.y, 0.5);
        assert_eq!(particle.position, spawn_position + particle.velocity);
    }

    #[test]
    fn boundary_uses_distance_from_before_the_move() {
        // Leaves the band during the first step but is only caught at the end of the second.
        let mut field = lone_particle(DVec3::new(399.0, 0.0, 0.0), DVec3::new(5.0, 0.0, 0.0));

        assert!(field.step(None).respawns.is_empty());
        assert!(field.particle(0).unwrap().position.x > 400.0);

        let report = field.step(None);
        assert_eq!(
            report.respawns,
            vec![Respawn {
                slot: 0,
                cause: RespawnCause::Escape
            }]
        );
        assert!(field.particle(0).unwrap().distance() < 400.0);
    }

    #[test]
    fn collision_with_central_body_respawns() {
        let mut field = lone_particle(DVec3::new(20.0, 0.0, 0.0), DVec3::ZERO);

        let report = field.step(None);

        assert_eq!(report.collisions(), 1);
        assert_eq!(report.escapes(), 0);
        let distance = field.particle(0).unwrap().distance();
        assert!((30.0..=400.0).contains(&distance));
    }

    #[test]
    fn pilot_command_only_reaches_slot_zero() {
        let config = SwarmConfig::piloted().with_seed(11);
        let mut idle = ParticleField::new(config).unwrap();
        let mut thrusting = idle.clone();

        let command = PilotCommand {
            thrust: Some(Thrust::Forward),
            ..PilotCommand::IDLE
        };

        idle.step(None);
        thrusting.step(Some(&command));

        let ship_idle = idle.pilot().unwrap();
        let ship_thrusting = thrusting.pilot().unwrap();

        assert!(ship_thrusting.velocity.length() > ship_idle.velocity.length());
        assert_eq!(idle.particles()[1..], thrusting.particles()[1..]);
    }

    #[test]
    fn pilot_command_is_ignored_without_a_ship() {
        let mut field = ParticleField::new(SwarmConfig::swarm().with_seed(5)).unwrap();
        let mut reference = field.clone();

        let command = PilotCommand {
            thrust: Some(Thrust::Reverse),
            lift: DVec3::Z,
        };

        field.step(Some(&command));
        reference.step(None);

        assert_eq!(field.particles(), reference.particles());
        assert!(field.pilot().is_none());
    }

    #[test]
    fn ship_respawns_from_pilot_parameters() {
        let config = SwarmConfig::piloted();
        let ship = Particle::new(DVec3::new(1700.0, 0.0, 0.0), DVec3::ZERO, 2.0);
        let mut field = ParticleField::from_particles(config, vec![ship]).unwrap();

        let report = field.step(None);
        assert_eq!(report.escapes(), 1);

        let ship = field.pilot().unwrap();
        assert_eq!(ship.radius(), 2.0);
        assert!((ship.position.truncate().length() - 800.0).abs() < 1e-9);
    }

    #[test]
    fn ship_respawns_from_pilot_parameters_after_collision() {
        let config = SwarmConfig::piloted();
        let ship = Particle::new(DVec3::new(10.0, 0.0, 0.0), DVec3::ZERO, 2.0);
        let mut field = ParticleField::from_particles(config, vec![ship]).unwrap();

        let report = field.step(None);
        assert_eq!(
            report.respawns,
            vec![Respawn {
                slot: 0,
                cause: RespawnCause::Collision
            }]
        );

        let ship = field.pilot().unwrap();
        assert_eq!(ship.radius(), 2.0);
        assert!((ship.position.truncate().length() - 800.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_particle_is_respawned() {
        let mut field = lone_particle(DVec3::splat(f64::NAN), DVec3::ZERO);

        let report = field.step(None);
        assert_eq!(report.escapes(), 1);

        let particle = field.particle(0).unwrap();
        assert!(particle.position.is_finite());
        assert!(particle.velocity.is_finite());
        assert!((30.0..=400.0).contains(&particle.distance()));
    }

    #[test]
    fn anchored_ship_is_never_respawned() {
        let config = SwarmConfig::anchored();
        let ship = Particle::new(DVec3::new(1700.0, 0.0, 0.0), DVec3::X, 2.0);
        let other = Particle::new(DVec3::new(1700.0, 10.0, 0.0), DVec3::X, 1.0);
        let mut field = ParticleField::from_particles(config, vec![ship, other]).unwrap();

        let report = field.step(None);

        assert_eq!(
            report.respawns,
            vec![Respawn {
                slot: 1,
                cause: RespawnCause::Escape
            }]
        );
        assert!(field.pilot().unwrap().position.x > 1700.0);
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let config = SwarmConfig {
            central_radius: -1.0,
            ..SwarmConfig::swarm()
        };

        assert_eq!(
            ParticleField::new(config).unwrap_err(),
            ConfigError::CentralRadius(-1.0)
        );
    }
}
