use glam::DVec3;

use crate::{input::ControlInput, particle::Particle};

/// Direction of the ship's engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thrust {
    /// Speeds the ship up along its velocity.
    Forward,
    /// Slows the ship down along its velocity.
    Reverse,
}

/// Strength of the ship controls.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PilotTuning {
    /// Relative change of the ship's velocity per step of thrust.
    pub thrust_step: f64,
    /// Velocity added per step of lift.
    pub lift_impulse: f64,
}

impl Default for PilotTuning {
    fn default() -> Self {
        Self {
            thrust_step: 0.05,
            lift_impulse: 0.01,
        }
    }
}

/// What the pilot asks of the ship for one step.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PilotCommand {
    /// Scales the whole velocity of the ship.
    pub thrust: Option<Thrust>,
    /// Direction of the impulse added to the velocity, scaled by the lift of the tuning.
    pub lift: DVec3,
}

impl PilotCommand {
    /// A command leaving the ship alone.
    pub const IDLE: Self = Self {
        thrust: None,
        lift: DVec3::ZERO,
    };

    /// Reads a command from the controls.
    ///
    /// Up and down thrust forward and in reverse, A and B lift the ship along and against `up`,
    /// the up vector of the camera. Opposite controls held together cancel out.
    ///
    /// ```
    /// # use gravity_swarm::prelude::*;
    /// # use glam::DVec3;
    /// let input = ControlInput { up: true, a: true, ..Default::default() };
    /// let command = PilotCommand::from_input(&input, DVec3::Z);
    ///
    /// assert_eq!(command.thrust, Some(Thrust::Forward));
    /// assert_eq!(command.lift, DVec3::Z);
    /// ```
    pub fn from_input(input: &ControlInput, up: DVec3) -> Self {
        let thrust = match (input.up, input.down) {
            (true, false) => Some(Thrust::Forward),
            (false, true) => Some(Thrust::Reverse),
            _ => None,
        };

        let up = up.normalize_or_zero();
        let lift = match (input.a, input.b) {
            (true, false) => up,
            (false, true) => -up,
            _ => DVec3::ZERO,
        };

        Self { thrust, lift }
    }

    /// Whether the command changes nothing.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.thrust.is_none() && self.lift == DVec3::ZERO
    }

    /// Changes the velocity of the ship.
    pub fn apply(&self, ship: &mut Particle, tuning: &PilotTuning) {
        let scale = match self.thrust {
            Some(Thrust::Forward) => 1.0 + tuning.thrust_step,
            Some(Thrust::Reverse) => 1.0 - tuning.thrust_step,
            None => 1.0,
        };

        ship.velocity = ship.velocity * scale + self.lift * tuning.lift_impulse;
    }
}
