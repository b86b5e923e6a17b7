use crate::{
    compute_method::{sequential, ComputeMethod},
    field::{ParticleField, StepReport},
    input::{ControlInput, OrbitAngles},
    pilot::PilotCommand,
    render::{self, Renderer},
};

/// A running toy: a particle field behind a start gate, driven once per rendered frame.
///
/// Until the start button is pressed, the field is inert and only the central body is drawn. Once
/// started, a session never stops.
///
/// ```
/// # use gravity_swarm::prelude::*;
/// let mut session = Session::new(ParticleField::new(SwarmConfig::swarm())?);
///
/// assert!(session.tick(&ControlInput::default()).is_none());
///
/// let start = ControlInput { start: true, ..Default::default() };
/// assert!(session.tick(&start).is_none());
/// assert!(session.tick(&ControlInput::default()).is_some());
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session<C = sequential::BruteForce> {
    field: ParticleField,
    compute_method: C,
    orbit: OrbitAngles,
    started: bool,
}

impl Session {
    /// Creates a session stepping its field with [`sequential::BruteForce`].
    pub fn new(field: ParticleField) -> Self {
        Self::with_compute_method(field, sequential::BruteForce)
    }
}

impl<C: ComputeMethod> Session<C> {
    /// Creates a session stepping its field with the given [`ComputeMethod`].
    pub fn with_compute_method(field: ParticleField, compute_method: C) -> Self {
        Self {
            field,
            compute_method,
            orbit: OrbitAngles::default(),
            started: false,
        }
    }

    /// Whether the start button has been pressed.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// The simulated field.
    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// The camera angles turned by the spinners.
    #[inline]
    pub fn orbit(&self) -> &OrbitAngles {
        &self.orbit
    }

    /// Runs one frame.
    ///
    /// Before the session has started, the frame only checks the start button and nothing is
    /// simulated, even on the frame the button is pressed. Afterwards, the spinners turn the
    /// camera, the controls are read into a [`PilotCommand`] if the field is piloted, and the field
    /// is stepped.
    pub fn tick(&mut self, input: &ControlInput) -> Option<StepReport> {
        if !self.started {
            if input.start {
                log::info!("session started");
                self.started = true;
            }
            return None;
        }

        self.orbit.turn(input.spin);

        let command = self
            .field
            .config()
            .is_piloted()
            .then(|| PilotCommand::from_input(input, self.orbit.up()));

        Some(
            self.field
                .step_with(&mut self.compute_method, command.as_ref()),
        )
    }

    /// Draws the central body and, once started, every particle.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        if self.started {
            render::draw(&self.field, renderer);
        } else {
            render::draw_central(&self.field, renderer);
        }
    }
}
