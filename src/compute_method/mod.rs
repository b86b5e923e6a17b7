#[cfg(feature = "parallel")]
/// Compute methods that use multiple CPU threads.
pub mod parallel;

/// Compute methods that use one CPU thread.
pub mod sequential;

use glam::DVec3;

use crate::{body::CentralBody, gravity::GravityLaw};

/// Position and mass proxy of a body.
pub type PointMass = (DVec3, f64);

/// Trait for algorithms computing the velocity change of every particle of a field over one step.
///
/// Implementations receive a snapshot of the positions and mass proxies of the particles, indexed
/// by slot, and return one velocity change per slot in the same order. A particle never attracts
/// itself: exclusion is done by slot index.
///
/// # Example
///
/// ```
/// # use gravity_swarm::prelude::*;
/// # use glam::DVec3;
/// /// Ignores the particles and only feels the central body.
/// struct CentralOnly;
///
/// impl ComputeMethod for CentralOnly {
///     fn compute(
///         &mut self,
///         law: &GravityLaw,
///         central: &CentralBody,
///         bodies: &[PointMass],
///     ) -> Vec<DVec3> {
///         bodies
///             .iter()
///             .map(|&(p, _)| law.central(p, p.length_squared(), central.radius_cubed()))
///             .collect()
///     }
/// }
/// ```
pub trait ComputeMethod {
    /// Computes the velocity change the central body and the other particles cause on each
    /// particle.
    fn compute(&mut self, law: &GravityLaw, central: &CentralBody, bodies: &[PointMass])
        -> Vec<DVec3>;
}

impl<C: ComputeMethod> ComputeMethod for &mut C {
    #[inline]
    fn compute(
        &mut self,
        law: &GravityLaw,
        central: &CentralBody,
        bodies: &[PointMass],
    ) -> Vec<DVec3> {
        (**self).compute(law, central, bodies)
    }
}

/// Velocity change of the particle in slot `i`: the central pull first, then every other particle
/// in slot order.
#[inline]
pub(crate) fn velocity_change(
    law: &GravityLaw,
    central: &CentralBody,
    bodies: &[PointMass],
    i: usize,
) -> DVec3 {
    let (position, _) = bodies[i];
    let pull = law.central(position, position.length_squared(), central.radius_cubed());

    bodies
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .fold(pull, |dv, (_, &(other, mass))| {
            dv + law.pairwise(position, other, mass)
        })
}
