use glam::DVec3;

use super::{velocity_change, ComputeMethod, PointMass};
use crate::{body::CentralBody, gravity::GravityLaw};

/// A brute-force [`ComputeMethod`] using the CPU.
///
/// Each particle sums the central pull and the pull of every other particle in slot order.
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForce;

impl ComputeMethod for BruteForce {
    #[inline]
    fn compute(
        &mut self,
        law: &GravityLaw,
        central: &CentralBody,
        bodies: &[PointMass],
    ) -> Vec<DVec3> {
        (0..bodies.len())
            .map(|i| velocity_change(law, central, bodies, i))
            .collect()
    }
}

/// A brute-force [`ComputeMethod`] using the CPU.
///
/// This differs from [`BruteForce`] by iterating over the combinations of pairs of particles and
/// using the symmetry of the attraction, computing each separation once. The summation order
/// differs, so results match [`BruteForce`] up to rounding.
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForcePairs;

impl ComputeMethod for BruteForcePairs {
    fn compute(
        &mut self,
        law: &GravityLaw,
        central: &CentralBody,
        bodies: &[PointMass],
    ) -> Vec<DVec3> {
        let mut accelerations: Vec<_> = bodies
            .iter()
            .map(|&(position, _)| {
                law.central(position, position.length_squared(), central.radius_cubed())
            })
            .collect();

        let len = bodies.len();

        for i in 0..len {
            let (p1, m1) = bodies[i];
            let mut acceleration = DVec3::ZERO;

            for j in (i + 1)..len {
                let (p2, m2) = bodies[j];

                let f = law.unit_pull(p1, p2);

                acceleration += f * m2;
                accelerations[j] -= f * m1;
            }

            accelerations[i] += acceleration;
        }

        accelerations
    }
}
