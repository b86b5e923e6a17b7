use glam::DVec3;

use super::{velocity_change, ComputeMethod, PointMass};
use crate::{body::CentralBody, gravity::GravityLaw};

/// A brute-force [`ComputeMethod`] using the CPU with [rayon](https://github.com/rayon-rs/rayon).
///
/// Slots are computed independently from the same snapshot and sum their terms in the same order
/// as [`sequential::BruteForce`](super::sequential::BruteForce), so both produce identical results.
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
        use rayon::iter::{IntoParallelIterator, ParallelIterator};

        (0..bodies.len())
            .into_par_iter()
            .map(|i| velocity_change(law, central, bodies, i))
            .collect()
    }
}
