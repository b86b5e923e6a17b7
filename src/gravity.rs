use glam::DVec3;

/// Newtonian attraction between bodies whose mass is their [mass proxy](crate::body::Body::mass_proxy).
///
/// The returned values are velocity changes over one step: the step is the unit of time of the
/// simulation, so acceleration and velocity change per step are the same quantity.
///
/// The raw law is singular when two bodies coincide. Setting
/// [`min_separation`](GravityLaw::min_separation) clamps the separation before it is cubed, which
/// bounds the largest velocity change a single step can produce. Coincident positions always
/// contribute nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GravityLaw {
    /// Gravitational constant.
    pub k: f64,
    /// Smallest separation used when computing an attraction.
    pub min_separation: Option<f64>,
}

impl GravityLaw {
    /// Gravitational constant of the swarm.
    pub const DEFAULT_K: f64 = 0.001;

    /// Creates the raw inverse-square law with the given gravitational constant.
    #[inline]
    pub const fn new(k: f64) -> Self {
        Self {
            k,
            min_separation: None,
        }
    }

    /// Creates an inverse-square law that never uses a separation smaller than `min_separation`.
    #[inline]
    pub const fn guarded(k: f64, min_separation: f64) -> Self {
        Self {
            k,
            min_separation: Some(min_separation),
        }
    }

    #[inline]
    fn distance_cubed(&self, mag_2: f64) -> f64 {
        let mag_2 = match self.min_separation {
            Some(min) => mag_2.max(min * min),
            None => mag_2,
        };

        mag_2 * mag_2.sqrt()
    }

    /// Velocity change of a body at `position` caused by a source of mass `mass` at the origin.
    ///
    /// `squared_distance` is the cached `|position|²` of the body.
    ///
    /// ```
    /// # use gravity_swarm::prelude::*;
    /// # use glam::DVec3;
    /// let law = GravityLaw::new(0.001);
    /// let dv = law.central(DVec3::new(100.0, 0.0, 0.0), 10_000.0, 27_000.0);
    ///
    /// assert!((dv.x + 0.0027).abs() < 1e-15);
    /// assert_eq!((dv.y, dv.z), (0.0, 0.0));
    /// ```
    #[inline]
    pub fn central(&self, position: DVec3, squared_distance: f64, mass: f64) -> DVec3 {
        if squared_distance == 0.0 {
            return DVec3::ZERO;
        }

        let g = self.k * mass / self.distance_cubed(squared_distance);

        -(position * g)
    }

    /// Velocity change of a body at `from` caused by a body of mass `mass` at `to`.
    #[inline]
    pub fn pairwise(&self, from: DVec3, to: DVec3, mass: f64) -> DVec3 {
        let dir = to - from;
        let mag_2 = dir.length_squared();

        if mag_2 == 0.0 {
            return DVec3::ZERO;
        }

        let dg = self.k * mass / self.distance_cubed(mag_2);

        dir * dg
    }

    /// Velocity change of a body at `from` caused by a body of unit mass at `to`.
    ///
    /// The pull of `to` on `from` is `unit_pull(from, to) * mass` and the pull of `from` on `to`
    /// is its opposite scaled by the mass of `from`.
    #[inline]
    pub fn unit_pull(&self, from: DVec3, to: DVec3) -> DVec3 {
        let dir = to - from;
        let mag_2 = dir.length_squared();

        if mag_2 == 0.0 {
            return DVec3::ZERO;
        }

        dir * (self.k / self.distance_cubed(mag_2))
    }
}

impl Default for GravityLaw {
    #[inline]
    fn default() -> Self {
        Self::new(Self::DEFAULT_K)
    }
}
