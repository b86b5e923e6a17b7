use glam::DVec3;

/// Trait to describe a spherical body which consists of a [position](Body::position) and a
/// [radius](Body::radius).
///
/// Bodies have a uniform unit density, so their [mass proxy](Body::mass_proxy) is the cube of their
/// radius.
///
/// #### Deriving:
///
/// Used when the type has fields named `position` and `radius`:
///
/// ```
/// # use gravity_swarm::prelude::*;
/// # use glam::DVec3;
/// #
/// #[derive(Body)]
/// struct Moon {
///     position: DVec3,
///     radius: f64,
/// //  ...
/// }
/// ```
///
/// If you can't implement [`Body`] on a type, it is implemented for tuples of a position and a
/// radius.
///
/// ```
/// # use gravity_swarm::prelude::*;
/// # use glam::DVec3;
/// let body = (DVec3::X, 2.0);
///
/// assert_eq!(body.position(), DVec3::X);
/// assert_eq!(body.mass_proxy(), 8.0);
/// ```
pub trait Body {
    /// The position of the body in space.
    fn position(&self) -> DVec3;

    /// The radius of the body.
    fn radius(&self) -> f64;

    /// The strength of the body as a gravitational source, `radius³`.
    #[inline]
    fn mass_proxy(&self) -> f64 {
        let radius = self.radius();
        radius * radius * radius
    }
}

impl Body for (DVec3, f64) {
    #[inline]
    fn position(&self) -> DVec3 {
        self.0
    }

    #[inline]
    fn radius(&self) -> f64 {
        self.1
    }
}

impl<B> Body for &B
where
    B: Body,
{
    #[inline]
    fn position(&self) -> DVec3 {
        (**self).position()
    }

    #[inline]
    fn radius(&self) -> f64 {
        (**self).radius()
    }

    #[inline]
    fn mass_proxy(&self) -> f64 {
        (**self).mass_proxy()
    }
}

impl<B> Body for &mut B
where
    B: Body,
{
    #[inline]
    fn position(&self) -> DVec3 {
        (**self).position()
    }

    #[inline]
    fn radius(&self) -> f64 {
        (**self).radius()
    }

    #[inline]
    fn mass_proxy(&self) -> f64 {
        (**self).mass_proxy()
    }
}

/// The immovable sphere sitting at the origin.
///
/// It is the dominant gravitational source of the field and its surface is the collision boundary
/// of every particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralBody {
    radius: f64,
    radius_cubed: f64,
}

impl CentralBody {
    /// Default radius of the central body.
    pub const DEFAULT_RADIUS: f64 = 30.0;

    /// Creates a central body of the given radius.
    #[inline]
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            radius_cubed: radius * radius * radius,
        }
    }

    /// Radius of the body, below which particles collide with it.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// `radius³`, the mass proxy of the body.
    #[inline]
    pub fn radius_cubed(&self) -> f64 {
        self.radius_cubed
    }
}

impl Default for CentralBody {
    #[inline]
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS)
    }
}

impl Body for CentralBody {
    #[inline]
    fn position(&self) -> DVec3 {
        DVec3::ZERO
    }

    #[inline]
    fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    fn mass_proxy(&self) -> f64 {
        self.radius_cubed
    }
}
