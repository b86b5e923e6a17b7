use glam::DVec3;

use crate::{body::Body, field::ParticleField};

/// Something that can draw spheres, like a scene graph or an immediate-mode renderer.
///
/// Nothing a renderer does affects the simulation.
pub trait Renderer {
    /// Draws a sphere.
    fn sphere(&mut self, center: DVec3, radius: f64);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    #[inline]
    fn sphere(&mut self, center: DVec3, radius: f64) {
        (**self).sphere(center, radius)
    }
}

/// Per-instance data of a sphere, laid out for instanced GPU drawing.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct SphereInstance {
    /// Center of the sphere.
    pub center: [f32; 3],
    /// Radius of the sphere.
    pub radius: f32,
}

impl SphereInstance {
    /// Creates the instance of a body.
    #[inline]
    pub fn of<B: Body>(body: &B) -> Self {
        Self {
            center: body.position().as_vec3().to_array(),
            radius: body.radius() as f32,
        }
    }

    /// Collects the instances of the central body followed by every particle of the field.
    pub fn collect(field: &ParticleField) -> Vec<Self> {
        std::iter::once(Self::of(field.central()))
            .chain(field.particles().iter().map(Self::of))
            .collect()
    }
}

impl Renderer for Vec<SphereInstance> {
    #[inline]
    fn sphere(&mut self, center: DVec3, radius: f64) {
        self.push(SphereInstance {
            center: center.as_vec3().to_array(),
            radius: radius as f32,
        });
    }
}

/// Draws the central body, then every particle of the field.
pub fn draw<R: Renderer + ?Sized>(field: &ParticleField, renderer: &mut R) {
    draw_central(field, renderer);
    for particle in field.particles() {
        renderer.sphere(particle.position, particle.radius());
    }
}

/// Draws only the central body.
pub fn draw_central<R: Renderer + ?Sized>(field: &ParticleField, renderer: &mut R) {
    let central = field.central();
    renderer.sphere(central.position(), central.radius());
}
