use glam::DVec3;

/// The controls read from the input devices for one frame.
///
/// Values are already debounced and scaled by the host: `spin` holds the spinner steps consumed
/// since the last frame divided by the step resolution of each device.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ControlInput {
    /// Normalised rotation of the two spinners.
    pub spin: [f64; 2],
    /// D-pad up.
    pub up: bool,
    /// D-pad down.
    pub down: bool,
    /// D-pad left.
    pub left: bool,
    /// D-pad right.
    pub right: bool,
    /// Button A.
    pub a: bool,
    /// Button B.
    pub b: bool,
    /// One-player start button.
    pub start: bool,
}

/// Latitude and longitude of a camera orbiting the origin, turned by the spinners.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct OrbitAngles {
    /// Angle above the orbital plane, in radians.
    pub latitude: f64,
    /// Angle around the z axis, in radians.
    pub longitude: f64,
}

impl OrbitAngles {
    /// Radians turned per normalised spinner step.
    pub const SENSITIVITY: f64 = 0.1;

    /// Turns the camera: the first spinner drives the latitude, the second the longitude.
    #[inline]
    pub fn turn(&mut self, spin: [f64; 2]) {
        self.latitude += Self::SENSITIVITY * spin[0];
        self.longitude += Self::SENSITIVITY * spin[1];
    }

    /// Position of the camera on the sphere of radius `distance` around the origin.
    ///
    /// ```
    /// # use gravity_swarm::input::OrbitAngles;
    /// # use glam::DVec3;
    /// let eye = OrbitAngles::default().eye(800.0);
    /// assert_eq!(eye, DVec3::new(800.0, 0.0, 0.0));
    /// ```
    pub fn eye(&self, distance: f64) -> DVec3 {
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        let (sin_lon, cos_lon) = self.longitude.sin_cos();

        DVec3::new(
            distance * cos_lat * cos_lon,
            distance * cos_lat * sin_lon,
            distance * sin_lat,
        )
    }

    /// Unit vector pointing up on the screen of the camera, toward increasing latitude.
    pub fn up(&self) -> DVec3 {
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        let (sin_lon, cos_lon) = self.longitude.sin_cos();

        DVec3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat)
    }
}
