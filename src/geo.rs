use bevy::prelude::*;

/// Converts latitude/longitude (degrees) to a cartesian point on a sphere.
///
/// Longitude is offset by 180 degrees and X is negated so positions line up
/// with the seam of an equirectangular earth texture wrapped onto a UV sphere.
/// https://en.wikipedia.org/wiki/Spherical_coordinate_system#Cartesian_coordinates
pub fn latlon_to_position(latitude: f32, longitude: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - latitude).to_radians();
    let theta = (longitude + 180.0).to_radians();

    let x = -(radius * phi.sin() * theta.cos());
    let y = radius * phi.cos();
    let z = radius * phi.sin() * theta.sin();

    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(40.7128, -74.0060)] // New York
    #[case(35.6762, 139.6503)] // Tokyo
    #[case(-33.8688, 151.2093)] // Sydney
    #[case(-90.0, 45.0)]
    #[case(89.9, 179.9)]
    fn test_position_stays_on_sphere(#[case] lat: f32, #[case] lon: f32) {
        let radius = 5.0;
        let position = latlon_to_position(lat, lon, radius);
        assert!((position.length() - radius).abs() < 1e-4);
    }

    #[rstest]
    #[case(-180.0)]
    #[case(-74.0)]
    #[case(0.0)]
    #[case(121.5)]
    fn test_north_pole_degeneracy(#[case] lon: f32) {
        let position = latlon_to_position(90.0, lon, 5.0);
        assert!(position.distance(Vec3::new(0.0, 5.0, 0.0)) < 1e-4);
    }

    #[test]
    fn test_equator_seam_convention() {
        // lat 0, lon 0 lands on +X: theta = 180deg, x = -(r * cos(180)) = r
        let position = latlon_to_position(0.0, 0.0, 5.0);
        assert!(position.distance(Vec3::new(5.0, 0.0, 0.0)) < 1e-4);
    }

    #[test]
    fn test_southern_hemisphere_below_equator() {
        let position = latlon_to_position(-33.8688, 151.2093, 5.0);
        assert!(position.y < 0.0);
    }
}
