use nalgebra::Vector3;

const GAMMA: f32 = 1.0 / 2.2;

/// Converts a linear RGB color to sRGB (gamma correction).
pub fn linear_to_srgb(color: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(
        color.x.powf(GAMMA),
        color.y.powf(GAMMA),
        color.z.powf(GAMMA),
    )
}

/// Quantizes a linear color to gamma-encoded display bytes.
///
/// Channels are clamped to [0, 1] before encoding. This is the single
/// point in the pipeline where linear light becomes display-encoded.
pub fn encode_rgb(color: Vector3<f32>) -> [u8; 3] {
    let srgb = linear_to_srgb(Vector3::new(
        color.x.clamp(0.0, 1.0),
        color.y.clamp(0.0, 1.0),
        color.z.clamp(0.0, 1.0),
    ));
    [
        (srgb.x * 255.0) as u8,
        (srgb.y * 255.0) as u8,
        (srgb.z * 255.0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_encodes_to_full_bytes() {
        assert_eq!(encode_rgb(Vector3::new(1.0, 1.0, 1.0)), [255, 255, 255]);
    }

    #[test]
    fn black_encodes_to_zero_bytes() {
        assert_eq!(encode_rgb(Vector3::zeros()), [0, 0, 0]);
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        assert_eq!(encode_rgb(Vector3::new(2.0, -1.0, 1.5)), [255, 0, 255]);
    }

    #[test]
    fn gamma_brightens_midtones() {
        let encoded = linear_to_srgb(Vector3::new(0.5, 0.5, 0.5));
        assert!(encoded.x > 0.5);
        assert!((encoded.x - 0.5f32.powf(1.0 / 2.2)).abs() < 1e-6);
    }
}
