use super::cie_tables::{CIE_X, CIE_Y, CIE_Z};
use super::math::{gamma_correct, quantize_channel};
use super::CIE_START;

/// Fullscale white in XYZ, the target of white adaptation.
pub const REFERENCE_WHITE: [f64; 3] = [0.9505, 1.0, 1.0890];

lazy_static::lazy_static! {
    static ref XYZ_TO_SRGB: na::Matrix3<f64> = na::Matrix3::new(
        3.2410, -1.5374, -0.4986,
        -0.9692, 1.8760, 0.0416,
        0.0556, -0.2040, 1.0570,
    );
}

fn table_lookup(table: &[f64], wavelength: i32) -> f64 {
    if wavelength < CIE_START {
        return 0.0;
    }
    table
        .get((wavelength - CIE_START) as usize)
        .cloned()
        .unwrap_or(0.0)
}

/// Color matching functions at an integer wavelength. Zero outside the tables.
pub fn color_matching(wavelength: i32) -> na::Vector3<f64> {
    na::Vector3::new(
        table_lookup(&CIE_X, wavelength),
        table_lookup(&CIE_Y, wavelength),
        table_lookup(&CIE_Z, wavelength),
    )
}

/// Integrates `power` (one entry per nm starting at `CIE_START`) against the
/// color matching functions.
pub fn tristimulus(power: &[f64]) -> na::Vector3<f64> {
    power
        .iter()
        .enumerate()
        .fold(na::Vector3::zeros(), |xyz, (i, p)| {
            xyz + color_matching(CIE_START + i as i32) * *p
        })
}

/// `(x, y)` chromaticity, or `None` for a black stimulus.
pub fn chromaticity(xyz: &na::Vector3<f64>) -> Option<(f64, f64)> {
    let sum = xyz.x + xyz.y + xyz.z;
    if sum == 0.0 || !sum.is_finite() {
        return None;
    }
    Some((xyz.x / sum, xyz.y / sum))
}

/// Linear sRGB, unclipped.
pub fn xyz_to_linear_srgb(xyz: &na::Vector3<f64>) -> na::Vector3<f64> {
    *XYZ_TO_SRGB * xyz
}

/// Gamma encodes and clips linear sRGB into a displayable color.
pub fn linear_to_rgb8(rgb: &na::Vector3<f64>) -> image::Rgb<u8> {
    image::Rgb([
        quantize_channel(gamma_correct(rgb.x)),
        quantize_channel(gamma_correct(rgb.y)),
        quantize_channel(gamma_correct(rgb.z)),
    ])
}

pub fn xyz_to_rgb8(xyz: &na::Vector3<f64>) -> image::Rgb<u8> {
    linear_to_rgb8(&xyz_to_linear_srgb(xyz))
}
