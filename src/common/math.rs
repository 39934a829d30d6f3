/// Second radiation constant `hc/k`, in nm·K.
const PLANCK_C2: f64 = 14387752.21;

/// sRGB transfer function with the linear segment ending at 0.00304.
pub fn gamma_correct(value: f64) -> f64 {
    if value <= 0.00304 {
        return 12.92 * value;
    }

    1.055 * value.powf(1.0 / 2.4) - 0.055
}

/// Maps an encoded channel in `[0, 1]` to a byte, saturating outside the range.
pub fn quantize_channel(value: f64) -> u8 {
    if value < 0.0 {
        0
    } else if value > 1.0 {
        255
    } else {
        (value * 255.0).round() as u8
    }
}

/// Relative blackbody emission at `wavelength` nm for a body at `temperature`
/// Kelvin. Constant factors are dropped since callers peak-normalize anyway.
pub fn planck(wavelength: f64, temperature: f64) -> f64 {
    let x = wavelength;
    1.0 / ((x * x) * (x * x) * x * ((PLANCK_C2 / (x * temperature)).exp() - 1.0))
}

/// Rounds to the nearest multiple of `1 / 10^places`.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Scales `values` so the largest becomes 1. No-op when nothing is positive.
pub fn peak_normalize(values: &mut [f64]) {
    let peak = values.iter().cloned().fold(0.0, f64::max);
    if peak <= 0.0 {
        return;
    }
    let inv_peak = 1.0 / peak;
    for v in values.iter_mut() {
        *v *= inv_peak;
    }
}
