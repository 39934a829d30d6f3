use super::absorber::AbsorberInterface;
use super::registry::Numbered;
use crate::common::{
    cie::{self, REFERENCE_WHITE},
    math::{peak_normalize, planck},
    spectrum::{EvenlySampledSpectrum, Spectrum, SpectrumInterface},
    visible_wavelengths, CIE_SAMPLES, CIE_START, D65,
};

/// Blackbody reference temperatures offered alongside the loaded lights.
pub fn blackbody_temperatures() -> impl Iterator<Item = u32> {
    (800..=5500)
        .step_by(100)
        .chain((5750..=10000).step_by(250))
        .chain((10500..=13000).step_by(500))
        .chain(
            [14000, 15000, 17500, 20000, 25000, 30000, 35000, 40000, 60000, 100000]
                .iter()
                .cloned(),
        )
}

lazy_static::lazy_static! {
    /// Built-in lights, constructed once and cloned into every registry.
    pub static ref BUILTIN_LIGHTS: Vec<Light> = {
        let mut lights = vec![
            Light::d65(),
            Light::flat_over_wavelength(),
            Light::flat_over_frequency(),
        ];
        lights.extend(blackbody_temperatures().map(|t| Light::blackbody(t as f64)));
        lights
    };
}

/// A light source: power sampled at 1 nm over the visible range, plus a
/// per-axis XYZ scale used for white and brightness adaptation.
#[derive(Clone, Debug)]
pub struct Light {
    name: String,
    number: i32,
    power: Vec<f64>,
    scale: na::Vector3<f64>,
}

impl Light {
    /// Takes ownership of a power spectrum indexed from `CIE_START`. Missing
    /// tail samples count as zero power.
    pub fn from_power(name: impl Into<String>, mut power: Vec<f64>) -> Self {
        power.resize(CIE_SAMPLES, 0.0);
        let mut light = Self {
            name: name.into(),
            number: 0,
            power,
            scale: na::Vector3::repeat(1.0),
        };
        light.normalize();
        light
    }

    /// Resamples `spectrum` onto the 1 nm grid.
    pub fn from_spectrum(name: impl Into<String>, spectrum: &Spectrum) -> Self {
        let power = visible_wavelengths()
            .map(|wl| spectrum.get(wl as f64))
            .collect();
        Self::from_power(name, power)
    }

    /// Planck radiator at `temperature` Kelvin, peak-normalized.
    pub fn blackbody(temperature: f64) -> Self {
        let mut power: Vec<f64> = visible_wavelengths()
            .map(|wl| planck(wl as f64, temperature))
            .collect();
        peak_normalize(&mut power);
        Self::from_power(
            format!("reference, blackbody, {} K", temperature as i64),
            power,
        )
        .with_number(-(temperature as i32))
    }

    pub fn flat_over_wavelength() -> Self {
        Self::from_power("reference, flat over wavelen", vec![1.0; CIE_SAMPLES]).with_number(-1)
    }

    pub fn flat_over_frequency() -> Self {
        let mut power: Vec<f64> = visible_wavelengths()
            .map(|wl| 1.0 / ((wl as f64) * (wl as f64)))
            .collect();
        peak_normalize(&mut power);
        Self::from_power("reference, flat over frequency", power).with_number(-2)
    }

    pub fn d65() -> Self {
        let table = Spectrum::Even(EvenlySampledSpectrum::new(D65.to_vec(), 300.0, 10.0));
        Self::from_spectrum("daylight, standard, CIE D 65", &table).with_number(1)
    }

    pub fn with_number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    pub fn power(&self) -> &[f64] {
        &self.power
    }

    pub fn power_at(&self, wavelength: i32) -> f64 {
        if wavelength < CIE_START {
            return 0.0;
        }
        self.power
            .get((wavelength - CIE_START) as usize)
            .cloned()
            .unwrap_or(0.0)
    }

    pub fn scale(&self) -> na::Vector3<f64> {
        self.scale
    }

    /// Copy of this light after passing through `absorber` at `strength`.
    pub fn filtered_copy<A: AbsorberInterface + ?Sized>(&self, absorber: &A, strength: f64) -> Self {
        let mut light = self.clone();
        light.filter(absorber, strength);
        light
    }

    /// Beer-Lambert attenuation: `power *= 10^(-absorbance * strength)`.
    pub fn filter<A: AbsorberInterface + ?Sized>(&mut self, absorber: &A, strength: f64) {
        for (wl, p) in visible_wavelengths().zip(self.power.iter_mut()) {
            *p *= 10f64.powf(-absorber.absorbance(wl as f64) * strength);
        }
    }

    /// XYZ of the raw power spectrum, ignoring adaptation.
    pub fn tristimulus(&self) -> na::Vector3<f64> {
        cie::tristimulus(&self.power)
    }

    /// XYZ after the per-axis adaptation scale.
    pub fn adapted_tristimulus(&self) -> na::Vector3<f64> {
        self.tristimulus().component_mul(&self.scale)
    }

    pub fn chromaticity(&self) -> Option<(f64, f64)> {
        cie::chromaticity(&self.tristimulus())
    }

    pub fn linear_srgb(&self) -> na::Vector3<f64> {
        cie::xyz_to_linear_srgb(&self.adapted_tristimulus())
    }

    pub fn rgb8(&self) -> image::Rgb<u8> {
        cie::linear_to_rgb8(&self.linear_srgb())
    }

    /// Scales the adaptation so the brightest linear sRGB channel becomes 1.
    pub fn normalize(&mut self) {
        let max = self.linear_srgb().max();
        if max > 0.0 {
            self.scale /= max;
        }
    }

    /// Sets the adaptation so this light maps exactly onto reference white.
    pub fn normalize_white(&mut self) {
        let xyz = self.tristimulus();
        for axis in 0..3 {
            self.scale[axis] = if xyz[axis] > 0.0 {
                REFERENCE_WHITE[axis] / xyz[axis]
            } else {
                1.0
            };
        }
    }
}

impl Numbered for Light {
    fn number(&self) -> i32 {
        self.number
    }

    fn name(&self) -> &str {
        &self.name
    }
}
