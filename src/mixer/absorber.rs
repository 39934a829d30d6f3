use super::registry::Numbered;
use crate::common::spectrum::{Spectrum, SpectrumInterface};

/// Anything light can pass through. All wavelengths are in nm and
/// `absorbance = -log10(out / in)`.
pub trait AbsorberInterface {
    fn absorbance(&self, wavelength: f64) -> f64;
}

impl<T: AbsorberInterface + ?Sized> AbsorberInterface for &T {
    fn absorbance(&self, wavelength: f64) -> f64 {
        (**self).absorbance(wavelength)
    }
}

/// A missing absorber lets everything through.
impl<T: AbsorberInterface> AbsorberInterface for Option<T> {
    fn absorbance(&self, wavelength: f64) -> f64 {
        self.as_ref().map_or(0.0, |a| a.absorbance(wavelength))
    }
}

lazy_static::lazy_static! {
    pub static ref BLANK_CANVAS: Canvas = Canvas::blank();
    pub static ref BLANK_DYE: Dye = Dye::blank();
    pub static ref BLACK_DYE: Dye = Dye::black();
}

/// The reflective surface under the dyes.
#[derive(Clone, Debug)]
pub struct Canvas {
    name: String,
    number: i32,
    absorbance: Option<Spectrum>,
}

impl Canvas {
    /// Builds a canvas from its reflectance, which is converted to absorbance.
    pub fn new(name: impl Into<String>, mut reflectance: Spectrum) -> Self {
        reflectance.reflectance_to_absorbance();
        Self {
            name: name.into(),
            number: 0,
            absorbance: Some(reflectance),
        }
    }

    pub fn blank() -> Self {
        Self {
            name: "blank (perfect white)".into(),
            number: 1,
            absorbance: Some(Spectrum::constant(0.0)),
        }
    }

    pub fn with_number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }
}

impl AbsorberInterface for Canvas {
    fn absorbance(&self, wavelength: f64) -> f64 {
        self.absorbance.absorbance(wavelength)
    }
}

impl AbsorberInterface for Spectrum {
    fn absorbance(&self, wavelength: f64) -> f64 {
        self.get(wavelength)
    }
}

impl Numbered for Canvas {
    fn number(&self) -> i32 {
        self.number
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A dye with an absorbance curve whose visible peak is 1 at unit strength.
#[derive(Clone, Debug)]
pub struct Dye {
    name: String,
    ci: String,
    family: String,
    mixture: String,
    number: i32,
    absorbance: Option<Spectrum>,
}

impl Dye {
    pub fn new(
        name: impl Into<String>,
        ci: impl Into<String>,
        family: impl Into<String>,
        mixture: impl Into<String>,
        absorbance: Option<Spectrum>,
    ) -> Self {
        Self {
            name: name.into(),
            ci: ci.into(),
            family: family.into(),
            mixture: mixture.into(),
            number: 0,
            absorbance,
        }
    }

    pub fn blank() -> Self {
        Self::new("blank", "n/a", "n/a", "n/a", Some(Spectrum::constant(0.0))).with_number(1)
    }

    /// Neutral density reference absorbing one decade at every wavelength.
    pub fn black() -> Self {
        Self::new(
            "reference, black",
            "n/a",
            "n/a",
            "n/a",
            Some(Spectrum::constant(1.0)),
        )
        .with_number(2)
    }

    pub fn with_number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    /// Colour Index designation, e.g. "C.I. 16185".
    pub fn ci(&self) -> &str {
        &self.ci
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn mixture(&self) -> &str {
        &self.mixture
    }
}

impl AbsorberInterface for Dye {
    fn absorbance(&self, wavelength: f64) -> f64 {
        self.absorbance.absorbance(wavelength)
    }
}

impl Numbered for Dye {
    fn number(&self) -> i32 {
        self.number
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builtins() {
        assert_eq!(BLANK_CANVAS.number(), 1);
        assert_eq!(BLANK_DYE.number(), 1);
        assert_eq!(BLACK_DYE.number(), 2);
        for wl in [300.0, 500.0, 900.0].iter() {
            assert_eq!(BLANK_CANVAS.absorbance(*wl), 0.0);
            assert_eq!(BLANK_DYE.absorbance(*wl), 0.0);
            assert_eq!(BLACK_DYE.absorbance(*wl), 1.0);
        }
    }

    #[test]
    fn test_absorbers_are_shared_across_threads() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<Canvas>();
        assert_sync::<Dye>();

        let dye = Dye::new(
            "Acid Red 1",
            "C.I. 18050",
            "acid",
            "pure",
            Some(Spectrum::from_pairs(&[450.0, 0.3, 520.0, 1.0, 600.0, 0.05])),
        );
        let dye = &dye;
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    scope.spawn(move || {
                        let wl = 450.0 + 35.0 * i as f64;
                        (dye.absorbance(wl), BLACK_DYE.absorbance(wl))
                    })
                })
                .collect();
            for (i, handle) in handles.into_iter().enumerate() {
                let (red, black) = handle.join().unwrap();
                let wl = 450.0 + 35.0 * i as f64;
                assert_eq!(red, Spectrum::from_pairs(&[450.0, 0.3, 520.0, 1.0, 600.0, 0.05]).get(wl));
                assert_eq!(black, 1.0);
            }
        });
    }

    #[test]
    fn test_missing_spectrum_absorbs_nothing() {
        let dye = Dye::new("ghost", "?", "?", "?", None);
        assert_eq!(dye.absorbance(550.0), 0.0);
        assert_eq!(None::<&Canvas>.absorbance(550.0), 0.0);
        assert_eq!(Some(&*BLACK_DYE).absorbance(550.0), 1.0);
    }

    #[test]
    fn test_canvas_converts_reflectance() {
        let canvas = Canvas::new("grey card", Spectrum::from_pairs(&[400.0, 0.1, 700.0, 0.01]));
        assert_relative_eq!(canvas.absorbance(400.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(canvas.absorbance(700.0), 2.0, epsilon = 1e-12);
        assert_eq!(canvas.number(), 0);
        assert_eq!(canvas.with_number(7).number(), 7);
    }

    #[test]
    fn test_dye_metadata() {
        let dye = Dye::new("Acid Red 1", "C.I. 18050", "acid", "pure", None).with_number(12);
        assert_eq!(dye.name(), "Acid Red 1");
        assert_eq!(dye.ci(), "C.I. 18050");
        assert_eq!(dye.family(), "acid");
        assert_eq!(dye.mixture(), "pure");
        assert_eq!(dye.number(), 12);
    }
}
