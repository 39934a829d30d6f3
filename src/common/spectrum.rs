use super::{CIE_END, CIE_START};
use ambassador::{delegatable_trait, Delegate};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A function of wavelength (nm) reconstructed from discrete samples.
#[delegatable_trait]
pub trait SpectrumInterface {
    /// Linearly interpolated value at `wavelength`, clamped to the end samples.
    fn get(&self, wavelength: f64) -> f64;
    /// Replaces every value `v` with `-log10(v)`.
    fn reflectance_to_absorbance(&mut self);
    fn clip_negatives(&mut self);
    /// Rescales so the peak inside the visible range becomes 1.
    fn normalize_absorbance(&mut self);
}

#[derive(Delegate, Clone, Debug)]
#[delegate(SpectrumInterface)]
pub enum Spectrum {
    Even(EvenlySampledSpectrum),
    Uneven(UnevenlySampledSpectrum),
}

impl Spectrum {
    /// Builds a spectrum from an interleaved `wavelength, value` list.
    pub fn from_pairs(pairs: &[f64]) -> Self {
        Spectrum::Uneven(UnevenlySampledSpectrum::from_pairs(pairs))
    }

    pub fn constant(value: f64) -> Self {
        Spectrum::Even(EvenlySampledSpectrum::new(vec![value], 1.0, 1.0))
    }
}

fn to_absorbance(value: f64) -> f64 {
    -value.log10()
}

#[derive(Clone, Debug)]
pub struct EvenlySampledSpectrum {
    samples: Vec<f64>,
    start: f64,
    step: f64,
}

impl EvenlySampledSpectrum {
    pub fn new(samples: Vec<f64>, start: f64, step: f64) -> Self {
        Self {
            samples,
            start,
            step,
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl SpectrumInterface for EvenlySampledSpectrum {
    fn get(&self, wavelength: f64) -> f64 {
        let n = self.samples.len();
        match n {
            0 => return 0.0,
            1 => return self.samples[0],
            _ => {}
        }

        let pos = (wavelength - self.start) / self.step;
        if pos <= 0.0 {
            return self.samples[0];
        }
        let i = pos.floor() as usize;
        if i >= n - 1 {
            return self.samples[n - 1];
        }
        let t = pos - i as f64;
        self.samples[i] + (self.samples[i + 1] - self.samples[i]) * t
    }

    fn reflectance_to_absorbance(&mut self) {
        for v in self.samples.iter_mut() {
            *v = to_absorbance(*v);
        }
    }

    fn clip_negatives(&mut self) {
        for v in self.samples.iter_mut() {
            if *v < 0.0 {
                *v = 0.0;
            }
        }
    }

    fn normalize_absorbance(&mut self) {
        let n = self.samples.len() as i64;
        let mut first = ((CIE_START as f64 - self.start) / self.step).round() as i64;
        let mut last = ((CIE_END as f64 - self.start) / self.step).round() as i64;
        if first < 0 {
            first = 0;
        }
        if first >= n || last < 0 {
            return;
        }
        if last >= n {
            last = n - 1;
        }

        let peak = self.samples[first as usize..=last as usize]
            .iter()
            .cloned()
            .fold(0.0, f64::max);
        if peak <= 0.0 {
            return;
        }
        let inv_peak = 1.0 / peak;
        for v in self.samples.iter_mut() {
            *v *= inv_peak;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpectrumSample {
    pub wavelength: f64,
    pub value: f64,
}

/// Samples kept sorted by wavelength. Equal wavelengths keep insertion order.
#[derive(Debug, Default)]
pub struct UnevenlySampledSpectrum {
    samples: Vec<SpectrumSample>,
    // Index of the last bracket found by `get`; always < samples.len() when
    // non-empty.
    pos_cache: AtomicUsize,
}

impl Clone for UnevenlySampledSpectrum {
    fn clone(&self) -> Self {
        Self {
            samples: self.samples.clone(),
            pos_cache: AtomicUsize::new(self.pos_cache.load(Ordering::Relaxed)),
        }
    }
}

impl UnevenlySampledSpectrum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[f64]) -> Self {
        let mut spectrum = Self {
            samples: Vec::with_capacity(pairs.len() / 2),
            pos_cache: AtomicUsize::new(0),
        };
        for pair in pairs.chunks_exact(2) {
            spectrum.add(pair[0], pair[1]);
        }
        spectrum
    }

    pub fn add(&mut self, wavelength: f64, value: f64) {
        let pos = self.upper_bound(wavelength);
        self.samples.insert(pos, SpectrumSample { wavelength, value });
    }

    pub fn samples(&self) -> &[SpectrumSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn upper_bound(&self, wavelength: f64) -> usize {
        self.samples.partition_point(|s| s.wavelength <= wavelength)
    }

    /// Index of the first sample whose wavelength exceeds `wavelength`. Tries
    /// the cached bracket and its successor before falling back to a search,
    /// so ascending scans stay O(1) per lookup.
    fn find_bracket(&self, wavelength: f64) -> usize {
        let n = self.samples.len();
        let brackets = |i: usize| {
            i + 1 < n
                && self.samples[i].wavelength <= wavelength
                && wavelength < self.samples[i + 1].wavelength
        };

        let cached = self.pos_cache.load(Ordering::Relaxed);
        for i in [cached, cached + 1] {
            if brackets(i) {
                self.pos_cache.store(i, Ordering::Relaxed);
                return i + 1;
            }
        }

        let pos = self.upper_bound(wavelength);
        if pos > 0 && pos < n {
            self.pos_cache.store(pos - 1, Ordering::Relaxed);
        }
        pos
    }
}

impl SpectrumInterface for UnevenlySampledSpectrum {
    fn get(&self, wavelength: f64) -> f64 {
        let n = self.samples.len();
        if n == 0 {
            return 0.0;
        }

        let pos = self.find_bracket(wavelength);
        if pos == 0 {
            return self.samples[0].value;
        }
        if pos >= n {
            return self.samples[n - 1].value;
        }

        let lo = &self.samples[pos - 1];
        let hi = &self.samples[pos];
        let t = (wavelength - lo.wavelength) / (hi.wavelength - lo.wavelength);
        lo.value + t * (hi.value - lo.value)
    }

    fn reflectance_to_absorbance(&mut self) {
        for s in self.samples.iter_mut() {
            s.value = to_absorbance(s.value);
        }
    }

    fn clip_negatives(&mut self) {
        for s in self.samples.iter_mut() {
            if s.value < 0.0 {
                s.value = 0.0;
            }
        }
    }

    fn normalize_absorbance(&mut self) {
        let peak = self
            .samples
            .iter()
            .skip_while(|s| s.wavelength < CIE_START as f64)
            .take_while(|s| s.wavelength <= CIE_END as f64)
            .map(|s| s.value)
            .fold(0.0, f64::max);
        if peak <= 0.0 {
            return;
        }
        let inv_peak = 1.0 / peak;
        for s in self.samples.iter_mut() {
            s.value *= inv_peak;
        }
    }
}
