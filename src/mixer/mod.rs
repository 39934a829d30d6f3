pub mod absorber;
pub mod light;
pub mod registry;

use crate::common::math::round_to;
use absorber::Dye;
use light::Light;
use registry::Registries;
use thiserror::Error;

/// Number of dye slots layered over the canvas.
pub const NUM_MIXED_DYES: usize = 8;
/// Full scale of the strength slider.
pub const MAX_DYE_SLIDER: u32 = 512;
/// Strength at full slider scale.
pub const MAX_DYE_STRENGTH: f64 = 30.0;
const STRENGTH_DECIMALS: i32 = 3;

bitflags! {
    pub struct AdaptFlags: u32 {
        /// Map the light onto reference white (otherwise only brightness).
        const LIGHT_WHITE = 1;
        const CANVAS_WHITE = 2;
        const CANVAS_BRIGHT = 4;
        const COMBINED_BRIGHT = 8;
    }
}

impl Default for AdaptFlags {
    fn default() -> Self {
        AdaptFlags::LIGHT_WHITE
    }
}

/// Cubic slider response, rounded to the displayed precision.
pub fn strength_from_slider(position: u32) -> f64 {
    let x = position as f64 / MAX_DYE_SLIDER as f64;
    round_to(x * x * x * MAX_DYE_STRENGTH, STRENGTH_DECIMALS)
}

/// Inverse of `strength_from_slider`, clamped to the slider range.
pub fn slider_from_strength(strength: f64) -> u32 {
    let x = (strength / MAX_DYE_STRENGTH).cbrt() * MAX_DYE_SLIDER as f64;
    num::clamp(x.round(), 0.0, MAX_DYE_SLIDER as f64) as u32
}

pub fn format_strength(strength: f64) -> String {
    format!("{:.*}", STRENGTH_DECIMALS as usize, strength)
}

#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("\"{0}\" is not a number")]
    NotANumber(String),
}

/// Parses strength text. `Ok(None)` means the text is an edit in progress
/// (empty, or a lone sign or point) and should simply be left alone.
pub fn parse_strength(text: &str) -> Result<Option<f64>, ParameterError> {
    let text = text.trim();
    match text {
        "" | "." | "-" | "+" => Ok(None),
        _ => text
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ParameterError::NotANumber(text.to_string())),
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MixerError {
    #[error("no light numbered {0}")]
    UnknownLight(i32),
    #[error("no canvas numbered {0}")]
    UnknownCanvas(i32),
    #[error("no dye numbered {0}")]
    UnknownDye(i32),
    #[error("dye slot {0} out of range (0..{})", NUM_MIXED_DYES)]
    NoSuchSlot(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwatchTarget {
    Light,
    Canvas,
    Dye(usize),
    Combined,
}

/// A displayed color together with where it sits on the chromaticity diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swatch {
    pub color: image::Rgb<u8>,
    pub chromaticity: Option<(f64, f64)>,
}

impl Swatch {
    fn from_light(light: &Light) -> Self {
        Self {
            color: light.rgb8(),
            chromaticity: light.chromaticity(),
        }
    }

    /// Chromaticity in the compact ".xxxx .yyyy" form.
    pub fn label(&self) -> Option<String> {
        self.chromaticity.map(|(x, y)| {
            format!(
                ".{:04} .{:04}",
                (x * 10000.0).round() as i64,
                (y * 10000.0).round() as i64
            )
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Swatches {
    pub light: Swatch,
    pub canvas: Swatch,
    pub dyes: [Swatch; NUM_MIXED_DYES],
    pub combined: Swatch,
}

impl Swatches {
    pub fn get(&self, target: SwatchTarget) -> Option<&Swatch> {
        match target {
            SwatchTarget::Light => Some(&self.light),
            SwatchTarget::Canvas => Some(&self.canvas),
            SwatchTarget::Dye(slot) => self.dyes.get(slot),
            SwatchTarget::Combined => Some(&self.combined),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DyeSlot {
    /// Position in the (sorted) dye registry.
    pub index: usize,
    pub strength: f64,
    pub enabled: bool,
}

/// Mixer parameters plus the swatches they produce. Every change recomputes
/// all swatches from scratch.
pub struct Mixer {
    registries: Registries,
    light_index: usize,
    canvas_index: usize,
    slots: [DyeSlot; NUM_MIXED_DYES],
    flags: AdaptFlags,
    swatches: Swatches,
    log: slog::Logger,
}

impl Mixer {
    pub fn new(log: &slog::Logger, mut registries: Registries) -> Self {
        let log = log.new(o!("component" => "mixer"));
        for kind in registries.restore_empty() {
            warn!(log, "no {} available, using the built-in ones", kind);
        }
        let defaults = registries.defaults;

        let light_index = registries.lights.find_index_by_number(defaults.light);
        let canvas_index = registries.canvases.find_index_by_number(defaults.canvas);
        let dye_index = registries.dyes.find_index_by_number(defaults.dye);
        for (kind, number, found) in [
            ("light", defaults.light, light_index),
            ("canvas", defaults.canvas, canvas_index),
            ("dye", defaults.dye, dye_index),
        ] {
            if found.is_none() {
                warn!(log, "default {} {} not found, using first entry", kind, number);
            }
        }

        let slot = DyeSlot {
            index: dye_index.unwrap_or(0),
            strength: 1.0,
            enabled: true,
        };
        let light_index = light_index.unwrap_or(0);
        let canvas_index = canvas_index.unwrap_or(0);
        let flags = AdaptFlags::default();
        let slots = [slot; NUM_MIXED_DYES];
        let swatches = compute_swatches(&registries, light_index, canvas_index, &slots, flags);

        Self {
            registries,
            light_index,
            canvas_index,
            slots,
            flags,
            swatches,
            log,
        }
    }

    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    pub fn swatches(&self) -> &Swatches {
        &self.swatches
    }

    pub fn swatch(&self, target: SwatchTarget) -> Option<&Swatch> {
        self.swatches.get(target)
    }

    pub fn swatch_color(&self, target: SwatchTarget) -> Option<image::Rgb<u8>> {
        self.swatch(target).map(|s| s.color)
    }

    pub fn flags(&self) -> AdaptFlags {
        self.flags
    }

    pub fn slot(&self, slot: usize) -> Option<&DyeSlot> {
        self.slots.get(slot)
    }

    pub fn light(&self) -> &Light {
        &self.registries.lights.items()[self.light_index]
    }

    pub fn canvas(&self) -> &absorber::Canvas {
        &self.registries.canvases.items()[self.canvas_index]
    }

    pub fn dye(&self, slot: usize) -> Option<&Dye> {
        self.slots
            .get(slot)
            .map(|s| &self.registries.dyes.items()[s.index])
    }

    pub fn select_light(&mut self, number: i32) -> Result<&Swatches, MixerError> {
        self.light_index = self
            .registries
            .lights
            .find_index_by_number(number)
            .ok_or(MixerError::UnknownLight(number))?;
        debug!(self.log, "selected light"; "number" => number);
        Ok(self.recompute())
    }

    pub fn select_canvas(&mut self, number: i32) -> Result<&Swatches, MixerError> {
        self.canvas_index = self
            .registries
            .canvases
            .find_index_by_number(number)
            .ok_or(MixerError::UnknownCanvas(number))?;
        debug!(self.log, "selected canvas"; "number" => number);
        Ok(self.recompute())
    }

    pub fn select_dye(&mut self, slot: usize, number: i32) -> Result<&Swatches, MixerError> {
        let index = self
            .registries
            .dyes
            .find_index_by_number(number)
            .ok_or(MixerError::UnknownDye(number))?;
        self.slot_mut(slot)?.index = index;
        debug!(self.log, "selected dye"; "slot" => slot, "number" => number);
        Ok(self.recompute())
    }

    pub fn set_dye_strength(&mut self, slot: usize, strength: f64) -> Result<&Swatches, MixerError> {
        self.slot_mut(slot)?.strength = strength;
        debug!(self.log, "dye strength"; "slot" => slot, "strength" => strength);
        Ok(self.recompute())
    }

    pub fn set_dye_slider(&mut self, slot: usize, position: u32) -> Result<&Swatches, MixerError> {
        self.set_dye_strength(slot, strength_from_slider(position))
    }

    /// Applies typed strength text and returns the strength to display. Text
    /// that does not parse leaves the strength untouched.
    pub fn set_dye_strength_text(&mut self, slot: usize, text: &str) -> Result<f64, MixerError> {
        let current = self.slot_mut(slot)?.strength;
        match parse_strength(text) {
            Ok(Some(strength)) => {
                self.set_dye_strength(slot, strength)?;
                Ok(strength)
            }
            Ok(None) => Ok(current),
            Err(e) => {
                warn!(self.log, "reverting strength entry"; "slot" => slot, "reason" => %e);
                Ok(current)
            }
        }
    }

    pub fn toggle_light_white_adapt(&mut self) -> &Swatches {
        self.toggle(AdaptFlags::LIGHT_WHITE)
    }

    pub fn toggle_canvas_white_adapt(&mut self) -> &Swatches {
        self.toggle(AdaptFlags::CANVAS_WHITE)
    }

    pub fn toggle_canvas_brightness_adapt(&mut self) -> &Swatches {
        self.toggle(AdaptFlags::CANVAS_BRIGHT)
    }

    pub fn toggle_combined_brightness_adapt(&mut self) -> &Swatches {
        self.toggle(AdaptFlags::COMBINED_BRIGHT)
    }

    pub fn toggle_dye_enabled(&mut self, slot: usize) -> Result<&Swatches, MixerError> {
        let s = self.slot_mut(slot)?;
        s.enabled = !s.enabled;
        let enabled = s.enabled;
        debug!(self.log, "dye enabled"; "slot" => slot, "enabled" => enabled);
        Ok(self.recompute())
    }

    pub fn set_flags(&mut self, flags: AdaptFlags) -> &Swatches {
        self.flags = flags;
        self.recompute()
    }

    fn toggle(&mut self, flag: AdaptFlags) -> &Swatches {
        self.flags.toggle(flag);
        debug!(self.log, "adaptation"; "flags" => ?self.flags);
        self.recompute()
    }

    fn slot_mut(&mut self, slot: usize) -> Result<&mut DyeSlot, MixerError> {
        self.slots.get_mut(slot).ok_or(MixerError::NoSuchSlot(slot))
    }

    fn recompute(&mut self) -> &Swatches {
        self.swatches = compute_swatches(
            &self.registries,
            self.light_index,
            self.canvas_index,
            &self.slots,
            self.flags,
        );
        trace!(self.log, "swatches"; "light" => ?self.swatches.light.color,
            "canvas" => ?self.swatches.canvas.color, "combined" => ?self.swatches.combined.color);
        &self.swatches
    }
}

/// Runs the whole light -> canvas -> dyes pipeline. Pure in its inputs; the
/// intermediate lights are scratch copies.
pub fn compute_swatches(
    registries: &Registries,
    light_index: usize,
    canvas_index: usize,
    slots: &[DyeSlot; NUM_MIXED_DYES],
    flags: AdaptFlags,
) -> Swatches {
    let mut light = registries.lights.items()[light_index].clone();
    if flags.contains(AdaptFlags::LIGHT_WHITE) {
        light.normalize_white();
    } else {
        light.normalize();
    }

    let canvas = &registries.canvases.items()[canvas_index];
    let mut canvas_light = light.filtered_copy(canvas, 1.0);
    if flags.contains(AdaptFlags::CANVAS_WHITE) {
        canvas_light.normalize_white();
    }
    if flags.contains(AdaptFlags::CANVAS_BRIGHT) {
        canvas_light.normalize();
    }

    let dye_swatch = |slot: &DyeSlot| {
        let dye = &registries.dyes.items()[slot.index];
        Swatch::from_light(&canvas_light.filtered_copy(dye, slot.strength))
    };
    let dyes: [Swatch; NUM_MIXED_DYES] = std::array::from_fn(|i| dye_swatch(&slots[i]));

    let mut combined = canvas_light.clone();
    for slot in slots.iter().filter(|s| s.enabled) {
        combined.filter(&registries.dyes.items()[slot.index], slot.strength);
    }
    if flags.contains(AdaptFlags::COMBINED_BRIGHT) {
        combined.normalize();
    }

    Swatches {
        light: Swatch::from_light(&light),
        canvas: Swatch::from_light(&canvas_light),
        dyes,
        combined: Swatch::from_light(&combined),
    }
}

#[cfg(test)]
mod tests {
    use super::absorber::Canvas;
    use super::registry::Numbered;
    use super::*;
    use crate::common::spectrum::Spectrum;
    use approx::assert_abs_diff_eq;

    fn test_log() -> slog::Logger {
        slog::Logger::root(slog::Discard, o!())
    }

    fn test_registries() -> Registries {
        let mut registries = Registries::with_builtins();
        registries.canvases.push(
            Canvas::new(
                "paper, yellowed",
                Spectrum::from_pairs(&[400.0, 0.4, 500.0, 0.8, 600.0, 0.9, 700.0, 0.9]),
            )
            .with_number(20),
        );
        registries.dyes.push(
            Dye::new(
                "Acid Red 1",
                "C.I. 18050",
                "acid",
                "pure",
                Some(Spectrum::from_pairs(&[450.0, 0.3, 520.0, 1.0, 600.0, 0.05])),
            )
            .with_number(30),
        );
        registries.sort();
        registries
    }

    #[test]
    fn test_slider_round_trip() {
        for position in 0..=MAX_DYE_SLIDER {
            let strength = strength_from_slider(position);
            let back = slider_from_strength(strength);
            // strength is quantized to 0.001, which the cube root stretches
            // at the bottom of the slider
            assert_eq!(strength_from_slider(back), strength, "position {}", position);
            if position >= 20 {
                assert!((back as i64 - position as i64).abs() <= 1, "position {}", position);
            }
        }
        assert_eq!(strength_from_slider(0), 0.0);
        assert_eq!(strength_from_slider(MAX_DYE_SLIDER), MAX_DYE_STRENGTH);
        assert_eq!(slider_from_strength(1000.0), MAX_DYE_SLIDER);
        assert_eq!(slider_from_strength(-1.0), 0);
    }

    #[test]
    fn test_parse_strength() {
        assert_eq!(parse_strength("2.5"), Ok(Some(2.5)));
        assert_eq!(parse_strength(" 3 "), Ok(Some(3.0)));
        assert_eq!(parse_strength(""), Ok(None));
        assert_eq!(parse_strength("-"), Ok(None));
        assert_eq!(parse_strength("."), Ok(None));
        assert_eq!(
            parse_strength("abc"),
            Err(ParameterError::NotANumber("abc".into()))
        );
        assert_eq!(format_strength(1.23456), "1.235");
    }

    #[test]
    fn test_initial_state() {
        let mixer = Mixer::new(&test_log(), test_registries());
        assert_eq!(mixer.light().number(), 1);
        assert_eq!(mixer.canvas().number(), 1);
        assert_eq!(mixer.flags(), AdaptFlags::LIGHT_WHITE);
        for slot in 0..NUM_MIXED_DYES {
            let s = mixer.slot(slot).unwrap();
            assert!(s.enabled);
            assert_eq!(s.strength, 1.0);
            assert_eq!(mixer.dye(slot).unwrap().number(), 1);
        }
        // white-adapted light on a blank canvas under blank dyes is white
        let white = image::Rgb([255, 255, 255]);
        assert_eq!(mixer.swatch_color(SwatchTarget::Light), Some(white));
        assert_eq!(mixer.swatch_color(SwatchTarget::Canvas), Some(white));
        assert_eq!(mixer.swatch_color(SwatchTarget::Dye(3)), Some(white));
        assert_eq!(mixer.swatch_color(SwatchTarget::Combined), Some(white));
        assert_eq!(mixer.swatch_color(SwatchTarget::Dye(NUM_MIXED_DYES)), None);
    }

    #[test]
    fn test_missing_default_falls_back_to_first_entry() {
        let data = "canvas; category = \"paper\"; name = \"grey\"; number = 5; default; evendata = 0.5;\n\
                    dye; name = \"Acid Red 1\"; number = 30; default; evendata = 1;";
        let mut registries = crate::load(&test_log(), data.as_bytes()).unwrap();
        assert_eq!(registries.defaults.canvas, 5);
        registries.canvases = Registries::with_builtins().canvases;
        registries.dyes = Registries::with_builtins().dyes;
        registries.defaults.light = 4242;
        let first_light = registries.lights.items()[0].number();

        let mixer = Mixer::new(&test_log(), registries);
        assert_eq!(mixer.light().number(), first_light);
        assert_eq!(mixer.canvas().number(), 1);
        for slot in 0..NUM_MIXED_DYES {
            assert_eq!(mixer.dye(slot).map(|d| d.number()), Some(1));
        }
    }

    #[test]
    fn test_empty_registries_get_builtins() {
        let registries = Registries {
            lights: registry::Registry::default(),
            canvases: registry::Registry::default(),
            dyes: registry::Registry::default(),
            defaults: registry::Defaults::default(),
        };
        let mut mixer = Mixer::new(&test_log(), registries);
        assert_eq!(mixer.light().number(), 1);
        assert_eq!(mixer.canvas().number(), 1);
        assert_eq!(mixer.registries().dyes.len(), 2);
        assert!(mixer.select_dye(0, 2).is_ok());
    }

    #[test]
    fn test_unknown_numbers_leave_state_alone() {
        let mut mixer = Mixer::new(&test_log(), test_registries());
        let before = mixer.swatches().clone();
        assert_eq!(mixer.select_light(4242).unwrap_err(), MixerError::UnknownLight(4242));
        assert_eq!(mixer.select_canvas(4242).unwrap_err(), MixerError::UnknownCanvas(4242));
        assert_eq!(mixer.select_dye(0, 4242).unwrap_err(), MixerError::UnknownDye(4242));
        assert_eq!(mixer.select_dye(NUM_MIXED_DYES, 1).unwrap_err(), MixerError::NoSuchSlot(NUM_MIXED_DYES));
        assert_eq!(mixer.swatches(), &before);
    }

    #[test]
    fn test_dye_swatch_reacts_to_selection_and_strength() {
        let mut mixer = Mixer::new(&test_log(), test_registries());
        let light = mixer.swatches().light;

        let red = mixer.select_dye(2, 30).unwrap().dyes[2].color;
        assert!(red[0] > red[1] && red[0] > red[2], "{:?}", red);
        assert_eq!(mixer.swatches().dyes[0].color, light.color);

        let weak = mixer.set_dye_strength(2, 0.1).unwrap().dyes[2].color;
        let strong = mixer.set_dye_strength(2, 10.0).unwrap().dyes[2].color;
        assert!(strong[1] < weak[1]);

        // selecting the same light again recomputes to the same answer
        let again = mixer.select_light(1).unwrap().dyes[2].color;
        assert_eq!(again, strong);
    }

    #[test]
    fn test_combined_uses_enabled_dyes_only() {
        let mut mixer = Mixer::new(&test_log(), test_registries());
        mixer.select_dye(0, 2).unwrap();
        assert_eq!(mixer.swatches().combined.color, mixer.swatches().dyes[0].color);

        mixer.toggle_dye_enabled(0).unwrap();
        assert_eq!(mixer.swatches().combined.color, image::Rgb([255, 255, 255]));
        // a disabled slot still shows its own swatch
        assert_ne!(mixer.swatches().dyes[0].color, image::Rgb([255, 255, 255]));

        mixer.toggle_dye_enabled(0).unwrap();
        mixer.toggle_combined_brightness_adapt();
        // brightness adaptation brings the grey back up to white
        assert_eq!(mixer.swatches().combined.color, image::Rgb([255, 255, 255]));
    }

    #[test]
    fn test_canvas_adaptation() {
        let mut mixer = Mixer::new(&test_log(), test_registries());
        let yellowed = mixer.select_canvas(20).unwrap().canvas;
        assert!(yellowed.color[2] < yellowed.color[0]);

        let adapted = mixer.toggle_canvas_white_adapt().canvas;
        assert_eq!(adapted.color, image::Rgb([255, 255, 255]));
        // chromaticity reports the physical light, not the adapted display
        assert_eq!(adapted.chromaticity, yellowed.chromaticity);

        mixer.toggle_canvas_white_adapt();
        let bright = mixer.toggle_canvas_brightness_adapt().canvas;
        assert_eq!(bright.color.0.iter().max(), Some(&255));
    }

    #[test]
    fn test_light_adaptation_toggle() {
        let mut mixer = Mixer::new(&test_log(), test_registries());
        let number = -2000;
        let white = mixer.select_light(number).unwrap().light;
        assert_eq!(white.color, image::Rgb([255, 255, 255]));

        let warm = mixer.toggle_light_white_adapt().light;
        assert_eq!(warm.color[0], 255);
        assert!(warm.color[2] < 128);
        let (x, _) = warm.chromaticity.unwrap();
        assert_abs_diff_eq!(x, 0.5267, epsilon = 0.002);
    }

    #[test]
    fn test_strength_text_entry() {
        let mut mixer = Mixer::new(&test_log(), test_registries());
        assert_eq!(mixer.set_dye_strength_text(1, "2.5"), Ok(2.5));
        assert_eq!(mixer.slot(1).unwrap().strength, 2.5);
        assert_eq!(mixer.set_dye_strength_text(1, "2.5x"), Ok(2.5));
        assert_eq!(mixer.set_dye_strength_text(1, "-"), Ok(2.5));
        assert_eq!(mixer.slot(1).unwrap().strength, 2.5);
        assert_eq!(
            mixer.set_dye_strength_text(99, "1"),
            Err(MixerError::NoSuchSlot(99))
        );

        mixer.set_dye_slider(1, MAX_DYE_SLIDER).unwrap();
        assert_eq!(mixer.slot(1).unwrap().strength, MAX_DYE_STRENGTH);
    }

    #[test]
    fn test_swatch_label() {
        let swatch = Swatch {
            color: image::Rgb([0, 0, 0]),
            chromaticity: Some((0.31271, 0.32902)),
        };
        assert_eq!(swatch.label().as_deref(), Some(".3127 .3290"));
        let black = Swatch {
            chromaticity: None,
            ..swatch
        };
        assert_eq!(black.label(), None);
        let green = Swatch {
            chromaticity: Some((0.0712, 0.6)),
            ..swatch
        };
        assert_eq!(green.label().as_deref(), Some(".0712 .6000"));
    }
}
