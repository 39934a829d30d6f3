use crate::common::spectrum::SpectrumInterface;
use crate::mixer::absorber::{Canvas, Dye};
use crate::mixer::light::Light;
use crate::mixer::registry::{Numbered, Registries, Registry};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

pub mod dyedata;
pub mod tokenizer;

pub use dyedata::{parse_records, Parser, Record, RecordKind, SpectrumData};

/// Why a data file was rejected. The `Display` text is the diagnostic shown
/// to the user as-is.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Expecting {expected} in line {line}")]
    Unexpected { expected: String, line: usize },
    #[error("Duplicate spectrum in line {line}")]
    DuplicateSpectrum { line: usize },
    #[error("Unevendata must have even length in line {line}")]
    OddUnevenData { line: usize },
    #[error("Missing spectral data before line {line}")]
    MissingSpectrum { line: usize },
    #[error("Duplicate number {number} before line {line}")]
    DuplicateNumber { number: i32, line: usize },
    #[error("Step must be positive in line {line}")]
    NonPositiveStep { line: usize },
    #[error("Unterminated string in line {line}")]
    UnterminatedString { line: usize },
    #[error("Invalid UTF-8 in line {line}")]
    Encoding { line: usize },
    #[error("Cannot read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn line(&self) -> Option<usize> {
        match *self {
            LoadError::Unexpected { line, .. }
            | LoadError::DuplicateSpectrum { line }
            | LoadError::OddUnevenData { line }
            | LoadError::MissingSpectrum { line }
            | LoadError::DuplicateNumber { line, .. }
            | LoadError::NonPositiveStep { line }
            | LoadError::UnterminatedString { line }
            | LoadError::Encoding { line } => Some(line),
            LoadError::Io { .. } => None,
        }
    }
}

#[derive(Default)]
struct Loaded {
    lights: HashSet<i32>,
    canvases: HashSet<i32>,
    dyes: HashSet<i32>,
}

/// Adds `item` to `registry`. A light may take over the number of a built-in
/// light, which it then replaces. Any other repeated number is an error.
fn insert<T: Numbered>(
    log: &slog::Logger,
    registry: &mut Registry<T>,
    loaded: &mut HashSet<i32>,
    item: T,
    replaces_builtin: bool,
    line: usize,
) -> Result<(), LoadError> {
    let number = item.number();
    if !loaded.insert(number) {
        return Err(LoadError::DuplicateNumber { number, line });
    }
    match registry.find_index_by_number(number) {
        Some(index) if replaces_builtin => {
            let builtin = registry.replace(index, item);
            debug!(log, "replaced built-in entry"; "number" => number, "name" => builtin.name());
        }
        Some(_) => return Err(LoadError::DuplicateNumber { number, line }),
        None => registry.push(item),
    }
    Ok(())
}

fn add_record(
    log: &slog::Logger,
    registries: &mut Registries,
    loaded: &mut Loaded,
    record: Record,
    line: usize,
) -> Result<(), LoadError> {
    let mut spectrum = match record.spectrum() {
        Some(spectrum) => spectrum,
        None => return Err(LoadError::MissingSpectrum { line }),
    };
    let name = record.display_name();
    debug!(log, "record"; "kind" => ?record.kind, "number" => record.number, "name" => &name);

    match record.kind {
        RecordKind::Light => {
            if record.default {
                registries.defaults.light = record.number;
            }
            let light = Light::from_spectrum(name, &spectrum).with_number(record.number);
            insert(log, &mut registries.lights, &mut loaded.lights, light, true, line)
        }
        RecordKind::Canvas => {
            if record.default {
                registries.defaults.canvas = record.number;
            }
            let canvas = Canvas::new(name, spectrum).with_number(record.number);
            insert(log, &mut registries.canvases, &mut loaded.canvases, canvas, false, line)
        }
        RecordKind::Dye => {
            if record.default {
                registries.defaults.dye = record.number;
            }
            spectrum.clip_negatives();
            spectrum.normalize_absorbance();
            let dye = Dye::new(name, record.ci, record.category, record.mixture, Some(spectrum))
                .with_number(record.number);
            insert(log, &mut registries.dyes, &mut loaded.dyes, dye, false, line)
        }
    }
}

/// Builds the registries from a data file's contents: the built-in entries
/// plus every record in `data`, sorted for display.
pub fn load(log: &slog::Logger, data: &[u8]) -> Result<Registries, LoadError> {
    let source = std::str::from_utf8(data).map_err(|e| LoadError::Encoding {
        line: 1 + data[..e.valid_up_to()].iter().filter(|b| **b == b'\n').count(),
    })?;

    let log = log.new(o!("loader" => "dyedata"));
    let mut registries = Registries::with_builtins();
    let mut loaded = Loaded::default();
    Parser::new(source)
        .parse(|record, line| add_record(&log, &mut registries, &mut loaded, record, line))?;
    registries.sort();

    info!(
        log,
        "loaded {} lights, {} canvases, {} dyes",
        registries.lights.len(),
        registries.canvases.len(),
        registries.dyes.len()
    );
    info!(
        log,
        "default light {}, canvas {}, dye {}",
        registries.defaults.light,
        registries.defaults.canvas,
        registries.defaults.dye
    );
    Ok(registries)
}

pub fn load_file<P: AsRef<Path>>(log: &slog::Logger, path: P) -> Result<Registries, LoadError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| LoadError::Io {
        name: path.display().to_string(),
        source,
    })?;
    load(log, &data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixer::absorber::AbsorberInterface;
    use approx::assert_relative_eq;

    fn log() -> slog::Logger {
        slog::Logger::root(slog::Discard, o!())
    }

    const SAMPLE: &str = r#"
        // two dyes, a canvas and a lamp
        dye;
          name = "Dye 10"; category = "acid"; ci = "C.I. 1"; mixture = "pure";
          number = 10;
          evendata = 0.2, 0.5, 0.4;
          start = 400; step = 100;
        dye;
          name = "Dye 2"; number = 20; default;
          unevendata = 400, -0.5, 500, 2.0, 900, 4.0;
        canvas;
          category = "paper"; name = "cream"; number = 5; default;
          evendata = 0.5, 1.0; start = 400; step = 300;
        light;
          category = "lamp"; name = "tungsten"; number = 42;
          evendata = 1, 2, 3;
    "#;

    #[test]
    fn test_load_sample() {
        let registries = load(&log(), SAMPLE.as_bytes()).unwrap();
        assert_eq!(registries.dyes.len(), 4);
        assert_eq!(registries.canvases.len(), 2);
        assert_eq!(registries.defaults.dye, 20);
        assert_eq!(registries.defaults.canvas, 5);
        assert_eq!(registries.defaults.light, 1);

        let names: Vec<&str> = registries.dyes.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["blank", "reference, black", "Dye 2", "Dye 10"]);

        let canvas = registries.canvases.find_by_number(5).unwrap();
        assert_eq!(canvas.name(), "paper, cream");
        assert_relative_eq!(canvas.absorbance(400.0), 0.5f64.log10().abs(), epsilon = 1e-12);

        let light = registries.lights.find_by_number(42).unwrap();
        assert_eq!(light.name(), "lamp, tungsten");
    }

    #[test]
    fn test_dye_spectra_are_clipped_and_normalized() {
        let registries = load(&log(), SAMPLE.as_bytes()).unwrap();

        // start/step may follow the data inside a record
        let even = registries.dyes.find_by_number(10).unwrap();
        assert_relative_eq!(even.absorbance(500.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(even.absorbance(400.0), 0.4, epsilon = 1e-12);
        assert_eq!(even.ci(), "C.I. 1");
        assert_eq!(even.family(), "acid");

        // the peak inside the visible range is 2.0 at 500 nm; 900 nm is ignored
        let uneven = registries.dyes.find_by_number(20).unwrap();
        assert_eq!(uneven.absorbance(400.0), 0.0);
        assert_relative_eq!(uneven.absorbance(500.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(uneven.absorbance(900.0), 2.0, epsilon = 1e-12);
        assert_eq!(uneven.mixture(), "?");
    }

    #[test]
    fn test_duplicate_number() {
        let data = "dye; number = 7; evendata = 1;\n\ndye; number = 7; evendata = 1;\n";
        let err = load(&log(), data.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate number 7 before line 4");
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn test_loaded_light_replaces_builtin() {
        let data = "light; category = \"lamp\"; name = \"mine\"; number = 1; evendata = 1;";
        let registries = load(&log(), data.as_bytes()).unwrap();
        let builtins = Registries::with_builtins();
        assert_eq!(registries.lights.len(), builtins.lights.len());
        assert_eq!(registries.lights.find_by_number(1).unwrap().name(), "lamp, mine");
    }

    #[test]
    fn test_builtin_absorbers_cannot_be_replaced() {
        let err = load(&log(), b"dye; name = \"ink\"; number = 2; evendata = 0.5;\n").unwrap_err();
        assert_eq!(err.to_string(), "Duplicate number 2 before line 2");

        let err = load(&log(), b"canvas; number = 1; evendata = 0.5;").unwrap_err();
        assert!(matches!(err, LoadError::DuplicateNumber { number: 1, line: 1 }));

        let err = load(&log(), b"dye; number = 1; evendata = 0.5;").unwrap_err();
        assert!(matches!(err, LoadError::DuplicateNumber { number: 1, .. }));
    }

    #[test]
    fn test_same_number_in_different_categories() {
        let data = "dye; number = 9; evendata = 1;\ncanvas; number = 9; evendata = 1;\nlight; number = 9; evendata = 1;";
        assert!(load(&log(), data.as_bytes()).is_ok());
    }

    #[test]
    fn test_invalid_utf8() {
        let err = load(&log(), b"dye;\nname = \"\xff\";").unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.to_string(), "Invalid UTF-8 in line 2");
    }

    #[test]
    fn test_missing_file() {
        let err = load_file(&log(), "/nonexistent/dyes.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert_eq!(err.line(), None);
        assert!(err.to_string().starts_with("Cannot read /nonexistent/dyes.txt: "));
    }

    #[test]
    fn test_empty_data_keeps_builtins() {
        let registries = load(&log(), b"").unwrap();
        assert_eq!(registries.canvases.len(), 1);
        assert_eq!(registries.dyes.len(), 2);
        assert!(registries.lights.find_by_number(1).is_some());
    }
}
