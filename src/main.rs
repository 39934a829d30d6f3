#[macro_use]
extern crate slog;

use anyhow::{bail, Context, Result};
use clap::clap_app;
use dyemixer_rs::mixer::registry::Numbered;
use dyemixer_rs::mixer::{format_strength, Swatch, NUM_MIXED_DYES};
use dyemixer_rs::*;
use slog::Drain;

const DEFAULT_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/dyes.txt");
const STRIP_SWATCH_SIZE: u32 = 64;

struct DyeArg {
    slot: usize,
    number: i32,
    strength: Option<f64>,
}

fn parse_slot(text: &str) -> Result<usize> {
    let slot = text
        .parse::<usize>()
        .with_context(|| format!("slot \"{}\" is not a number", text))?;
    if slot >= NUM_MIXED_DYES {
        bail!("slot {} out of range (0..{})", slot, NUM_MIXED_DYES);
    }
    Ok(slot)
}

fn parse_dye_arg(text: &str) -> Result<DyeArg> {
    let mut parts = text.split(':');
    let slot = parse_slot(parts.next().unwrap_or(""))?;
    let number = match parts.next() {
        Some(number) => number
            .parse::<i32>()
            .with_context(|| format!("dye number \"{}\" is not a number", number))?,
        None => bail!("expected SLOT:NUMBER[:STRENGTH], got \"{}\"", text),
    };
    let strength = parts
        .next()
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("strength \"{}\" is not a number", s))
        })
        .transpose()?;
    if parts.next().is_some() {
        bail!("expected SLOT:NUMBER[:STRENGTH], got \"{}\"", text);
    }
    Ok(DyeArg {
        slot,
        number,
        strength,
    })
}

fn slot_arg_legal(val: String) -> Result<(), String> {
    parse_slot(&val).map(|_| ()).map_err(|e| e.to_string())
}

fn dye_arg_legal(val: String) -> Result<(), String> {
    parse_dye_arg(&val).map(|_| ()).map_err(|e| e.to_string())
}

fn new_drain(level: slog::Level) -> slog::Fuse<slog::LevelFilter<slog::Fuse<slog_async::Async>>> {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    drain.filter_level(level).fuse()
}

fn print_list(registries: &mixer::registry::Registries) {
    println!("lights:");
    for light in &registries.lights {
        println!("  {:>8}  {}", light.number(), light.name());
    }
    println!("canvases:");
    for canvas in &registries.canvases {
        println!("  {:>8}  {}", canvas.number(), canvas.name());
    }
    println!("dyes:");
    for dye in &registries.dyes {
        println!(
            "  {:>8}  {} ({}, {}, {})",
            dye.number(),
            dye.name(),
            dye.ci(),
            dye.family(),
            dye.mixture()
        );
    }
}

fn swatch_line(title: &str, swatch: &Swatch, detail: &str) -> String {
    let [r, g, b] = swatch.color.0;
    format!(
        "{:<10} #{:02x}{:02x}{:02x}  {:<11}  {}",
        title,
        r,
        g,
        b,
        swatch.label().unwrap_or_else(|| "-".into()),
        detail
    )
}

fn print_swatches(mixer: &Mixer) {
    let swatches = mixer.swatches();
    println!("{}", swatch_line("light", &swatches.light, mixer.light().name()));
    println!("{}", swatch_line("canvas", &swatches.canvas, mixer.canvas().name()));
    for (i, swatch) in swatches.dyes.iter().enumerate() {
        let (dye, slot) = match (mixer.dye(i), mixer.slot(i)) {
            (Some(dye), Some(slot)) => (dye, slot),
            _ => continue,
        };
        let detail = format!(
            "{} x{}{}",
            dye.name(),
            format_strength(slot.strength),
            if slot.enabled { "" } else { " (disabled)" }
        );
        println!("{}", swatch_line(&format!("dye {}", i), swatch, &detail));
    }
    println!("{}", swatch_line("combined", &swatches.combined, ""));
}

/// Writes every swatch side by side: light, canvas, the dye slots, combined.
fn save_strip(path: &str, swatches: &Swatches) -> Result<()> {
    let mut colors = vec![swatches.light.color, swatches.canvas.color];
    colors.extend(swatches.dyes.iter().map(|s| s.color));
    colors.push(swatches.combined.color);

    let width = STRIP_SWATCH_SIZE * colors.len() as u32;
    let image = image::RgbImage::from_fn(width, STRIP_SWATCH_SIZE, |x, _| {
        colors[(x / STRIP_SWATCH_SIZE) as usize]
    });
    image
        .save(path)
        .with_context(|| format!("could not write {}", path))
}

fn main() -> Result<()> {
    let info_drain = new_drain(slog::Level::Info);
    let drain = slog_atomic::AtomicSwitch::new(info_drain);
    let ctrl = drain.ctrl();
    let log = slog::Logger::root(drain.fuse(), o!());

    let matches = clap_app!(dyemixer_rs =>
        (version: "1.0")
        (about: "Spectral dye mixing: shows the color of layered dyes on a canvas under a light")
        (@arg DATA: "Data file with lights, canvases and dyes")
        (@arg light: -l --light +takes_value "Number of the light to select")
        (@arg canvas: -c --canvas +takes_value "Number of the canvas to select")
        (@arg dye: -d --dye +takes_value +multiple number_of_values(1) validator(dye_arg_legal) "Puts a dye in a slot, as SLOT:NUMBER[:STRENGTH]")
        (@arg disable: --disable +takes_value +multiple number_of_values(1) validator(slot_arg_legal) "Leaves a dye slot out of the combined swatch")
        (@arg no_light_white: --("no-light-white") "Adapt the light for brightness only, not to white")
        (@arg canvas_white: --("canvas-white") "White-adapt to the canvas")
        (@arg canvas_bright: --("canvas-bright") "Brightness-adapt to the canvas")
        (@arg combined_bright: --("combined-bright") "Brightness-adapt the combined swatch")
        (@arg list: --list "List available lights, canvases and dyes")
        (@arg output: -o --output +takes_value "Saves the swatches as a PNG strip")
        (@arg verbose: -v --verbose "Print debug information verbosely")
    )
    .get_matches();

    if matches.is_present("verbose") {
        ctrl.set(new_drain(slog::Level::Trace));
    }

    let data_path = matches.value_of("DATA").unwrap_or(DEFAULT_DATA);
    let registries = load_file(&log, data_path).map_err(|e| {
        error!(log, "{}", e);
        e
    })?;

    if matches.is_present("list") {
        print_list(&registries);
        return Ok(());
    }

    let mut mixer = Mixer::new(&log, registries);

    let mut flags = AdaptFlags::default();
    flags.set(AdaptFlags::LIGHT_WHITE, !matches.is_present("no_light_white"));
    flags.set(AdaptFlags::CANVAS_WHITE, matches.is_present("canvas_white"));
    flags.set(AdaptFlags::CANVAS_BRIGHT, matches.is_present("canvas_bright"));
    flags.set(AdaptFlags::COMBINED_BRIGHT, matches.is_present("combined_bright"));
    mixer.set_flags(flags);

    if let Some(light) = matches.value_of("light") {
        let number = light.parse::<i32>().context("--light expects a number")?;
        mixer.select_light(number)?;
    }
    if let Some(canvas) = matches.value_of("canvas") {
        let number = canvas.parse::<i32>().context("--canvas expects a number")?;
        mixer.select_canvas(number)?;
    }
    for arg in matches.values_of("dye").into_iter().flatten() {
        let dye = parse_dye_arg(arg)?;
        mixer.select_dye(dye.slot, dye.number)?;
        if let Some(strength) = dye.strength {
            mixer.set_dye_strength(dye.slot, strength)?;
        }
    }
    for arg in matches.values_of("disable").into_iter().flatten() {
        let slot = parse_slot(arg)?;
        if mixer.slot(slot).map_or(false, |s| s.enabled) {
            mixer.toggle_dye_enabled(slot)?;
        }
    }

    print_swatches(&mixer);

    if let Some(output) = matches.value_of("output") {
        info!(log, "saving swatch strip to {}", output);
        save_strip(output, mixer.swatches())?;
    }
    Ok(())
}
