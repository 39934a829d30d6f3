#[macro_use]
extern crate slog;

use criterion::*;
use dyemixer_rs::*;

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("benchmark-mixer");

    let drain = slog::Discard;
    let log = slog::Logger::root(drain, o!());
    let data_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/dyes.txt");
    let data = std::fs::read(&data_path).unwrap();

    group.bench_function("load", |b| b.iter(|| load(&log, black_box(&data)).unwrap()));

    let mut mixer = Mixer::new(&log, load(&log, &data).unwrap());
    for (slot, number) in [10, 11, 12, 13, 14].iter().enumerate() {
        mixer.select_dye(slot, *number).unwrap();
    }
    mixer.set_flags(AdaptFlags::all());

    group.bench_function("recompute", |b| {
        b.iter(|| {
            mixer.toggle_dye_enabled(0).unwrap();
        })
    });
    group.bench_function("select_light", |b| {
        b.iter(|| {
            mixer.select_light(black_box(-6500)).unwrap();
        })
    });
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
