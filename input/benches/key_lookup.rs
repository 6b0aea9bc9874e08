use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vermilion_input::keyboard::{key_name, Key};

// ---------------------------------------------------------------------------
// Name lookup
// ---------------------------------------------------------------------------

fn bench_key_name_hit(c: &mut Criterion) {
    c.bench_function("key_name_hit", |b| {
        b.iter(|| key_name(black_box(0x41)));
    });
}

fn bench_key_name_miss(c: &mut Criterion) {
    c.bench_function("key_name_miss", |b| {
        b.iter(|| key_name(black_box(0x99)));
    });
}

fn bench_from_raw_full_sweep(c: &mut Criterion) {
    c.bench_function("from_raw_sweep_0x00_0xFF", |b| {
        b.iter(|| {
            for code in 0u32..=0xFF {
                black_box(Key::from_raw(black_box(code)));
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

fn bench_display(c: &mut Criterion) {
    c.bench_function("key_display_to_string", |b| {
        b.iter(|| black_box(Key::F24).to_string());
    });
}

criterion_group!(
    benches,
    bench_key_name_hit,
    bench_key_name_miss,
    bench_from_raw_full_sweep,
    bench_display
);
criterion_main!(benches);
