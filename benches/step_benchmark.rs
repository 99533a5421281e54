//! Step benchmark: Measure the per-frame cost of the animation hot path.
//!
//! Target: a full phrase cycle well under 100µs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use typecycler::{
    Banner, Buffer, DisplayTarget, GlitchSettings, Rect, ScriptedRandom, SeededRandom, TextCycler,
    Widget,
};

const PREFIX: &str = "root@kali:~# ";

fn step_full_cycle(c: &mut Criterion) {
    let mut cycler = TextCycler::new(
        PREFIX,
        ["Offensive Security", "Red Teaming"],
        ScriptedRandom::constant(0.99),
    )
    .unwrap();

    // Type, hold and delete one 19-grapheme phrase.
    c.bench_function("step_full_cycle", |b| {
        b.iter(|| {
            for _ in 0..40 {
                black_box(cycler.step());
            }
        })
    });
}

fn render_markup(c: &mut Criterion) {
    let mut cycler =
        TextCycler::new(PREFIX, ["Digital Forensics"], ScriptedRandom::constant(0.99)).unwrap();
    for _ in 0..10 {
        cycler.step();
    }

    c.bench_function("render_markup", |b| {
        b.iter(|| black_box(cycler.render()).markup())
    });
}

fn glitch_corrupt(c: &mut Criterion) {
    let settings = GlitchSettings::default();
    let mut random = SeededRandom::new(7);

    c.bench_function("glitch_corrupt_ascii", |b| {
        b.iter(|| settings.corrupt(black_box("Vulnerability Assessment"), &mut random))
    });

    c.bench_function("glitch_corrupt_graphemes", |b| {
        b.iter(|| settings.corrupt(black_box("ne\u{301}twork 日本 🔐"), &mut random))
    });
}

fn banner_render(c: &mut Criterion) {
    let mut cycler =
        TextCycler::new(PREFIX, ["Threat Intelligence"], ScriptedRandom::constant(0.99)).unwrap();
    let mut banner = Banner::new(Rect::line(0, 0, 80));
    for _ in 0..19 {
        banner.show(&cycler.step().frame).unwrap();
    }
    let mut buffer = Buffer::new(80, 1);

    c.bench_function("banner_render_80", |b| {
        b.iter(|| banner.render(black_box(&mut buffer)))
    });
}

criterion_group!(
    benches,
    step_full_cycle,
    render_markup,
    glitch_corrupt,
    banner_render,
);
criterion_main!(benches);
