use anyhow::Result;
use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skillplot::sample::{OutcomeMarker, SkillSample};
use skillplot::{ChartSurface, RenderOptions, Theme};

fn build_season(n: usize) -> (Vec<SkillSample>, Vec<OutcomeMarker>, Vec<OutcomeMarker>) {
    let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let mut history = Vec::with_capacity(n);
    let mut wins = Vec::new();
    let mut losses = Vec::new();
    for i in 0..n {
        let at = start + Duration::days(i as i64);
        let mean = 25.0 + (i as f64 * 0.01).sin() * 3.0;
        history.push(SkillSample::try_new(at, mean, mean - 2.5, mean + 2.5).unwrap());
        if i % 7 == 0 {
            wins.push(OutcomeMarker::new(at, mean + 1.0, "Opponent"));
        } else if i % 11 == 0 {
            losses.push(OutcomeMarker::new(at, mean - 1.0, "Opponent"));
        }
    }
    (history, wins, losses)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("samples_{n}"), |b| {
            let (history, wins, losses) = build_season(n);
            let opts = RenderOptions { width: 800, height: 500, ..Default::default() };
            let mut surface = ChartSurface::new(Theme::light());
            b.iter(|| -> Result<()> {
                let rendered = surface.render(&history, &wins, &losses, &opts)?;
                black_box(&rendered.svg);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
