use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use statcard::render::{CardKind, RenderOptions};
use statcard::{CardOptions, StaticSource, StatsSnapshot, respond};

fn fixtures() -> Vec<(&'static str, CardKind, StatsSnapshot)> {
    vec![
        (
            "medium",
            CardKind::Medium,
            StatsSnapshot::new()
                .with("totalViews", 12345)
                .with("totalReads", 10),
        ),
        (
            "traffic",
            CardKind::Traffic,
            StatsSnapshot::new()
                .with("totalViews", 2_345_678)
                .with("totalClones", 1050)
                .with("reposTracked", 7),
        ),
    ]
}

const QUERY: &str = "show_icons=true&theme=radical&locale=de&custom_title=Weekly%20numbers";

fn bench_render_card(c: &mut Criterion) {
    let render = RenderOptions::default();
    let options = CardOptions::from_query_str(QUERY);

    let mut group = c.benchmark_group("render_card");
    for (name, kind, stats) in fixtures() {
        group.bench_function(name, |b| {
            b.iter(|| {
                let _svg = statcard_render::render_card(kind, &stats, &options, &render).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_respond(c: &mut Criterion) {
    let mut group = c.benchmark_group("respond");
    for (name, kind, stats) in fixtures() {
        let source = StaticSource(stats);
        group.bench_function(name, |b| {
            b.iter_batched(
                || QUERY,
                |query| {
                    let res = respond(&source, kind, query, None);
                    assert_eq!(res.status, 200);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render_card, bench_respond);
criterion_main!(benches);
