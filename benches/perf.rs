use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use talentvision_terminal::report_view::build_report_view;
use talentvision_terminal::scouting_fetch::parse_scouting_report_json;
use talentvision_terminal::state::{SelectionState, build_analyze_request};

const REPORT_JSON: &str = include_str!("../tests/fixtures/analyze_players.json");

fn sample_selection() -> SelectionState {
    let mut sel = SelectionState::default();
    sel.set_role("Attacking Mid");
    for attr in [
        "Goals",
        "Key Passes",
        "xA (Expected Assists)",
        "Progressive Passes",
        "Passes into Penalty Area",
    ] {
        sel.toggle_attribute(attr);
    }
    sel.set_league("Serie A");
    sel.set_team("Napoli");
    sel
}

fn bench_report_parse(c: &mut Criterion) {
    c.bench_function("report_parse", |b| {
        b.iter(|| {
            let report = parse_scouting_report_json(black_box(REPORT_JSON)).unwrap();
            black_box(report.similar_players.len());
        })
    });
}

fn bench_report_view(c: &mut Criterion) {
    let report = parse_scouting_report_json(REPORT_JSON).expect("valid fixture json");
    let criteria = sample_selection();
    c.bench_function("report_view_build", |b| {
        b.iter(|| {
            let view = build_report_view(black_box(&criteria), Some(black_box(&report)));
            black_box(view);
        })
    });
}

fn bench_request_build(c: &mut Criterion) {
    let selection = sample_selection();
    c.bench_function("analyze_request_build", |b| {
        b.iter(|| {
            let request = build_analyze_request(black_box(&selection)).unwrap();
            black_box(serde_json::to_string(&request).unwrap());
        })
    });
}

criterion_group!(
    benches,
    bench_report_parse,
    bench_report_view,
    bench_request_build
);
criterion_main!(benches);
