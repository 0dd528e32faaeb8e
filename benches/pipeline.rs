// benches/pipeline.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use goal500::{
    pipeline::{self, Category, RawRecord},
    specs::career,
};

fn synthetic_rows(players: usize, seasons: usize) -> Vec<RawRecord> {
    let mut rows = Vec::with_capacity(players * seasons * 2);
    for p in 0..players {
        let name = format!("Player {p:02}");
        for s in 0..seasons {
            let year = (2000 + p + s).to_string();
            rows.push(RawRecord::new(&name, &year, ((p * 7 + s * 3) % 40).to_string(), Category::Club));
            let intl = if s % 5 == 0 { String::from("—") } else { (s % 6).to_string() };
            rows.push(RawRecord::new(&name, &year, intl, Category::International));
        }
    }
    rows
}

fn synthetic_page(seasons: usize) -> String {
    let mut html = String::from(
        r#"<table class="wikitable"><tr><th rowspan="2">Club</th><th rowspan="2">Season</th>
        <th colspan="2">League</th><th colspan="2">Total</th></tr>
        <tr><th>Apps</th><th>Goals</th><th>Apps</th><th>Goals</th></tr>"#,
    );
    for s in 0..seasons {
        let y = 2000 + s;
        html.push_str(&format!(
            "<tr><td>Club {}</td><td>{y}–{:02}</td><td>30</td><td>{}</td><td>40</td><td>{}<sup>[{s}]</sup></td></tr>",
            s / 4,
            (y + 1) % 100,
            s % 20,
            s % 25,
        ));
    }
    html.push_str("</table><table><tr><th>Team</th><th>Year</th><th>Apps</th><th>Goals</th></tr>");
    for s in 0..seasons {
        html.push_str(&format!("<tr><td>X</td><td>{}</td><td>8</td><td>{}</td></tr>", 2000 + s, s % 4));
    }
    html.push_str("</table>");
    html
}

fn bench_prepare(c: &mut Criterion) {
    let rows = synthetic_rows(8, 20);
    c.bench_function("prepare_8x20", |b| {
        b.iter(|| {
            let out = pipeline::prepare(black_box(&rows));
            black_box(out.len())
        })
    });
}

fn bench_extract(c: &mut Criterion) {
    let page = synthetic_page(25);
    c.bench_function("extract_records_25_seasons", |b| {
        b.iter(|| {
            let recs = career::extract_records(black_box(&page), "Bench");
            black_box(recs.len())
        })
    });
}

criterion_group!(benches, bench_prepare, bench_extract);
criterion_main!(benches);
