use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use scopesweep::config::{Config, FilterConfig};
use scopesweep::extractor::Extractor;
use scopesweep::facade::ScopeSweep;
use scopesweep::origin::Site;
use scopesweep::validator::is_valid_domain;

/// Build a scope page with `rows` in-scope table rows plus surrounding prose.
fn generate_scope_page(rows: usize) -> String {
    let mut html = String::from(
        r#"<html><body><h1>Program scope</h1>
        <p>Report issues for the assets listed below. Out of scope items
        are rewarded at the discretion of the program owner.</p>
        <table class="target-table"><tbody>"#,
    );
    for i in 0..rows {
        html.push_str(&format!(
            "<tr><td>*.team{i}.example.com</td><td>Web</td></tr>\
             <tr><td>api-{i}.example.net</td><td>API</td></tr>"
        ));
    }
    html.push_str("</tbody></table>");
    for i in 0..rows {
        html.push_str(&format!(
            "<p>Asset group {i} also covers cdn{i}.example.org and the
            bundle app-{i}.min.js which is not a domain.</p>"
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_fragment_extraction(c: &mut Criterion) {
    let filter = FilterConfig::default();
    let extractor = Extractor::new(&filter);

    let short = "In scope: https://api.example.com/v2 and *.shop.example.co.uk (port 8443).";
    let long = short.repeat(200);

    let mut group = c.benchmark_group("extract_fragment");
    for (name, text) in [("short", short.to_string()), ("long", long)] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| extractor.extract_fragment(black_box(text)));
        });
    }
    group.finish();
}

fn bench_domain_validation(c: &mut Criterion) {
    let filter = FilterConfig::default();
    let candidates = [
        "api.example.com",
        "*.example.co.uk",
        "dashboard.targets",
        "report-2024.json",
        "xxxx.example.com",
        "example.comquantum",
        "deep.nested.label.chain.example.network",
    ];

    c.bench_function("is_valid_domain", |b| {
        b.iter(|| {
            for candidate in &candidates {
                black_box(is_valid_domain(black_box(candidate), &filter));
            }
        });
    });
}

fn bench_full_scan(c: &mut Criterion) {
    let config = Config::default();

    let mut group = c.benchmark_group("full_scan");
    group.sample_size(20);
    for rows in [10usize, 100, 500] {
        let html = generate_scope_page(rows);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &html, |b, html| {
            b.iter(|| ScopeSweep::extract_from_html(black_box(html), Site::Bugcrowd, &config));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_fragment_extraction,
    bench_domain_validation,
    bench_full_scan
);
criterion_main!(benches);
