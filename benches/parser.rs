use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use genemap2::parser::parse_phenotypes;
use genemap2::Dispatcher;

const PHENOTYPES: &str = "Left ventricular noncompaction 8, 615373 (3), Autosomal dominant; Cardiomyopathy, dilated, 1LL, 615373 (3), Autosomal dominant; Bar syndrome (2); {Qux susceptibility}, 300001 (3), X-linked recessive, X-linked dominant";

fn lines(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            format!("chr1\t{i}\t{}\t1p36\t1p36.33\t{:06}\tGENE{i}\tgene {i}\tGENE{i}\t{i}\tENSG{i:011}\t\t{PHENOTYPES}\tGene{i} (MGI:{i})", i + 1000, 100_000 + i)
        })
        .collect()
}

fn phenotype_benchmark(c: &mut Criterion) {
    c.bench_function("parse phenotypes", |b| {
        b.iter(|| parse_phenotypes(black_box(PHENOTYPES)).len())
    });
}

fn dispatcher_benchmark(c: &mut Criterion) {
    let lines = lines(20_000);
    let mut group = c.benchmark_group("dispatcher");
    for threads in [1usize, 4, 0] {
        group.bench_function(format!("threads {threads}"), |b| {
            b.iter(|| {
                Dispatcher::new()
                    .threads(threads)
                    .run(black_box(&lines))
                    .expect("lines are valid")
                    .len()
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = parser;
    config = Criterion::default().sample_size(20).measurement_time(Duration::from_secs(10));
    targets = phenotype_benchmark, dispatcher_benchmark
}
criterion_main!(parser);
