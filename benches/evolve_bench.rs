//! Criterion benchmarks for the evolutionary engine.
//!
//! Uses synthetic catalogs so the numbers measure engine overhead, not any
//! particular dataset.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use menu_evolve::catalog::{Catalog, ProfitRecord, ProfitTable};
use menu_evolve::ga::{Driver, GaConfig};
use menu_evolve::menu::MenuProblem;
use menu_evolve::promotion::PromotionProblem;

fn synthetic_catalog(n: usize) -> (Catalog, ProfitTable) {
    let catalog = Catalog::new((0..n).map(|i| format!("item{i}")).collect());
    let mut table = ProfitTable::new();
    for i in 0..n {
        let profit = 1.0 + (i % 7) as f64;
        table.insert(
            format!("item{i}"),
            ProfitRecord::from_aggregates(profit * 10.0, profit, 10 + i as u64),
        );
    }
    (catalog, table)
}

fn bench_menu_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_selection");

    for &n in &[50usize, 200] {
        let (catalog, table) = synthetic_catalog(n);
        let problem = MenuProblem::new(&catalog, &table, n / 5).unwrap();
        let config = GaConfig::default().with_generations(20).with_seed(42);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| Driver::run(&problem, &config).unwrap());
        });
    }

    group.finish();
}

fn bench_promotion_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("promotion_planning");

    for &n in &[50usize, 200] {
        let (catalog, table) = synthetic_catalog(n);
        let problem = PromotionProblem::new(&catalog, &table, 500.0).unwrap();
        let config = GaConfig::default().with_generations(20).with_seed(42);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| Driver::run(&problem, &config).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_menu_selection, bench_promotion_planning);
criterion_main!(benches);
