//! Criterion benchmarks for docforge_core document generation
//!
//! Run with: cargo bench -p docforge_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use docforge_core::config::HouseholdConfig;
use docforge_core::generate::utility_year;
use docforge_core::model::{BracketTable, Transaction};
use docforge_core::{build_ledger, calculate_tax, generate_documents};
use jiff::civil::date;

fn create_transactions(count: usize) -> Vec<Transaction> {
    (0..count)
        .map(|i| {
            let day = (i % 28) as i8 + 1;
            let amount = ((i * 37) % 500) as f64 + 0.25;
            if i % 3 == 0 {
                Transaction::credit(date(2024, 6, day), format!("Deposit {i}"), amount)
            } else {
                Transaction::debit(date(2024, 6, day), format!("Purchase {i}"), amount)
            }
        })
        .collect()
}

fn bench_full_year(c: &mut Criterion) {
    let config = HouseholdConfig::default();

    c.bench_function("generate_documents_full_year", |b| {
        b.iter(|| generate_documents(black_box(&config), black_box(42)))
    });
}

fn bench_utility_year(c: &mut Criterion) {
    let config = HouseholdConfig::default();

    c.bench_function("utility_year", |b| {
        b.iter(|| utility_year(black_box(&config), black_box(42)))
    });
}

fn bench_build_ledger(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_ledger");

    for count in [50, 500, 5000].iter() {
        let transactions = create_transactions(*count);
        group.bench_with_input(BenchmarkId::new("transactions", count), count, |b, _| {
            b.iter(|| build_ledger(black_box(1000.0), black_box(transactions.clone())))
        });
    }

    group.finish();
}

fn bench_calculate_tax(c: &mut Criterion) {
    let table = BracketTable::us_federal_2023_mfj();
    let incomes: Vec<f64> = (0..1000).map(|i| f64::from(i) * 750.0).collect();

    c.bench_function("calculate_tax_1000_incomes", |b| {
        b.iter(|| {
            incomes
                .iter()
                .map(|&income| calculate_tax(black_box(income), &table))
                .sum::<f64>()
        })
    });
}

criterion_group!(
    benches,
    bench_full_year,
    bench_utility_year,
    bench_build_ledger,
    bench_calculate_tax,
);
criterion_main!(benches);
