use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{DateTime, Duration, Utc};

use assettrack_analytics::{expiring_within, group_count, warranty_expiry};
use assettrack_core::{CompanyId, ProductId, UserId};
use assettrack_inventory::Product;

fn fleet(size: usize, now: DateTime<Utc>) -> Vec<Product> {
    let owners: Vec<UserId> = (0..16).map(|_| UserId::new()).collect();
    (0..size)
        .map(|i| {
            Product::new(
                ProductId::new(),
                format!("asset-{i}"),
                now - Duration::days((i % 2_000) as i64),
                (i % 37) as u32,
                owners[i % owners.len()],
                CompanyId::new(),
                now,
            )
            .unwrap()
        })
        .collect()
}

fn bench_horizon_filter(c: &mut Criterion) {
    let now = Utc::now();
    let mut group = c.benchmark_group("horizon_filter");

    for size in [1_000usize, 10_000, 50_000] {
        let products = fleet(size, now);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &products, |b, products| {
            b.iter(|| expiring_within(black_box(products.clone()), 3, now));
        });
    }

    group.finish();
}

fn bench_grouped_counting(c: &mut Criterion) {
    let now = Utc::now();
    let mut group = c.benchmark_group("grouped_counting");

    for size in [1_000usize, 10_000, 50_000] {
        let products = fleet(size, now);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("usage_by_owner", size),
            &products,
            |b, products| {
                b.iter(|| group_count(black_box(products), |p| p.owner.to_string()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("warranty_status", size),
            &products,
            |b, products| {
                b.iter(|| {
                    group_count(black_box(products), |p| {
                        warranty_expiry(p.date_of_purchase, p.warranty_months) >= now
                    })
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_horizon_filter, bench_grouped_counting);
criterion_main!(benches);
