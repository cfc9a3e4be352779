use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rphonevalidator::{
    plan::LibPhoneNumberPlan,
    validator::Resolver,
};

/// (cleaned number, default region) pairs that exercise each exit path of
/// the resolver.
fn setup_resolve_data() -> Vec<(&'static str, &'static str)> {
    vec![
        // Explicit country code: stops after the first attempt.
        ("+442087654321", "IN"),
        // Domestic number under the caller's region.
        ("9876543210", "IN"),
        // Country code without the plus: stops on with_plus.
        ("12025550123", "IN"),
        // Foreign national number: full auto-detection sweep.
        ("2815550123", "FR"),
        // Nothing parses.
        ("notanumber", "IN"),
    ]
}

fn resolve_benchmark(c: &mut Criterion) {
    let plan = LibPhoneNumberPlan::new();
    let resolver = Resolver::new(&plan);
    let numbers = setup_resolve_data();

    let mut group = c.benchmark_group("Resolver");

    group.bench_function("resolve(): mixed inputs", |b| {
        b.iter(|| {
            for (number, region) in &numbers {
                let _ = resolver.resolve(black_box(number), black_box(region));
            }
        })
    });

    group.bench_function("phonenumber::parse(): as_is only", |b| {
        b.iter(|| {
            for (number, _) in &numbers {
                let _ = phonenumber::parse(None, black_box(number));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, resolve_benchmark);
criterion_main!(benches);
