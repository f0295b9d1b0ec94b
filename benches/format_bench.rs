use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phony::{FormatTemplate, PhoneNumber};

fn setup_numbers() -> Vec<PhoneNumber> {
    ["+386 (0)31 123 456", "031/123-456", "01 234 5678", "+386 1 234 5678"]
        .into_iter()
        .map(PhoneNumber::from)
        .collect()
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();
    // Warm the per-number caches so only formatting is measured.
    for number in &numbers {
        number.to_parsed().unwrap();
    }

    let mut group = c.benchmark_group("Formatting");

    let mut test = |name: &str, template: FormatTemplate<'static>| {
        group.bench_function(format!("to_format({name})"), |b| {
            b.iter(|| {
                for number in &numbers {
                    number.to_format(black_box(template)).unwrap();
                }
            })
        });
    };

    test("display", FormatTemplate::Display);
    test("shared", FormatTemplate::from("+386 (0){area} {number:3} {number}"));
    test(
        "by kind",
        FormatTemplate::from([
            "{area} {number:3} {number:3}",
            "{area} {number:2} {number:2} {number:3}",
        ]),
    );

    group.bench_function("to_href()", |b| {
        b.iter(|| {
            for number in &numbers {
                black_box(number.to_href().unwrap());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
