use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gateway_protocol::{escape_json, Message, MessageType};

fn bench_wire_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("wire_json");
    let messages = vec![
        Message::builder(MessageType::Pong).timestamp(1700000000).build(),
        Message::builder(MessageType::Chat)
            .timestamp(1700000000)
            .id("1700000000-0001")
            .server("libera")
            .target("#rust")
            .nick("ferris")
            .text("hello world")
            .build(),
        Message::builder(MessageType::Chat)
            .timestamp(1700000000)
            .text("x".repeat(1024))
            .build(),
    ];

    group.bench_function("to_json", |b| {
        b.iter_batched(
            || messages.clone(),
            |msgs| {
                for m in msgs {
                    let _ = m.to_json();
                }
            },
            BatchSize::SmallInput,
        )
    });

    let noisy = "line with \"quotes\"\tand\ncontrols ".repeat(32);
    group.bench_function("escape_1k", |b| {
        b.iter(|| {
            let _ = escape_json(Some(noisy.as_str()));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_wire_json);
criterion_main!(benches);
