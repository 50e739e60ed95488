use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use msgs::{MemoryStore, MessageEngine, MessageInput, SequentialIds};

fn input(i: usize) -> MessageInput {
    MessageInput::new(Some(format!("message number {}", i)), Some(String::from("bench")))
}

fn create_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");
    group.bench_function("random_ids", |b| {
        b.iter_batched(
            MemoryStore::new,
            |store| {
                for i in 0..100 {
                    store.create(input(i)).unwrap();
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("sequential_ids", |b| {
        b.iter_batched(
            || MemoryStore::with_generator(SequentialIds::new("bench")),
            |store| {
                for i in 0..100 {
                    store.create(input(i)).unwrap();
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn fetch_replace_bench(c: &mut Criterion) {
    let store = MemoryStore::new();
    let ids: Vec<String> = (0..1000)
        .map(|i| store.create(input(i)).unwrap().id)
        .collect();

    c.bench_function("fetch", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(store.fetch(id).unwrap());
            }
        })
    });
    c.bench_function("replace", |b| {
        b.iter(|| {
            for (i, id) in ids.iter().enumerate() {
                black_box(store.replace(id, input(i)).unwrap());
            }
        })
    });
}

criterion_group!(benches, create_bench, fetch_replace_bench);
criterion_main!(benches);
