//! Throughput benchmarks for savak channels

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use savak_channel::{channel, Select};

fn bench_send_recv(c: &mut Criterion) {
    let mut group = c.benchmark_group("send_recv");

    for batch in [64usize, 256, 1024].iter() {
        group.throughput(Throughput::Elements(*batch as u64));
        group.bench_with_input(BenchmarkId::from_parameter(batch), batch, |b, &size| {
            let ch = channel(size);
            b.iter(|| {
                for i in 0..size {
                    ch.send(i).unwrap();
                }
                for _ in 0..size {
                    black_box(ch.recv().unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_try_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("try_ops");

    group.bench_function("try_send_try_recv", |b| {
        let ch = channel(1);
        b.iter(|| {
            ch.try_send(black_box(1u64)).unwrap();
            black_box(ch.try_recv().unwrap());
        });
    });

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");

    group.bench_function("two_entry_ready_recv", |b| {
        let x = channel(1);
        let y = channel(1);
        b.iter(|| {
            x.send(1u64).unwrap();
            let mut sel = Select::new();
            sel.recv(&x);
            sel.recv(&y);
            black_box(sel.wait().unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_send_recv, bench_try_ops, bench_select);
criterion_main!(benches);
