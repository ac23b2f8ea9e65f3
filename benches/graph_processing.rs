//! Benchmarks for graph processing and array addressing
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flowgraph::container::StridedArray;
use flowgraph::graph::{Graph, PortId};
use flowgraph::nodes::{AddNode, ValueSourceNode};

fn bench_strided_addressing(c: &mut Criterion) {
    let mut group = c.benchmark_group("strided_addressing");

    for size in [16usize, 64, 256].iter() {
        let arr: StridedArray<f64, 2> = StridedArray::contiguous([*size, *size]);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("offset_sweep", size), size, |b, &size| {
            b.iter(|| {
                let mut acc = 0usize;
                for i in 0..size {
                    for j in 0..size {
                        if let Ok(off) = arr.offset(black_box(&[i, j])) {
                            acc = acc.wrapping_add(off);
                        }
                    }
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

fn bench_adder_process(c: &mut Criterion) {
    let mut graph = Graph::new();
    let a = graph.add_node(Box::new(ValueSourceNode::new(3.0)));
    let b = graph.add_node(Box::new(ValueSourceNode::new(4.0)));
    let add = graph.add_node(Box::new(AddNode::new()));
    graph
        .connect(PortId::new(a, 0), PortId::new(add, 0))
        .unwrap();
    graph
        .connect(PortId::new(b, 0), PortId::new(add, 1))
        .unwrap();
    graph.process(a).unwrap();
    graph.process(b).unwrap();

    let mut group = c.benchmark_group("graph_processing");
    group.throughput(Throughput::Elements(1));
    group.bench_function("adder_process", |bencher| {
        bencher.iter(|| {
            graph.process(black_box(add)).unwrap();
        });
    });
    group.finish();
}

fn bench_connect_disconnect(c: &mut Criterion) {
    let mut graph = Graph::new();
    let src = graph.add_node(Box::new(ValueSourceNode::new(1.0)));
    let add = graph.add_node(Box::new(AddNode::new()));
    let from = PortId::new(src, 0);
    let to = PortId::new(add, 0);

    let mut group = c.benchmark_group("graph_wiring");
    group.bench_function("connect_disconnect", |bencher| {
        bencher.iter(|| {
            graph.connect(black_box(from), black_box(to)).unwrap();
            graph.disconnect(black_box(to));
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_strided_addressing,
    bench_adder_process,
    bench_connect_disconnect
);
criterion_main!(benches);
