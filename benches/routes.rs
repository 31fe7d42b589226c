//! Benchmarks for route calculation and the structural checks.
//!
//! Nets are chains of place/transition pairs with a side branch every few steps,
//! so the route tables grow quadratically with the number of nodes:
//! - All-pairs routes, directed and undirected
//! - Full connectivity check including the bridge overlay
//! - Free-choice check

extern crate wfnet;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use wfnet::{
    analysis::{NetGraph, StructuralAnalysis},
    net::{Diagnostics, ElementSpec, Net},
    utils::graph::{algorithms::all_pairs_routes, NodeId},
};

/// Builds p0 -> t0 -> p1 -> t1 -> ... -> pN, with an extra branch pI -> sI -> pI+1
/// on every fifth place.
fn chain_net(length: usize) -> Net {
    let mut net = Net::new();
    for i in 0..=length {
        net.create_element(ElementSpec::place(format!("p{i}"))).unwrap();
    }
    for i in 0..length {
        let transition = format!("t{i}");
        net.create_element(ElementSpec::transition(transition.as_str())).unwrap();
        net.create_arc(&format!("p{i}"), &transition).unwrap();
        net.create_arc(&transition, &format!("p{}", i + 1)).unwrap();

        if i % 5 == 0 {
            let side = format!("s{i}");
            net.create_element(ElementSpec::transition(side.as_str())).unwrap();
            net.create_arc(&format!("p{i}"), &side).unwrap();
            net.create_arc(&side, &format!("p{}", i + 1)).unwrap();
        }
    }
    net
}

fn bench_all_pairs_routes(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs_routes");
    for length in [10, 50, 100] {
        let net = chain_net(length);
        let diagnostics = Diagnostics::new();
        let graph = NetGraph::new(&net, &diagnostics).unwrap();
        let nodes: Vec<NodeId> = graph.places().chain(graph.transitions()).collect();

        group.bench_with_input(BenchmarkId::new("directed", length), &nodes, |b, nodes| {
            b.iter(|| black_box(all_pairs_routes(&graph, black_box(nodes), false).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("undirected", length), &nodes, |b, nodes| {
            b.iter(|| black_box(all_pairs_routes(&graph, black_box(nodes), true).unwrap()));
        });
    }
    group.finish();
}

fn bench_connectivity(c: &mut Criterion) {
    let mut group = c.benchmark_group("connectivity");
    for length in [10, 50, 100] {
        let net = chain_net(length);
        group.bench_with_input(BenchmarkId::from_parameter(length), &net, |b, net| {
            b.iter(|| {
                let analysis = StructuralAnalysis::new(black_box(net)).unwrap();
                black_box(analysis.num_not_strongly_connected_nodes())
            });
        });
    }
    group.finish();
}

fn bench_free_choice(c: &mut Criterion) {
    let net = chain_net(100);
    c.bench_function("free_choice_chain_100", |b| {
        b.iter(|| {
            let analysis = StructuralAnalysis::new(black_box(&net)).unwrap();
            black_box(analysis.num_free_choice_violations())
        });
    });
}

criterion_group!(
    benches,
    bench_all_pairs_routes,
    bench_connectivity,
    bench_free_choice
);
criterion_main!(benches);
