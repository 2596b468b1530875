use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use femira_parser::lexer::make_tokens;
use femira_parser::parser::Parser;

fn expr(source: &str) {
    let tokens = make_tokens(source).unwrap();
    let _ast = Parser::new(tokens).make_ast().unwrap();
}

fn long_expr(c: &mut Criterion) {
    let mut group = c.benchmark_group("long-expr");

    let mut source = "1".to_string();
    for _i in 0..1000 {
        source.push_str(" + 1");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("long-expr", |b| b.iter(|| expr(&source)));
}

fn stress_precedence(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress-precedence");

    let mut source = "1".to_string();
    for _i in 0..200 {
        source.push_str(" ?= 2 < 3 + 5 * 5");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("stress-precedence", |b| b.iter(|| expr(&source)));
}

fn nested_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested-calls");

    let mut source = String::new();
    for _i in 0..100 {
        source.push_str("f(1, ");
    }
    source.push('2');
    for _i in 0..100 {
        source.push(')');
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("nested-calls", |b| b.iter(|| expr(&source)));
}

criterion_group!(benches, long_expr, stress_precedence, nested_calls);
criterion_main!(benches);
