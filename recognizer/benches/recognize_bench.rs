use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recognizer::{recognize, recognize_iterative};
use token_stream::{tokenize, TokenStream};

fn chain_input(idents: usize) -> TokenStream<token_stream::Term> {
    let mut s = String::from("i");
    for _ in 1..idents {
        s.push_str("+i");
    }
    tokenize(&s)
}

fn bench_recognize(c: &mut Criterion) {
    let mut group = c.benchmark_group("recognize");

    for idents in [16usize, 256, 1024] {
        let stream = chain_input(idents);
        group.throughput(Throughput::Elements(stream.len() as u64));

        group.bench_with_input(BenchmarkId::new("recursive", idents), &stream, |b, s| {
            b.iter(|| recognize(s))
        });
        group.bench_with_input(BenchmarkId::new("iterative", idents), &stream, |b, s| {
            b.iter(|| recognize_iterative(s))
        });
    }

    group.finish();
}

fn bench_reject(c: &mut Criterion) {
    let mut group = c.benchmark_group("reject_trailing_plus");

    // Worst case for the backtracking driver: a long valid prefix with one
    // trailing `+`, forcing a failed chain at every depth.
    let mut s = String::from("i");
    for _ in 1..256 {
        s.push_str("+i");
    }
    s.push('+');
    let stream = tokenize(&s);

    group.bench_function("recursive", |b| b.iter(|| recognize(&stream)));
    group.bench_function("iterative", |b| b.iter(|| recognize_iterative(&stream)));
    group.finish();
}

criterion_group!(benches, bench_recognize, bench_reject);
criterion_main!(benches);
