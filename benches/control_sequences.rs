use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use termout::{Output, ProgressBar, Responder, ResultStream};
use tokio::runtime::Runtime;

fn bench_clear_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("clear_lines");
    let output = Output::new(Vec::with_capacity(64 * 1024));

    for &lines in &[0u16, 10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, &lines| {
            b.iter(|| {
                output.clear_lines(black_box(lines)).unwrap();
                output.sink().clear();
            })
        });
    }

    group.finish();
}

fn bench_progress_bar(c: &mut Criterion) {
    let mut group = c.benchmark_group("progress_bar");

    for &width in &[40usize, 120, 400] {
        group.bench_with_input(BenchmarkId::new("full_run", width), &width, |b, &width| {
            b.iter(|| {
                let output = Output::new(Vec::new());
                let mut bar = ProgressBar::new(output, 1_000).unwrap().with_width(width);
                while bar.increment(black_box(7)).unwrap() {}
                bar.current()
            })
        });
    }

    group.finish();
}

fn bench_stream_drain(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("stream_drain");
    group.sample_size(20);

    for &count in &[100usize, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.to_async(&rt).iter(|| async move {
                let stdout = Output::new(Vec::new());
                let responder = Responder::with_outputs(stdout.clone(), Output::new(Vec::new()));
                let (tx, lines) = ResultStream::channel();

                tokio::spawn(async move {
                    for i in 0..count {
                        if tx.send(format!("line {i}")).is_err() {
                            break;
                        }
                    }
                });

                responder.respond(Some(lines.into()), None).await.unwrap();
                let written = stdout.sink().len();
                written
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_clear_lines,
    bench_progress_bar,
    bench_stream_drain
);
criterion_main!(benches);
