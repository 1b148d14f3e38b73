use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use orderflow::{ContextData, FlowError, Pipeline, PipelineControl, SkipCondition};
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Clone, Debug, Default)]
struct BenchContext {
  counter: u64,
  skip_odd: bool,
}

fn build_pipeline(num_steps: usize, handlers_per_step: usize) -> Pipeline<BenchContext, FlowError> {
  // Pipeline::new borrows &str names; leaking is fine for a benchmark.
  let names: Vec<&'static str> = (0..num_steps)
    .map(|i| &*Box::leak(format!("step_{}", i).into_boxed_str()))
    .collect();
  let step_defs: Vec<(&str, bool, Option<SkipCondition<BenchContext>>)> = names
    .iter()
    .enumerate()
    .map(|(i, name)| {
      let skip: Option<SkipCondition<BenchContext>> = if i % 2 == 1 {
        Some(Arc::new(|ctx: ContextData<BenchContext>| ctx.read().skip_odd))
      } else {
        None
      };
      (*name, false, skip)
    })
    .collect();

  let mut pipeline = Pipeline::<BenchContext, FlowError>::new(&step_defs);
  for name in &names {
    for _ in 0..handlers_per_step {
      pipeline
        .on_root(name, |ctx: ContextData<BenchContext>| {
          Box::pin(async move {
            ctx.write().counter += 1;
            Ok::<_, FlowError>(PipelineControl::Continue)
          })
        })
        .expect("step exists");
    }
  }
  pipeline
}

fn bench_pipeline_run(c: &mut Criterion) {
  let mut group = c.benchmark_group("PipelineRun");
  let rt = Runtime::new().unwrap();

  for num_steps in [1usize, 5, 10] {
    for handlers_per_step in [1usize, 3] {
      let pipeline = build_pipeline(num_steps, handlers_per_step);
      group.throughput(Throughput::Elements((num_steps * handlers_per_step) as u64));
      group.bench_with_input(
        BenchmarkId::new(format!("steps_{}", num_steps), handlers_per_step),
        &pipeline,
        |b, p| {
          b.to_async(&rt).iter(|| async {
            p.run(ContextData::new(BenchContext::default())).await.unwrap();
          })
        },
      );
    }
  }
  group.finish();
}

fn bench_pipeline_with_skips(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let pipeline = build_pipeline(10, 1);
  c.bench_function("PipelineRun/skip_odd_steps_10", |b| {
    b.to_async(&rt).iter(|| async {
      let ctx = ContextData::new(BenchContext {
        skip_odd: true,
        ..Default::default()
      });
      pipeline.run(ctx).await.unwrap();
    })
  });
}

criterion_group!(benches, bench_pipeline_run, bench_pipeline_with_skips);
criterion_main!(benches);
