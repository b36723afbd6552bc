//! Transform benchmarks.
//!
//! Benchmarks: extraction of one component file, and batch analyze +
//! transform over generated components.
//! Run with: cargo bench -p tokenbridge-analysis --bench transform_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tokenbridge_analysis::{ComponentAnalyzer, TokenCatalog, Transformer};
use tokenbridge_core::ComponentFile;

/// A component with every literal form the extractor recognizes.
fn component(i: usize) -> String {
    format!(
        r#"'use client';
import React from 'react';
import {{ cn }} from '@/lib/utils';

export function Card{i}({{ active }}: {{ active: boolean }}) {{
  return (
    <div
      className={{cn('rounded-[8px] bg-[#F8F8F8] shadow-md p-4', active && 'border-[#25C9D0]')}}
      style={{{{ boxShadow: '0px 6px 12px 0px rgba(0, 0, 0, 0.18)', borderRadius: 12 }}}}
    >
      <h2 className="text-base font-semibold leading-[22px]">Title {i}</h2>
      <p className="text-sm font-normal leading-5 text-[#555555]">Body</p>
      <span style={{{{ color: '#0BB4BA', fontSize: 12 }}}}>tag</span>
    </div>
  );
}}

const css = `
  .card-{i} {{ color: #25C9D0; border-radius: 0.25rem; box-shadow: 0px 2px 8px 0px rgba(0,0,0,0.2); }}
  .card-{i}:hover {{ background: hsl(var(--primary)); }}
`;
"#
    )
}

fn files(count: usize) -> Vec<ComponentFile> {
    (0..count)
        .map(|i| {
            let name = format!("Card{i}.tsx");
            ComponentFile::new(name.clone(), name, component(i))
        })
        .collect()
}

fn extract_single(c: &mut Criterion) {
    let transformer = Transformer::with_defaults(TokenCatalog::builtin());
    let content = component(0);
    c.bench_function("extract_single_component", |b| {
        b.iter(|| transformer.extractor().extract(&content))
    });
}

fn transform_single(c: &mut Criterion) {
    let transformer = Transformer::with_defaults(TokenCatalog::builtin());
    let content = component(0);
    c.bench_function("transform_single_component", |b| {
        b.iter(|| transformer.transform_content(&content))
    });
}

fn transform_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_batch");
    group.sample_size(10);

    let catalog = TokenCatalog::builtin();
    let analyzer = ComponentAnalyzer::with_defaults(catalog);
    let transformer = Transformer::with_defaults(catalog);

    for size in [10, 100, 1000] {
        let batch = files(size);
        group.bench_with_input(BenchmarkId::new("analyze_transform", size), &batch, |b, batch| {
            b.iter(|| {
                let analysis = analyzer.analyze(batch);
                transformer.transform(batch, &analysis)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, extract_single, transform_single, transform_batch);
criterion_main!(benches);
