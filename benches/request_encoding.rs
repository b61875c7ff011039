//! Benchmarks for request encoding
//!
//! This benchmark measures:
//! - ChatCreateParams serialization across conversation lengths
//! - Path normalization and query building

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use synqly::transport::{normalize_path, with_query};
use synqly::{ChatCreateParams, ChatResponse, Message};

const SAMPLE_RESPONSE_JSON: &str = r#"{
  "id": "chat_01",
  "provider": "openai",
  "modelType": "gpt-4",
  "content": "Rust's ownership model guarantees memory safety without a garbage collector.",
  "usage": {
    "prompt_tokens": 42,
    "completion_tokens": 17,
    "total_tokens": 59,
    "prompt_tokens_details": {"cached_tokens": 0, "audio_tokens": 0},
    "completion_tokens_details": {
      "reasoning_tokens": 0,
      "audio_tokens": 0,
      "accepted_prediction_tokens": 0,
      "rejected_prediction_tokens": 0
    }
  },
  "finish_reason": "stop",
  "created_at": "2024-05-01T12:00:00Z",
  "cached": false,
  "cache_hit": false
}"#;

fn conversation(turns: usize) -> Vec<Message> {
    let mut messages = vec![Message::system("You are a concise assistant.")];
    for i in 0..turns {
        messages.push(Message::user(format!("Question number {}?", i)));
        messages.push(Message::assistant(format!("Answer number {}.", i)));
    }
    messages
}

fn bench_params_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("params_serialization");

    for turns in [1usize, 10, 100] {
        let params = ChatCreateParams::new("gpt-4", conversation(turns))
            .provider("openai")
            .temperature(0.7)
            .max_tokens(256);
        group.throughput(Throughput::Elements((turns * 2 + 1) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(turns), &params, |b, params| {
            b.iter(|| serde_json::to_vec(black_box(params)).unwrap())
        });
    }

    group.finish();
}

fn bench_response_decoding(c: &mut Criterion) {
    c.bench_function("chat_response_decode", |b| {
        b.iter(|| serde_json::from_str::<ChatResponse>(black_box(SAMPLE_RESPONSE_JSON)).unwrap())
    });
}

fn bench_path_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_building");

    group.bench_function("normalize_short", |b| {
        b.iter(|| normalize_path(black_box("chat/create-chat")))
    });
    group.bench_function("normalize_rooted", |b| {
        b.iter(|| normalize_path(black_box("/api/v1/chat/create-chat")))
    });
    group.bench_function("usage_query", |b| {
        b.iter(|| {
            normalize_path(&with_query(
                "/analytics/usage",
                &[
                    ("startDate", Some(black_box("2024-01-01"))),
                    ("endDate", Some(black_box("2024-01-31"))),
                    ("provider", Some(black_box("openai"))),
                ],
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_params_serialization,
    bench_response_decoding,
    bench_path_building
);
criterion_main!(benches);
