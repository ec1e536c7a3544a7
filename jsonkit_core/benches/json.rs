use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use jsonkit_core::{
	byte_iterator::ByteIterator,
	json::{Formatting, JsonValue, ReaderConfig, parse_json_reader_with_config, to_json_string},
};
use std::{hint::black_box, io::Cursor};

const DATA_SIZE: usize = 16 * 1024 * 1024;
const RECORDS: usize = 20_000;

fn document() -> String {
	let records = (0..RECORDS)
		.map(|i| format!(r#"{{"id":{i},"name":"record \"{i}\"","score":{}.25,"tags":["a","b"],"ok":true}}"#, i % 97))
		.collect::<Vec<_>>();
	format!("[{}]", records.join(","))
}

fn bench_skip_whitespace(c: &mut Criterion) {
	c.bench_function("ByteIterator skip_whitespace", |b| {
		let data = [vec![b' '; DATA_SIZE], vec![b'A'; 64]].concat();
		b.iter_batched(
			|| ByteIterator::from_reader(Cursor::new(data.clone()), false),
			|mut byte_iter| byte_iter.skip_whitespace(),
			BatchSize::NumIterations(1),
		);
	});
}

fn bench_parse(c: &mut Criterion) {
	let text = document();
	for debug in [false, true] {
		let config = ReaderConfig {
			debug,
			..ReaderConfig::default()
		};
		c.bench_function(&format!("parse records (debug: {debug})"), |b| {
			b.iter(|| parse_json_reader_with_config(Cursor::new(black_box(text.as_bytes())), &config).unwrap());
		});
	}
}

fn bench_write(c: &mut Criterion) {
	let value = JsonValue::parse_str(&document()).unwrap();
	for formatting in [Formatting::None, Formatting::Spaces] {
		c.bench_function(&format!("write records ({formatting:?})"), |b| {
			b.iter(|| to_json_string(black_box(&value), formatting).unwrap());
		});
	}
}

criterion_group!(
	name = benches;
	config = Criterion::default().significance_level(0.1).sample_size(10);
	targets = bench_skip_whitespace, bench_parse, bench_write
);
criterion_main!(benches);
