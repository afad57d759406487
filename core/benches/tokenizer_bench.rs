use criterion::{criterion_group, criterion_main, Criterion};
use initiative_core::tokenizer::tokenize;

fn bench_tokenize(c: &mut Criterion) {
    let text = "Eidgenössische Volksinitiative «Für verantwortungsvolle Unternehmen – \
                zum Schutz von Mensch und Umwelt». The initiative was voted on in \
                November 2020 and was rejected at the ballot despite a popular majority. "
        .repeat(50);
    c.bench_function("tokenize_corpus_page", |b| b.iter(|| tokenize(&text)));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
