use criterion::{criterion_group, criterion_main, Criterion};
use wordplay_solver::{Anchor, Dictionary, MoveGen, Rack, Square};

const WORDS: &[&str] = &[
    "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel",
];
const WORDFILE: &str = "wordlists/words.txt";

fn bench_from_words() {
    let _dictionary = Dictionary::from_words(WORDS);
}

fn bench_from_file() {
    let _dictionary = Dictionary::from_file(WORDFILE).unwrap();
}

fn bench_prefix_cache(c: &mut Criterion, name: &str, dictionary: &Dictionary, letters: &str) {
    let rack: Rack = letters.parse().unwrap();
    c.bench_function(name, |b| b.iter(|| MoveGen::new(dictionary, rack)));
}

fn bench_row_plays(c: &mut Criterion, name: &str, dictionary: &Dictionary, letters: &str) {
    let rack: Rack = letters.parse().unwrap();
    let movegen = MoveGen::new(dictionary, rack);
    let mut row = vec![Square::Empty; 17];
    row[0] = Square::Border;
    row[16] = Square::Border;
    row[8] = Square::Anchor(Anchor::Unrestricted);
    c.bench_function(name, |b| b.iter(|| movegen.row_plays(&row)));
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("dictionary.from_words", |b| b.iter(bench_from_words));
    c.bench_function("dictionary.from_file", |b| b.iter(bench_from_file));

    let dictionary = Dictionary::from_file(WORDFILE).unwrap();
    c.bench_function("dictionary.is_word", |b| {
        b.iter(|| dictionary.is_word("quiz") && !dictionary.is_word("quix"))
    });
    bench_prefix_cache(c, "prefix_cache.1", &dictionary, "abel");
    bench_prefix_cache(c, "prefix_cache.2", &dictionary, "rstlne*");
    bench_row_plays(c, "movegen.row_plays.1", &dictionary, "abel");
    bench_row_plays(c, "movegen.row_plays.2", &dictionary, "rstlne*");
    bench_row_plays(c, "movegen.row_plays.3", &dictionary, "rstln**");
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
