use autoedit_core::{AutoCloseStrategy, AutoEditStrategy, Document, EditCommand};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A single long line of identifier-ish text sprinkled with random brackets
/// and quotes, the worst case for the line-local tally.
fn noisy_line(char_count: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let alphabet: Vec<char> = "abcdefghij ({[)}]\"'".chars().collect();

    let mut out = String::with_capacity(char_count);
    for _ in 0..char_count {
        out.push(alphabet[rng.gen_range(0..alphabet.len())]);
    }
    out
}

fn bench_closer_on_long_line(c: &mut Criterion) {
    let mut text = noisy_line(10_000);
    text.push(')');
    let offset = text.chars().count() - 1;
    let doc = Document::from_text(&text);
    let strategy = AutoCloseStrategy::default();

    c.bench_function("auto_close/closer_10k_line", |b| {
        b.iter(|| {
            let mut command = EditCommand::insertion(black_box(offset), ")");
            strategy.customize_command(&doc, &mut command);
            black_box(command);
        })
    });
}

fn bench_quote_at_eof(c: &mut Criterion) {
    let text = noisy_line(10_000);
    let offset = text.chars().count();
    let doc = Document::from_text(&text);
    let strategy = AutoCloseStrategy::default();

    c.bench_function("auto_close/quote_eof_10k_line", |b| {
        b.iter(|| {
            let mut command = EditCommand::insertion(black_box(offset), "\"");
            strategy.customize_command(&doc, &mut command);
            black_box(command);
        })
    });
}

fn bench_opener_large_document(c: &mut Criterion) {
    // Many short lines: the scan must stay bounded by the current line, not
    // the document size.
    let mut text = String::new();
    for i in 0..50_000 {
        text.push_str(&format!("line {i} with some text\n"));
    }
    let doc = Document::from_text(&text);
    let offset = doc.get_text().chars().count() / 2;
    let strategy = AutoCloseStrategy::default();

    c.bench_function("auto_close/opener_50k_lines", |b| {
        b.iter(|| {
            let mut command = EditCommand::insertion(black_box(offset), "(");
            strategy.customize_command(&doc, &mut command);
            black_box(command);
        })
    });
}

criterion_group!(
    benches,
    bench_closer_on_long_line,
    bench_quote_at_eof,
    bench_opener_large_document
);
criterion_main!(benches);
