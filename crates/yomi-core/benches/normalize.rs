use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use yomi_core::conjugate::synthesize_conjugations;
use yomi_core::morph::{ConjugationClass, PartOfSpeech, TaggerToken};
use yomi_core::normalize::normalize_for_speech;

static SENTENCES: &[(&str, &str)] = &[
    ("short", "バグを修正【しゅうせい】します。"),
    (
        "medium",
        "まずAPIの仕様【しよう】を確認【かくにん】してから、EC2インスタンスを起動【きどう】してください。",
    ),
    (
        "long",
        "実はTypeScriptの型定義【かたていぎ】が古【ふる】くてビルドが失敗【しっぱい】しました。\
         次にCI/CDのログを確認【かくにん】して、JSONの設定【せってい】を更新【こうしん】します。\
         ただし本番環境【ほんばんかんきょう】のDBには触【さわ】らないでください。",
    ),
];

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_for_speech");
    for &(label, text) in SENTENCES {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| normalize_for_speech(text));
        });
    }
    group.finish();
}

fn bench_conjugate(c: &mut Criterion) {
    let ichidan = TaggerToken::new("食べる", PartOfSpeech::Verb)
        .with_lemma("食べる")
        .with_conjugation(ConjugationClass::Ichidan);
    let godan = TaggerToken::new("書く", PartOfSpeech::Verb)
        .with_lemma("書く")
        .with_conjugation(ConjugationClass::Godan);

    let mut group = c.benchmark_group("synthesize_conjugations");
    group.bench_function("suru", |b| b.iter(|| synthesize_conjugations("開発する", None)));
    group.bench_function("ichidan", |b| {
        b.iter(|| synthesize_conjugations("食べる", Some(&ichidan)))
    });
    group.bench_function("godan", |b| b.iter(|| synthesize_conjugations("書く", Some(&godan))));
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_conjugate);
criterion_main!(benches);
