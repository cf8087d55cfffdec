use super::*;

fn verb(lemma: &str, class: ConjugationClass) -> TaggerToken {
    TaggerToken::new(lemma, PartOfSpeech::Verb)
        .with_lemma(lemma)
        .with_conjugation(class)
}

/// Returns the same token for any input.
struct FixedTagger(Vec<TaggerToken>);

impl Tagger for FixedTagger {
    fn tag(&self, _text: &str) -> Vec<TaggerToken> {
        self.0.clone()
    }
}

#[test]
fn test_suru_surface() {
    let info = classify("開発する", None);
    assert_eq!(info, WordInfo::new(Paradigm::SuruVerb, "開発する", "開発"));
}

#[test]
fn test_suru_inflected_surface() {
    assert_eq!(
        classify("開発します", None),
        WordInfo::new(Paradigm::SuruVerb, "開発する", "開発")
    );
    assert_eq!(classify("確認しない", None).stem, "確認");
    assert_eq!(classify("実行できる", None).base_form, "実行する");
}

#[test]
fn test_suru_inflection_needs_stem() {
    // できる alone is not a light-verb compound.
    assert_eq!(classify("できる", None).paradigm, Paradigm::Other);
}

#[test]
fn test_surface_beats_tagger() {
    let token = TaggerToken::new("開発する", PartOfSpeech::Noun).with_subtype("サ変可能");
    assert_eq!(
        classify("開発する", Some(&token)),
        WordInfo::new(Paradigm::SuruVerb, "開発する", "開発")
    );
}

#[test]
fn test_ichidan() {
    let token = verb("食べる", ConjugationClass::Ichidan);
    assert_eq!(
        classify("食べる", Some(&token)),
        WordInfo::new(Paradigm::IchidanVerb, "食べる", "食べ")
    );
}

#[test]
fn test_godan() {
    let token = verb("書く", ConjugationClass::Godan);
    assert_eq!(
        classify("書いた", Some(&token)),
        WordInfo::new(Paradigm::GodanVerb, "書く", "書")
    );
}

#[test]
fn test_godan_without_class() {
    let token = TaggerToken::new("走る", PartOfSpeech::Verb).with_lemma("走る");
    assert_eq!(classify("走る", Some(&token)).paradigm, Paradigm::GodanVerb);
}

#[test]
fn test_kuru_and_suru_lemmas() {
    let kuru = verb("来る", ConjugationClass::Kuru);
    assert_eq!(
        classify("来た", Some(&kuru)),
        WordInfo::new(Paradigm::KuruVerb, "来る", "")
    );
    let kana_kuru = TaggerToken::new("くる", PartOfSpeech::Verb).with_lemma("くる");
    assert_eq!(classify("くる", Some(&kana_kuru)).paradigm, Paradigm::KuruVerb);

    let suru = verb("為る", ConjugationClass::Suru);
    assert_eq!(
        classify("し", Some(&suru)),
        WordInfo::new(Paradigm::SuruVerb, "する", "")
    );
}

#[test]
fn test_foreign_gloss_lemma_falls_back_to_surface() {
    let token = verb("バズる-buzz", ConjugationClass::Godan);
    assert_eq!(
        classify("バズる", Some(&token)),
        WordInfo::new(Paradigm::GodanVerb, "バズる", "バズ")
    );
    let token = TaggerToken::new("サーバー", PartOfSpeech::Noun).with_lemma("サーバー-server");
    assert_eq!(
        classify("サーバー", Some(&token)),
        WordInfo::new(Paradigm::Noun, "サーバー", "")
    );
}

#[test]
fn test_missing_lemma_uses_surface() {
    let token = TaggerToken::new("読む", PartOfSpeech::Verb);
    assert_eq!(classify("読む", Some(&token)).base_form, "読む");
}

#[test]
fn test_i_adjective() {
    let token = TaggerToken::new("高い", PartOfSpeech::Adjective).with_lemma("高い");
    assert_eq!(
        classify("高い", Some(&token)),
        WordInfo::new(Paradigm::IAdjective, "高い", "高")
    );
}

#[test]
fn test_adjective_without_terminal_falls_through() {
    let token = TaggerToken::new("同じ", PartOfSpeech::Adjective).with_lemma("同じ");
    assert_eq!(classify("同じ", Some(&token)).paradigm, Paradigm::Other);
}

#[test]
fn test_na_adjective() {
    let unidic = TaggerToken::new("簡単", PartOfSpeech::AdjectivalNoun).with_lemma("簡単");
    assert_eq!(
        classify("簡単", Some(&unidic)),
        WordInfo::new(Paradigm::NaAdjective, "簡単", "簡単")
    );

    let ipadic = TaggerToken::from_features(
        "簡単",
        "名詞,形容動詞語幹,*,*,*,*,簡単,カンタン,カンタン",
        FeatureLayout::Ipadic,
    );
    assert_eq!(classify("簡単", Some(&ipadic)).paradigm, Paradigm::NaAdjective);
}

#[test]
fn test_light_verb_noun() {
    let token = TaggerToken::from_features(
        "開発",
        "名詞,普通名詞,サ変可能,*,*,*,カイハツ,開発,開発,カイハツ",
        FeatureLayout::UniDic,
    );
    assert_eq!(
        classify("開発", Some(&token)),
        WordInfo::new(Paradigm::SuruVerb, "開発する", "開発")
    );

    let ipadic = TaggerToken::from_features(
        "勉強",
        "名詞,サ変接続,*,*,*,*,勉強,ベンキョウ,ベンキョー",
        FeatureLayout::Ipadic,
    );
    assert_eq!(classify("勉強", Some(&ipadic)).stem, "勉強");
}

#[test]
fn test_plain_noun() {
    let token = TaggerToken::new("机", PartOfSpeech::Noun).with_lemma("机");
    assert_eq!(
        classify("机", Some(&token)),
        WordInfo::new(Paradigm::Noun, "机", "")
    );
}

#[test]
fn test_other() {
    let token = TaggerToken::new("とても", PartOfSpeech::Adverb).with_lemma("とても");
    assert_eq!(
        classify("とても", Some(&token)),
        WordInfo::new(Paradigm::Other, "とても", "")
    );
    assert_eq!(classify("食べる", None).paradigm, Paradigm::Other);
}

#[test]
fn test_classify_with_tagger() {
    let tagger = FixedTagger(vec![verb("食べる", ConjugationClass::Ichidan)]);
    assert_eq!(
        classify_with_tagger("食べる", &tagger).paradigm,
        Paradigm::IchidanVerb
    );

    let empty = FixedTagger(Vec::new());
    assert_eq!(classify_with_tagger("食べる", &empty).paradigm, Paradigm::Other);
    assert_eq!(
        classify_with_tagger("開発する", &empty).paradigm,
        Paradigm::SuruVerb
    );
}

#[test]
fn test_paradigm_serializes_snake_case() {
    let json = serde_json::to_string(&Paradigm::IAdjective).unwrap();
    assert_eq!(json, "\"i_adjective\"");
}
