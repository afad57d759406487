use initiative_core::chatbot::GREETING_REPLIES;
use initiative_core::fuzzy::{match_initiative, sequence_ratio};
use initiative_core::{rank, Chatbot, CorpusError, InitiativeRecord, TermWeightSpace};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn record(title: &str, status: &str, result: &str) -> InitiativeRecord {
    InitiativeRecord {
        title: title.into(),
        status: Some(status.into()),
        result: Some(result.into()),
        ..Default::default()
    }
}

fn sample_corpus() -> Vec<InitiativeRecord> {
    vec![
        record("For responsible business", "Voted", "Rejected"),
        record("For a ban on financing war material", "Voted", "Rejected"),
        record("For clean drinking water and healthy food", "Collecting", ""),
        record("Against food speculation", "Voted", "Rejected"),
        record("For a basic income", "Voted", "Rejected"),
        record("Energy instead of value-added tax", "Withdrawn", ""),
    ]
}

#[test]
fn index_builds_for_any_corpus_with_a_title() {
    let corpus = vec![InitiativeRecord {
        title: "For responsible business".into(),
        ..Default::default()
    }];
    assert!(TermWeightSpace::build(&corpus).is_ok());
}

#[test]
fn index_rejects_a_corpus_with_no_text_at_all() {
    let corpus = vec![InitiativeRecord::default(); 3];
    assert!(matches!(
        TermWeightSpace::build(&corpus),
        Err(CorpusError::Empty)
    ));
}

#[test]
fn ranked_results_obey_the_contract() {
    let corpus = sample_corpus();
    let space = TermWeightSpace::build(&corpus).unwrap();
    let hits = rank(&space, "food water business", 5, 0.1);
    assert!(hits.len() <= 5);
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for hit in &hits {
        assert!(hit.score > 0.1);
    }
    // Same space, same query: identical output.
    assert_eq!(hits, rank(&space, "food water business", 5, 0.1));
}

#[test]
fn exact_title_is_a_perfect_fuzzy_match() {
    let corpus = sample_corpus();
    let space = TermWeightSpace::build(&corpus).unwrap();
    let rec = match_initiative(&space, &corpus, "against food speculation").unwrap();
    assert_eq!(rec.title, "Against food speculation");
    assert_eq!(
        sequence_ratio("against food speculation", &rec.title.to_lowercase()),
        1.0
    );
}

#[test]
fn alien_phrase_matches_no_title() {
    let corpus = sample_corpus();
    let space = TermWeightSpace::build(&corpus).unwrap();
    assert!(match_initiative(&space, &corpus, "xqzzjvw").is_none());
}

#[test]
fn greeting_bypasses_ranked_search() {
    let mut bot = Chatbot::with_rng(sample_corpus(), StdRng::seed_from_u64(42)).unwrap();
    // "hello" plus words that would otherwise hit the index hard.
    let reply = bot.get_response("hello, food water business");
    assert!(GREETING_REPLIES.contains(&reply.as_str()));
}

#[test]
fn statistics_reply_carries_the_real_total() {
    let corpus = sample_corpus();
    let total = corpus.len();
    let mut bot = Chatbot::with_rng(corpus, StdRng::seed_from_u64(42)).unwrap();
    let reply = bot.get_response("how many initiatives are there?");
    assert!(reply.contains(&format!("**Total initiatives**: {total}")));
}

#[test]
fn end_to_end_entity_question() {
    let corpus = vec![
        record("For responsible business", "Voted", "Rejected"),
        record("For a ban on financing war material", "Voted", "Rejected"),
    ];
    let mut bot = Chatbot::with_rng(corpus, StdRng::seed_from_u64(42)).unwrap();
    let reply = bot.get_response("tell me about responsible business");
    assert!(reply.contains("For responsible business"));
    assert!(reply.contains("Voted"));
    assert!(reply.contains("Rejected"));
}
