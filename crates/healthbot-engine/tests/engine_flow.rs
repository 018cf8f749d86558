use std::sync::Arc;
use std::thread;

use healthbot_core::config::{Config, EngineSettings};
use healthbot_core::knowledge::{EMPTY_INPUT_REPLY, GREETING_TOKENS, KnowledgeTables, THANKS_REPLY};
use healthbot_core::traits::{FixedChoice, Retriever};
use healthbot_core::types::{Category, MatchMode, MatchTier, ScoredMatch};
use healthbot_core::{Error, KnowledgeBase, Result};
use healthbot_engine::ResponseEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn engine() -> ResponseEngine { ResponseEngine::builtin().expect("engine") }

struct BrokenRetriever;

impl Retriever for BrokenRetriever {
    fn retrieve(&self, _normalized_query: &str) -> Result<Option<ScoredMatch>> { Err(Error::Vectorization("index corrupted".into())) }
    fn len(&self) -> usize { 0 }
}

#[test]
fn every_emergency_trigger_beats_symptoms_and_categories() {
    let substring = engine();
    let mut settings = EngineSettings::default();
    settings.matching.mode = MatchMode::WordBoundary;
    let bounded = ResponseEngine::from_settings(KnowledgeBase::builtin().expect("kb"), &settings).expect("engine");

    for emergency in substring.knowledge().emergencies() {
        let input = format!("my {} with fever and diet stress", emergency.trigger);
        let reply = bounded.reply_with(&input, &mut FixedChoice(0));
        assert_eq!(reply.tier, MatchTier::Emergency, "input {input:?}");
        assert_eq!(reply.text, emergency.alert, "input {input:?}");

        // Substring greetings run first: "breathing" contains "hi".
        let reply = substring.reply_with(&input, &mut FixedChoice(0));
        if GREETING_TOKENS.iter().any(|g| input.contains(g)) {
            assert_eq!(reply.tier, MatchTier::Greeting, "input {input:?}");
        } else {
            assert_eq!(reply.text, emergency.alert, "input {input:?}");
        }
    }
    let reply = substring.reply_with("I have chest pain and a headache", &mut FixedChoice(0));
    assert!(reply.text.contains("Chest pain can be serious"));
}

#[test]
fn empty_and_whitespace_prompt_for_a_question() {
    let e = engine();
    assert_eq!(e.respond(""), EMPTY_INPUT_REPLY);
    assert_eq!(e.respond("   \n\t "), EMPTY_INPUT_REPLY);
}

#[test]
fn first_listed_symptom_wins() {
    let e = engine();
    let headache = &e.knowledge().symptoms()[0];
    let reply = e.reply_with("I have a headache and fever", &mut FixedChoice(0));
    assert_eq!(reply.tier, MatchTier::Symptom);
    assert_eq!(reply.text, format!("**Headache**: {}", headache.advice));
}

#[test]
fn bare_category_names_are_not_in_the_vocabulary() {
    let e = engine();
    // "prevention" is a general_health keyword and appears in no document text.
    let reply = e.reply_with("prevention", &mut FixedChoice(0));
    assert_eq!(reply.tier, MatchTier::Category);
    assert_eq!(reply.text, e.knowledge().advice_in(Category::GeneralHealth)[0]);

    let reply = e.reply_with("general", &mut FixedChoice(0));
    assert_eq!(reply.tier, MatchTier::Generic);
    assert_eq!(reply.text, e.knowledge().fallbacks()[0]);
}

#[test]
fn greetings_come_from_the_template_list() {
    let e = engine();
    let greetings = e.knowledge().greetings().to_vec();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 { assert!(greetings.contains(&e.respond_with("hello", &mut rng))); }
    assert_eq!(e.respond_with("Hello", &mut FixedChoice(0)), greetings[0]);
}

#[test]
fn thanks_reply_is_fixed() {
    assert_eq!(engine().respond("Thanks a lot"), THANKS_REPLY);
}

#[test]
fn gibberish_gets_a_generic_fallback() {
    let e = engine();
    let reply = e.reply_with("xyz qwerty", &mut FixedChoice(0));
    assert_eq!(reply.tier, MatchTier::Generic);
    assert!(e.knowledge().fallbacks().contains(&reply.text));
}

#[test]
fn failing_retriever_falls_through_to_fallbacks() {
    let e = ResponseEngine::new(KnowledgeBase::builtin().expect("kb"), BrokenRetriever, MatchMode::Substring);
    let reply = e.reply_with("how do I improve my mood", &mut FixedChoice(0));
    assert_eq!(reply.tier, MatchTier::Category);
    assert_eq!(reply.text, e.knowledge().advice_in(Category::MentalHealth)[0]);

    let reply = e.reply_with("xyz qwerty", &mut FixedChoice(0));
    assert_eq!(reply.tier, MatchTier::Generic);
}

#[test]
fn wellness_word_reaches_general_health() {
    let e = ResponseEngine::new(KnowledgeBase::builtin().expect("kb"), BrokenRetriever, MatchMode::Substring);
    // "wellness" is also a general_health category keyword, so the category tier answers first.
    let reply = e.reply_with("wellness", &mut FixedChoice(0));
    assert_eq!(reply.text, e.knowledge().advice_in(Category::GeneralHealth)[0]);
}

#[test]
fn empty_tables_fail_construction() {
    let mut tables = KnowledgeTables::builtin();
    tables.emergencies.clear();
    let err = KnowledgeBase::new(tables).expect_err("no emergencies");
    assert!(err.is_construction());
}

#[test]
fn configured_word_boundary_mode_reaches_the_engine() -> anyhow::Result<()> {
    let settings = Config::from_toml_str("[engine.matching]\nmode = \"word_boundary\"\n").engine_settings()?;
    let e = ResponseEngine::from_settings(KnowledgeBase::builtin()?, &settings)?;
    assert_eq!(e.mode(), MatchMode::WordBoundary);
    // Substring mode would read the "hi" inside "this" as a greeting.
    assert_eq!(e.reply_with("this cough", &mut FixedChoice(0)).tier, MatchTier::Symptom);
    Ok(())
}

#[test]
fn shared_engine_answers_from_many_threads() {
    let e = Arc::new(ResponseEngine::from_settings(KnowledgeBase::builtin().expect("kb"), &EngineSettings::default()).expect("engine"));
    let expected = e.respond_with("stroke symptoms", &mut FixedChoice(0));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let e = Arc::clone(&e);
            thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(i);
                (0..25).map(|_| e.respond_with("stroke symptoms", &mut rng)).collect::<Vec<_>>()
            })
        })
        .collect();
    for h in handles {
        for reply in h.join().expect("thread") { assert_eq!(reply, expected); }
    }
}
