use std::io::{self, Write};

use healthbot_cli::{choice_rng, init_tracing, load_engine};
use healthbot_core::types::MatchTier;
use healthbot_engine::ResponseEngine;
use rand::rngs::StdRng;

/// Interactive chat with the health assistant
fn main() -> anyhow::Result<()> {
    init_tracing();
    println!("🩺 Health Assistant Chat");
    println!("========================");

    let (engine, settings) = load_engine()?;
    println!("✅ Engine ready ({} corpus documents)", engine.retriever().corpus().len());
    println!();

    let mut rng = choice_rng(&settings);
    chat_loop(&engine, &mut rng)
}

fn chat_loop(engine: &ResponseEngine, rng: &mut StdRng) -> anyhow::Result<()> {
    show_help();
    let mut tiers: Vec<MatchTier> = Vec::new();
    loop {
        print!("you> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 { break; }
        let input = input.trim();
        if input.is_empty() { continue; }

        match input {
            "/help" | "/h" => show_help(),
            "/stats" | "/s" => show_stats(engine, &tiers),
            "/quit" | "/q" | "quit" | "exit" => { println!("👋 Take care!"); break; }
            _ => {
                let reply = engine.reply_with(input, rng);
                tiers.push(reply.tier);
                println!("bot> {}", reply.text);
            }
        }
        println!();
    }
    Ok(())
}

fn show_help() {
    println!("🎯 Commands:");
    println!("  /help     - Show this help message");
    println!("  /stats    - Show engine and session statistics");
    println!("  /quit     - Exit the chat");
    println!("  <text>    - Ask a health question");
    println!();
}

fn show_stats(engine: &ResponseEngine, tiers: &[MatchTier]) {
    let search = engine.retriever();
    println!("📊 Engine:");
    println!("  Corpus documents: {}", search.corpus().len());
    println!("  Vocabulary terms: {}", search.index().vocabulary_len());
    println!("  Similarity threshold: {}", search.threshold());
    println!("  Match mode: {:?}", engine.mode());
    println!("📊 Session: {} replies", tiers.len());
    let mut counts: Vec<(MatchTier, usize)> = Vec::new();
    for t in tiers {
        match counts.iter_mut().find(|(k, _)| k == t) { Some((_, n)) => *n += 1, None => counts.push((*t, 1)) }
    }
    for (tier, n) in counts { println!("  {:?}: {}", tier, n); }
}
