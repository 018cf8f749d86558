use std::env;
use std::io::Read;

use healthbot_cli::{choice_rng, init_tracing, load_engine};
use healthbot_engine::handle_json;

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() { eprintln!("Usage: {} <ask|json|corpus> [args...]", prog); std::process::exit(1); }
    let cmd = args.remove(0);
    (cmd, args)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let (cmd, args) = parse_args();
    let (engine, settings) = load_engine()?;
    match cmd.as_str() {
        "ask" => {
            let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
            let text = args.iter().filter(|a| !a.starts_with('-')).cloned().collect::<Vec<_>>().join(" ");
            let mut rng = choice_rng(&settings);
            let reply = engine.reply_with(&text, &mut rng);
            if verbose { println!("[{:?}]", reply.tier); }
            println!("{}", reply.text);
        }
        "json" => {
            let body = match args.first() {
                Some(b) => b.clone(),
                None => { let mut b = String::new(); std::io::stdin().read_to_string(&mut b)?; b }
            };
            println!("{}", serde_json::to_string(&handle_json(&engine, &body))?);
        }
        "corpus" => {
            let search = engine.retriever();
            println!("📚 {} documents, {} vocabulary terms", search.corpus().len(), search.index().vocabulary_len());
            for (i, doc) in search.corpus().documents().iter().enumerate() { println!("{:>3}  {}", i, doc.searchable_text); }
        }
        _ => { eprintln!("Unknown command: {}", cmd); std::process::exit(1); }
    }
    Ok(())
}
