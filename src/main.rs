use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

// Use library instead of local modules
use royalty_ledger::{report, Ledger, Seed};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("import") if args.len() > 2 => run_import(Path::new(&args[2]))?,
        Some("on-date") if args.len() > 3 => run_on_date(Path::new(&args[2]), &args[3])?,
        None => run_sample()?,
        Some(_) => {
            eprintln!("Usage:");
            eprintln!("   royalty-ledger                         sample ledger");
            eprintln!("   royalty-ledger import <seed.json>");
            eprintln!("   royalty-ledger on-date <seed.json> <date>");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<Ledger> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let seed = Seed::from_json(&json)
        .with_context(|| format!("parsing seed file {}", path.display()))?;

    let ledger = Ledger::new();
    seed.apply(&ledger)
        .with_context(|| format!("applying seed file {}", path.display()))?;
    Ok(ledger)
}

fn run_import(path: &Path) -> Result<()> {
    let ledger = load(path)?;
    print!("{}", report::render(&ledger));
    Ok(())
}

fn run_on_date(path: &Path, date: &str) -> Result<()> {
    let ledger = load(path)?;
    print!("{}", report::render_on_date(&ledger, date));
    Ok(())
}

fn run_sample() -> Result<()> {
    let ledger = Ledger::new();
    let ann = ledger.add_creator("Ann")?;
    let book = ledger.add_work("Book1")?;
    ann.establish_relation(&ledger, &book, "2023-05-01", 1500)?;

    print!("{}", report::render(&ledger));
    Ok(())
}
