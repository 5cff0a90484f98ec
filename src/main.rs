use anyhow::{bail, Context};
use codonsearch::config::ConfigManager;
use codonsearch::engines::generation::{ConsoleProgressCallback, EvolutionEngine, ProgressCallback};
use codonsearch::engines::translation::CodonTable;
use codonsearch::types::{GenerationResult, SearchStatus};
use std::path::PathBuf;
use std::sync::Arc;

const USAGE: &str = "usage:
  codonsearch <AA_SEQUENCE> [--config PATH] [--json] [--every N]
  codonsearch translate <DNA>";

/// One JSON document per generation on stdout
struct JsonProgressCallback;

impl ProgressCallback for JsonProgressCallback {
    fn on_generation_complete(&mut self, result: &GenerationResult) {
        match serde_json::to_string(result) {
            Ok(line) => println!("{}", line),
            Err(e) => log::error!("Failed to serialize generation {}: {}", result.generation_number, e),
        }
    }
}

struct Args {
    target: String,
    config_path: Option<PathBuf>,
    json: bool,
    every: usize,
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut target = None;
    let mut config_path = None;
    let mut json = false;
    let mut every = 1;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                config_path = Some(PathBuf::from(path));
            }
            "--json" => json = true,
            "--every" => {
                let n = iter.next().context("--every needs a number")?;
                every = n.parse().with_context(|| format!("invalid --every value {:?}", n))?;
            }
            other if other.starts_with("--") => bail!("unknown option {}\n{}", other, USAGE),
            other => {
                if target.replace(other.to_string()).is_some() {
                    bail!("more than one target sequence given\n{}", USAGE);
                }
            }
        }
    }

    Ok(Args {
        target: target.context(USAGE)?,
        config_path,
        json,
        every,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("translate") {
        let dna = args.get(1).context(USAGE)?;
        println!("{}", codonsearch::translate(dna)?);
        return Ok(());
    }

    let args = parse_args(&args)?;

    let manager = ConfigManager::new();
    manager
        .load_layered(args.config_path.as_deref())
        .context("failed to load configuration")?;
    let config = manager.get().search;

    let mut engine = EvolutionEngine::new(config, Arc::new(CodonTable::standard()))?;
    let outcome = if args.json {
        engine.run(&args.target, JsonProgressCallback)?
    } else {
        engine.run(&args.target, ConsoleProgressCallback::new(args.every))?
    };

    if !args.json {
        if let Some(result) = &outcome.final_result {
            println!();
            println!("Target:   {}", args.target.trim().to_ascii_uppercase());
            println!("Best AA:  {}", result.best_candidate.aa);
            println!("Best DNA: {}", result.best_candidate.dna);
            println!("Accuracy: {:.2}%", result.accuracy * 100.0);
        }
    }

    if outcome.status != SearchStatus::Converged {
        log::warn!("Search ended without an exact match ({:?})", outcome.status);
    }
    Ok(())
}
