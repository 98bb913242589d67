use chrono::Local;
use clap::Parser;
use protrade::application::{
    export_entries, init, AnalyzeService, ConfigService, EntryStore, Feedback,
};
use protrade::cli::{format_entry_detail, format_entry_list, format_stats, Cli, Commands};
use protrade::domain::{compute_stats, EntryDraft};
use protrade::error::{ProtradeError, Result};
use protrade::infrastructure::{
    FileStorage, FileSystemRepository, GeminiCoach, JournalRepository,
};
use std::io::{self, BufRead, Write};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_store() -> Result<(FileSystemRepository, EntryStore<FileStorage>)> {
    let repo = FileSystemRepository::discover()?;
    let store = EntryStore::open(repo.storage())?;
    Ok((repo, store))
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn run(cli: Cli) -> Result<()> {
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Add { entry } => {
            let (_, mut store) = open_store()?;
            let record = EntryDraft::from(entry).validate(today)?;
            let created = store.create(record)?;
            println!("Created entry {} ({})", created.id, created.record.symbol);
            Ok(())
        }
        Commands::Edit { id, entry } => {
            let (_, mut store) = open_store()?;
            let existing = store.resolve(&id)?.clone();
            let record = EntryDraft::from_record(&existing.record)
                .merge(EntryDraft::from(entry))
                .validate(today)?;
            let updated = store.update(&existing.id, record)?;
            println!("Updated entry {}", updated.id);
            Ok(())
        }
        Commands::Delete { id, yes } => {
            let (_, mut store) = open_store()?;
            let existing = store.resolve(&id)?.clone();
            let prompt = format!(
                "Delete {} {} ({})?",
                existing.record.symbol,
                existing.record.date,
                existing.short_id()
            );
            if !yes && !confirm(&prompt)? {
                println!("Cancelled");
                return Ok(());
            }
            if store.delete(&existing.id)?.is_some() {
                println!("Deleted entry {}", existing.id);
            }
            Ok(())
        }
        Commands::List { limit } => {
            let (_, store) = open_store()?;
            let entries = store.entries();
            let shown = &entries[..limit.unwrap_or(entries.len()).min(entries.len())];
            println!("{}", format_entry_list(shown).trim_end());
            Ok(())
        }
        Commands::Show { id } => {
            let (_, store) = open_store()?;
            print!("{}", format_entry_detail(store.resolve(&id)?));
            Ok(())
        }
        Commands::Stats => {
            let (_, store) = open_store()?;
            let stats = compute_stats(store.entries());
            println!("{}", format_stats(stats.as_ref()).trim_end());
            Ok(())
        }
        Commands::Export { output } => {
            let (repo, store) = open_store()?;
            let dir = output.unwrap_or_else(|| repo.root().to_path_buf());
            let path = export_entries(store.entries(), &dir, today)?;
            println!("Exported {} entries to {}", store.len(), path.display());
            Ok(())
        }
        Commands::Analyze { id } => {
            let (repo, mut store) = open_store()?;
            let entry = store.resolve(&id)?.clone();

            if !AnalyzeService::<GeminiCoach>::is_ready(&entry.record) {
                return Err(ProtradeError::InvalidEntry(
                    "symbol and logic must be filled in before requesting AI feedback"
                        .to_string(),
                ));
            }

            // An unreadable config means no usable credentials
            let setup = match repo.load_config() {
                Ok(config) => GeminiCoach::from_config(&config),
                Err(e) => {
                    log::error!("Cannot read configuration: {}", e);
                    Ok(None)
                }
            };

            println!("Analyzing {} ...", entry.record.symbol);
            let feedback = AnalyzeService::from_setup(setup).feedback(&entry.record);
            println!("\n{}", feedback.text());

            // Fallback messages are shown but never saved on the entry
            if let Feedback::Coach(text) = feedback {
                store.set_feedback(&entry.id, text)?;
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("model = {}", config.model);
                println!("api_key_env = {}", config.api_key_env);
                println!("api_base = {}", config.api_base);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: protrade config [--list | <key> [<value>]]");
                println!("Valid keys: model, api_key_env, api_base, created");
                Ok(())
            }
        }
    }
}
