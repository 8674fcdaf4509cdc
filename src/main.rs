use buildlog::application::{
    export_weeks, init, list_entries, load_entries, organize_weeks, render_html, resolve_year,
    show_entry, write_export, ConfigService,
};
use buildlog::cli::{
    format_entry, format_entry_list, format_week_overview, parse_date, Cli, Commands,
};
use buildlog::error::BuildlogError;
use buildlog::infrastructure::{FileSystemRepository, LogRepository};
use buildlog::init_logging;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), BuildlogError> {
    match cli.command {
        Commands::Init { path, year } => init(&path, year),
        Commands::List {
            year,
            from,
            to,
            limit,
        } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let year = resolve_year(&repo, &config, year)?;

            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;

            let entries = list_entries(&repo, &config, &year, from, to, limit)?;
            println!("{}", format_entry_list(&entries));
            Ok(())
        }
        Commands::Weeks { year, merge } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let year = resolve_year(&repo, &config, year)?;

            let entries = load_entries(&repo, &config, &year)?;
            let weeks = organize_weeks(entries, &config, merge)?;
            println!("{}", format_week_overview(&weeks));
            Ok(())
        }
        Commands::Show { folder, year, html } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let year = resolve_year(&repo, &config, year)?;

            let entry = show_entry(&repo, &config, &year, &folder)?;
            if html {
                println!("{}", render_html(&entry.full_text));
            } else {
                println!("{}", format_entry(&entry));
            }
            Ok(())
        }
        Commands::Export {
            year,
            merge,
            output,
            compact,
        } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let year = resolve_year(&repo, &config, year)?;

            let entries = load_entries(&repo, &config, &year)?;
            let weeks = organize_weeks(entries, &config, merge)?;
            let json = export_weeks(&weeks, compact)?;

            match output {
                Some(path) => {
                    write_export(&json, &path)?;
                    println!("Exported {} weeks to {}", weeks.len(), path.display());
                }
                None => println!("{}", json),
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("logs_dir = {}", config.logs_dir);
                println!("year = {}", config.year.unwrap_or_default());
                println!("week_title = {}", config.week_title);
                println!("public_prefix = {}", config.public_prefix);
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
                println!("Usage: buildlog config [--list | <key> [<value>]]");
                println!("Valid keys: logs_dir, year, week_title, public_prefix, created");
                Ok(())
            }
        }
    }
}
