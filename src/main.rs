use clap::Parser;
use linktags::application::analyze::{analyze, stats, UsernameOutput};
use linktags::application::audit::{audit, remove_duplicate_tags};
use linktags::application::enrich::enrich;
use linktags::application::export_csv::export_csv;
use linktags::application::fix_tags::fix_tags;
use linktags::application::layout::{clean, sort_links};
use linktags::application::verify::{fix_findings, verify};
use linktags::application::youtube_map::update_youtube_map;
use linktags::application::{init::init, ConfigService, Workspace, WorkspaceOptions, WriteOptions};
use linktags::cli::output;
use linktags::cli::{Cli, Commands, WriteArgs};
use linktags::error::LinkTagsError;
use linktags::infrastructure::config::CONFIG_KEYS;
use linktags::infrastructure::prompt::confirm;
use linktags::infrastructure::FileSystemRepository;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("linktags={}", log_level)));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn write_options(args: WriteArgs, workspace: &Workspace) -> WriteOptions {
    WriteOptions {
        dry_run: args.dry_run,
        backup: args.backup || workspace.config.backup,
    }
}

fn run(cli: Cli) -> Result<(), LinkTagsError> {
    let options = WorkspaceOptions {
        file: cli.file,
        config: cli.config,
    };

    match cli.command {
        Commands::Init { path, content } => {
            let created = init(&path, content)?;
            println!("Created {}", created.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = match &options.config {
                Some(path) => ConfigService::new(path.clone()),
                None => ConfigService::for_repository(&FileSystemRepository::discover()?),
            };

            if list {
                let config = service.list()?;
                for key in CONFIG_KEYS {
                    println!("{} = {}", key, config.get(key)?);
                }
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: linktags config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS.join(", "));
                Ok(())
            }
        }
        command => run_pass(command, &Workspace::open(&options)?),
    }
}

fn run_pass(command: Commands, workspace: &Workspace) -> Result<(), LinkTagsError> {
    match command {
        Commands::Enrich { write } => {
            let report = enrich(workspace, write_options(write, workspace))?;
            print!("{}", output::format_enrich_report(&report));
        }
        Commands::Fix { write } => {
            let report = fix_tags(workspace, write_options(write, workspace))?;
            print!("{}", output::format_fix_report(&report));
        }
        Commands::Audit {
            fix,
            yes,
            top,
            write,
        } => {
            let report = audit(workspace)?;
            print!("{}", output::format_audit_report(&report, top));

            if fix && !report.duplicate_tags.is_empty() {
                let question = format!(
                    "Remove duplicate tags from {} links?",
                    report.duplicate_tags.len()
                );
                if yes || confirm(&question)? {
                    let fixed = remove_duplicate_tags(workspace, write_options(write, workspace))?;
                    print!("{}", output::format_dedupe_report(&fixed));
                } else {
                    println!("No changes made");
                }
            }
        }
        Commands::Verify { fix, yes, write } => {
            let report = verify(workspace)?;
            print!("{}", output::format_verify_report(&report));

            if fix && !report.is_clean() {
                let question = format!("Apply {} missing tags?", report.finding_count());
                if yes || confirm(&question)? {
                    let fixed = fix_findings(workspace, write_options(write, workspace))?;
                    print!("{}", output::format_verify_fix_report(&fixed));
                } else {
                    println!("No changes made");
                }
            }
        }
        Commands::Sort { write } => {
            let report = sort_links(workspace, write_options(write, workspace))?;
            print!("{}", output::format_sort_report(&report));
        }
        Commands::Clean { write } => {
            let report = clean(workspace, write_options(write, workspace))?;
            print!("{}", output::format_clean_report(&report));
        }
        Commands::ExportCsv { output: path } => {
            let report = export_csv(workspace, path.as_deref())?;
            print!("{}", output::format_export_report(&report));
        }
        Commands::YoutubeMap { script, write } => {
            let report =
                update_youtube_map(workspace, script.as_deref(), write_options(write, workspace))?;
            print!("{}", output::format_youtube_map_report(&report));
        }
        Commands::Analyze { usernames } => {
            let target = match usernames {
                None => UsernameOutput::Skip,
                Some(None) => UsernameOutput::Configured,
                Some(Some(path)) => UsernameOutput::Path(path),
            };
            let outcome = analyze(workspace, target)?;
            print!("{}", output::format_analyze_report(&outcome));
        }
        Commands::Stats => {
            let coverage = stats(workspace)?;
            print!("{}", output::format_stats(&coverage));
        }
        Commands::Init { .. } | Commands::Config { .. } => {}
    }
    Ok(())
}
