//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `rank_tracker` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

mod cli;

use std::io::{self, Read, Write};
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;

use rank_tracker::app::table::{render_history, render_results, render_serp_links};
use rank_tracker::export::{
    export_history, open_output, write_results_csv, write_serp_csv, ExportOptions,
};
use rank_tracker::initialization::init_logger_with;
use rank_tracker::location::{
    compose_india_location, country_code, default_location, INDIA_STATES_CITIES,
};
use rank_tracker::{
    open_store, parse_keywords, query_history, reset_history, run_check, CheckConfig,
    HistoryFilter,
};

use cli::{CheckCommand, Cli, Command, HistoryCommand, ResetCommand};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from the current directory, then from next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let result = match cli.command {
        Command::Check(cmd) => check(cmd).await,
        Command::History(cmd) => history(cmd).await,
        Command::Reset(cmd) => reset(cmd).await,
        Command::Locations => locations(),
    };

    if let Err(e) = result {
        eprintln!("rank_tracker error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn check(cmd: CheckCommand) -> Result<()> {
    let mut keywords: Vec<String> = cmd
        .keywords
        .iter()
        .flat_map(|k| parse_keywords(k))
        .collect();
    if let Some(path) = cmd.keywords_file.as_ref() {
        let text = if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read keywords from stdin")?;
            buf
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read keywords file: {}", path.display()))?
        };
        keywords.extend(parse_keywords(&text));
    }

    let country = country_code(&cmd.country);
    let location = match (cmd.location, cmd.state, cmd.city) {
        (Some(location), None, None) => Some(location.trim().to_string()),
        (Some(_), _, _) => bail!("--location cannot be combined with --state/--city"),
        (None, None, None) if country != "in" => default_location(&country).map(str::to_string),
        (None, state, city) => {
            if country != "in" {
                bail!("--state/--city are only available for India (--country in)");
            }
            Some(compose_india_location(state.as_deref(), city.as_deref())?)
        }
    };

    let config = CheckConfig {
        brand_url: cmd.brand_url,
        keywords,
        country,
        language: cmd.language.to_lowercase(),
        location: location.filter(|l| !l.is_empty()),
        db_path: cmd.db_path,
        api_key: cmd.api_key.unwrap_or_default(),
        endpoint: cmd.endpoint,
        max_results: cmd.max_results,
        page_size: cmd.page_size,
        timeout_seconds: cmd.timeout_seconds,
        page_delay: std::time::Duration::from_millis(cmd.delay_ms),
        keyword_delay: std::time::Duration::from_millis(cmd.delay_ms),
        ..Default::default()
    };

    let report = run_check(config).await?;

    let mut stdout = io::stdout().lock();
    if cmd.show_serp {
        for result in report.results.iter().filter(|r| !r.scanned.is_empty()) {
            render_serp_links(&mut stdout, &result.keyword, &result.scanned)?;
            writeln!(stdout)?;
        }
    }
    render_results(&mut stdout, &report.results)?;
    writeln!(
        stdout,
        "✅ Checked {} keyword{} ({} found, {} not found, {} errors) in {:.1}s",
        report.total(),
        if report.total() == 1 { "" } else { "s" },
        report.found,
        report.not_found,
        report.errors,
        report.elapsed_seconds
    )?;
    writeln!(stdout, "History saved in {}", report.db_path.display())?;
    drop(stdout);

    if let Some(output) = cmd.output.as_deref() {
        write_results_csv(open_output(Some(output))?, &report.results)?;
        println!("Results written to {}", output.display());
    }
    if let Some(output) = cmd.serp_output.as_deref() {
        let count = write_serp_csv(open_output(Some(output))?, &report.results)?;
        println!("{} SERP links written to {}", count, output.display());
    }
    Ok(())
}

async fn history(cmd: HistoryCommand) -> Result<()> {
    let filter = HistoryFilter {
        keyword: cmd.keyword,
        brand_url: cmd.brand_url,
        limit: cmd.limit,
    };

    if let Some(format) = cmd.format {
        let opts = ExportOptions {
            db_path: cmd.db_path,
            output: cmd.output,
            format,
            filter,
        };
        let count = export_history(&opts).await?;
        if let Some(output) = opts.output.as_ref() {
            println!("{} records written to {}", count, output.display());
        }
        return Ok(());
    }

    let pool = open_store(&cmd.db_path)
        .await
        .context("Failed to open history database")?;
    let records = query_history(&pool, &filter).await?;
    pool.close().await;

    if records.is_empty() {
        println!("No history found yet. Run a rank check to start building data.");
        return Ok(());
    }
    render_history(&mut io::stdout().lock(), &records)?;
    Ok(())
}

async fn reset(cmd: ResetCommand) -> Result<()> {
    if !cmd.yes {
        bail!("refusing to delete the rank history without --yes");
    }
    let pool = open_store(&cmd.db_path)
        .await
        .context("Failed to open history database")?;
    let deleted = reset_history(&pool).await?;
    pool.close().await;
    println!("Deleted {} records from {}", deleted, cmd.db_path.display());
    Ok(())
}

fn locations() -> Result<()> {
    let mut stdout = io::stdout().lock();
    for (state, cities) in INDIA_STATES_CITIES {
        writeln!(stdout, "{}: {}", state, cities.join(", "))?;
    }
    Ok(())
}
