use crate::analyst::{OpenAiClient, Summarizer};
use crate::cli::Cli;
use crate::config::Config;
use crate::logging::{init_logging, LogConfig};
use crate::persist::Persister;
use crate::pipeline::Pipeline;
use crate::scraper::{FetchMode, Fetcher, FetcherConfig, ListingExtractor, SelectorMap};
use anyhow::Context;
use clap::Parser;
use std::io::{BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

mod analyst;
mod cli;
mod config;
mod domain;
mod errors;
mod logging;
mod persist;
mod pipeline;
mod report;
mod scraper;
mod spreadsheets;

#[cfg(test)]
mod tests;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 1️⃣ Environment, then logging
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Configuration error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_path = match init_logging(LogConfig {
        file: cli.log_file.clone().unwrap_or_else(|| config.log_file.clone()),
        emit_stderr: !cli.quiet,
        ..LogConfig::default()
    }) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("❌ Logging setup failed: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Script started");

    // 2️⃣ Run once
    let code = match run(&cli, &config) {
        Ok(folder) => {
            println!("All output files have been saved in the '{folder}' folder.");
            println!("Analysis completed.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            println!("Run failed: {e:#}");
            println!("No output produced.");
            ExitCode::FAILURE
        }
    };

    tracing::info!("Script completed");
    println!("Logs have been saved to {}", log_path.display());
    code
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<String> {
    let url = match &cli.url {
        Some(u) => u.clone(),
        None => prompt_for_url()?,
    };
    tracing::info!("Target URL: {url}");

    let selectors = match &cli.selectors {
        Some(path) => SelectorMap::load(path)?,
        None => SelectorMap::default(),
    };
    let extractor = ListingExtractor::new(&selectors)?;

    let fetcher = Fetcher::new(FetcherConfig {
        mode: if cli.render {
            FetchMode::Render
        } else {
            FetchMode::Plain
        },
        render_timeout: cli
            .render_timeout
            .map(Duration::from_secs)
            .unwrap_or(config.render_timeout),
        render_api_url: config.render_api_url.clone(),
        render_api_key: config.render_api_key.clone(),
        ..FetcherConfig::default()
    })
    .context("could not build HTTP client")?;

    let llm = OpenAiClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        cli.model.clone().unwrap_or_else(|| config.openai_model.clone()),
    )
    .context("could not build completion client")?;
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; the summarize stage will fail");
    }

    let pipeline = Pipeline::new(
        fetcher,
        extractor,
        Persister::new(cli.xlsx),
        Summarizer::new(llm),
        cli.output_dir.clone(),
    );

    let summary = pipeline.run(&url)?;
    tracing::info!(
        listings = summary.listings,
        files = summary.files.len(),
        "outputs written to {}",
        summary.folder.display()
    );

    Ok(summary.folder.display().to_string())
}

fn prompt_for_url() -> anyhow::Result<String> {
    print!("Please enter a URL to analyze (e.g., a Boliga property listing page): ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read URL from stdin")?;

    let url = line.trim().to_string();
    anyhow::ensure!(!url.is_empty(), "no URL entered");
    Ok(url)
}
