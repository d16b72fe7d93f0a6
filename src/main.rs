use anyhow::{Context, Result};
use clap::Parser;
use glnorm::cli::{Cli, OutputFormat};
use glnorm::config::ConfigStore;
use glnorm::engine::Engine;
use glnorm::output::{self, JsonOutput};
use glnorm::registry_dump::RegistryDump;
use std::fs;
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn load_config(args: &Cli) -> Result<ConfigStore> {
    match &args.config {
        Some(path) => ConfigStore::from_toml(path),
        None => ConfigStore::default_gl().context("Built-in configuration is invalid"),
    }
}

fn write_output(args: &Cli, rendered: &str) -> Result<()> {
    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write output: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("Failed to write output to stdout")
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Validate jobs range (must be >= 1)
    if args.jobs < 1 {
        anyhow::bail!("Invalid value for --jobs: {} (must be >= 1)", args.jobs);
    }

    init_tracing(args.debug);

    let config = load_config(&args)?;

    if args.check_config {
        eprintln!(
            "Configuration OK: {} vendor tags, {} suffix rules, {} reserved names, {} extra groups",
            config.vendors().len(),
            config.suffixes().len(),
            config.reserved().len(),
            config.extra_enum_groups().len()
        );
        return Ok(());
    }

    let registry_path = args
        .registry
        .as_ref()
        .context("A registry dump is required")?;
    let dump = RegistryDump::from_file(registry_path)?;

    let resolution = Engine::new(&config).run_with_jobs(&dump.symbols, args.jobs);

    let resolution = match resolution.into_result() {
        Ok(resolution) => resolution,
        Err(unresolved) => {
            for err in &unresolved.errors {
                eprintln!("error: {}", err);
            }
            return Err(unresolved.into());
        }
    };

    let json = JsonOutput::new(&resolution).to_json()?;
    let rendered = match args.format {
        OutputFormat::Json => format!("{}\n", json),
        OutputFormat::Text => output::render_text(&resolution),
    };
    write_output(&args, &rendered)?;

    if args.fingerprint {
        eprintln!("sha256:{}", output::fingerprint(&json));
    }

    Ok(())
}
