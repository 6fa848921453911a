//! `zone-sync` entry point
//!
//! Prints the Route53 managed block of the local zone file, then the same
//! zone as Route53 serves it, then the lines that differ. With `--all-zones`
//! (or domain arguments) it prints every hosted zone instead.

mod cli;
mod report;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use zone_sync_core::{
    CoreError, DomainFilter, Settings, ZoneDiff, ZoneService, parse_zone, read_managed_block,
};
use zone_sync_provider::create_provider;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.log_level());

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e),
    }
}

fn setup_tracing(default_level: &str) {
    // stdout 只输出 zone 文本，日志走 stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time(),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = Settings::load(&cli.config_dir)?;
    let provider = create_provider(settings.credential_source()).map_err(CoreError::from)?;
    let service = ZoneService::new(provider);
    let record_types = settings.record_type_filter();

    let mut out = io::stdout().lock();

    if cli.all_zones_mode() {
        let domains = DomainFilter::new(&cli.domains);
        tracing::info!("Rendering all hosted zones ({} domain filters)", cli.domains.len());
        let block = service.render_all_zones(&domains, &record_types).await?;
        report::write_block(&mut out, &block)?;
        return Ok(out.flush()?);
    }

    let zone_id = settings.hosted_zone_id.as_deref().unwrap_or_default();
    let origin = service.zone_origin(zone_id).await?;

    let zone_file = cli.config_dir.join(settings.zone_file());
    let local_block = read_managed_block(&zone_file)?;
    report::write_block(&mut out, &local_block)?;
    let mut local = parse_zone(&local_block, &origin)?;
    // 本地块不经过 render，类型过滤在这里补上
    local.retain_types(&record_types);

    report::write_separator(&mut out)?;

    let remote_block = service.render_zone(zone_id, &record_types).await?;
    report::write_block(&mut out, &remote_block)?;
    let mut remote = parse_zone(&remote_block, &origin)?;
    remote.retain_types(&record_types);

    let diff = ZoneDiff::between(&local, &remote);
    if diff.is_empty() {
        tracing::info!("{origin}: managed block matches Route53");
    } else {
        tracing::info!(
            "{origin}: {} local-only, {} remote-only",
            diff.local_only.len(),
            diff.remote_only.len()
        );
    }
    report::write_diff(&mut out, &diff)?;

    Ok(out.flush()?)
}

fn report_failure(err: &anyhow::Error) -> ExitCode {
    if !err.downcast_ref::<CoreError>().is_some_and(CoreError::is_expected) {
        tracing::debug!("Unexpected failure: {err:?}");
    }

    match report::failure_output(err) {
        (report::Stream::Stdout, message) => println!("{message}"),
        (report::Stream::Stderr, message) => eprintln!("{message}"),
    }
    ExitCode::FAILURE
}
