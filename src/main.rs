use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use smartexpiry::config::{load_report_config, ReportConfig};
use smartexpiry::io::{read_inventory_file, write_report_csv, REPORT_COLUMNS, REPORT_FILE_NAME};
use smartexpiry::report::render_report;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("SMARTEXPIRY_LOG", "error,smartexpiry=info"))
        .init();

    let matches = Command::new("smartexpiry")
        .version(clap::crate_version!())
        .about("SmartExpiry - inventory expiry analytics and food-waste reporting")
        .arg(
            Arg::new("input")
                .help(
                    "Path to the inventory CSV file. Defaults to the source from the \
                     configuration file.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON report configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .help("Store location to filter on, or 'All'")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .help("Category to filter on, or 'All'")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("min_days")
                .long("min-days")
                .help("Lower bound on days to expiry (inclusive)")
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("max_days")
                .long("max-days")
                .help("Upper bound on days to expiry (inclusive)")
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("export")
                .short('e')
                .long("export")
                .help("Path to write the filtered CSV report (defaults to SmartExpiry_Report.csv)")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("report")
                .short('o')
                .long("report")
                .help("Path to write the HTML report (defaults to smartexpiry_report.html)")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("no_report")
                .long("no-report")
                .help("Disable HTML report generation")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("[SmartExpiry] Using config: {:?}", config_path);
        load_report_config(config_path)?
    } else {
        ReportConfig::default()
    };

    if let Some(input) = matches.get_one::<PathBuf>("input") {
        config.source = input.display().to_string();
    }
    if let Some(store) = matches.get_one::<String>("store") {
        config.store = store.clone();
    }
    if let Some(category) = matches.get_one::<String>("category") {
        config.category = category.clone();
    }
    if let Some(min_days) = matches.get_one::<i64>("min_days") {
        config.expiry_min_days = *min_days;
    }
    if let Some(max_days) = matches.get_one::<i64>("max_days") {
        config.expiry_max_days = *max_days;
    }

    let filter = config.filter()?;

    let table = read_inventory_file(&config.source)
        .with_context(|| format!("Failed to load inventory from '{}'", config.source))?;
    log::info!(
        "[SmartExpiry] Loaded {} rows from {}",
        table.len(),
        config.source
    );

    let filtered = table.filter(&filter);
    eprintln!(
        "[SmartExpiry] {} of {} rows match the current filters",
        filtered.len(),
        table.len()
    );

    let export_path = matches
        .get_one::<PathBuf>("export")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(REPORT_FILE_NAME));
    write_report_csv(&filtered, &REPORT_COLUMNS, &export_path)
        .with_context(|| format!("Failed to write {}", export_path.display()))?;
    eprintln!("[SmartExpiry] Wrote filtered report to {:?}", export_path);

    if !matches.get_flag("no_report") {
        let report_path = matches
            .get_one::<PathBuf>("report")
            .cloned()
            .unwrap_or_else(|| PathBuf::from("smartexpiry_report.html"));
        let page = render_report(&filtered, config.top_n).map_err(anyhow::Error::msg)?;
        std::fs::write(&report_path, page)
            .with_context(|| format!("Failed to write {}", report_path.display()))?;
        eprintln!("[SmartExpiry] Wrote HTML report to {:?}", report_path);
    }

    Ok(())
}
