use clap::Parser;
use usaf1951::utils::{logger, render, validation::Validate};
use usaf1951::{CliConfig, Target};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting usaf1951 target builder");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let mut target = Target::new(
        config.height,
        config.width,
        config.thickness,
        config.material.clone(),
    );

    // Half-open ranges: group_end and element_end are exclusive.
    for group in config.group_start..config.group_end {
        for element in config.element_start..config.element_end {
            target.add_element(group, element);
        }
    }
    tracing::info!("Added {} elements to the design", target.len());

    let report = target.report();
    if report.critical_dimension_um.is_none() {
        tracing::warn!("The design has no elements; the report will carry no critical dimension");
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::render_report(&report));
    }

    Ok(())
}
