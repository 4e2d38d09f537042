use clap::Parser;
use relatos::utils::{logger, validation::Validate};
use relatos::{CliConfig, LocalStorage, ReportDraft, ReportService, ReportStore};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting relatos CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = ReportStore::load(LocalStorage::new(), config.data_file.clone())?;
    let mut service = ReportService::new(store);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("\n--- MENU ---");
        println!("1. Register report");
        println!("2. List reports");
        println!("3. Query reports within {:.0} km", config.radius_km);
        println!("4. Sort reports by name");
        println!("0. Exit");

        let Some(choice) = prompt(&mut input, "Option: ")? else {
            break;
        };

        match choice.trim() {
            "1" => register_report(&mut input, &mut service)?,
            "2" => list_reports(&service),
            "3" => query_by_radius(&mut input, &service, config.radius_km)?,
            "4" => sort_by_name(&mut service),
            "0" => {
                println!("Bye.");
                break;
            }
            _ => println!("Invalid option."),
        }
    }

    Ok(())
}

/// Prints `text` and reads one line. `None` means end of input.
fn prompt(input: &mut impl BufRead, text: &str) -> anyhow::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Reads a number, re-prompting until it parses and falls inside
/// `min..=max`. `None` means end of input.
fn prompt_f64(
    input: &mut impl BufRead,
    text: &str,
    min: f64,
    max: f64,
) -> anyhow::Result<Option<f64>> {
    loop {
        let Some(line) = prompt(input, text)? else {
            return Ok(None);
        };
        match line.trim().parse::<f64>() {
            Ok(value) if value >= min && value <= max => return Ok(Some(value)),
            Ok(_) => println!("Value must be between {:.2} and {:.2}.", min, max),
            Err(_) => println!("Invalid input. Enter a valid number."),
        }
    }
}

fn register_report(
    input: &mut impl BufRead,
    service: &mut ReportService<LocalStorage>,
) -> anyhow::Result<()> {
    let Some(name) = prompt(input, "Name (max 49 chars): ")? else {
        return Ok(());
    };
    let Some(email) = prompt(input, "Email (must contain '@' and end with '.com'): ")? else {
        return Ok(());
    };
    let Some(disaster_type) = prompt(input, "Disaster type (max 29 chars): ")? else {
        return Ok(());
    };
    let Some(description) = prompt(input, "Description (max 99 chars): ")? else {
        return Ok(());
    };
    let Some(latitude) = prompt_f64(input, "Latitude (-90 to 90): ", -90.0, 90.0)? else {
        return Ok(());
    };
    let Some(longitude) = prompt_f64(input, "Longitude (-180 to 180): ", -180.0, 180.0)? else {
        return Ok(());
    };

    let draft = ReportDraft {
        name,
        email,
        disaster_type,
        description,
        latitude,
        longitude,
    };

    match service.create_report(draft) {
        Ok(()) => println!("✅ Report registered."),
        Err(e) => println!("❌ {}", e),
    }
    Ok(())
}

fn list_reports(service: &ReportService<LocalStorage>) {
    let reports = service.list_all();
    if reports.is_empty() {
        println!("No reports registered.");
        return;
    }
    for (i, r) in reports.iter().enumerate() {
        println!(
            "\n[{}] {} - {}\nType: {}\nDescription: {}\nLatitude: {:.6} | Longitude: {:.6}",
            i + 1,
            r.name,
            r.email,
            r.disaster_type,
            r.description,
            r.latitude,
            r.longitude
        );
    }
}

fn query_by_radius(
    input: &mut impl BufRead,
    service: &ReportService<LocalStorage>,
    radius_km: f64,
) -> anyhow::Result<()> {
    if service.is_empty() {
        println!("No reports registered.");
        return Ok(());
    }

    let Some(latitude) = prompt_f64(input, "Your latitude (-90 to 90): ", -90.0, 90.0)? else {
        return Ok(());
    };
    let Some(longitude) = prompt_f64(input, "Your longitude (-180 to 180): ", -180.0, 180.0)? else {
        return Ok(());
    };

    match service.query_by_radius(latitude, longitude, radius_km) {
        Ok(matches) if matches.is_empty() => {
            println!("No reports found within the given radius.");
        }
        Ok(matches) => {
            println!("\nReports within {:.0} km:", radius_km);
            for (r, distance) in matches {
                println!(
                    "\n{} - {}\nType: {}\nDescription: {}\nDistance: {:.2} km",
                    r.name, r.email, r.disaster_type, r.description, distance
                );
            }
        }
        Err(e) => println!("❌ {}", e),
    }
    Ok(())
}

fn sort_by_name(service: &mut ReportService<LocalStorage>) {
    if service.len() < 2 {
        println!("Not enough reports to sort.");
        return;
    }
    match service.sort_by_name() {
        Ok(()) => println!("✅ Reports sorted by name."),
        Err(e) => println!("❌ Failed to save sorted reports: {}", e),
    }
}
