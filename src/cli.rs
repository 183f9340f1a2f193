use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use pqc_application::{error::AppError, prelude as flows};
use pqc_core::{
    authorization::Actor,
    entities::*,
    gateways::{geocode::GeoCodingGateway, notify::NotificationGateway},
    geofence::Geofence,
    spam::{self, AuthorActivity},
    usecases,
};
use pqc_db_memory::Connections;
use std::path::PathBuf;

use crate::{config::Config, gateways};

#[derive(Parser)]
#[command(name = "paranaque-connect", version, about = "Civic issue reporting for Parañaque City")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, short, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a position is within the service area
    CheckLocation {
        /// Position in decimal degrees, e.g. "14.4793,121.0198"
        #[arg(value_name = "LAT,LNG", allow_hyphen_values = true)]
        pos: MapPoint,
    },
    /// Check whether a report description looks like spam
    CheckSpam { text: String },
    /// Resolve an address with the configured geocoder
    Geocode { address: String },
    /// Run a report through its whole lifecycle in a volatile store
    Simulate {
        /// Address of the simulated report
        #[arg(long)]
        address: String,
        #[arg(long, default_value = "admin@example.com")]
        admin_email: String,
        #[arg(long, default_value = "captain@example.com")]
        captain_email: String,
        #[arg(long, default_value = "resident@example.com")]
        resident_email: String,
    },
}

pub fn run() -> Result<()> {
    let Args { config, command } = Args::parse();
    let cfg = Config::try_load_from_file_or_default(config)?;
    match command {
        Command::CheckLocation { pos } => {
            println!("{}", location_verdict(&cfg.geofence, pos));
        }
        Command::CheckSpam { text } => {
            let gibberish = spam::is_gibberish(&text);
            let potential_spam = spam::is_potential_spam(&text, AuthorActivity::default());
            println!("gibberish: {gibberish}");
            println!("potential spam: {potential_spam}");
        }
        Command::Geocode { address } => {
            let geocoder = gateways::geocoding_gateway(&cfg.geocoding);
            let (lat, lng) = geocoder
                .resolve_address_lat_lng(&address)
                .ok_or_else(|| anyhow!("Unable to resolve '{address}'"))?;
            let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
                .ok_or_else(|| anyhow!("The geocoder returned an invalid position"))?;
            println!("{pos}");
            println!("{}", location_verdict(&cfg.geofence, pos));
        }
        Command::Simulate {
            address,
            admin_email,
            captain_email,
            resident_email,
        } => {
            let geocoder = gateways::geocoding_gateway(&cfg.geocoding);
            let notify = gateways::notification_gateway(&cfg.email, &cfg.notifications);
            let simulation = Simulation {
                connections: Connections::init()?,
                geocoder: &*geocoder,
                geofence: &cfg.geofence,
                notify: &notify,
            };
            let result = simulation.run(&address, &admin_email, &captain_email, &resident_email);
            notify.flush();
            result?;
        }
    }
    Ok(())
}

fn location_verdict(geofence: &Geofence, pos: MapPoint) -> String {
    if geofence.bbox.contains_point(pos) {
        "within Parañaque City".to_string()
    } else if let Some(zone) = geofence.matching_zone(pos) {
        format!("within the allowed zone {}", zone.name)
    } else {
        "outside of the service area".to_string()
    }
}

struct Simulation<'a> {
    connections: Connections,
    geocoder: &'a dyn GeoCodingGateway,
    geofence: &'a Geofence,
    notify: &'a dyn NotificationGateway,
}

impl Simulation<'_> {
    fn run(
        &self,
        address: &str,
        admin_email: &str,
        captain_email: &str,
        resident_email: &str,
    ) -> Result<(), AppError> {
        let Self {
            connections,
            geocoder,
            geofence,
            notify,
        } = self;

        let admin = Actor::from(&flows::create_admin(connections, admin_email)?);
        let barangay = flows::create_barangay(
            connections,
            *geocoder,
            &admin,
            usecases::NewBarangay {
                name: "San Dionisio".into(),
                address: Some("San Dionisio, Parañaque City, Metro Manila".into()),
                ..Default::default()
            },
        )?;
        let category = flows::create_category(
            connections,
            &admin,
            usecases::NewCategory {
                name: "Others".into(),
                description: Some("Other issues not covered by the above categories".into()),
            },
        )?;
        let captain = flows::provision_captain(
            connections,
            *notify,
            &admin,
            usecases::NewCaptain {
                email: captain_email.into(),
                barangay_id: barangay.id.to_string(),
            },
        )?;
        let captain = Actor::from(&captain);
        let resident = flows::register_resident(
            connections,
            usecases::NewResident {
                email: resident_email.into(),
                barangay_id: barangay.id.to_string(),
            },
        )?;
        let resident = Actor::from(&resident);

        let report = flows::submit_report(
            connections,
            *geocoder,
            geofence,
            *notify,
            &resident,
            usecases::NewReport {
                title: "Simulated report".into(),
                description: "This report was created by a simulation run".into(),
                address: address.into(),
                barangay_id: barangay.id.to_string(),
                category_id: category.id.to_string(),
                ..Default::default()
            },
        )?;
        print_step("submitted", &report);
        let id = report.id.as_str();

        let report =
            flows::review_report(connections, *notify, &admin, id, flows::ReviewDecision::Approve)?;
        print_step("approved", &report);
        let report = flows::change_report_status(connections, *notify, &captain, id, "resolved")?;
        print_step("resolved", &report);
        let report = flows::request_reopen(connections, *notify, &resident, id)?;
        print_step("reopen requested", &report);
        let report = flows::approve_reopen(connections, *notify, &admin, id)?;
        print_step("reopened", &report);
        Ok(())
    }
}

fn print_step(step: &str, report: &Report) {
    let pos = report
        .pos
        .map(|pos| pos.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("{step:>16}: {} [{}] at {pos}", report.title, report.status.label());
}
