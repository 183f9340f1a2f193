use anyhow::{anyhow, Result};
use pqc_core::{
    entities::{Distance, EmailAddress, MapBbox, MapPoint},
    gateways::notify::NotificationType,
    geofence::{AllowZone, Geofence},
};
use pqc_gateways::email::resend;
use std::{
    collections::HashSet,
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "paranaque-connect.toml";

const ENV_NAME_RESEND_API_KEY: &str = "RESEND_API_KEY";
const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

pub struct Config {
    pub geofence: Geofence,
    pub email: Email,
    pub geocoding: Geocoding,
    pub notifications: Notifications,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        apply_env_overrides(&mut raw_config);
        Self::try_from(raw_config)
    }
}

/// API keys are secrets and usually live in the environment.
fn apply_env_overrides(cfg: &mut raw::Config) {
    let gateway = cfg.gateway.get_or_insert_with(raw::Gateway::default);
    if let Ok(api_key) = env::var(ENV_NAME_RESEND_API_KEY) {
        if let Some(resend) = gateway.resend.as_mut() {
            resend.api_key = Some(api_key);
        }
    }
    if let Ok(api_key) = env::var(ENV_NAME_OPENCAGE_API_KEY) {
        gateway.opencage.get_or_insert_with(Default::default).api_key = Some(api_key);
    }
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

pub enum GeocodingGateway {
    OpenCage {
        api_key: Option<String>,
        region: Option<String>,
    },
}

pub struct Email {
    pub gateway: Option<EmailGateway>,
}

#[derive(Clone)]
pub enum EmailGateway {
    Resend {
        api_key: String,
        api_base_url: String,
        sender_address: EmailAddress,
    },
    /// For local testing purposes
    EmailToJsonFile {
        /// File system directory for writing emails into JSON files.
        dir: PathBuf,
    },
}

pub struct Notifications {
    pub notify_on: HashSet<NotificationType>,
}

impl TryFrom<raw::Geofence> for Geofence {
    type Error = anyhow::Error;
    fn try_from(from: raw::Geofence) -> Result<Self> {
        let raw::Geofence {
            north,
            south,
            east,
            west,
            zones,
        } = from;
        let bbox = MapBbox::from_edges(north, south, east, west);
        if !bbox.is_valid() || north <= south {
            return Err(anyhow!("Invalid geofence boundaries"));
        }
        let zones = zones
            .into_iter()
            .map(|zone| {
                let raw::AllowZone {
                    name,
                    lat,
                    lng,
                    radius_meters,
                } = zone;
                let center = MapPoint::try_from_lat_lng_deg(lat, lng)
                    .ok_or_else(|| anyhow!("Invalid center of zone '{name}'"))?;
                let radius = Distance::from_meters(radius_meters);
                if !radius.is_valid() {
                    return Err(anyhow!("Invalid radius of zone '{name}'"));
                }
                Ok(AllowZone {
                    name,
                    center,
                    radius,
                })
            })
            .collect::<Result<_>>()?;
        Ok(Self { bbox, zones })
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geofence,
            email,
            geocoding,
            gateway,
            notifications,
        } = from;

        let geofence = Geofence::try_from(geofence.unwrap_or_default())?;

        let email_gateway = match email.and_then(|m| m.gateway) {
            Some(gw_name) => {
                let gateway = gateway.clone().unwrap_or_default();

                let gw = match gw_name {
                    raw::EmailGateway::Resend => {
                        let raw::Resend {
                            api_key,
                            sender_address,
                            api_base_url,
                        } = gateway.resend.ok_or_else(|| {
                            anyhow!("Missing 'resend' gateway configuration")
                        })?;
                        let api_key = api_key.ok_or_else(|| {
                            anyhow!("Missing Resend API key (set {ENV_NAME_RESEND_API_KEY})")
                        })?;
                        let sender_address = sender_address.parse()?;
                        let api_base_url = api_base_url
                            .unwrap_or_else(|| resend::DEFAULT_API_BASE_URL.to_string());
                        log::info!("Use Resend gateway");
                        EmailGateway::Resend {
                            api_key,
                            api_base_url,
                            sender_address,
                        }
                    }
                    raw::EmailGateway::EmailToJsonFile => {
                        let raw::EmailToJsonFile { dir } =
                            gateway.email_to_json_file.ok_or_else(|| {
                                anyhow!("Missing 'email-to-json-file' gateway configuration")
                            })?;
                        log::info!("Use JSON file email gateway ({})", dir.display());
                        EmailGateway::EmailToJsonFile { dir }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let email = Email {
            gateway: email_gateway,
        };

        let geo_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(gw_name) => {
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::GeocodingGateway::Opencage => {
                        let raw::OpenCage { api_key, region } =
                            gateway.opencage.unwrap_or_default();
                        GeocodingGateway::OpenCage { api_key, region }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        let raw::Notifications { notify_on } = notifications.unwrap_or_default();
        let notify_on = notify_on
            .iter()
            .map(|name| {
                name.parse()
                    .map_err(|_| anyhow!("Unknown notification type '{name}'"))
            })
            .collect::<Result<_>>()?;
        let notifications = Notifications { notify_on };

        Ok(Self {
            geofence,
            email,
            geocoding,
            notifications,
        })
    }
}
