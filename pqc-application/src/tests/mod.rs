mod scenario;

pub mod prelude {

    use std::cell::RefCell;

    pub use pqc_core::{
        authorization::Actor,
        entities::*,
        gateways::{
            geocode::GeoCodingGateway,
            notify::{NotificationEvent, NotificationGateway, NotificationType},
        },
        geofence::Geofence,
        usecases,
    };

    pub mod memory {
        pub use super::super::super::memory::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    #[derive(Default)]
    pub struct RecordingNotifyGW {
        events: RefCell<Vec<NotificationEvent>>,
    }

    impl RecordingNotifyGW {
        pub fn kinds(&self) -> Vec<NotificationType> {
            self.events.borrow().iter().map(|e| e.kind()).collect()
        }

        pub fn take(&self) -> Vec<NotificationEvent> {
            self.events.take()
        }

        pub fn clear(&self) {
            self.events.borrow_mut().clear();
        }
    }

    impl NotificationGateway for RecordingNotifyGW {
        fn notify(&self, event: NotificationEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    /// Resolves every address to the city hall.
    pub struct DummyGeoGW;

    impl GeoCodingGateway for DummyGeoGW {
        fn resolve_address_lat_lng(&self, addr: &str) -> Option<(f64, f64)> {
            if addr.contains("Nowhere") {
                None
            } else {
                Some((14.4793095, 121.0198229))
            }
        }
    }

    pub struct BackendFixture {
        pub db_connections: memory::Connections,
        pub geocoder: DummyGeoGW,
        pub geofence: Geofence,
        pub notify: RecordingNotifyGW,
        pub admin: Actor,
        pub barangay: Barangay,
        pub category: Category,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = memory::Connections::init().unwrap();
            let geocoder = DummyGeoGW;
            let admin = flows::create_admin(&db_connections, "admin@example.com").unwrap();
            let admin = Actor::from(&admin);
            let barangay = flows::create_barangay(
                &db_connections,
                &geocoder,
                &admin,
                usecases::NewBarangay {
                    name: "San Dionisio".into(),
                    address: Some("San Dionisio, Parañaque City".into()),
                    ..Default::default()
                },
            )
            .unwrap();
            let category = flows::create_category(
                &db_connections,
                &admin,
                usecases::NewCategory {
                    name: "Drainage".into(),
                    description: Some("Clogged or damaged drainage systems".into()),
                },
            )
            .unwrap();
            Self {
                db_connections,
                geocoder,
                geofence: Geofence::default(),
                notify: RecordingNotifyGW::default(),
                admin,
                barangay,
                category,
            }
        }

        pub fn actor(&self, email: &str) -> Actor {
            flows::load_actor(&self.db_connections, email).unwrap()
        }

        pub fn register_resident(&self, email: &str) -> Actor {
            let user = flows::register_resident(
                &self.db_connections,
                usecases::NewResident {
                    email: email.into(),
                    barangay_id: self.barangay.id.to_string(),
                },
            )
            .unwrap();
            Actor::from(&user)
        }

        /// The welcome notification is discarded.
        pub fn provision_captain(&self, email: &str) -> Actor {
            let captain = flows::provision_captain(
                &self.db_connections,
                &self.notify,
                &self.admin,
                usecases::NewCaptain {
                    email: email.into(),
                    barangay_id: self.barangay.id.to_string(),
                },
            )
            .unwrap();
            self.notify.clear();
            Actor::from(&captain)
        }

        pub fn new_report(&self) -> usecases::NewReport {
            usecases::NewReport {
                title: "Broken street light".into(),
                description: "The street light in front of the chapel is broken".into(),
                address: "Dr. A. Santos Ave, Parañaque".into(),
                barangay_id: self.barangay.id.to_string(),
                category_id: self.category.id.to_string(),
                ..Default::default()
            }
        }

        pub fn submit(&self, actor: &Actor) -> Report {
            flows::submit_report(
                &self.db_connections,
                &self.geocoder,
                &self.geofence,
                &self.notify,
                actor,
                self.new_report(),
            )
            .unwrap()
        }

        pub fn approve(&self, report: &Report) -> Report {
            flows::review_report(
                &self.db_connections,
                &self.notify,
                &self.admin,
                report.id.as_str(),
                flows::ReviewDecision::Approve,
            )
            .unwrap()
        }
    }
}
