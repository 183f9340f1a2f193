//! # pqc-core
//!
//! Business rules of ParañaqueConnect: who may see and touch a
//! report, how a report moves through its workflow and which
//! checks guard its creation.

pub mod authorization;
pub mod db;
pub mod gateways;
pub mod geofence;
pub mod lifecycle;
pub mod repositories;
pub mod spam;
pub mod text;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use pqc_entities::{
        barangay::*, category::*, comment::*, email::*, geo::*, id::*, report::*, time::*,
        user::*,
    };
}

pub use self::repositories::Error as RepoError;
