use anyhow::Result as Fallible;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use pqc_core::{entities::*, usecases as uc};
use std::{cell::RefCell, sync::Arc};

mod repo_impl;

/// All records of the store.
///
/// Every collection keeps the insertion order.
#[derive(Debug, Clone, Default)]
pub struct State {
    reports: Vec<Report>,
    users: Vec<User>,
    barangays: Vec<Barangay>,
    categories: Vec<Category>,
    comments: Vec<Comment>,
}

type SharedState = Arc<RwLock<State>>;

pub struct DbReadOnly<'a> {
    state: RwLockReadGuard<'a, State>,
}

impl<'a> DbReadOnly<'a> {
    fn new(state: &'a SharedState) -> Self {
        Self {
            state: state.read(),
        }
    }
}

pub struct DbReadWrite<'a> {
    state: RwLockWriteGuard<'a, State>,
}

/// A connection inside of a transaction.
pub struct DbConnection<'a> {
    state: RefCell<&'a mut State>,
}

impl<'a> DbConnection<'a> {
    fn new(state: &'a mut State) -> Self {
        Self {
            state: RefCell::new(state),
        }
    }
}

impl<'a> DbReadWrite<'a> {
    fn new(state: &'a SharedState) -> Self {
        Self {
            state: state.write(),
        }
    }

    /// Runs `f` on a copy of the state that only replaces
    /// the stored state if `f` succeeds.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        let mut draft = State::clone(&self.state);
        let res = f(&DbConnection::new(&mut draft)).map_err(Into::into);
        match res {
            Ok(res) => {
                *self.state = draft;
                Ok(res)
            }
            Err(err) => {
                log::debug!("Rolling back transaction: {err}");
                Err(err)
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct Connections {
    // Only a single connection with write access will be
    // handed out at a time. Multiple read connections can
    // be accessed concurrently.
    state: SharedState,
}

impl Connections {
    pub fn init() -> Fallible<Self> {
        log::info!("Using a volatile in-memory database");
        Ok(Self::default())
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        Ok(DbReadOnly::new(&self.state))
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        Ok(DbReadWrite::new(&self.state))
    }
}
