use anyhow::anyhow;

use pqc_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod barangay;
mod category;
mod comment;
mod report;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

trait Record {
    fn id(&self) -> &Id;
}

macro_rules! record {
    ($($t:ty),*) => {
        $(impl Record for $t {
            fn id(&self) -> &Id {
                &self.id
            }
        })*
    };
}

record!(Report, User, Barangay, Category, Comment);

fn get<T: Record + Clone>(records: &[T], id: &str) -> Result<T> {
    records
        .iter()
        .find(|r| r.id().as_str() == id)
        .cloned()
        .ok_or(repo::Error::NotFound)
}

fn create<T: Record>(records: &mut Vec<T>, record: T) -> Result<()> {
    if records.iter().any(|r| r.id() == record.id()) {
        return Err(repo::Error::AlreadyExists);
    }
    records.push(record);
    Ok(())
}

fn update<T: Record + Clone>(records: &mut [T], record: &T) -> Result<()> {
    let existing = records
        .iter_mut()
        .find(|r| r.id() == record.id())
        .ok_or(repo::Error::NotFound)?;
    *existing = record.clone();
    Ok(())
}

fn delete<T: Record>(records: &mut Vec<T>, id: &str) -> Result<()> {
    let pos = records
        .iter()
        .position(|r| r.id().as_str() == id)
        .ok_or(repo::Error::NotFound)?;
    records.remove(pos);
    Ok(())
}

fn find_by_name<'a, T, F>(records: &'a [T], name: &str, f: F) -> Option<&'a T>
where
    F: Fn(&T) -> &str,
{
    let name = name.trim().to_lowercase();
    records.iter().find(|r| f(r).to_lowercase() == name)
}

fn read_only() -> repo::Error {
    repo::Error::Other(anyhow!("Write access through a read-only connection"))
}
