use super::{load_barangay, prelude::*};
use crate::{text::non_blank, util::validate};

#[derive(Debug, Clone)]
pub struct NewResident {
    pub email: String,
    pub barangay_id: String,
}

#[derive(Debug, Clone)]
pub struct NewCaptain {
    pub email: String,
    pub barangay_id: String,
}

#[derive(Debug)]
pub struct ProvisionedCaptain {
    pub captain: User,
    pub events: Vec<NotificationEvent>,
}

fn parse_email(email: &str) -> Result<EmailAddress> {
    let email = email.trim();
    if !validate::is_valid_email(email) {
        return Err(Error::Email);
    }
    Ok(email.parse()?)
}

fn create_user<R>(
    repo: &R,
    email: EmailAddress,
    role: Role,
    barangay_id: Option<Id>,
) -> Result<User>
where
    R: UserRepo,
{
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let user = User {
        id: Id::new(),
        email,
        role,
        barangay_id,
        created_at: Timestamp::now(),
        banned_at: None,
        ban_reason: None,
        deleted_at: None,
    };
    log::debug!("Creating new {role} user: email = {}", user.email);
    repo.create_user(&user).map_err(|err| match err {
        RepoError::AlreadyExists => Error::UserExists,
        err => err.into(),
    })?;
    Ok(user)
}

/// Self sign-up, always with the resident role.
pub fn register_resident<R>(repo: &R, new_resident: NewResident) -> Result<User>
where
    R: UserRepo + BarangayRepo,
{
    let NewResident { email, barangay_id } = new_resident;
    let email = parse_email(&email)?;
    let barangay = load_barangay(repo, &barangay_id)?;
    let user = create_user(repo, email, Role::Resident, Some(barangay.id))?;
    log::info!("Registered resident {}", user.id);
    Ok(user)
}

/// Creates a city-wide admin account.
///
/// Admins are only set up by operators, never by other users.
pub fn create_admin<R>(repo: &R, email: &str) -> Result<User>
where
    R: UserRepo,
{
    let email = parse_email(email)?;
    let admin = create_user(repo, email, Role::Admin, None)?;
    log::info!("Created admin {}", admin.id);
    Ok(admin)
}

/// Creates the official account of a barangay.
///
/// Every barangay has at most one captain.
pub fn provision_captain<R>(
    repo: &R,
    actor: &Actor,
    new_captain: NewCaptain,
) -> Result<ProvisionedCaptain>
where
    R: UserRepo + BarangayRepo,
{
    if !policy_for(actor).can_provision_captains() {
        return Err(Error::Forbidden);
    }
    let NewCaptain { email, barangay_id } = new_captain;
    let email = parse_email(&email)?;
    let barangay = load_barangay(repo, &barangay_id)?;
    if repo
        .find_official_of_barangay(barangay.id.as_str())?
        .is_some()
    {
        return Err(Error::BarangayHasCaptain);
    }
    let captain = create_user(repo, email, Role::BarangayOfficial, Some(barangay.id))?;
    log::info!(
        "Provisioned captain {} for barangay {}",
        captain.id,
        barangay.name
    );
    let events = vec![NotificationEvent::CaptainProvisioned {
        captain: captain.clone(),
        barangay_name: barangay.name,
    }];
    Ok(ProvisionedCaptain { captain, events })
}

fn moderate<R, F>(repo: &R, actor: &Actor, user_id: &str, f: F) -> Result<User>
where
    R: UserRepo,
    F: FnOnce(&mut User) -> Result<()>,
{
    if !policy_for(actor).can_moderate_users() {
        return Err(Error::Forbidden);
    }
    let mut user = repo.get_user(user_id).map_err(|err| match err {
        RepoError::NotFound => Error::UserDoesNotExist,
        err => err.into(),
    })?;
    f(&mut user)?;
    repo.update_user(&user)?;
    Ok(user)
}

pub const DEFAULT_BAN_REASON: &str = "Violation of community guidelines";

/// Only residents can be banned.
pub fn ban_user<R>(repo: &R, actor: &Actor, user_id: &str, reason: &str) -> Result<User>
where
    R: UserRepo,
{
    let reason = non_blank(reason).unwrap_or(DEFAULT_BAN_REASON).to_string();
    let user = moderate(repo, actor, user_id, |user| {
        if user.role != Role::Resident {
            return Err(Error::OnlyResidentsCanBeBanned);
        }
        user.banned_at = Some(Timestamp::now());
        user.ban_reason = Some(reason);
        Ok(())
    })?;
    log::info!("User {} banned by {}", user.id, actor.user_id);
    Ok(user)
}

pub fn unban_user<R>(repo: &R, actor: &Actor, user_id: &str) -> Result<User>
where
    R: UserRepo,
{
    let user = moderate(repo, actor, user_id, |user| {
        user.banned_at = None;
        user.ban_reason = None;
        Ok(())
    })?;
    log::info!("User {} unbanned by {}", user.id, actor.user_id);
    Ok(user)
}

/// Soft delete: the account and its reports stay but it
/// can no longer do anything.
pub fn delete_user<R>(repo: &R, actor: &Actor, user_id: &str) -> Result<User>
where
    R: UserRepo,
{
    let user = moderate(repo, actor, user_id, |user| {
        if user.deleted_at.is_none() {
            user.deleted_at = Some(Timestamp::now());
        }
        Ok(())
    })?;
    log::info!("User {} deleted by {}", user.id, actor.user_id);
    Ok(user)
}

/// Undoes a soft delete.
pub fn restore_user<R>(repo: &R, actor: &Actor, user_id: &str) -> Result<User>
where
    R: UserRepo,
{
    let user = moderate(repo, actor, user_id, |user| {
        user.deleted_at = None;
        Ok(())
    })?;
    log::info!("User {} restored by {}", user.id, actor.user_id);
    Ok(user)
}
