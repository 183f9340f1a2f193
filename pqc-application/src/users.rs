use super::*;

/// The actor behind an e-mail address, as currently stored.
pub fn load_actor(connections: &memory::Connections, email: &str) -> Result<Actor> {
    let email: EmailAddress = email
        .trim()
        .parse()
        .map_err(usecases::Error::from)?;
    let conn = connections.shared()?;
    let user = conn
        .try_get_user_by_email(&email)?
        .ok_or(usecases::Error::UserDoesNotExist)?;
    Ok(Actor::from(&user))
}

pub fn create_admin(connections: &memory::Connections, email: &str) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_admin(conn, email).map_err(|err| {
            warn!("Failed to create admin {email}: {err}");
            err
        })
    })?)
}

pub fn register_resident(
    connections: &memory::Connections,
    new_resident: usecases::NewResident,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::register_resident(conn, new_resident).map_err(|err| {
            warn!("Failed to register resident: {err}");
            err
        })
    })?)
}

pub fn provision_captain(
    connections: &memory::Connections,
    notify: &dyn NotificationGateway,
    actor: &Actor,
    new_captain: usecases::NewCaptain,
) -> Result<User> {
    let usecases::ProvisionedCaptain { captain, events } =
        connections.exclusive()?.transaction(|conn| {
            usecases::provision_captain(conn, actor, new_captain).map_err(|err| {
                warn!("Failed to provision captain: {err}");
                err
            })
        })?;
    dispatch(notify, events);
    Ok(captain)
}

pub fn ban_user(
    connections: &memory::Connections,
    actor: &Actor,
    user_id: &str,
    reason: &str,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::ban_user(conn, actor, user_id, reason).map_err(|err| {
            warn!("Failed to ban user {user_id}: {err}");
            err
        })
    })?)
}

pub fn unban_user(connections: &memory::Connections, actor: &Actor, user_id: &str) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::unban_user(conn, actor, user_id).map_err(|err| {
            warn!("Failed to unban user {user_id}: {err}");
            err
        })
    })?)
}

pub fn delete_user(connections: &memory::Connections, actor: &Actor, user_id: &str) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_user(conn, actor, user_id).map_err(|err| {
            warn!("Failed to delete user {user_id}: {err}");
            err
        })
    })?)
}

pub fn restore_user(
    connections: &memory::Connections,
    actor: &Actor,
    user_id: &str,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::restore_user(conn, actor, user_id).map_err(|err| {
            warn!("Failed to restore user {user_id}: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn provisioned_captain_is_welcomed() {
        let fixture = BackendFixture::new();
        let captain = flows::provision_captain(
            &fixture.db_connections,
            &fixture.notify,
            &fixture.admin,
            usecases::NewCaptain {
                email: "captain@example.com".into(),
                barangay_id: fixture.barangay.id.to_string(),
            },
        )
        .unwrap();
        assert_eq!(Role::BarangayOfficial, captain.role);
        assert_eq!(
            vec![NotificationType::CaptainProvisioned],
            fixture.notify.kinds()
        );
        let actor = fixture.actor("captain@example.com");
        assert_eq!(Some(fixture.barangay.id.clone()), actor.barangay_id);
    }

    #[test]
    fn failed_provisioning_sends_nothing() {
        let fixture = BackendFixture::new();
        let resident = fixture.register_resident("juan@example.com");
        let err = flows::provision_captain(
            &fixture.db_connections,
            &fixture.notify,
            &resident,
            usecases::NewCaptain {
                email: "captain@example.com".into(),
                barangay_id: fixture.barangay.id.to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err.parameter(), Some(usecases::Error::Forbidden)));
        assert!(fixture.notify.kinds().is_empty());
        assert!(flows::load_actor(&fixture.db_connections, "captain@example.com").is_err());
    }

    #[test]
    fn banned_actor_is_reloaded_as_banned() {
        let fixture = BackendFixture::new();
        let resident = fixture.register_resident("juan@example.com");
        flows::ban_user(
            &fixture.db_connections,
            &fixture.admin,
            resident.user_id.as_str(),
            "Spam",
        )
        .unwrap();
        let reloaded = fixture.actor("juan@example.com");
        assert!(!reloaded.is_active());
        flows::unban_user(
            &fixture.db_connections,
            &fixture.admin,
            resident.user_id.as_str(),
        )
        .unwrap();
        assert!(fixture.actor("juan@example.com").is_active());
    }

    #[test]
    fn restored_actor_is_active_again() {
        let fixture = BackendFixture::new();
        let resident = fixture.register_resident("juan@example.com");
        let id = resident.user_id.as_str();
        flows::delete_user(&fixture.db_connections, &fixture.admin, id).unwrap();
        assert!(!fixture.actor("juan@example.com").is_active());
        let user = flows::restore_user(&fixture.db_connections, &fixture.admin, id).unwrap();
        assert!(user.deleted_at.is_none());
        assert!(fixture.actor("juan@example.com").is_active());
    }

    #[test]
    fn admins_cannot_be_banned() {
        let fixture = BackendFixture::new();
        let err = flows::ban_user(
            &fixture.db_connections,
            &fixture.admin,
            fixture.admin.user_id.as_str(),
            "",
        )
        .unwrap_err();
        assert!(matches!(
            err.parameter(),
            Some(usecases::Error::OnlyResidentsCanBeBanned)
        ));
        assert!(fixture.actor(fixture.admin.email.as_str()).is_active());
    }
}
