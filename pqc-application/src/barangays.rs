use super::*;

pub fn create_barangay(
    connections: &memory::Connections,
    geocoder: &dyn GeoCodingGateway,
    actor: &Actor,
    new_barangay: usecases::NewBarangay,
) -> Result<Barangay> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_barangay(conn, geocoder, actor, new_barangay).map_err(|err| {
            warn!("Failed to create barangay: {err}");
            err
        })
    })?)
}

pub fn update_barangay(
    connections: &memory::Connections,
    geocoder: &dyn GeoCodingGateway,
    actor: &Actor,
    barangay_id: &str,
    new_barangay: usecases::NewBarangay,
) -> Result<Barangay> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_barangay(conn, geocoder, actor, barangay_id, new_barangay).map_err(
            |err| {
                warn!("Failed to update barangay {barangay_id}: {err}");
                err
            },
        )
    })?)
}

/// Removes a barangay together with all of its reports.
pub fn delete_barangay(
    connections: &memory::Connections,
    actor: &Actor,
    barangay_id: &str,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_barangay(conn, actor, barangay_id).map_err(|err| {
            warn!("Failed to delete barangay {barangay_id}: {err}");
            err
        })
    })?)
}
