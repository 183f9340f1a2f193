use super::*;

pub fn create_category(
    connections: &memory::Connections,
    actor: &Actor,
    new_category: usecases::NewCategory,
) -> Result<Category> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_category(conn, actor, new_category).map_err(|err| {
            warn!("Failed to create category: {err}");
            err
        })
    })?)
}

pub fn update_category(
    connections: &memory::Connections,
    actor: &Actor,
    category_id: &str,
    new_category: usecases::NewCategory,
) -> Result<Category> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_category(conn, actor, category_id, new_category).map_err(|err| {
            warn!("Failed to update category {category_id}: {err}");
            err
        })
    })?)
}

/// Removes a category together with all of its reports.
pub fn delete_category(
    connections: &memory::Connections,
    actor: &Actor,
    category_id: &str,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_category(conn, actor, category_id).map_err(|err| {
            warn!("Failed to delete category {category_id}: {err}");
            err
        })
    })?)
}
