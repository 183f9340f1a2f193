use super::*;

pub fn add_comment(
    connections: &memory::Connections,
    notify: &dyn NotificationGateway,
    actor: &Actor,
    report_id: &str,
    content: &str,
) -> Result<Comment> {
    let usecases::AddedComment { comment, events } =
        connections.exclusive()?.transaction(|conn| {
            usecases::add_comment(conn, actor, report_id, content).map_err(|err| {
                warn!("Failed to add comment to report {report_id}: {err}");
                err
            })
        })?;
    dispatch(notify, events);
    Ok(comment)
}

pub fn delete_comment(
    connections: &memory::Connections,
    actor: &Actor,
    comment_id: &str,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_comment(conn, actor, comment_id).map_err(|err| {
            warn!("Failed to delete comment {comment_id}: {err}");
            err
        })
    })?)
}
