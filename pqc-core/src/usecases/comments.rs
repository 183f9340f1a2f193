use super::{load_report, notifications::digest, prelude::*};
use crate::util::validate::Validate;

#[derive(Debug)]
pub struct AddedComment {
    pub comment: Comment,
    pub events: Vec<NotificationEvent>,
}

/// Comments on a report the actor can see.
///
/// The creator of the report is informed unless the comment
/// comes from the creator, an official or an admin.
pub fn add_comment<R>(repo: &R, actor: &Actor, report_id: &str, content: &str) -> Result<AddedComment>
where
    R: Db,
{
    let report = load_report(repo, report_id)?;
    if !policy_for(actor).can_comment(actor, &report) {
        return Err(Error::Forbidden);
    }
    let comment = Comment {
        id: Id::new(),
        report_id: report.id.clone(),
        created_by: actor.user_id.clone(),
        content: content.trim().to_string(),
        created_at: Timestamp::now(),
    };
    comment.validate()?;
    repo.create_comment(comment.clone())?;
    log::info!(
        "User {} commented on report {}",
        actor.user_id,
        report.id
    );

    let mut events = vec![];
    let notify_creator = actor.role == Role::Resident && !report.is_owned_by(&actor.user_id);
    if notify_creator {
        let creator = repo.get_user(report.created_by.as_str())?;
        if creator.is_active() {
            events.push(NotificationEvent::CommentAdded {
                email_addresses: vec![creator.email],
                report: digest(repo, &report)?,
                comment: comment.clone(),
                commenter_email: actor.email.clone(),
            });
        }
    }
    Ok(AddedComment { comment, events })
}

pub fn delete_comment<R>(repo: &R, actor: &Actor, comment_id: &str) -> Result<()>
where
    R: CommentRepo,
{
    let comment = repo.get_comment(comment_id)?;
    if !policy_for(actor).can_delete_comment(actor, &comment) {
        return Err(Error::Forbidden);
    }
    repo.delete_comment(comment_id)?;
    log::info!("Comment {comment_id} deleted by user {}", actor.user_id);
    Ok(())
}
