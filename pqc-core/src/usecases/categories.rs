use super::{delete_report::purge_report, load_category, prelude::*};
use crate::{authorization::ReportScope, text::non_blank};

#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}

fn prepare(new_category: NewCategory) -> Result<(String, Option<String>)> {
    let NewCategory { name, description } = new_category;
    let name = Category::normalize_name(&name);
    if name.is_empty() {
        return Err(Error::Name);
    }
    let description = description.as_deref().and_then(non_blank).map(Into::into);
    Ok((name, description))
}

fn ensure_unique_name<R>(repo: &R, name: &str, own_id: Option<&Id>) -> Result<()>
where
    R: CategoryRepo,
{
    match repo.try_get_category_by_name(name)? {
        Some(existing) if Some(&existing.id) != own_id => Err(Error::CategoryExists),
        _ => Ok(()),
    }
}

pub fn create_category<R>(repo: &R, actor: &Actor, new_category: NewCategory) -> Result<Category>
where
    R: CategoryRepo,
{
    if !policy_for(actor).can_manage_categories() {
        return Err(Error::Forbidden);
    }
    let (name, description) = prepare(new_category)?;
    ensure_unique_name(repo, &name, None)?;
    let category = Category {
        id: Id::new(),
        name,
        description,
    };
    repo.create_category(category.clone())?;
    log::info!("Created category {} ({})", category.name, category.id);
    Ok(category)
}

pub fn update_category<R>(
    repo: &R,
    actor: &Actor,
    category_id: &str,
    new_category: NewCategory,
) -> Result<Category>
where
    R: CategoryRepo,
{
    if !policy_for(actor).can_manage_categories() {
        return Err(Error::Forbidden);
    }
    let mut category = load_category(repo, category_id)?;
    let (name, description) = prepare(new_category)?;
    ensure_unique_name(repo, &name, Some(&category.id))?;
    category.name = name;
    category.description = description;
    repo.update_category(&category)?;
    log::info!("Updated category {} ({})", category.name, category.id);
    Ok(category)
}

/// Deletes a category together with all reports filed under it.
pub fn delete_category<R>(repo: &R, actor: &Actor, category_id: &str) -> Result<()>
where
    R: ReportRepo + CategoryRepo + CommentRepo,
{
    if !policy_for(actor).can_manage_categories() {
        return Err(Error::Forbidden);
    }
    let category = load_category(repo, category_id)?;
    let mut query = ReportQuery::new(ReportScope::All);
    query.category_id = Some(category.id.clone());
    let reports = repo.find_reports(&query)?;
    for report in &reports {
        purge_report(repo, report.id.as_str())?;
    }
    repo.delete_category(category.id.as_str())?;
    log::info!(
        "Deleted category {} with {} report(s)",
        category.name,
        reports.len()
    );
    Ok(())
}

/// All categories sorted by name.
pub fn list_categories<R>(repo: &R, actor: &Actor) -> Result<Vec<Category>>
where
    R: CategoryRepo,
{
    if !policy_for(actor).can_browse_categories() {
        return Err(Error::Forbidden);
    }
    Ok(repo.all_categories()?)
}
