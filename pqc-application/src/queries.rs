use super::*;

pub fn query_reports(
    connections: &memory::Connections,
    actor: &Actor,
    filter: usecases::ReportFilter,
) -> Result<Vec<Report>> {
    let conn = connections.shared()?;
    Ok(usecases::query_reports(&conn, actor, filter)?)
}

pub fn get_report(
    connections: &memory::Connections,
    actor: &Actor,
    report_id: &str,
) -> Result<usecases::ReportDetails> {
    let conn = connections.shared()?;
    Ok(usecases::get_report(&conn, actor, report_id)?)
}

pub fn dashboard(connections: &memory::Connections, actor: &Actor) -> Result<usecases::Dashboard> {
    let conn = connections.shared()?;
    Ok(usecases::dashboard(&conn, actor)?)
}

pub fn user_spam_metrics(
    connections: &memory::Connections,
    actor: &Actor,
    user_id: &str,
) -> Result<usecases::SpamMetrics> {
    let conn = connections.shared()?;
    Ok(usecases::user_spam_metrics(&conn, actor, user_id)?)
}

pub fn list_barangays(connections: &memory::Connections, actor: &Actor) -> Result<Vec<Barangay>> {
    let conn = connections.shared()?;
    Ok(usecases::list_barangays(&conn, actor)?)
}

pub fn get_barangay(
    connections: &memory::Connections,
    actor: &Actor,
    barangay_id: &str,
) -> Result<Barangay> {
    let conn = connections.shared()?;
    Ok(usecases::get_barangay(&conn, actor, barangay_id)?)
}

pub fn list_categories(connections: &memory::Connections, actor: &Actor) -> Result<Vec<Category>> {
    let conn = connections.shared()?;
    Ok(usecases::list_categories(&conn, actor)?)
}
