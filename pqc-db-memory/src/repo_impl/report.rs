use super::*;

impl ReportRepo for DbConnection<'_> {
    fn create_report(&self, report: Report) -> Result<()> {
        create_report(&mut self.state.borrow_mut(), report)
    }
    fn update_report(&self, report: &Report) -> Result<()> {
        update(&mut self.state.borrow_mut().reports, report)
    }
    fn delete_report(&self, id: &str) -> Result<()> {
        delete(&mut self.state.borrow_mut().reports, id)
    }
    fn get_report(&self, id: &str) -> Result<Report> {
        get(&self.state.borrow().reports, id)
    }
    fn find_reports(&self, query: &ReportQuery) -> Result<Vec<Report>> {
        Ok(find_reports(&self.state.borrow(), query))
    }
    fn count_reports_by_author_since(&self, user_id: &str, since: Timestamp) -> Result<usize> {
        Ok(count_reports_by_author_since(
            &self.state.borrow(),
            user_id,
            since,
        ))
    }
}

impl ReportRepo for DbReadOnly<'_> {
    fn create_report(&self, _report: Report) -> Result<()> {
        Err(read_only())
    }
    fn update_report(&self, _report: &Report) -> Result<()> {
        Err(read_only())
    }
    fn delete_report(&self, _id: &str) -> Result<()> {
        Err(read_only())
    }
    fn get_report(&self, id: &str) -> Result<Report> {
        get(&self.state.reports, id)
    }
    fn find_reports(&self, query: &ReportQuery) -> Result<Vec<Report>> {
        Ok(find_reports(&self.state, query))
    }
    fn count_reports_by_author_since(&self, user_id: &str, since: Timestamp) -> Result<usize> {
        Ok(count_reports_by_author_since(&self.state, user_id, since))
    }
}

fn create_report(state: &mut State, report: Report) -> Result<()> {
    let missing = if !state.users.iter().any(|u| u.id == report.created_by) {
        Some("creator")
    } else if !state.barangays.iter().any(|b| b.id == report.barangay_id) {
        Some("barangay")
    } else if !state.categories.iter().any(|c| c.id == report.category_id) {
        Some("category")
    } else {
        None
    };
    if let Some(missing) = missing {
        return Err(repo::Error::Other(anyhow!(
            "The {missing} of report {} does not exist",
            report.id
        )));
    }
    create(&mut state.reports, report)
}

fn find_reports(state: &State, query: &ReportQuery) -> Vec<Report> {
    let mut reports: Vec<_> = state
        .reports
        .iter()
        .filter(|r| query.matches(r))
        .cloned()
        .collect();
    reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    if let Some(limit) = query.limit {
        reports.truncate(limit);
    }
    reports
}

fn count_reports_by_author_since(state: &State, user_id: &str, since: Timestamp) -> usize {
    state
        .reports
        .iter()
        .filter(|r| r.created_by.as_str() == user_id && r.created_at >= since)
        .count()
}
