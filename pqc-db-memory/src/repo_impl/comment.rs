use super::*;

impl CommentRepo for DbConnection<'_> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.state.borrow_mut(), comment)
    }
    fn get_comment(&self, id: &str) -> Result<Comment> {
        get(&self.state.borrow().comments, id)
    }
    fn delete_comment(&self, id: &str) -> Result<()> {
        delete(&mut self.state.borrow_mut().comments, id)
    }
    fn load_comments_of_report(&self, report_id: &str) -> Result<Vec<Comment>> {
        Ok(load_comments_of_report(&self.state.borrow(), report_id))
    }
    fn delete_comments_of_report(&self, report_id: &str) -> Result<usize> {
        let mut state = self.state.borrow_mut();
        let count = state.comments.len();
        state.comments.retain(|c| c.report_id.as_str() != report_id);
        Ok(count - state.comments.len())
    }
}

impl CommentRepo for DbReadOnly<'_> {
    fn create_comment(&self, _comment: Comment) -> Result<()> {
        Err(read_only())
    }
    fn get_comment(&self, id: &str) -> Result<Comment> {
        get(&self.state.comments, id)
    }
    fn delete_comment(&self, _id: &str) -> Result<()> {
        Err(read_only())
    }
    fn load_comments_of_report(&self, report_id: &str) -> Result<Vec<Comment>> {
        Ok(load_comments_of_report(&self.state, report_id))
    }
    fn delete_comments_of_report(&self, _report_id: &str) -> Result<usize> {
        Err(read_only())
    }
}

fn create_comment(state: &mut State, comment: Comment) -> Result<()> {
    if !state.reports.iter().any(|r| r.id == comment.report_id) {
        return Err(repo::Error::Other(anyhow!(
            "Report {} of comment {} does not exist",
            comment.report_id,
            comment.id
        )));
    }
    create(&mut state.comments, comment)
}

fn load_comments_of_report(state: &State, report_id: &str) -> Vec<Comment> {
    let mut comments: Vec<_> = state
        .comments
        .iter()
        .filter(|c| c.report_id.as_str() == report_id)
        .cloned()
        .collect();
    comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    comments
}
