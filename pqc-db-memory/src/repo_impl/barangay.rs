use super::*;

impl BarangayRepo for DbConnection<'_> {
    fn create_barangay(&self, barangay: Barangay) -> Result<()> {
        create(&mut self.state.borrow_mut().barangays, barangay)
    }
    fn update_barangay(&self, barangay: &Barangay) -> Result<()> {
        update(&mut self.state.borrow_mut().barangays, barangay)
    }
    fn delete_barangay(&self, id: &str) -> Result<()> {
        delete_barangay(&mut self.state.borrow_mut(), id)
    }
    fn get_barangay(&self, id: &str) -> Result<Barangay> {
        get(&self.state.borrow().barangays, id)
    }
    fn all_barangays(&self) -> Result<Vec<Barangay>> {
        Ok(all_barangays(&self.state.borrow()))
    }
    fn try_get_barangay_by_name(&self, name: &str) -> Result<Option<Barangay>> {
        Ok(find_by_name(&self.state.borrow().barangays, name, |b| &b.name).cloned())
    }
}

impl BarangayRepo for DbReadOnly<'_> {
    fn create_barangay(&self, _barangay: Barangay) -> Result<()> {
        Err(read_only())
    }
    fn update_barangay(&self, _barangay: &Barangay) -> Result<()> {
        Err(read_only())
    }
    fn delete_barangay(&self, _id: &str) -> Result<()> {
        Err(read_only())
    }
    fn get_barangay(&self, id: &str) -> Result<Barangay> {
        get(&self.state.barangays, id)
    }
    fn all_barangays(&self) -> Result<Vec<Barangay>> {
        Ok(all_barangays(&self.state))
    }
    fn try_get_barangay_by_name(&self, name: &str) -> Result<Option<Barangay>> {
        Ok(find_by_name(&self.state.barangays, name, |b| &b.name).cloned())
    }
}

fn all_barangays(state: &State) -> Vec<Barangay> {
    let mut barangays = state.barangays.clone();
    barangays.sort_by(|a, b| a.name.cmp(&b.name));
    barangays
}

fn delete_barangay(state: &mut State, id: &str) -> Result<()> {
    if state.reports.iter().any(|r| r.barangay_id.as_str() == id) {
        return Err(repo::Error::Other(anyhow!(
            "Barangay {id} is still referenced by reports"
        )));
    }
    delete(&mut state.barangays, id)
}
