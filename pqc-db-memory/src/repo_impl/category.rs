use super::*;

impl CategoryRepo for DbConnection<'_> {
    fn create_category(&self, category: Category) -> Result<()> {
        create(&mut self.state.borrow_mut().categories, category)
    }
    fn update_category(&self, category: &Category) -> Result<()> {
        update(&mut self.state.borrow_mut().categories, category)
    }
    fn delete_category(&self, id: &str) -> Result<()> {
        delete_category(&mut self.state.borrow_mut(), id)
    }
    fn get_category(&self, id: &str) -> Result<Category> {
        get(&self.state.borrow().categories, id)
    }
    fn all_categories(&self) -> Result<Vec<Category>> {
        Ok(all_categories(&self.state.borrow()))
    }
    fn try_get_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        Ok(find_by_name(&self.state.borrow().categories, name, |c| &c.name).cloned())
    }
}

impl CategoryRepo for DbReadOnly<'_> {
    fn create_category(&self, _category: Category) -> Result<()> {
        Err(read_only())
    }
    fn update_category(&self, _category: &Category) -> Result<()> {
        Err(read_only())
    }
    fn delete_category(&self, _id: &str) -> Result<()> {
        Err(read_only())
    }
    fn get_category(&self, id: &str) -> Result<Category> {
        get(&self.state.categories, id)
    }
    fn all_categories(&self) -> Result<Vec<Category>> {
        Ok(all_categories(&self.state))
    }
    fn try_get_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        Ok(find_by_name(&self.state.categories, name, |c| &c.name).cloned())
    }
}

fn all_categories(state: &State) -> Vec<Category> {
    let mut categories = state.categories.clone();
    categories.sort_by(|a, b| a.name.cmp(&b.name));
    categories
}

fn delete_category(state: &mut State, id: &str) -> Result<()> {
    if state.reports.iter().any(|r| r.category_id.as_str() == id) {
        return Err(repo::Error::Other(anyhow!(
            "Category {id} is still referenced by reports"
        )));
    }
    delete(&mut state.categories, id)
}
