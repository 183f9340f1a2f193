use super::*;

impl UserRepo for DbConnection<'_> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.state.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update(&mut self.state.borrow_mut().users, user)
    }
    fn get_user(&self, id: &str) -> Result<User> {
        get(&self.state.borrow().users, id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        Ok(try_get_user_by_email(&self.state.borrow(), email))
    }
    fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.state.borrow().users.clone())
    }
}

impl UserRepo for DbReadOnly<'_> {
    fn create_user(&self, _user: &User) -> Result<()> {
        Err(read_only())
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        Err(read_only())
    }
    fn get_user(&self, id: &str) -> Result<User> {
        get(&self.state.users, id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        Ok(try_get_user_by_email(&self.state, email))
    }
    fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.state.users.clone())
    }
}

fn create_user(state: &mut State, user: &User) -> Result<()> {
    if try_get_user_by_email(state, &user.email).is_some() {
        return Err(repo::Error::AlreadyExists);
    }
    create(&mut state.users, user.clone())
}

fn try_get_user_by_email(state: &State, email: &EmailAddress) -> Option<User> {
    state
        .users
        .iter()
        .find(|u| u.email.is_same_address(email))
        .cloned()
}
