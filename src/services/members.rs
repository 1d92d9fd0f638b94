//! Members service

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member, UpdateMember},
    repository::Repository,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, owner_id: i32) -> AppResult<Vec<Member>> {
        self.repository.members.list_by_owner(owner_id).await
    }

    pub async fn create(&self, owner_id: i32, data: &CreateMember) -> AppResult<Member> {
        self.repository.members.create(owner_id, data).await
    }

    pub async fn update(&self, owner_id: i32, id: i32, data: UpdateMember) -> AppResult<Member> {
        self.repository.members.update(owner_id, id, data).await
    }

    pub async fn delete(&self, owner_id: i32, id: i32) -> AppResult<()> {
        self.repository.members.delete(owner_id, id).await
    }
}
