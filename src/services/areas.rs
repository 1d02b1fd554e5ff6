//! Areas service

use crate::{
    error::AppResult,
    models::area::{Area, AreaQuery, CreateArea, UpdateArea},
    repository::Repository,
};

/// Default page size for the areas listing
const DEFAULT_PER_PAGE: i64 = 10;

#[derive(Clone)]
pub struct AreasService {
    repository: Repository,
}

impl AreasService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &AreaQuery) -> AppResult<(Vec<Area>, i64, i64, i64)> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, 100);
        let (areas, total) = self
            .repository
            .areas
            .list(query.search.as_deref(), page, per_page)
            .await?;
        Ok((areas, total, page, per_page))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Area> {
        self.repository.areas.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateArea) -> AppResult<Area> {
        self.repository.areas.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateArea) -> AppResult<Area> {
        self.repository.areas.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.areas.delete(id).await
    }
}
