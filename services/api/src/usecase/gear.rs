use crate::domain::repository::GearRepository;
use crate::domain::types::{Gear, NewGear};
use crate::error::ApiError;
use crate::usecase::present;

pub struct ListGearUseCase<R: GearRepository> {
    pub repo: R,
}

impl<R: GearRepository> ListGearUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Gear>, ApiError> {
        self.repo.list().await
    }
}

pub struct CreateGearInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

pub struct CreateGearUseCase<R: GearRepository> {
    pub repo: R,
}

impl<R: GearRepository> CreateGearUseCase<R> {
    pub async fn execute(&self, owner_id: i32, input: CreateGearInput) -> Result<Gear, ApiError> {
        let (Some(name), Some(category)) = (present(input.name), present(input.category)) else {
            return Err(ApiError::MissingFields("name and category"));
        };
        self.repo
            .create(&NewGear {
                name,
                category,
                description: present(input.description),
                owner_id,
            })
            .await
    }
}
