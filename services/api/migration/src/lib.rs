pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_users;
mod m20251101_000002_create_gear;
mod m20251101_000003_create_locations;
mod m20251101_000004_create_threads;
mod m20251101_000005_create_comments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_users::Migration),
            Box::new(m20251101_000002_create_gear::Migration),
            Box::new(m20251101_000003_create_locations::Migration),
            Box::new(m20251101_000004_create_threads::Migration),
            Box::new(m20251101_000005_create_comments::Migration),
        ]
    }
}
