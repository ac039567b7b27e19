//! SeaORM table models

pub mod courses;
