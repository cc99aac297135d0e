pub mod enrollment;
pub mod entities;
