pub mod auth;
pub mod contact;
pub mod course;
pub mod dashboard;
pub mod navigation;
pub mod project;
pub mod service;
pub mod team;
pub mod testimonial;
