pub mod activity;
pub mod company;
pub mod dashboard;
pub mod document;
pub mod meeting;
pub mod member;
pub mod payment;
pub mod project;
pub mod user;
