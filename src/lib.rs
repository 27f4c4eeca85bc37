pub mod components;
pub mod config;
pub mod effects;
pub mod gallery;
pub mod pages;
