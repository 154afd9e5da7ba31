pub mod api;
pub mod config;
pub mod contact;
pub mod content;
pub mod filter;
pub mod html;
pub mod models;
pub mod nav;
pub mod pages;
pub mod scene;
pub mod sitemap;
pub mod theme;
