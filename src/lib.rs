pub mod auth;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod db;
pub mod error;
pub mod i18n;
pub mod models;
pub mod security;
pub mod storage;
pub mod web;
