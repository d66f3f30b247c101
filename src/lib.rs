//! kernelbot-register - link a Linux account to a Discord id.
//!
//! The kernelbot Discord bot keeps a `users` table mapping Discord ids to
//! Linux logins on the machine it runs on. This crate provides the
//! `register` command that inserts or replaces one such row for the
//! invoking user.
//!
//! # Modules
//!
//! - [`application`] - The [`Registrar`](application::Registrar) that runs a registration
//! - [`port`] - Identity and store capability traits
//! - [`adapter`] - CLI surface, `getlogin_r` identity, Diesel/SQLite store
//! - [`config`] - Database path and logging configuration
//! - [`domain`] - The user record
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use kernelbot_register::adapter::outbound::identity::SessionIdentity;
//! use kernelbot_register::adapter::outbound::sqlite::SqliteUserStore;
//! use kernelbot_register::application::Registrar;
//! use kernelbot_register::config::Config;
//!
//! let config = Config::default();
//! let registrar = Registrar::new(SessionIdentity, SqliteUserStore::new(config.database));
//! let user = registrar.register("42")?;
//! println!("successfully updated user {}", user.username);
//! # Ok::<(), kernelbot_register::error::Error>(())
//! ```

pub mod adapter;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
