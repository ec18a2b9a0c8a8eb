//! Boom Ops Core - credential table, session store and client repository
//!
//! This crate holds the design core of the portal: authenticating operator
//! accounts, tracking sessions, and CRUD over the flat-file client collection.

pub mod auth;
pub mod client;
pub mod error;
pub mod repository;
pub mod session;

pub use auth::{Account, CredentialTable, Principal, Role};
pub use client::{ClientObject, ClientRecord, FeatureSet};
pub use error::{CoreResult, RepoError};
pub use repository::ClientRepository;
pub use session::SessionStore;
