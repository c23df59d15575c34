//! # OC Lettings
//!
//! Holiday lettings and user profiles, served as JSON over HTTP.
//!
//! ## Core Components
//!
//! - **[model]**: [`Address`](model::Address), [`Letting`](model::Letting),
//!   [`User`](model::User) and [`Profile`](model::Profile), each with the rule table its
//!   create payload is validated against.
//! - **[lettings_actor]** and **[profiles_actor]**: the two relation groups, each a
//!   single [`RelationActor`](relation_framework::RelationActor) that owns a parent
//!   type and its one-to-one child type. Creates, uniqueness checks and cascade deletes
//!   run as one step of that actor.
//! - **[clients]**: type-safe wrappers ([`LettingsClient`](clients::LettingsClient),
//!   [`ProfilesClient`](clients::ProfilesClient)) that hide the message passing.
//! - **[lifecycle]**: [`SiteSystem`](lifecycle::SiteSystem) starts and stops the actors;
//!   [`setup_tracing`](lifecycle::setup_tracing) installs the log subscriber.
//! - **[web]**: the axum [`router`](web::router) resolving `/lettings/` and `/profiles/`
//!   requests into store lookups.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=debug cargo run -- --seed-demo-data
//! curl http://127.0.0.1:8000/lettings/
//! ```

pub mod clients;
pub mod config;
pub mod lettings_actor;
pub mod lifecycle;
pub mod model;
pub mod profiles_actor;
pub mod seed;
pub mod web;
