//! Client core for managing the Countries resource.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `CountryManager` layers the
//! list and edit-form state on top and drives the host's `Transport`,
//! `Notifier` and `Confirmer`.
//!
//! # Design
//! - `CountryClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and testable without a server.
//! - The form mode is an explicit `FormMode`; the `0` id exists only on the
//!   wire.
//! - DTOs are defined independently from the mock-server crate; the
//!   integration test catches schema drift.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod manager;
pub mod notify;
pub mod transport;
pub mod types;
pub mod view;

pub use client::CountryClient;
pub use error::{ApiError, ManagerError, ValidationError};
pub use form::{CountryForm, FormMode};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use manager::{CountryManager, DeleteOutcome, RefreshOutcome, RefreshTicket};
pub use notify::{ConfirmPrompt, Confirmer, Notification, Notifier, Severity};
pub use transport::Transport;
pub use types::{Country, CountryId, UNSAVED_ID};
