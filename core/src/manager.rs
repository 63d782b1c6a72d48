//! Client-side CRUD synchronization for the Countries collection.
//!
//! # Overview
//! `CountryManager` owns the displayed list and the edit form, and keeps the
//! list in step with the backend. It never edits the list locally: every
//! successful mutation is followed by one full re-fetch, so the list is a
//! read-through cache of whatever the backend last returned.
//!
//! # Design
//! - Every remote call ends in a `Result`; failures emit exactly one error
//!   toast and leave the list and form untouched.
//! - Refreshes are tagged with a monotonically increasing sequence number.
//!   A response older than the last applied one is discarded, so a late
//!   reply cannot overwrite newer data. `begin_refresh` / `apply_refresh`
//!   expose the two halves for hosts that run requests concurrently.
//! - Deleting the record currently being edited resets the form.

use tracing::{debug, info, warn};

use crate::client::CountryClient;
use crate::error::{ApiError, ManagerError};
use crate::form::{CountryForm, FormMode};
use crate::http::{HttpRequest, HttpResponse};
use crate::notify::{
    ConfirmPrompt, Confirmer, Notification, Notifier, MSG_ADDED, MSG_DELETED, MSG_DELETE_FAILED,
    MSG_LOAD_FAILED, MSG_SAVE_FAILED, MSG_UPDATED,
};
use crate::transport::Transport;
use crate::types::{Country, CountryId};

/// A list request paired with its sequence number.
#[derive(Debug, Clone)]
pub struct RefreshTicket {
    pub seq: u64,
    pub request: HttpRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The list was replaced; carries the new length.
    Applied(usize),
    /// A newer response was already applied; this one was dropped.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

pub struct CountryManager<T, N, C> {
    client: CountryClient,
    transport: T,
    notifier: N,
    confirmer: C,
    countries: Vec<Country>,
    form: CountryForm,
    issued_seq: u64,
    applied_seq: u64,
}

impl<T, N, C> CountryManager<T, N, C>
where
    T: Transport,
    N: Notifier,
    C: Confirmer,
{
    pub fn new(client: CountryClient, transport: T, notifier: N, confirmer: C) -> Self {
        Self {
            client,
            transport,
            notifier,
            confirmer,
            countries: Vec::new(),
            form: CountryForm::default(),
            issued_seq: 0,
            applied_seq: 0,
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn form(&self) -> &CountryForm {
        &self.form
    }

    pub fn client(&self) -> &CountryClient {
        &self.client
    }

    /// Initial load.
    pub async fn mount(&mut self) -> Result<RefreshOutcome, ManagerError> {
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> Result<RefreshOutcome, ManagerError> {
        let ticket = self.begin_refresh();
        let result = self.send(ticket.request.clone()).await;
        self.apply_refresh(ticket, result)
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued_seq += 1;
        RefreshTicket {
            seq: self.issued_seq,
            request: self.client.build_list_countries(),
        }
    }

    /// Apply the result of a list request issued by `begin_refresh`.
    ///
    /// A ticket this manager never issued is dropped like a stale one.
    pub fn apply_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<HttpResponse, ApiError>,
    ) -> Result<RefreshOutcome, ManagerError> {
        let seq = ticket.seq;
        if seq > self.issued_seq {
            warn!(seq, issued = self.issued_seq, "discarding country list for unknown refresh");
            return Ok(RefreshOutcome::Stale);
        }
        if seq <= self.applied_seq {
            warn!(seq, applied = self.applied_seq, "discarding stale country list");
            return Ok(RefreshOutcome::Stale);
        }
        match result.and_then(|response| self.client.parse_list_countries(response)) {
            Ok(countries) => {
                self.applied_seq = seq;
                self.countries = countries;
                info!(seq, count = self.countries.len(), "country list refreshed");
                Ok(RefreshOutcome::Applied(self.countries.len()))
            }
            Err(err) => Err(self.report(MSG_LOAD_FAILED, err)),
        }
    }

    /// Typing into the name input.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn select_for_edit(&mut self, country: &Country) {
        self.form = CountryForm::from_country(country);
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    /// Create or update depending on the form mode.
    ///
    /// On success the form is reset and the list re-fetched. A failed
    /// re-fetch is reported on its own and does not fail the save.
    pub async fn save(&mut self) -> Result<Option<Country>, ManagerError> {
        if let Err(err) = self.form.validate() {
            self.notifier.notify(Notification::warning(err.to_string()));
            return Err(err.into());
        }

        let payload = self.form.to_payload();
        let (result, message) = match self.form.mode {
            FormMode::Create => (self.create(&payload).await, MSG_ADDED),
            FormMode::Edit(id) => (self.update(id, &payload).await, MSG_UPDATED),
        };
        let saved = match result {
            Ok(saved) => saved,
            Err(err) => return Err(self.report(MSG_SAVE_FAILED, err)),
        };

        info!(id = payload.id, name = %payload.name, "{message}");
        self.notifier.notify(Notification::success(message));
        self.form.reset();
        if let Err(err) = self.refresh().await {
            warn!(%err, "refresh after save failed");
        }
        Ok(saved)
    }

    pub async fn delete_record(&mut self, id: CountryId) -> Result<DeleteOutcome, ManagerError> {
        if !self.confirmer.confirm(&ConfirmPrompt::delete_country()).await {
            debug!(id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let request = self.client.build_delete_country(id);
        let result = match self.send(request).await {
            Ok(response) => self.client.parse_delete_country(response),
            Err(err) => Err(err),
        };
        if let Err(err) = result {
            return Err(self.report(MSG_DELETE_FAILED, err));
        }

        info!(id, "{MSG_DELETED}");
        self.notifier.notify(Notification::success(MSG_DELETED));
        if self.form.is_editing(id) {
            self.form.reset();
        }
        if let Err(err) = self.refresh().await {
            warn!(%err, "refresh after delete failed");
        }
        Ok(DeleteOutcome::Deleted)
    }

    async fn create(&self, payload: &Country) -> Result<Option<Country>, ApiError> {
        let request = self.client.build_create_country(payload)?;
        let response = self.send(request).await?;
        self.client.parse_create_country(response)
    }

    async fn update(&self, id: CountryId, payload: &Country) -> Result<Option<Country>, ApiError> {
        let request = self.client.build_update_country(id, payload)?;
        let response = self.send(request).await?;
        self.client.parse_update_country(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        self.transport.execute(request).await
    }

    fn report(&self, context: &str, err: ApiError) -> ManagerError {
        warn!(%err, "{context}");
        self.notifier
            .notify(Notification::error(format!("{context}: {err}")));
        ManagerError::Api(err)
    }
}
