//! Candidate list and wheel operations for the Agenda.

use super::Agenda;
use crate::{
    display::ListSummaries,
    error::{AgendaError, Result},
    models::{Candidate, CandidateList, NewCandidate, WheelDraw},
    params::{require_text, AddCandidate, CreateList, Id},
    wheel,
};

impl Agenda {
    /// Creates an empty candidate list.
    pub async fn create_list(&self, owner: &str, params: &CreateList) -> Result<CandidateList> {
        let name = require_text("name", &params.name)?;
        let description = params
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from);
        let now = self.now();
        let owner = owner.to_string();

        self.with_database(move |db| db.create_list(&owner, &name, description.as_deref(), now))
            .await
    }

    /// Retrieves a list together with its candidates.
    pub async fn get_list(&self, owner: &str, params: &Id) -> Result<Option<CandidateList>> {
        let owner = owner.to_string();
        let list_id = params.id;

        self.with_database(move |db| db.get_list(&owner, list_id))
            .await
    }

    /// Lists all candidate lists of `owner`.
    pub async fn list_lists(&self, owner: &str) -> Result<ListSummaries> {
        let owner = owner.to_string();

        let lists = self
            .with_database(move |db| db.list_lists(&owner))
            .await?;

        Ok(ListSummaries(lists))
    }

    /// Deletes a list and all of its candidates.
    pub async fn delete_list(&self, owner: &str, params: &Id) -> Result<CandidateList> {
        let owner = owner.to_string();
        let list_id = params.id;

        self.with_database(move |db| db.delete_list(&owner, list_id))
            .await
    }

    /// Adds a weighted candidate to a list.
    pub async fn add_candidate(&self, owner: &str, params: &AddCandidate) -> Result<Candidate> {
        let candidate = NewCandidate::try_from(params)?;
        let now = self.now();
        let owner = owner.to_string();

        self.with_database(move |db| db.add_candidate(&owner, &candidate, now))
            .await
    }

    /// Removes a candidate by its own ID.
    pub async fn remove_candidate(&self, owner: &str, params: &Id) -> Result<Candidate> {
        let now = self.now();
        let owner = owner.to_string();
        let candidate_id = params.id;

        self.with_database(move |db| db.remove_candidate(&owner, candidate_id, now))
            .await
    }

    /// Spins the wheel of a list, drawing one candidate by weight.
    pub async fn spin_wheel(&self, owner: &str, params: &Id) -> Result<WheelDraw> {
        let list = self
            .get_list(owner, params)
            .await?
            .ok_or(AgendaError::ListNotFound { id: params.id })?;

        let draw = wheel::spin(&list, &mut rand::thread_rng())?;
        log::debug!(
            "Spun list {} and drew candidate {} (p = {:.3})",
            list.id,
            draw.candidate.id,
            draw.probability
        );
        Ok(draw)
    }
}
