//! Candidate list and candidate operations.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row, Transaction};

use super::todo_queries::timestamp_column;
use crate::{
    error::{AgendaError, DatabaseResultExt, Result},
    models::{Candidate, CandidateList, ListSummary, NewCandidate},
};

const INSERT_LIST_SQL: &str = "INSERT INTO candidate_lists (user_id, name, description, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_LIST_SQL: &str = "SELECT id, user_id, name, description, created_at, updated_at FROM candidate_lists WHERE id = ?1 AND user_id = ?2";
const SELECT_LIST_SUMMARIES_SQL: &str = "SELECT l.id, l.name, l.description, l.created_at, COUNT(c.id), COALESCE(SUM(c.weight), 0) FROM candidate_lists l LEFT JOIN candidates c ON c.list_id = l.id WHERE l.user_id = ?1 GROUP BY l.id ORDER BY l.id";
const DELETE_LIST_SQL: &str = "DELETE FROM candidate_lists WHERE id = ?1 AND user_id = ?2";
const INSERT_CANDIDATE_SQL: &str =
    "INSERT INTO candidates (list_id, label, weight, created_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_CANDIDATES_SQL: &str = "SELECT id, list_id, label, weight, created_at FROM candidates WHERE list_id = ?1 ORDER BY id";
const SELECT_OWNED_CANDIDATE_SQL: &str = "SELECT c.id, c.list_id, c.label, c.weight, c.created_at FROM candidates c JOIN candidate_lists l ON l.id = c.list_id WHERE c.id = ?1 AND l.user_id = ?2";
const DELETE_CANDIDATE_SQL: &str = "DELETE FROM candidates WHERE id = ?1";
const TOUCH_LIST_SQL: &str = "UPDATE candidate_lists SET updated_at = ?1 WHERE id = ?2";

impl super::Database {
    fn build_list_from_row(row: &Row) -> rusqlite::Result<CandidateList> {
        Ok(CandidateList {
            id: row.get::<_, i64>(0)? as u64,
            user_id: row.get(1)?,
            name: row.get(2)?,
            description: row.get(3)?,
            candidates: Vec::new(),
            created_at: timestamp_column(row, 4)?,
            updated_at: timestamp_column(row, 5)?,
        })
    }

    fn build_candidate_from_row(row: &Row) -> rusqlite::Result<Candidate> {
        Ok(Candidate {
            id: row.get::<_, i64>(0)? as u64,
            list_id: row.get::<_, i64>(1)? as u64,
            label: row.get(2)?,
            weight: row.get::<_, i64>(3)? as u32,
            created_at: timestamp_column(row, 4)?,
        })
    }

    /// Loads an owned list (without candidates) inside a transaction.
    fn owned_list(tx: &Transaction, user_id: &str, list_id: u64) -> Result<CandidateList> {
        tx.query_row(
            SELECT_LIST_SQL,
            params![list_id as i64, user_id],
            Self::build_list_from_row,
        )
        .optional()
        .db_context("Failed to query list")?
        .ok_or(AgendaError::ListNotFound { id: list_id })
    }

    /// Creates an empty candidate list.
    pub fn create_list(
        &mut self,
        user_id: &str,
        name: &str,
        description: Option<&str>,
        now: Timestamp,
    ) -> Result<CandidateList> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = now.to_string();
        tx.execute(
            INSERT_LIST_SQL,
            params![user_id, name, description, &now_str, &now_str],
        )
        .db_context("Failed to insert list")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(CandidateList {
            id,
            user_id: user_id.to_string(),
            name: name.to_string(),
            description: description.map(String::from),
            candidates: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a list with its candidates.
    pub fn get_list(&self, user_id: &str, list_id: u64) -> Result<Option<CandidateList>> {
        let list = self
            .connection
            .query_row(
                SELECT_LIST_SQL,
                params![list_id as i64, user_id],
                Self::build_list_from_row,
            )
            .optional()
            .db_context("Failed to query list")?;

        // Eagerly load candidates if the list exists
        match list {
            Some(mut list) => {
                list.candidates = self.get_candidates(list.id)?;
                Ok(Some(list))
            }
            None => Ok(None),
        }
    }

    fn get_candidates(&self, list_id: u64) -> Result<Vec<Candidate>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CANDIDATES_SQL)
            .db_context("Failed to prepare query")?;

        let candidates = stmt
            .query_map(params![list_id as i64], Self::build_candidate_from_row)
            .db_context("Failed to query candidates")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch candidates")?;

        Ok(candidates)
    }

    /// Lists the candidate lists of `user_id` with candidate counts.
    pub fn list_lists(&self, user_id: &str) -> Result<Vec<ListSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LIST_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map(params![user_id], |row| {
                Ok(ListSummary {
                    id: row.get::<_, i64>(0)? as u64,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    created_at: timestamp_column(row, 3)?,
                    candidate_count: row.get::<_, i64>(4)? as u32,
                    total_weight: row.get::<_, i64>(5)? as u64,
                })
            })
            .db_context("Failed to query lists")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch lists")?;

        Ok(summaries)
    }

    /// Deletes a list together with its candidates and returns it.
    pub fn delete_list(&mut self, user_id: &str, list_id: u64) -> Result<CandidateList> {
        let list = self
            .get_list(user_id, list_id)?
            .ok_or(AgendaError::ListNotFound { id: list_id })?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        // Candidates go with the list through ON DELETE CASCADE
        let deleted = tx
            .execute(DELETE_LIST_SQL, params![list_id as i64, user_id])
            .db_context("Failed to delete list")?;
        if deleted == 0 {
            return Err(AgendaError::ListNotFound { id: list_id });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(list)
    }

    /// Adds a candidate to an owned list.
    pub fn add_candidate(
        &mut self,
        user_id: &str,
        candidate: &NewCandidate,
        now: Timestamp,
    ) -> Result<Candidate> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let list = Self::owned_list(&tx, user_id, candidate.list_id)?;

        let now_str = now.to_string();
        tx.execute(
            INSERT_CANDIDATE_SQL,
            params![
                list.id as i64,
                &candidate.label,
                i64::from(candidate.weight),
                &now_str
            ],
        )
        .db_context("Failed to insert candidate")?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(TOUCH_LIST_SQL, params![&now_str, list.id as i64])
            .db_context("Failed to update list timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Candidate {
            id,
            list_id: list.id,
            label: candidate.label.clone(),
            weight: candidate.weight,
            created_at: now,
        })
    }

    /// Removes a candidate from an owned list and returns it.
    pub fn remove_candidate(
        &mut self,
        user_id: &str,
        candidate_id: u64,
        now: Timestamp,
    ) -> Result<Candidate> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let candidate = tx
            .query_row(
                SELECT_OWNED_CANDIDATE_SQL,
                params![candidate_id as i64, user_id],
                Self::build_candidate_from_row,
            )
            .optional()
            .db_context("Failed to query candidate")?
            .ok_or(AgendaError::CandidateNotFound { id: candidate_id })?;

        tx.execute(DELETE_CANDIDATE_SQL, params![candidate_id as i64])
            .db_context("Failed to delete candidate")?;

        tx.execute(
            TOUCH_LIST_SQL,
            params![now.to_string(), candidate.list_id as i64],
        )
        .db_context("Failed to update list timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(candidate)
    }
}
