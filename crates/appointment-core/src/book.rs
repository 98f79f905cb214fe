//! Appointment Book
//!
//! The single owner of the appointment list. Holds the canonical list, the
//! filtered view over it, pagination over that view, the new-appointment
//! draft and the edit buffer. Every successful mutation writes the whole list
//! back to storage and recomputes the filtered view.
//!
//! Rows are addressed by their index in the filtered view (what the user
//! clicked), then resolved to the canonical entry through its id.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::BookConfig;
use crate::domain::{parse_date, Appointment, StoreResult};
use crate::pagination::Pagination;
use crate::storage::{codec, KeyValueStore};

/// Result of a user-driven operation. Invalid input is `Ignored`, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

/// Text of the new-appointment form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub date: String,
}

/// Staged edit of one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    /// Filtered-view index the edit was opened from
    pub view_index: usize,
    /// Entry being edited
    pub id: i64,
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
}

#[derive(Debug)]
pub struct AppointmentBook<S> {
    storage: S,
    config: BookConfig,
    appointments: Vec<Appointment>,
    /// Canonical indices of the entries matching `search_term`, in list order
    filtered: Vec<usize>,
    search_term: String,
    pagination: Pagination,
    draft: Draft,
    edit: Option<EditBuffer>,
    /// Highest id handed out or loaded
    last_id: i64,
}

impl<S: KeyValueStore> AppointmentBook<S> {
    /// Load the persisted list. Missing or unreadable data gives an empty book;
    /// only a failing storage backend is an error.
    pub fn load(storage: S, config: BookConfig) -> StoreResult<Self> {
        let appointments = match storage.get(&config.storage_key)? {
            None => Vec::new(),
            Some(raw) => match codec::decode(&raw) {
                Ok(list) => list,
                Err(err) => {
                    warn!(key = %config.storage_key, error = %err, "discarding unreadable appointments");
                    Vec::new()
                }
            },
        };
        info!(count = appointments.len(), "appointments loaded");
        Ok(Self::with_appointments(storage, config, appointments))
    }

    /// Book with nothing loaded
    pub fn empty(storage: S, config: BookConfig) -> Self {
        Self::with_appointments(storage, config, Vec::new())
    }

    fn with_appointments(storage: S, config: BookConfig, appointments: Vec<Appointment>) -> Self {
        let pagination = Pagination::new(config.items_per_page);
        let mut book = Self {
            storage,
            config,
            appointments: sanitize(appointments),
            filtered: Vec::new(),
            search_term: String::new(),
            pagination,
            draft: Draft::default(),
            edit: None,
            last_id: 0,
        };
        book.last_id = book.appointments.iter().map(|a| a.id).max().unwrap_or(0);
        book.filtered = (0..book.appointments.len()).collect();
        book.update_pagination();
        book
    }

    // ========================
    // Read Views
    // ========================

    /// Canonical list
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn filtered_appointments(&self) -> Vec<&Appointment> {
        self.filtered.iter().map(|&i| &self.appointments[i]).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Rows of the filtered view on the current page
    pub fn paginated_appointments(&self) -> Vec<&Appointment> {
        self.filtered[self.pagination.range(self.filtered.len())]
            .iter()
            .map(|&i| &self.appointments[i])
            .collect()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        self.edit.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    /// Filtered-view index of the first row on the current page
    pub fn page_offset(&self) -> usize {
        self.pagination.offset()
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        self.pagination.page_numbers()
    }

    pub fn has_next_page(&self) -> bool {
        self.pagination.has_next()
    }

    pub fn has_prev_page(&self) -> bool {
        self.pagination.has_prev()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ========================
    // Add
    // ========================

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_date(&mut self, date: impl Into<String>) {
        self.draft.date = date.into();
    }

    /// Add the drafted appointment; the form is cleared only if it was accepted
    pub fn submit_draft(&mut self) -> StoreResult<Outcome> {
        let Draft { title, date } = self.draft.clone();
        let outcome = self.add_appointment(&title, &date)?;
        if outcome.is_applied() {
            self.draft = Draft::default();
        }
        Ok(outcome)
    }

    /// Append a new appointment. Blank title or missing/unparseable date is ignored.
    pub fn add_appointment(&mut self, title: &str, date_text: &str) -> StoreResult<Outcome> {
        if title.trim().is_empty() {
            return Ok(Outcome::Ignored);
        }
        let Some(date) = parse_date(date_text) else {
            return Ok(Outcome::Ignored);
        };

        let id = self.next_id();
        self.appointments.push(Appointment::new(id, title.to_string(), date));
        debug!(id, "appointment added");
        self.commit()?;
        Ok(Outcome::Applied)
    }

    // ========================
    // Delete
    // ========================

    /// Remove the row at `view_index` of the filtered view
    pub fn delete_appointment(&mut self, view_index: usize) -> StoreResult<Outcome> {
        let Some(position) = self.id_at(view_index).and_then(|id| self.position_of(id)) else {
            debug!(view_index, "delete ignored: no such row");
            return Ok(Outcome::Ignored);
        };

        let removed = self.appointments.remove(position);
        debug!(id = removed.id, "appointment deleted");
        self.commit()?;
        Ok(Outcome::Applied)
    }

    // ========================
    // Edit
    // ========================

    /// Stage the row at `view_index` into the edit buffer
    pub fn open_edit_modal(&mut self, view_index: usize) -> Outcome {
        let Some(&position) = self.filtered.get(view_index) else {
            return Outcome::Ignored;
        };
        let entry = &self.appointments[position];
        self.edit = Some(EditBuffer {
            view_index,
            id: entry.id,
            title: entry.title.clone(),
            date: entry.date_input_value(),
        });
        Outcome::Applied
    }

    pub fn set_edit_title(&mut self, title: impl Into<String>) {
        if let Some(edit) = self.edit.as_mut() {
            edit.title = title.into();
        }
    }

    pub fn set_edit_date(&mut self, date: impl Into<String>) {
        if let Some(edit) = self.edit.as_mut() {
            edit.date = date.into();
        }
    }

    /// Drop the staged edit without touching the list
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Commit the edit buffer. `Applied` means the edit dialog should close.
    ///
    /// If the staged entry no longer exists the call is ignored and the buffer
    /// is left staged.
    pub fn update_appointment(&mut self) -> StoreResult<Outcome> {
        let Some(edit) = self.edit.as_ref() else {
            return Ok(Outcome::Ignored);
        };
        if edit.title.trim().is_empty() {
            return Ok(Outcome::Ignored);
        }
        let Some(date) = parse_date(&edit.date) else {
            return Ok(Outcome::Ignored);
        };
        let (id, title) = (edit.id, edit.title.clone());
        let Some(position) = self.position_of(id) else {
            debug!(id, "update ignored: entry is gone");
            return Ok(Outcome::Ignored);
        };

        let entry = &mut self.appointments[position];
        entry.title = title;
        entry.date = date;
        debug!(id, "appointment updated");
        self.commit()?;
        self.edit = None;
        Ok(Outcome::Applied)
    }

    // ========================
    // Search
    // ========================

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.filter_appointments();
    }

    /// Recompute the filtered view from the search term and go back to page 1
    pub fn filter_appointments(&mut self) {
        let term = self.search_term.trim().to_lowercase();
        self.filtered = self
            .appointments
            .iter()
            .enumerate()
            .filter(|(_, a)| a.matches(&term))
            .map(|(i, _)| i)
            .collect();
        self.pagination.reset();
        self.update_pagination();
    }

    // ========================
    // Pagination
    // ========================

    pub fn update_pagination(&mut self) {
        self.pagination.update(self.filtered.len());
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page);
    }

    pub fn next_page(&mut self) {
        self.pagination.next();
    }

    pub fn prev_page(&mut self) {
        self.pagination.prev();
    }

    // ========================
    // Internals
    // ========================

    fn id_at(&self, view_index: usize) -> Option<i64> {
        self.filtered
            .get(view_index)
            .map(|&i| self.appointments[i].id)
    }

    fn position_of(&self, id: i64) -> Option<usize> {
        self.appointments.iter().position(|a| a.id == id)
    }

    /// Millisecond timestamp, bumped past the last id when the clock has not moved on
    ///
    /// Once the watermark sits at `i64::MAX` ids come from the lowest free value.
    fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.last_id.checked_add(1) {
            Some(next) => {
                self.last_id = now.max(next);
                self.last_id
            }
            None => {
                let taken: HashSet<i64> = self.appointments.iter().map(|a| a.id).collect();
                lowest_free_id(&taken)
            }
        }
    }

    /// Persist, then refresh the filtered view whether or not the write succeeded
    fn commit(&mut self) -> StoreResult<()> {
        let saved = self.persist();
        self.filter_appointments();
        saved
    }

    fn persist(&mut self) -> StoreResult<()> {
        let raw = codec::encode(&self.appointments)?;
        self.storage.set(&self.config.storage_key, &raw)
    }
}

/// Drop blank-titled entries and give duplicate ids fresh values
fn sanitize(appointments: Vec<Appointment>) -> Vec<Appointment> {
    let mut taken: HashSet<i64> = appointments.iter().map(|a| a.id).collect();
    let mut max_id = appointments.iter().map(|a| a.id).max().unwrap_or(0);
    let mut seen = HashSet::new();
    appointments
        .into_iter()
        .filter(|a| {
            let keep = !a.title.trim().is_empty();
            if !keep {
                warn!(id = a.id, "dropping appointment with blank title");
            }
            keep
        })
        .map(|mut a| {
            if !seen.insert(a.id) {
                let fresh = max_id
                    .checked_add(1)
                    .filter(|id| !taken.contains(id))
                    .unwrap_or_else(|| lowest_free_id(&taken));
                warn!(old = a.id, new = fresh, "reassigning duplicate appointment id");
                max_id = max_id.max(fresh);
                taken.insert(fresh);
                seen.insert(fresh);
                a.id = fresh;
            }
            a
        })
        .collect()
}

/// Smallest positive id not in `taken`
fn lowest_free_id(taken: &HashSet<i64>) -> i64 {
    (1..=i64::MAX).find(|id| !taken.contains(id)).unwrap_or(i64::MIN)
}
