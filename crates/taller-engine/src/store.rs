use std::sync::Arc;

use taller_types::{EntitySchema, Fields, Record, RecordId};
use tracing::{debug, info};

use crate::repository::{InMemoryRepository, Repository};
use crate::validation::ValidationErrors;
use crate::{Error, Result};

/// The records of one entity plus the three mutating operations
#[derive(Debug, Clone)]
pub struct EntityStore<R = InMemoryRepository> {
    schema: Arc<EntitySchema>,
    repo: R,
}

impl<R: Repository> EntityStore<R> {
    pub fn new(schema: Arc<EntitySchema>, repo: R) -> Self {
        Self { schema, repo }
    }

    pub fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        self.repo.records()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.repo.get(id)
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Append a new record under the next id
    pub fn create(&mut self, input: Fields) -> Result<Record> {
        self.check_required(&input)?;

        let record = Record::new(self.repo.next_id(), input);
        let mut next = self.repo.records().to_vec();
        next.push(record.clone());
        self.repo.replace_all(next);

        info!(entity = %self.schema.kind, id = %record.id, "record created");
        Ok(record)
    }

    /// Replace the fields of the record with `id`, keeping the id.
    /// Returns `None` without touching the list when nothing matches.
    pub fn update(&mut self, id: RecordId, input: Fields) -> Result<Option<Record>> {
        self.check_required(&input)?;

        if self.repo.get(id).is_none() {
            debug!(entity = %self.schema.kind, %id, "update skipped, no such record");
            return Ok(None);
        }

        let updated = Record::new(id, input);
        let next = self
            .repo
            .records()
            .iter()
            .map(|r| if r.id == id { updated.clone() } else { r.clone() })
            .collect();
        self.repo.replace_all(next);

        info!(entity = %self.schema.kind, %id, "record updated");
        Ok(Some(updated))
    }

    /// Remove every record whose id is in `ids`; returns how many were removed
    pub fn delete(&mut self, ids: &[RecordId]) -> Result<usize> {
        if ids.is_empty() {
            return Err(Error::EmptyDeleteSet);
        }

        let before = self.repo.len();
        let next: Vec<Record> = self
            .repo
            .records()
            .iter()
            .filter(|r| !ids.contains(&r.id))
            .cloned()
            .collect();
        let removed = before - next.len();
        self.repo.replace_all(next);

        info!(entity = %self.schema.kind, removed, "records deleted");
        Ok(removed)
    }

    fn check_required(&self, input: &Fields) -> Result<()> {
        let missing = self.schema.missing_required(input);
        if missing.is_empty() {
            return Ok(());
        }

        let mut errors = ValidationErrors::new();
        for spec in missing {
            errors.push(spec.key, spec.message.unwrap_or("Este campo es obligatorio"));
        }
        Err(Error::Validation(errors))
    }
}
