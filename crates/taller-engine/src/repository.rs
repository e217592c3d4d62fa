use taller_types::{Record, RecordId};

/// Storage seam behind an entity store.
///
/// Writes are whole-list replacements: the store computes the next list and
/// hands it over, so an implementation never mutates records in place.
pub trait Repository {
    /// Records in display order
    fn records(&self) -> &[Record];

    /// Replace the whole list
    fn replace_all(&mut self, records: Vec<Record>);

    fn get(&self, id: RecordId) -> Option<&Record> {
        self.records().iter().find(|r| r.id == id)
    }

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// `max(existing ids) + 1`, or 1 when empty
    fn next_id(&self) -> RecordId {
        RecordId::next_after(self.records().iter().map(|r| r.id))
    }
}

/// Process-local list seeded from hard-coded data; lost when dropped
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Vec<Record>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl Repository for InMemoryRepository {
    fn records(&self) -> &[Record] {
        &self.records
    }

    fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taller_types::Fields;

    #[test]
    fn test_next_id_on_empty_repository() {
        assert_eq!(InMemoryRepository::new().next_id(), RecordId::new(1));
    }

    #[test]
    fn test_get_and_next_id_on_seeded_repository() {
        let repo = InMemoryRepository::seeded(vec![
            Record::new(RecordId::new(2), Fields::new()),
            Record::new(RecordId::new(5), Fields::new()),
        ]);
        assert_eq!(repo.len(), 2);
        assert!(repo.get(RecordId::new(5)).is_some());
        assert!(repo.get(RecordId::new(3)).is_none());
        assert_eq!(repo.next_id(), RecordId::new(6));
    }
}
