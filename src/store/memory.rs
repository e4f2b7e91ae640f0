use super::TicketStore;
use crate::error::AppError;
use crate::model::{NewTicket, Ticket, DEFAULT_STATUS};
use async_trait::async_trait;
use std::sync::RwLock;

#[derive(Default)]
struct Inner {
    rows: Vec<Ticket>,
    last_id: i32,
}

/// In-process `TicketStore`. Rows are kept in id order; ids are never reused.
#[derive(Default)]
pub struct MemoryTicketStore {
    inner: RwLock<Inner>,
}

impl MemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned<T>(_: T) -> AppError {
    AppError::Internal("ticket store lock poisoned".into())
}

fn clamp(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

#[async_trait]
impl TicketStore for MemoryTicketStore {
    async fn create(&self, new: &NewTicket) -> Result<Ticket, AppError> {
        let mut guard = self.inner.write().map_err(lock_poisoned)?;
        guard.last_id = guard
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("ticket id space exhausted".into()))?;
        let ticket = Ticket {
            id: guard.last_id,
            title: new.title.clone(),
            description: new.description.clone(),
            status: DEFAULT_STATUS.to_string(),
        };
        guard.rows.push(ticket.clone());
        Ok(ticket)
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Ticket>, AppError> {
        let guard = self.inner.read().map_err(lock_poisoned)?;
        Ok(guard
            .rows
            .iter()
            .skip(clamp(skip))
            .take(clamp(limit))
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Ticket>, AppError> {
        let guard = self.inner.read().map_err(lock_poisoned)?;
        Ok(guard.rows.iter().find(|t| i64::from(t.id) == id).cloned())
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<Option<Ticket>, AppError> {
        let mut guard = self.inner.write().map_err(lock_poisoned)?;
        Ok(guard
            .rows
            .iter_mut()
            .find(|t| i64::from(t.id) == id)
            .map(|t| {
                t.status = status.to_string();
                t.clone()
            }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_ticket(title: &str) -> NewTicket {
        NewTicket {
            title: title.into(),
            description: "d".into(),
        }
    }

    #[tokio::test]
    async fn ids_are_fresh_and_status_defaults() {
        let store = MemoryTicketStore::new();
        let a = store.create(&new_ticket("same")).await.unwrap();
        let b = store.create(&new_ticket("same")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.status, "todo");
        assert_eq!(store.get(b.id.into()).await.unwrap(), Some(b));
    }

    #[tokio::test]
    async fn list_pages_in_insertion_order() {
        let store = MemoryTicketStore::new();
        for i in 0..5 {
            store.create(&new_ticket(&format!("t{}", i))).await.unwrap();
        }
        let page = store.list(1, 2).await.unwrap();
        let titles: Vec<_> = page.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["t1", "t2"]);
        assert!(store.list(10, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_of_missing_ticket_writes_nothing() {
        let store = MemoryTicketStore::new();
        let t = store.create(&new_ticket("a")).await.unwrap();
        assert_eq!(store.update_status(99999, "done").await.unwrap(), None);
        assert_eq!(store.get(t.id.into()).await.unwrap().unwrap().status, "todo");
    }
}
