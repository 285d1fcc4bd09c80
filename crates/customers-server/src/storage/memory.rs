//! In-memory record store
//!
//! Holds the customer, state and user collections for the lifetime of the
//! process. Customers and users each sit behind one `RwLock`, so every
//! mutation is a single serialized step and readers get consistent
//! snapshots. Nothing is persisted.

use crate::services::pagination::{self, PageRequest};
use customers_types::{Customer, CustomerDraft, Page, State, User};
use tokio::sync::RwLock;

pub struct RecordStore {
    customers: RwLock<Vec<Customer>>,
    states: Vec<State>,
    users: RwLock<Vec<User>>,
}

impl RecordStore {
    pub fn new(customers: Vec<Customer>, states: Vec<State>, users: Vec<User>) -> Self {
        Self {
            customers: RwLock::new(customers),
            states,
            users: RwLock::new(users),
        }
    }

    /// All customers in insertion order
    pub async fn customers(&self) -> Vec<Customer> {
        self.customers.read().await.clone()
    }

    /// First customer with the given id
    pub async fn customer(&self, id: i64) -> Option<Customer> {
        self.customers
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub async fn page_customers(&self, request: PageRequest) -> Page<Customer> {
        let customers = self.customers.read().await;
        pagination::paginate(customers.as_slice(), request)
    }

    /// Append a new customer with id `max + 1` (1 for an empty collection).
    ///
    /// Id assignment and append happen under one write lock.
    pub async fn append_customer(&self, draft: CustomerDraft) -> Customer {
        let mut customers = self.customers.write().await;
        let id = customers.iter().map(|c| c.id).max().map_or(1, |max| max + 1);
        let customer = draft.into_customer(id);
        customers.push(customer.clone());
        customer
    }

    /// Apply `update` to the first customer with the given id and return the
    /// result.
    pub async fn update_customer(
        &self,
        id: i64,
        update: impl FnOnce(&mut Customer),
    ) -> Option<Customer> {
        let mut customers = self.customers.write().await;
        let customer = customers.iter_mut().find(|c| c.id == id)?;
        update(customer);
        Some(customer.clone())
    }

    /// Remove the first customer with the given id, returning it as it was.
    pub async fn remove_customer(&self, id: i64) -> Option<Customer> {
        let mut customers = self.customers.write().await;
        let index = customers.iter().position(|c| c.id == id)?;
        Some(customers.remove(index))
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub async fn user_holding_token(&self, token: &str) -> bool {
        self.users
            .read()
            .await
            .iter()
            .any(|u| u.token.as_deref() == Some(token))
    }

    /// Apply `update` to the first user whose email and password both match
    /// exactly, and return the result.
    pub async fn update_user_by_credentials(
        &self,
        email: &str,
        password: &str,
        update: impl FnOnce(&mut User),
    ) -> Option<User> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.email == email && u.password == password)?;
        update(user);
        Some(user.clone())
    }

    #[cfg(test)]
    pub async fn users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use customers_types::Gender;
    use std::sync::Arc;

    fn customer(id: i64, first_name: &str) -> Customer {
        CustomerDraft {
            first_name: first_name.to_string(),
            ..Default::default()
        }
        .into_customer(id)
    }

    fn user(id: i64, email: &str, password: &str) -> User {
        User {
            id,
            email: email.to_string(),
            password: password.to_string(),
            number_per_page: 10,
            token: None,
        }
    }

    #[tokio::test]
    async fn test_append_assigns_max_plus_one() {
        let store = RecordStore::new(
            vec![customer(1, "a"), customer(5, "b")],
            Vec::new(),
            Vec::new(),
        );

        let created = store
            .append_customer(CustomerDraft {
                first_name: "A".to_string(),
                ..Default::default()
            })
            .await;

        assert_eq!(created.id, 6);
        assert_eq!(created.gender, Gender::Female);
        assert_eq!(store.customers().await.len(), 3);
        assert_eq!(store.customer(6).await, Some(created));
    }

    #[tokio::test]
    async fn test_append_to_empty_starts_at_one() {
        let store = RecordStore::new(Vec::new(), Vec::new(), Vec::new());
        let created = store.append_customer(CustomerDraft::default()).await;
        assert_eq!(created.id, 1);
        assert_eq!(created.gender, Gender::Male);
    }

    #[tokio::test]
    async fn test_concurrent_appends_get_unique_ids() {
        let store = Arc::new(RecordStore::new(
            vec![customer(1, "a")],
            Vec::new(),
            Vec::new(),
        ));

        let mut handles = Vec::new();
        for _ in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append_customer(CustomerDraft::default()).await.id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (2..=21).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_update_and_remove_missing_id() {
        let store = RecordStore::new(vec![customer(1, "a")], Vec::new(), Vec::new());

        assert!(store
            .update_customer(9, |c| c.first_name = "z".to_string())
            .await
            .is_none());
        assert!(store.remove_customer(9).await.is_none());
        assert_eq!(store.customers().await, vec![customer(1, "a")]);
    }

    #[tokio::test]
    async fn test_remove_returns_snapshot() {
        let store = RecordStore::new(
            vec![customer(1, "a"), customer(2, "b")],
            Vec::new(),
            Vec::new(),
        );

        let removed = store.remove_customer(1).await;
        assert_eq!(removed, Some(customer(1, "a")));
        assert!(store.customer(1).await.is_none());
        assert_eq!(store.customers().await.len(), 1);
    }

    #[tokio::test]
    async fn test_user_credentials_and_tokens() {
        let store = RecordStore::new(
            Vec::new(),
            Vec::new(),
            vec![user(1, "a@b.com", "pw"), user(2, "c@d.com", "pw")],
        );

        assert!(store
            .update_user_by_credentials("a@b.com", "wrong", |_| {})
            .await
            .is_none());

        let updated = store
            .update_user_by_credentials("c@d.com", "pw", |u| {
                u.token = Some("tok".to_string())
            })
            .await
            .unwrap();
        assert_eq!(updated.id, 2);
        assert!(store.user_holding_token("tok").await);
        assert!(!store.user_holding_token("other").await);
    }
}
