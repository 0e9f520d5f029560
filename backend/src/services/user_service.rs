//! Read-side service for the registered users view.

use crate::store::Store;
use crate::store::models::User;

pub struct UserService<'a> {
    store: &'a Store,
}

impl<'a> UserService<'a> {
    pub fn new(store: &'a Store) -> Self {
        UserService { store }
    }

    /// Lists users, optionally filtered by a search term.
    ///
    /// Names and emails match case-insensitively; CPF and phone match by
    /// raw substring, so a masked fragment like "987.654" finds its owner.
    /// A blank term returns everyone.
    pub async fn list_users(&self, search: Option<&str>) -> Vec<User> {
        let users = self.store.list_users().await;

        let term = match search.map(str::trim) {
            Some(term) if !term.is_empty() => term,
            _ => return users,
        };

        let lowered = term.to_lowercase();
        users
            .into_iter()
            .filter(|user| {
                user.name.to_lowercase().contains(&lowered)
                    || user.email.to_lowercase().contains(&lowered)
                    || user.cpf.contains(term)
                    || user.phone.contains(term)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_search_returns_everyone() {
        let store = Store::seeded();
        let service = UserService::new(&store);
        assert_eq!(service.list_users(None).await.len(), 5);
        assert_eq!(service.list_users(Some("   ")).await.len(), 5);
    }

    #[tokio::test]
    async fn name_search_is_case_insensitive() {
        let store = Store::seeded();
        let service = UserService::new(&store);
        let found = service.list_users(Some("MARIA")).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Maria Santos");
    }

    #[tokio::test]
    async fn accented_names_match_lowercased_input() {
        let store = Store::seeded();
        let service = UserService::new(&store);
        let found = service.list_users(Some("joão")).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "João Silva");
    }

    #[tokio::test]
    async fn cpf_matches_by_raw_substring() {
        let store = Store::seeded();
        let service = UserService::new(&store);
        let found = service.list_users(Some("987.654")).await;
        assert!(found.iter().any(|u| u.name == "Maria Santos"));
    }

    #[tokio::test]
    async fn email_fragment_matches() {
        let store = Store::seeded();
        let service = UserService::new(&store);
        let found = service.list_users(Some("pedro.oliveira@")).await;
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn unmatched_term_returns_empty() {
        let store = Store::seeded();
        let service = UserService::new(&store);
        assert!(service.list_users(Some("zzz")).await.is_empty());
    }
}
