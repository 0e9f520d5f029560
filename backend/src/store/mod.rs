//! In-memory store for the dashboard working set.
//!
//! This module is the persistence seam of the application. The reference
//! deployment keeps lots, gates, and users in process memory, seeded from
//! the demo dataset; all mutation goes through the methods here so the
//! `connected_gates <= total_gates` invariant can be re-established after
//! every gate change.

use crate::store::models::{CreateUser, Gate, ParkingLot, User};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

pub mod models;
pub mod seed;

pub struct Store {
    users: RwLock<Vec<User>>,
    lots: RwLock<Vec<ParkingLot>>,
    gates: RwLock<HashMap<String, Vec<Gate>>>,
}

impl Store {
    /// Creates a store preloaded with the demo dataset.
    pub fn seeded() -> Self {
        Store {
            users: RwLock::new(seed::users()),
            lots: RwLock::new(seed::parking_lots()),
            gates: RwLock::new(seed::gates()),
        }
    }

    /// Creates an empty store.
    pub fn empty() -> Self {
        Store {
            users: RwLock::new(Vec::new()),
            lots: RwLock::new(Vec::new()),
            gates: RwLock::new(HashMap::new()),
        }
    }

    // --- users ---

    pub async fn list_users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    pub async fn get_user_by_id(&self, id: &str) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    pub async fn cpf_exists(&self, cpf: &str) -> bool {
        self.users.read().await.iter().any(|u| u.cpf == cpf)
    }

    /// Inserts a new user. Uniqueness checks belong to the service layer.
    pub async fn create_user(&self, data: CreateUser) -> User {
        let user = User {
            id: Uuid::now_v7().to_string(),
            name: data.name,
            email: data.email,
            cpf: data.cpf,
            phone: data.phone,
            birth_date: data.birth_date,
            address: data.address,
            created_at: Utc::now(),
            password_hash: data.password_hash,
        };
        self.users.write().await.push(user.clone());
        user
    }

    // --- lots ---

    pub async fn list_lots(&self) -> Vec<ParkingLot> {
        self.lots.read().await.clone()
    }

    pub async fn get_lot(&self, id: &str) -> Option<ParkingLot> {
        self.lots.read().await.iter().find(|l| l.id == id).cloned()
    }

    /// Replaces the whole lot working set, keeping gate collections intact.
    pub async fn replace_lots(&self, lots: Vec<ParkingLot>) {
        *self.lots.write().await = lots;
    }

    /// Stamps `last_update` on a single lot. Returns false when unknown.
    pub async fn touch_lot(&self, id: &str, now: DateTime<Utc>) -> bool {
        let mut lots = self.lots.write().await;
        match lots.iter_mut().find(|l| l.id == id) {
            Some(lot) => {
                lot.last_update = now;
                true
            }
            None => false,
        }
    }

    /// Stamps `last_update` on every lot, used by the periodic refresher.
    pub async fn touch_all_lots(&self, now: DateTime<Utc>) {
        for lot in self.lots.write().await.iter_mut() {
            lot.last_update = now;
        }
    }

    // --- gates ---

    pub async fn gates_for(&self, lot_id: &str) -> Vec<Gate> {
        self.gates
            .read()
            .await
            .get(lot_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn get_gate(&self, lot_id: &str, gate_id: &str) -> Option<Gate> {
        self.gates
            .read()
            .await
            .get(lot_id)
            .and_then(|gates| gates.iter().find(|g| g.id == gate_id).cloned())
    }

    /// Flips a gate's open state and stamps its activity time.
    ///
    /// Raw mutation only; the connected-device guard lives in the dashboard
    /// controller.
    pub async fn flip_gate(
        &self,
        lot_id: &str,
        gate_id: &str,
        now: DateTime<Utc>,
    ) -> Option<Gate> {
        let mut gates = self.gates.write().await;
        let gate = gates
            .get_mut(lot_id)?
            .iter_mut()
            .find(|g| g.id == gate_id)?;
        gate.is_open = !gate.is_open;
        gate.last_activity = now;
        Some(gate.clone())
    }

    /// Recomputes a lot's gate counters from its gate collection.
    ///
    /// Establishes `connected_gates <= total_gates` by construction. Lots
    /// without a local gate collection (upstream-only records) are left
    /// untouched.
    pub async fn recount_gates(&self, lot_id: &str) {
        let (total, connected) = {
            let gates = self.gates.read().await;
            match gates.get(lot_id) {
                Some(gates) => (
                    gates.len() as u32,
                    gates.iter().filter(|g| g.is_operational()).count() as u32,
                ),
                None => return,
            }
        };

        let mut lots = self.lots.write().await;
        if let Some(lot) = lots.iter_mut().find(|l| l.id == lot_id) {
            lot.total_gates = total;
            lot.connected_gates = connected.min(total);
        }
    }
}
