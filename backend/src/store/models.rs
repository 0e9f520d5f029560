//! Data structures for the parking domain entities.
//!
//! Defines parking lots, their gates, and registered operators, used both
//! for the in-memory working set and for API data transfer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Connectivity state reported for a parking lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LotStatus {
    Connected,
    Disconnected,
    Warning,
}

/// Connectivity state of an individual gate device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateStatus {
    Connected,
    Disconnected,
    Maintenance,
}

impl Display for LotStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let status = match self {
            LotStatus::Connected => "connected",
            LotStatus::Disconnected => "disconnected",
            LotStatus::Warning => "warning",
        };
        write!(f, "{}", status)
    }
}

impl Display for GateStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let status = match self {
            GateStatus::Connected => "connected",
            GateStatus::Disconnected => "disconnected",
            GateStatus::Maintenance => "maintenance",
        };
        write!(f, "{}", status)
    }
}

/// A parking facility with one or more controlled gates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingLot {
    pub id: String,
    pub name: String,
    pub address: String,
    pub status: LotStatus,
    pub total_gates: u32,
    pub connected_gates: u32,
    pub last_update: DateTime<Utc>,
}

/// A physical barrier device owned by exactly one parking lot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gate {
    pub id: String,
    pub name: String,
    pub status: GateStatus,
    pub is_open: bool,
    pub last_activity: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<u8>,
}

impl Gate {
    /// A gate can only be actuated while its device is connected.
    pub fn is_operational(&self) -> bool {
        self.status == GateStatus::Connected
    }
}

/// Postal address attached to a registered operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub cep: String,
    pub city: String,
    pub state: String,
    pub neighborhood: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
}

/// A registered system operator.
///
/// Email and CPF are unique within the store. The password hash never
/// leaves the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub birth_date: String,
    pub address: Address,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}

/// Data needed to insert a new user into the store.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub birth_date: String,
    pub address: Address,
    pub password_hash: String,
}
