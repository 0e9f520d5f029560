//! Seed dataset for the in-memory store.
//!
//! The dashboard operates against a mocked working set when the upstream
//! operation-center API is unreachable. The records here are the canonical
//! demo facilities, their gate hardware, and the preregistered operators.

use crate::store::models::{Address, Gate, GateStatus, LotStatus, ParkingLot, User};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;

/// Password shared by all seeded operators.
pub const SEED_PASSWORD: &str = "senha123";

// Low bcrypt cost: seeded records exist for demos and tests only.
const SEED_BCRYPT_COST: u32 = 4;

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("static seed timestamp")
}

pub fn parking_lots() -> Vec<ParkingLot> {
    vec![
        ParkingLot {
            id: "1".into(),
            name: "Shopping Center Norte".into(),
            address: "Av. Paulista, 1000 - São Paulo, SP".into(),
            status: LotStatus::Connected,
            total_gates: 6,
            connected_gates: 6,
            last_update: ts(2025, 1, 18, 14, 30, 0),
        },
        ParkingLot {
            id: "2".into(),
            name: "Edifício Comercial Alpha".into(),
            address: "Rua Augusta, 500 - São Paulo, SP".into(),
            status: LotStatus::Warning,
            total_gates: 4,
            connected_gates: 3,
            last_update: ts(2025, 1, 18, 14, 25, 0),
        },
        ParkingLot {
            id: "3".into(),
            name: "Condomínio Residencial Beta".into(),
            address: "Rua das Flores, 200 - São Paulo, SP".into(),
            status: LotStatus::Disconnected,
            total_gates: 8,
            connected_gates: 0,
            last_update: ts(2025, 1, 18, 12, 15, 0),
        },
        ParkingLot {
            id: "4".into(),
            name: "Hospital São Lucas".into(),
            address: "Av. Brasil, 1500 - São Paulo, SP".into(),
            status: LotStatus::Connected,
            total_gates: 3,
            connected_gates: 3,
            last_update: ts(2025, 1, 18, 14, 35, 0),
        },
    ]
}

fn gate(
    id: &str,
    name: &str,
    status: GateStatus,
    is_open: bool,
    last_activity: DateTime<Utc>,
    battery_level: u8,
) -> Gate {
    Gate {
        id: id.into(),
        name: name.into(),
        status,
        is_open,
        last_activity,
        battery_level: Some(battery_level),
    }
}

pub fn gates() -> HashMap<String, Vec<Gate>> {
    use GateStatus::{Connected, Disconnected, Maintenance};

    let mut map = HashMap::new();
    map.insert(
        "1".to_string(),
        vec![
            gate("g1-1", "Cancela Entrada Principal", Connected, false, ts(2025, 1, 18, 14, 30, 0), 85),
            gate("g1-2", "Cancela Saída Principal", Connected, false, ts(2025, 1, 18, 14, 28, 0), 90),
            gate("g1-3", "Cancela Entrada VIP", Connected, true, ts(2025, 1, 18, 14, 25, 0), 78),
            gate("g1-4", "Cancela Saída VIP", Connected, false, ts(2025, 1, 18, 14, 20, 0), 92),
            gate("g1-5", "Cancela Emergência", Connected, false, ts(2025, 1, 18, 13, 45, 0), 88),
            gate("g1-6", "Cancela Funcionários", Connected, false, ts(2025, 1, 18, 14, 30, 0), 75),
        ],
    );
    map.insert(
        "2".to_string(),
        vec![
            gate("g2-1", "Cancela Entrada", Connected, false, ts(2025, 1, 18, 14, 25, 0), 95),
            gate("g2-2", "Cancela Saída", Connected, false, ts(2025, 1, 18, 14, 22, 0), 87),
            gate("g2-3", "Cancela Garagem", Disconnected, false, ts(2025, 1, 18, 12, 30, 0), 15),
            gate("g2-4", "Cancela Visitantes", Connected, false, ts(2025, 1, 18, 14, 10, 0), 82),
        ],
    );
    map.insert(
        "3".to_string(),
        vec![
            gate("g3-1", "Cancela Entrada A", Disconnected, false, ts(2025, 1, 18, 10, 15, 0), 0),
            gate("g3-2", "Cancela Entrada B", Disconnected, false, ts(2025, 1, 18, 10, 15, 0), 0),
            gate("g3-3", "Cancela Saída A", Disconnected, false, ts(2025, 1, 18, 10, 15, 0), 0),
            gate("g3-4", "Cancela Saída B", Disconnected, false, ts(2025, 1, 18, 10, 15, 0), 0),
            gate("g3-5", "Cancela Garagem 1", Disconnected, false, ts(2025, 1, 18, 10, 15, 0), 0),
            gate("g3-6", "Cancela Garagem 2", Disconnected, false, ts(2025, 1, 18, 10, 15, 0), 0),
            gate("g3-7", "Cancela Visitantes", Disconnected, false, ts(2025, 1, 18, 10, 15, 0), 0),
            gate("g3-8", "Cancela Emergência", Disconnected, false, ts(2025, 1, 18, 10, 15, 0), 0),
        ],
    );
    map.insert(
        "4".to_string(),
        vec![
            gate("g4-1", "Cancela Entrada Ambulância", Connected, false, ts(2025, 1, 18, 14, 35, 0), 98),
            gate("g4-2", "Cancela Entrada Geral", Connected, false, ts(2025, 1, 18, 14, 33, 0), 94),
            gate("g4-3", "Cancela Saída", Maintenance, false, ts(2025, 1, 18, 14, 0, 0), 88),
        ],
    );
    map
}

struct SeedUser {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    cpf: &'static str,
    phone: &'static str,
    birth_date: &'static str,
    street: &'static str,
    cep: &'static str,
    city: &'static str,
    state: &'static str,
    neighborhood: &'static str,
    complement: Option<&'static str>,
    created_at: DateTime<Utc>,
}

pub fn users() -> Vec<User> {
    let password_hash =
        bcrypt::hash(SEED_PASSWORD, SEED_BCRYPT_COST).expect("bcrypt hash of seed password");

    let records = [
        SeedUser {
            id: "1",
            name: "João Silva",
            email: "joao.silva@email.com",
            cpf: "123.456.789-00",
            phone: "(11) 98765-4321",
            birth_date: "1990-05-15",
            street: "Rua das Flores, 123",
            cep: "01234-567",
            city: "São Paulo",
            state: "SP",
            neighborhood: "Centro",
            complement: Some("Apto 45"),
            created_at: ts(2024, 1, 15, 10, 30, 0),
        },
        SeedUser {
            id: "2",
            name: "Maria Santos",
            email: "maria.santos@email.com",
            cpf: "987.654.321-00",
            phone: "(11) 91234-5678",
            birth_date: "1985-08-22",
            street: "Av. Paulista, 1000",
            cep: "01310-100",
            city: "São Paulo",
            state: "SP",
            neighborhood: "Bela Vista",
            complement: None,
            created_at: ts(2024, 2, 10, 14, 20, 0),
        },
        SeedUser {
            id: "3",
            name: "Pedro Oliveira",
            email: "pedro.oliveira@email.com",
            cpf: "456.789.123-00",
            phone: "(21) 99876-5432",
            birth_date: "1992-11-03",
            street: "Rua do Comércio, 456",
            cep: "20040-020",
            city: "Rio de Janeiro",
            state: "RJ",
            neighborhood: "Centro",
            complement: None,
            created_at: ts(2024, 3, 5, 9, 15, 0),
        },
        SeedUser {
            id: "4",
            name: "Ana Costa",
            email: "ana.costa@email.com",
            cpf: "321.654.987-00",
            phone: "(11) 97654-3210",
            birth_date: "1988-03-28",
            street: "Rua Augusta, 789",
            cep: "01305-000",
            city: "São Paulo",
            state: "SP",
            neighborhood: "Consolação",
            complement: Some("Sala 12"),
            created_at: ts(2024, 4, 12, 16, 45, 0),
        },
        SeedUser {
            id: "5",
            name: "Carlos Ferreira",
            email: "carlos.ferreira@email.com",
            cpf: "789.123.456-00",
            phone: "(31) 98765-1234",
            birth_date: "1995-07-19",
            street: "Av. Afonso Pena, 1500",
            cep: "30130-002",
            city: "Belo Horizonte",
            state: "MG",
            neighborhood: "Centro",
            complement: None,
            created_at: ts(2024, 5, 20, 11, 30, 0),
        },
    ];

    records
        .into_iter()
        .map(|r| User {
            id: r.id.to_string(),
            name: r.name.to_string(),
            email: r.email.to_string(),
            cpf: r.cpf.to_string(),
            phone: r.phone.to_string(),
            birth_date: r.birth_date.to_string(),
            address: Address {
                street: r.street.to_string(),
                cep: r.cep.to_string(),
                city: r.city.to_string(),
                state: r.state.to_string(),
                neighborhood: r.neighborhood.to_string(),
                complement: r.complement.map(str::to_string),
            },
            created_at: r.created_at,
            password_hash: password_hash.clone(),
        })
        .collect()
}
