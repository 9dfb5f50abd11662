#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use menu_core::food::{FoodDraft, FoodRecord, NewFood};
use menu_core::types::FoodId;
use menu_dashboard::Dashboard;
use menu_gateway::{FoodGateway, GatewayError};
use tokio::sync::Notify;

/// Gateway operations, for failure injection and gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
}

/// A request as the gateway received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(NewFood),
    Update(FoodId, FoodRecord),
    Delete(FoodId),
}

/// In-process stand-in for the food API.
///
/// Keeps its own catalog so tests can compare the dashboard's store with
/// what a fresh read would return. Operations can be made to fail with a
/// 500, and the next call of an operation can be held back after the
/// server side has been applied, to reorder completions.
#[derive(Default)]
pub struct FakeGateway {
    catalog: Mutex<Catalog>,
    failing: Mutex<HashSet<Op>>,
    gates: Mutex<HashMap<Op, Arc<Notify>>>,
    calls: Mutex<Vec<Call>>,
}

#[derive(Default)]
struct Catalog {
    next_id: FoodId,
    foods: Vec<FoodRecord>,
}

impl FakeGateway {
    pub fn new() -> Arc<Self> {
        Self::with_foods(Vec::new())
    }

    pub fn with_foods(foods: Vec<FoodRecord>) -> Arc<Self> {
        let next_id = foods.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        Arc::new(Self {
            catalog: Mutex::new(Catalog { next_id, foods }),
            ..Default::default()
        })
    }

    /// Make every future call of `op` fail with HTTP 500.
    pub fn fail(&self, op: Op) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: Op) {
        self.failing.lock().unwrap().remove(&op);
    }

    /// Hold the response of the next `op` call until the returned handle is
    /// notified. The server-side effect happens before the hold.
    pub fn gate_next(&self, op: Op) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates.lock().unwrap().insert(op, Arc::clone(&notify));
        notify
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// What a fresh `GET /foods` would return right now.
    pub fn server_foods(&self) -> Vec<FoodRecord> {
        self.catalog.lock().unwrap().foods.clone()
    }

    fn begin(&self, op: Op, call: Call) -> Result<Option<Arc<Notify>>, GatewayError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(&op) {
            return Err(GatewayError::Api {
                status: 500,
                body: format!("{op:?} failed"),
            });
        }
        Ok(self.gates.lock().unwrap().remove(&op))
    }

    async fn hold(gate: Option<Arc<Notify>>) {
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

fn not_found(id: FoodId) -> GatewayError {
    GatewayError::Api {
        status: 404,
        body: format!("Food with id {id} not found"),
    }
}

#[async_trait]
impl FoodGateway for FakeGateway {
    async fn list_foods(&self) -> Result<Vec<FoodRecord>, GatewayError> {
        let gate = self.begin(Op::List, Call::List)?;
        let foods = self.server_foods();
        Self::hold(gate).await;
        Ok(foods)
    }

    async fn create_food(&self, food: &NewFood) -> Result<FoodRecord, GatewayError> {
        let gate = self.begin(Op::Create, Call::Create(food.clone()))?;
        let record = {
            let mut catalog = self.catalog.lock().unwrap();
            let record = food.clone().into_record(catalog.next_id);
            catalog.next_id += 1;
            catalog.foods.push(record.clone());
            record
        };
        Self::hold(gate).await;
        Ok(record)
    }

    async fn update_food(
        &self,
        id: FoodId,
        food: &FoodRecord,
    ) -> Result<FoodRecord, GatewayError> {
        let gate = self.begin(Op::Update, Call::Update(id, food.clone()))?;
        let record = {
            let mut catalog = self.catalog.lock().unwrap();
            let slot = catalog
                .foods
                .iter_mut()
                .find(|f| f.id == id)
                .ok_or_else(|| not_found(id))?;
            *slot = FoodRecord { id, ..food.clone() };
            slot.clone()
        };
        Self::hold(gate).await;
        Ok(record)
    }

    async fn delete_food(&self, id: FoodId) -> Result<(), GatewayError> {
        let gate = self.begin(Op::Delete, Call::Delete(id))?;
        {
            let mut catalog = self.catalog.lock().unwrap();
            let before = catalog.foods.len();
            catalog.foods.retain(|f| f.id != id);
            if catalog.foods.len() == before {
                return Err(not_found(id));
            }
        }
        Self::hold(gate).await;
        Ok(())
    }
}

/// Dashboard over `gateway`, already initialized.
pub async fn mounted_dashboard(gateway: &Arc<FakeGateway>) -> Dashboard {
    let dashboard = Dashboard::new(gateway.clone());
    dashboard.initialize().await.unwrap();
    dashboard
}

pub fn food(id: FoodId, name: &str) -> FoodRecord {
    FoodRecord {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        price: "19.90".to_string(),
        available: true,
        image: format!("http://img.test/{id}.png"),
    }
}

pub fn draft(name: &str, price: &str) -> FoodDraft {
    FoodDraft {
        name: name.to_string(),
        description: format!("{name} description"),
        price: price.to_string(),
        image: format!("http://img.test/{name}.png"),
    }
}
