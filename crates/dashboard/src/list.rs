//! List projection of the food store.
//!
//! Rows are keyed by food id. Row actions go straight to the
//! [`Dashboard`]; the list itself holds no state.

use std::fmt;

use menu_core::food::FoodRecord;
use menu_core::types::FoodId;
use menu_gateway::GatewayError;

use crate::orchestrator::Dashboard;

/// One rendered catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodRow {
    /// Row identity for reconciliation.
    pub key: FoodId,
    pub record: FoodRecord,
}

impl FoodRow {
    pub fn availability_label(&self) -> &'static str {
        if self.record.available {
            "available"
        } else {
            "unavailable"
        }
    }
}

impl fmt::Display for FoodRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:<4} {} | R$ {} | {}",
            self.key,
            self.record.name,
            self.record.price,
            self.availability_label()
        )?;
        if !self.record.description.is_empty() {
            write!(f, "\n      {}", self.record.description)?;
        }
        Ok(())
    }
}

/// Per-row affordances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Edit(FoodRecord),
    Delete(FoodId),
    ToggleAvailability(FoodId),
}

/// Project records into rows, one per record, in store order.
pub fn render_rows(records: &[FoodRecord]) -> Vec<FoodRow> {
    records
        .iter()
        .map(|record| FoodRow {
            key: record.id,
            record: record.clone(),
        })
        .collect()
}

/// Route a row action to the dashboard.
///
/// Only a delete can fail here; edit and toggle report through the log.
pub async fn dispatch(dashboard: &Dashboard, action: RowAction) -> Result<(), GatewayError> {
    match action {
        RowAction::Edit(record) => {
            dashboard.begin_edit(record).await;
            Ok(())
        }
        RowAction::Delete(id) => dashboard.delete_record(id).await,
        RowAction::ToggleAvailability(id) => {
            dashboard.toggle_availability(id).await;
            Ok(())
        }
    }
}
