//! Reshaping of flat table rows into the keyed objects the frontend reads.
//!
//! Every function here is a pure fold over an ordered row set. When two rows share a
//! key the later row wins, which matches what storage uniqueness already guarantees.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{BladeAssignment, InventoryItem, MachineBlade, MachineStatus};

pub type Keyed<V> = BTreeMap<String, V>;
pub type Nested<V> = BTreeMap<String, BTreeMap<String, V>>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct StockCounts {
    pub fixed: i32,
    pub available: i32,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AssignmentView {
    #[serde(rename = "type")]
    pub blade_type: Option<String>,
    pub count: i32,
}

/// Folds rows into a two level mapping, using `outer` then `inner` as successive keys.
pub fn nest_by<T, V>(
    rows: impl IntoIterator<Item = T>,
    outer: impl Fn(&T) -> String,
    inner: impl Fn(&T) -> String,
    value: impl Fn(T) -> V,
) -> Nested<V> {
    rows.into_iter().fold(BTreeMap::new(), |mut nested, row| {
        nested
            .entry(outer(&row))
            .or_default()
            .insert(inner(&row), value(row));

        nested
    })
}

pub fn key_by<T, V>(
    rows: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> String,
    value: impl Fn(T) -> V,
) -> Keyed<V> {
    rows.into_iter().fold(BTreeMap::new(), |mut keyed, row| {
        keyed.insert(key(&row), value(row));

        keyed
    })
}

pub fn nest_inventory(rows: impl IntoIterator<Item = InventoryItem>) -> Nested<StockCounts> {
    nest_by(
        rows,
        |item| item.group_name.clone(),
        |item| item.blade_type.clone(),
        |item| StockCounts {
            fixed: item.fixed.unwrap_or(0),
            available: item.available.unwrap_or(0),
        },
    )
}

pub fn key_machine_blades(rows: impl IntoIterator<Item = MachineBlade>) -> Keyed<Option<String>> {
    key_by(
        rows,
        |machine_blade| machine_blade.machine_id.clone(),
        |machine_blade| machine_blade.blade_type,
    )
}

pub fn key_blade_assignments(
    rows: impl IntoIterator<Item = BladeAssignment>,
) -> Keyed<AssignmentView> {
    key_by(
        rows,
        |assignment| assignment.machine_id.clone(),
        |assignment| AssignmentView {
            blade_type: assignment.blade_type,
            count: assignment.count.unwrap_or(0),
        },
    )
}

pub fn key_machine_statuses(
    rows: impl IntoIterator<Item = MachineStatus>,
) -> Keyed<Option<String>> {
    key_by(
        rows,
        |machine_status| machine_status.machine_id.clone(),
        |machine_status| machine_status.status,
    )
}
