//! Resource field: node generation, regeneration and harvesting, plus the
//! inventory the harvest is credited to.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use starforage_core::components::{Inventory, ResourceNode};
use starforage_core::constants::*;
use starforage_core::enums::ResourceType;
use starforage_core::types::{Bounds, Position};

/// Generate `count` nodes at uniform random positions with random type and stock.
pub fn generate<R: Rng>(rng: &mut R, count: usize, bounds: &Bounds) -> Vec<(Position, ResourceNode)> {
    (0..count)
        .map(|i| {
            let resource_type = *ResourceType::ALL
                .choose(rng)
                .unwrap_or(&ResourceType::Iron);
            let max_amount = RESOURCE_MIN_AMOUNT + rng.gen::<f64>() * RESOURCE_AMOUNT_SPREAD;
            let position = Position::new(
                rng.gen::<f64>() * bounds.width,
                rng.gen::<f64>() * bounds.height,
            );
            let amount = max_amount * RESOURCE_INITIAL_FILL
                + rng.gen::<f64>() * max_amount * (1.0 - RESOURCE_INITIAL_FILL);
            let node = ResourceNode {
                id: i as u32,
                resource_type,
                amount,
                max_amount,
                regeneration_rate: RESOURCE_MIN_REGEN_RATE
                    + rng.gen::<f64>() * RESOURCE_REGEN_SPREAD,
                last_harvested_ms: None,
                being_collected: false,
            };
            (position, node)
        })
        .collect()
}

/// Regenerate toward max. A full node is left untouched.
pub fn regenerate(node: &mut ResourceNode, dt: f64) {
    if node.amount < node.max_amount {
        node.amount = (node.amount + node.regeneration_rate * dt).min(node.max_amount);
    }
}

pub fn is_in_range(rocket: &Position, node: &Position, range: f64) -> bool {
    rocket.is_within(node, range)
}

/// Take up to `rate` from the node. Returns the amount actually collected.
pub fn harvest(node: &mut ResourceNode, rate: f64, now_ms: f64) -> f64 {
    let collected = node.amount.min(rate.max(0.0));
    node.amount = (node.amount - collected).max(0.0);
    node.last_harvested_ms = Some(now_ms);
    collected
}

/// Empty inventory with every resource type present.
pub fn new_inventory() -> Inventory {
    Inventory {
        amounts: ResourceType::ALL.iter().map(|&t| (t, 0.0)).collect::<BTreeMap<_, _>>(),
    }
}

pub fn collect(inventory: &mut Inventory, resource_type: ResourceType, amount: f64) {
    *inventory.amounts.entry(resource_type).or_insert(0.0) += amount.max(0.0);
}

pub fn has(inventory: &Inventory, resource_type: ResourceType, amount: f64) -> bool {
    inventory.amounts.get(&resource_type).copied().unwrap_or(0.0) >= amount
}

/// Deduct `amount` if the stock covers it.
pub fn spend(inventory: &mut Inventory, resource_type: ResourceType, amount: f64) -> bool {
    if !has(inventory, resource_type, amount) {
        return false;
    }
    if let Some(stock) = inventory.amounts.get_mut(&resource_type) {
        *stock -= amount;
    }
    true
}
