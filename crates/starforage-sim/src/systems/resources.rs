//! Resource system: regenerates every node, harvests the ones in range of the
//! rocket and credits the inventory.

use hecs::World;

use starforage_core::components::{Inventory, ResourceNode, Rocket};
use starforage_core::constants::{COLLECTION_RANGE, COLLECTION_RATE_PER_TICK};
use starforage_core::enums::ResourceType;
use starforage_core::events::GameEvent;
use starforage_core::types::Position;

use crate::resource_field;
use crate::systems::rocket;

/// `dt_ms` is the tick length; regeneration rates are per millisecond.
pub fn run(world: &mut World, now_ms: f64, dt_ms: f64, events: &mut Vec<GameEvent>) {
    let rocket_pos = rocket::position(world);
    let mut harvested: Vec<(u32, ResourceType, f64)> = Vec::new();

    for (_entity, (node, pos)) in world.query_mut::<(&mut ResourceNode, &Position)>() {
        resource_field::regenerate(node, dt_ms);

        let in_range = rocket_pos
            .is_some_and(|r| resource_field::is_in_range(&r, pos, COLLECTION_RANGE));
        node.being_collected = in_range && node.amount > 0.0;

        if node.being_collected {
            let amount = resource_field::harvest(node, COLLECTION_RATE_PER_TICK, now_ms);
            if amount > 0.0 {
                harvested.push((node.id, node.resource_type, amount));
            }
        }
    }

    if harvested.is_empty() {
        return;
    }

    for (_entity, (_rocket, inventory)) in world.query_mut::<(&Rocket, &mut Inventory)>() {
        for &(_, resource_type, amount) in &harvested {
            resource_field::collect(inventory, resource_type, amount);
        }
    }

    events.extend(
        harvested
            .into_iter()
            .map(|(node_id, resource_type, amount)| GameEvent::ResourceHarvested {
                node_id,
                resource_type,
                amount,
            }),
    );
}
