//! Cleanup system: retires defeated zombies and despawns everything the
//! other systems buffered for removal.

use hecs::{Entity, World};
use tracing::debug;

use starforage_core::components::Zombie;
use starforage_core::events::GameEvent;

/// Emit `ZombieDefeated` for every zombie at zero health, then despawn it
/// along with all buffered entities.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<GameEvent>) {
    for (entity, zombie) in world.query_mut::<&Zombie>() {
        if zombie.health <= 0.0 {
            debug!(zombie_id = zombie.id, zombie_type = ?zombie.zombie_type, "Zombie defeated");
            events.push(GameEvent::ZombieDefeated {
                zombie_id: zombie.id,
                zombie_type: zombie.zombie_type,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
