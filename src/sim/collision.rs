//! Player/enemy contact

use super::state::World;

/// Id of the first enemy (in id order) overlapping the player, if any.
///
/// Always `None` while the player is in a grace period.
pub fn lethal_collision(world: &World) -> Option<u32> {
    if world.player.in_grace() {
        return None;
    }
    let player = world.player.rect();
    world
        .enemies
        .iter()
        .find(|enemy| enemy.rect().overlaps(&player))
        .map(|enemy| enemy.id)
}
