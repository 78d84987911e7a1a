use bevy::prelude::*;

use crate::components::{CraftBody, PlayerController, RunwaySegment};
use crate::resources::{RunwayConfig, RunwayWindow, SegmentLifecycle};

/// Spawns segment entities for the window and despawns the evicted ones.
struct SegmentSpawner<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    config: &'a RunwayConfig,
}

impl SegmentLifecycle<Entity> for SegmentSpawner<'_, '_, '_> {
    fn spawn(&mut self, index: i64) -> Entity {
        let segment = RunwaySegment::synthesize(index, self.config);
        let origin = Vec3::new(0.0, 0.0, segment.center_z() as f32);
        self.commands
            .spawn((
                Name::new(format!("runway segment {index}")),
                segment,
                Transform::from_translation(origin),
                Visibility::default(),
            ))
            .id()
    }

    fn dispose(&mut self, _index: i64, entity: Entity) {
        self.commands.entity(entity).despawn_recursive();
    }
}

/// Keeps the live runway segments centred on the player's forward coordinate.
pub fn runway_window_system(
    mut commands: Commands,
    mut window: ResMut<RunwayWindow>,
    config: Res<RunwayConfig>,
    craft: Query<&CraftBody, With<PlayerController>>,
) {
    let Ok(body) = craft.get_single() else {
        return;
    };

    let mut spawner = SegmentSpawner {
        commands: &mut commands,
        config: &config,
    };
    let change = window.sync(body.position.z, &mut spawner);

    if !change.is_empty() {
        debug!(
            "Runway window at z={:.1}: +{:?} -{:?} ({} live)",
            body.position.z,
            change.spawned,
            change.evicted,
            window.len()
        );
    }
}
