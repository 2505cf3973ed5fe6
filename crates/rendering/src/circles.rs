//! Circle visual pool.
//!
//! The draw list is mapped slot by slot onto a pool of circle entities: one shared
//! unit-circle mesh, one alpha-blended `ColorMaterial` per slot. The pool only grows.
//! Slots past the end of the draw list are hidden, never despawned.

use bevy::prelude::*;
#[cfg(not(any(test, feature = "headless")))]
use bevy::sprite::{AlphaMode2d, ColorMaterial, MeshMaterial2d};

#[cfg(not(any(test, feature = "headless")))]
use bevy::math::primitives::Circle;

use crate::draw_list::DrawList;

/// Depth of the first slot; each later slot sits `SLOT_Z_STEP` above the previous.
pub const CIRCLE_BASE_Z: f32 = 0.0;
pub const SLOT_Z_STEP: f32 = 0.001;

/// One pooled circle. `slot` indexes the draw list.
#[derive(Component, Debug)]
pub struct CircleVisual {
    pub slot: usize,
}

/// Color the slot should show this frame.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CircleTint(pub Color);

/// Pooled entities in slot order.
#[derive(Resource, Debug, Default)]
pub struct VisualPool(pub Vec<Entity>);

#[cfg(not(any(test, feature = "headless")))]
// Resource storing shared unit circle mesh handle
#[derive(Resource)]
struct CircleMeshHandle(Handle<Mesh>);

#[cfg(not(any(test, feature = "headless")))]
pub(crate) fn prepare_circle_mesh(mut meshes: ResMut<Assets<Mesh>>, mut commands: Commands) {
    let mesh = meshes.add(Mesh::from(Circle::new(1.0)));
    commands.insert_resource(CircleMeshHandle(mesh));
}

#[cfg(not(any(test, feature = "headless")))]
pub(crate) fn grow_visual_pool(
    mut commands: Commands,
    list: Res<DrawList>,
    mut pool: ResMut<VisualPool>,
    circle_mesh: Option<Res<CircleMeshHandle>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let Some(circle_mesh) = circle_mesh else { return; };
    while pool.0.len() < list.0.len() {
        let slot = pool.0.len();
        let material = materials.add(ColorMaterial {
            color: Color::NONE,
            alpha_mode: AlphaMode2d::Blend,
            ..default()
        });
        let e = commands
            .spawn((
                Mesh2d::from(circle_mesh.0.clone()),
                MeshMaterial2d(material),
                Transform::default(),
                Visibility::Hidden,
                CircleVisual { slot },
                CircleTint(Color::NONE),
            ))
            .id();
        pool.0.push(e);
    }
}

#[cfg(any(test, feature = "headless"))]
pub(crate) fn grow_visual_pool(
    mut commands: Commands,
    list: Res<DrawList>,
    mut pool: ResMut<VisualPool>,
) {
    // Headless variant: same entities minus mesh and material.
    while pool.0.len() < list.0.len() {
        let slot = pool.0.len();
        let e = commands
            .spawn((
                Transform::default(),
                Visibility::Hidden,
                CircleVisual { slot },
                CircleTint(Color::NONE),
            ))
            .id();
        pool.0.push(e);
    }
}

pub(crate) fn sync_circle_visuals(
    list: Res<DrawList>,
    mut q: Query<(&CircleVisual, &mut Transform, &mut Visibility, &mut CircleTint)>,
) {
    for (visual, mut tf, mut vis, mut tint) in &mut q {
        let Some(item) = list.0.get(visual.slot) else {
            vis.set_if_neq(Visibility::Hidden);
            continue;
        };
        tf.translation = item
            .center
            .extend(CIRCLE_BASE_Z + visual.slot as f32 * SLOT_Z_STEP);
        tf.scale = Vec3::new(item.radius, item.radius, 1.0);
        vis.set_if_neq(Visibility::Visible);
        tint.set_if_neq(CircleTint(item.color));
    }
}

#[cfg(not(any(test, feature = "headless")))]
pub(crate) fn apply_tints(
    q: Query<(&CircleTint, &MeshMaterial2d<ColorMaterial>), Changed<CircleTint>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for (tint, handle) in &q {
        if let Some(mat) = materials.get_mut(&handle.0) {
            mat.color = tint.0;
        }
    }
}
