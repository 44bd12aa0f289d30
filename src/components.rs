use bevy::prelude::*;

/// The controllable block.
#[derive(Component)]
pub struct Player;

/// A drifting collidable the player must avoid.
#[derive(Component)]
pub struct Obstacle;

/// The static floor of the play area.
#[derive(Component)]
pub struct Ground;

/// Obstacle touches the player can still take before the session ends.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone, PartialEq, Eq)]
pub struct Health(pub i32);

/// Marks entities owned by one gameplay session; everything carrying this is
/// despawned when the `Playing` state exits.
#[derive(Component)]
pub struct SessionScoped;
