//! Component linking entities to rigid bodies.

use crate::{rapier::dynamics::RigidBodyHandle, world::PhysicsWorldRes};
use specs::{Component, DenseVecStorage};

/// Handle attached to entities representing a single rigid body in the
/// [`PhysicsWorldRes`].
///
/// Joints naming this entity are created against the body behind the handle.
/// The body itself is owned by the physics world; removing this component
/// does not remove the body, but any joints attached through this entity are
/// torn down.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Shrinkwrap)]
#[shrinkwrap(mutable)]
pub struct BodyHandle(pub RigidBodyHandle);

impl Component for BodyHandle {
    type Storage = DenseVecStorage<Self>;
}

impl BodyHandle {
    /// Whether the body this handle points at still lives in `world`.
    pub fn is_alive(&self, world: &PhysicsWorldRes) -> bool {
        world.contains_body(self.0)
    }
}
