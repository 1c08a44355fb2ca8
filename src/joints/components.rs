use crate::{
    joints::{JointFactory, RevoluteJointFactory, RevoluteJointHandle},
    position::Position,
    rapier::{
        dynamics::{ImpulseJoint, ImpulseJointHandle, RevoluteJoint},
        math::Real,
    },
    world::PhysicsWorldRes,
};

use specs::{Component, DenseVecStorage, Entity, FlaggedStorage};
use std::fmt;

/**
The component type of all joints, describing a joint between the bodies of two entities.

The entity carrying this component doesn't need to be one of the two bodies. Once both entities
carry a [`BodyHandle`] pointing at a live rigid body, [`SyncJointsToPhysicsSystem`] asks the
factory for the joint and attaches a [`JointHandle`] to this entity. The joint is removed again
when this component is removed, or when either body goes away.

Replacing this component tears down the current joint and creates a new one.

[`BodyHandle`]: ../struct.BodyHandle.html
[`SyncJointsToPhysicsSystem`]: ../systems/struct.SyncJointsToPhysicsSystem.html
*/
pub struct JointComponent {
    pub bodies: [Entity; 2],
    pub factory: Box<dyn JointFactory>,
}

impl Component for JointComponent {
    type Storage = FlaggedStorage<Self, DenseVecStorage<Self>>;
}

impl JointComponent {
    pub fn new<F: JointFactory>(body_a: Entity, body_b: Entity, factory: F) -> Self {
        Self {
            bodies: [body_a, body_b],
            factory: Box::new(factory),
        }
    }

    /// A hinge between `body_a` and `body_b`, rotating around `axis`.
    ///
    /// Anchors are local to their body. If `limits` is set, the rotation angle
    /// is kept within `[min, max]`.
    pub fn revolute(
        body_a: Entity,
        body_b: Entity,
        local_anchor_a: impl Into<Position>,
        local_anchor_b: impl Into<Position>,
        axis: impl Into<Position>,
        limits: Option<[Real; 2]>,
    ) -> Self {
        Self::new(
            body_a,
            body_b,
            RevoluteJointFactory::new(local_anchor_a, local_anchor_b, axis, limits),
        )
    }
}

impl fmt::Debug for JointComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JointComponent")
            .field("bodies", &self.bodies)
            .finish()
    }
}

/// Handle of the joint created for a [`JointComponent`], attached to the same
/// entity. Don't insert this yourself; it is managed by
/// [`SyncJointsToPhysicsSystem`].
///
/// [`SyncJointsToPhysicsSystem`]: ../systems/struct.SyncJointsToPhysicsSystem.html
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Shrinkwrap)]
pub struct JointHandle(pub ImpulseJointHandle);

impl Component for JointHandle {
    type Storage = DenseVecStorage<Self>;
}

impl JointHandle {
    pub fn get<'a>(&self, world: &'a PhysicsWorldRes) -> Option<&'a ImpulseJoint> {
        world.impulse_joint(self.0)
    }

    /// The joint data, if this handle points at a revolute joint.
    pub fn as_revolute<'a>(&self, world: &'a PhysicsWorldRes) -> Option<&'a RevoluteJoint> {
        RevoluteJointHandle(self.0).get(&world.impulse_joints)
    }
}

impl From<JointHandle> for RevoluteJointHandle {
    fn from(handle: JointHandle) -> Self {
        RevoluteJointHandle(handle.0)
    }
}
