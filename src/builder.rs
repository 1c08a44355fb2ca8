use crate::{
    bodies::BodyHandle,
    joints::{JointComponent, JointFactory},
    position::Position,
    rapier::{dynamics::RigidBody, math::Real},
    world::PhysicsWorldRes,
};

use specs::{world::Builder, EntityBuilder, Entity, WorldExt};

/// Provides methods on `EntityBuilder` that make declaring bodies and joints
/// easier.
///
/// # Usage
///
/// ```
/// use specs::{Builder, World, WorldExt};
/// use specs_joints::{
///     rapier::dynamics::RigidBodyBuilder, BodyHandle, EntityBuilderExt, JointComponent,
///     PhysicsWorldRes,
/// };
///
/// let mut world = World::new();
/// world.register::<BodyHandle>();
/// world.register::<JointComponent>();
/// world.insert(PhysicsWorldRes::new());
///
/// let door_frame = world
///     .create_entity()
///     .with_body(RigidBodyBuilder::fixed().build())
///     .build();
/// let door = world
///     .create_entity()
///     .with_body(RigidBodyBuilder::dynamic().build())
///     .build();
///
/// world
///     .create_entity()
///     .with_revolute_joint(
///         door_frame,
///         door,
///         [0.5, 0.0, 0.0],
///         [-0.5, 0.0, 0.0],
///         [0.0, 1.0, 0.0],
///         Some([0.0, 1.5]),
///     )
///     .build();
/// ```
pub trait EntityBuilderExt {
    /// Inserts `body` into the [`PhysicsWorldRes`] and attaches its
    /// [`BodyHandle`] to this entity.
    fn with_body(self, body: RigidBody) -> Self;

    /// Declares a joint between `body_a` and `body_b`, built by `factory`.
    fn with_joint<F: JointFactory>(self, body_a: Entity, body_b: Entity, factory: F) -> Self;

    /// Declares a revolute joint between `body_a` and `body_b`.
    fn with_revolute_joint(
        self,
        body_a: Entity,
        body_b: Entity,
        local_anchor_a: impl Into<Position>,
        local_anchor_b: impl Into<Position>,
        axis: impl Into<Position>,
        limits: Option<[Real; 2]>,
    ) -> Self;
}

impl EntityBuilderExt for EntityBuilder<'_> {
    fn with_body(self, body: RigidBody) -> Self {
        let handle = self
            .world
            .write_resource::<PhysicsWorldRes>()
            .insert_body(body);
        self.with(BodyHandle(handle))
    }

    fn with_joint<F: JointFactory>(self, body_a: Entity, body_b: Entity, factory: F) -> Self {
        self.with(JointComponent::new(body_a, body_b, factory))
    }

    fn with_revolute_joint(
        self,
        body_a: Entity,
        body_b: Entity,
        local_anchor_a: impl Into<Position>,
        local_anchor_b: impl Into<Position>,
        axis: impl Into<Position>,
        limits: Option<[Real; 2]>,
    ) -> Self {
        self.with(JointComponent::revolute(
            body_a,
            body_b,
            local_anchor_a,
            local_anchor_b,
            axis,
            limits,
        ))
    }
}
