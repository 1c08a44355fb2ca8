use crate::{
    error::JointError,
    rapier::{
        dynamics::{
            GenericJoint, ImpulseJoint, ImpulseJointHandle, ImpulseJointSet, IslandManager,
            MultibodyJointSet, RigidBody, RigidBodyHandle, RigidBodySet,
        },
        geometry::ColliderSet,
    },
};

/// The slice of the rapier world joints need, stored in the specs world.
/// You can fetch this type from the world with
/// `ReadExpect<'_, PhysicsWorldRes>` or `WriteExpect<'_, PhysicsWorldRes>`.
///
/// Stepping the simulation is left to whoever owns the remaining rapier
/// pipeline state; pass these sets along to `PhysicsPipeline::step`.
#[derive(Default)]
pub struct PhysicsWorldRes {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub impulse_joints: ImpulseJointSet,
    pub multibody_joints: MultibodyJointSet,
    pub islands: IslandManager,
}

impl PhysicsWorldRes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.bodies.insert(body)
    }

    /// Removes a body along with its colliders. Rapier drops every joint
    /// attached to it as well.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) -> Option<RigidBody> {
        self.bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        )
    }

    pub fn contains_body(&self, handle: RigidBodyHandle) -> bool {
        self.bodies.contains(handle)
    }

    /// Registers `joint` between `body_a` and `body_b`.
    ///
    /// Every call registers a new joint, even between bodies that are already
    /// connected.
    pub fn create_impulse_joint(
        &mut self,
        joint: impl Into<GenericJoint>,
        body_a: RigidBodyHandle,
        body_b: RigidBodyHandle,
        wake_up: bool,
    ) -> Result<ImpulseJointHandle, JointError> {
        // Rapier only notices dangling body handles once the world is stepped.
        for body in [body_a, body_b].iter() {
            if !self.contains_body(*body) {
                return Err(JointError::MissingBody(*body));
            }
        }

        Ok(self.impulse_joints.insert(body_a, body_b, joint, wake_up))
    }

    pub fn remove_impulse_joint(
        &mut self,
        handle: ImpulseJointHandle,
        wake_up: bool,
    ) -> Option<ImpulseJoint> {
        self.impulse_joints.remove(handle, wake_up)
    }

    pub fn impulse_joint(&self, handle: ImpulseJointHandle) -> Option<&ImpulseJoint> {
        self.impulse_joints.get(handle)
    }
}
