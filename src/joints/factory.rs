use crate::{
    error::JointError,
    rapier::dynamics::{ImpulseJointHandle, RigidBodyHandle},
    world::PhysicsWorldRes,
};

/// Creates a joint once both of its bodies are available.
///
/// The [`SyncJointsToPhysicsSystem`] calls `create` exactly once per joint
/// instantiation, passing the rigid bodies of the two entities named by the
/// [`JointComponent`], in order. A failure is not retried.
///
/// Any `Fn([RigidBodyHandle; 2], &mut PhysicsWorldRes, bool)` closure returning
/// the same `Result` is a factory too.
///
/// [`SyncJointsToPhysicsSystem`]: ../systems/struct.SyncJointsToPhysicsSystem.html
/// [`JointComponent`]: struct.JointComponent.html
pub trait JointFactory: Send + Sync + 'static {
    fn create(
        &self,
        bodies: [RigidBodyHandle; 2],
        world: &mut PhysicsWorldRes,
        wake_up: bool,
    ) -> Result<ImpulseJointHandle, JointError>;
}

impl<F> JointFactory for F
where
    F: Fn([RigidBodyHandle; 2], &mut PhysicsWorldRes, bool) -> Result<ImpulseJointHandle, JointError>
        + Send
        + Sync
        + 'static,
{
    fn create(
        &self,
        bodies: [RigidBodyHandle; 2],
        world: &mut PhysicsWorldRes,
        wake_up: bool,
    ) -> Result<ImpulseJointHandle, JointError> {
        self(bodies, world, wake_up)
    }
}
