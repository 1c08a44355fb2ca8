use crate::{error::JointError, rapier::dynamics::ImpulseJointHandle};

use shrev::EventChannel;
use specs::Entity;

/// What happened to the joint declared on an entity.
#[derive(Clone, Debug, PartialEq)]
pub enum JointEventKind {
    /// Both bodies became available and the joint was registered.
    Created(ImpulseJointHandle),
    /// The joint was taken out of the physics world, either because its
    /// component went away or because one of its bodies did.
    Removed(ImpulseJointHandle),
    /// The factory refused to build the joint. It won't be attempted again
    /// until the component is replaced.
    Failed(JointError),
}

/// The `JointEvent` type contains the entity carrying the `JointComponent`
/// and what happened to its joint.
#[derive(Clone, Debug, PartialEq)]
pub struct JointEvent {
    pub entity: Entity,
    pub kind: JointEventKind,
}

/// `JointEvents` is a custom `EventChannel` type used to expose
/// `JointEvent`s.
pub type JointEvents = EventChannel<JointEvent>;
