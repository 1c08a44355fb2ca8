//! specs-joints
//! Straight forward wrapper around rapier impulse joints to allow declaring them
//! between entities inside of Specs.
//!
//! Attach a [`JointComponent`] to an entity naming two body entities, and the
//! [`SyncJointsToPhysicsSystem`] creates the joint in the rapier world once both
//! bodies exist, and removes it again when either body or the component goes
//! away.

pub extern crate rapier3d as rapier;
pub use rapier::na as nalgebra;

#[macro_use]
extern crate derive_new;
#[macro_use]
extern crate log;
#[macro_use]
extern crate shrinkwraprs;

pub mod bodies;
pub mod builder;
pub mod bundle;
pub mod error;
pub mod events;
pub mod joints;
pub mod position;
pub mod systems;
pub mod world;

pub use self::bodies::BodyHandle;
pub use self::builder::EntityBuilderExt;
pub use self::bundle::{JointBundle, JointSettings};
pub use self::error::JointError;
pub use self::events::{JointEvent, JointEventKind, JointEvents};
pub use self::joints::{
    create_revolute_joint, revolute_joint_data, JointComponent, JointFactory, JointHandle,
    RevoluteJointFactory, RevoluteJointHandle,
};
pub use self::position::{position_to_point3, position_to_vector3, PartialPosition, Position};
pub use self::systems::SyncJointsToPhysicsSystem;
pub use self::world::PhysicsWorldRes;
