/*!
Component, factory and construction helpers for joints between bodies.
*/

mod components;
mod factory;
mod revolute;

pub use components::{JointComponent, JointHandle};
pub use factory::JointFactory;
pub use revolute::{
    create_revolute_joint, revolute_joint_data, RevoluteJointFactory, RevoluteJointHandle,
};
