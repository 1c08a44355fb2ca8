use crate::rapier::dynamics::RigidBodyHandle;
use std::{error::Error, fmt};

/// Reasons a joint could not be handed to the physics world.
#[derive(Clone, Debug, PartialEq)]
pub enum JointError {
    /// The hinge axis has zero length (or isn't finite) and can't be normalized.
    DegenerateAxis,
    /// The handle does not point at a rigid body living in the physics world.
    MissingBody(RigidBodyHandle),
}

impl fmt::Display for JointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JointError::DegenerateAxis => write!(f, "The joint axis cannot be normalized."),
            JointError::MissingBody(handle) => write!(
                f,
                "Rigid body {:?} is missing from the physics world.",
                handle
            ),
        }
    }
}

impl Error for JointError {}
