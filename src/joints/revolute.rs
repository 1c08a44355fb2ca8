use crate::{
    error::JointError,
    joints::JointFactory,
    nalgebra::Unit,
    position::{position_to_point3, position_to_vector3, Position},
    rapier::{
        dynamics::{
            ImpulseJointHandle, ImpulseJointSet, RevoluteJoint, RevoluteJointBuilder,
            RigidBodyHandle,
        },
        math::Real,
    },
    world::PhysicsWorldRes,
};

/// Builds the parameters of a revolute joint.
///
/// Both anchors are expressed in the local frame of their body. `axis` doesn't
/// need to be normalized, but it must have a length. When `limits` is given,
/// rotation around the axis is bounded to `[min, max]`; otherwise it is free.
pub fn revolute_joint_data(
    local_anchor_a: impl Into<Position>,
    local_anchor_b: impl Into<Position>,
    axis: impl Into<Position>,
    limits: Option<[Real; 2]>,
) -> Result<RevoluteJoint, JointError> {
    let axis = position_to_vector3(axis);
    if !axis.iter().all(|c| c.is_finite()) {
        return Err(JointError::DegenerateAxis);
    }
    let axis = Unit::try_new(axis, Real::EPSILON).ok_or(JointError::DegenerateAxis)?;

    let mut builder = RevoluteJointBuilder::new(axis)
        .local_anchor1(position_to_point3(local_anchor_a))
        .local_anchor2(position_to_point3(local_anchor_b));

    if let Some([min, max]) = limits {
        if min > max {
            warn!(
                "Revolute joint limits are inverted: min {} is above max {}.",
                min, max
            );
        }
        builder = builder.limits([min, max]);
    }

    Ok(builder.build())
}

/// Builds a revolute joint and registers it between `bodies` in `world`.
pub fn create_revolute_joint(
    world: &mut PhysicsWorldRes,
    bodies: [RigidBodyHandle; 2],
    local_anchor_a: impl Into<Position>,
    local_anchor_b: impl Into<Position>,
    axis: impl Into<Position>,
    limits: Option<[Real; 2]>,
    wake_up: bool,
) -> Result<RevoluteJointHandle, JointError> {
    let joint = revolute_joint_data(local_anchor_a, local_anchor_b, axis, limits)?;
    world
        .create_impulse_joint(joint, bodies[0], bodies[1], wake_up)
        .map(RevoluteJointHandle)
}

/// An `ImpulseJointHandle` known to point at a revolute joint.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Shrinkwrap)]
pub struct RevoluteJointHandle(pub ImpulseJointHandle);

impl RevoluteJointHandle {
    /// Looks the joint up in `joints`. Returns `None` once the joint has been
    /// removed.
    pub fn get<'a>(&self, joints: &'a ImpulseJointSet) -> Option<&'a RevoluteJoint> {
        joints.get(self.0).and_then(|joint| joint.data.as_revolute())
    }
}

/// Joint factory for a hinge between two bodies.
///
/// Positions are kept as given and converted each time the joint data is
/// built, so a degenerate axis surfaces as a [`JointError`] from
/// [`JointFactory::create`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevoluteJointFactory {
    pub local_anchor_a: Position,
    pub local_anchor_b: Position,
    pub axis: Position,
    pub limits: Option<[Real; 2]>,
}

impl RevoluteJointFactory {
    pub fn new(
        local_anchor_a: impl Into<Position>,
        local_anchor_b: impl Into<Position>,
        axis: impl Into<Position>,
        limits: Option<[Real; 2]>,
    ) -> Self {
        Self {
            local_anchor_a: local_anchor_a.into(),
            local_anchor_b: local_anchor_b.into(),
            axis: axis.into(),
            limits,
        }
    }

    pub fn data(&self) -> Result<RevoluteJoint, JointError> {
        revolute_joint_data(
            self.local_anchor_a,
            self.local_anchor_b,
            self.axis,
            self.limits,
        )
    }
}

impl JointFactory for RevoluteJointFactory {
    fn create(
        &self,
        bodies: [RigidBodyHandle; 2],
        world: &mut PhysicsWorldRes,
        wake_up: bool,
    ) -> Result<ImpulseJointHandle, JointError> {
        let joint = self.data()?;
        world.create_impulse_joint(joint, bodies[0], bodies[1], wake_up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        position::PartialPosition,
        rapier::{
            dynamics::{JointAxis, RigidBodyBuilder},
            math::{Point, Vector},
        },
    };
    use approx::{assert_relative_eq, assert_ulps_eq};

    fn world_with_bodies() -> (PhysicsWorldRes, [RigidBodyHandle; 2]) {
        let mut world = PhysicsWorldRes::new();
        let a = world.insert_body(RigidBodyBuilder::fixed().build());
        let b = world.insert_body(RigidBodyBuilder::dynamic().build());
        (world, [a, b])
    }

    #[test]
    fn normalizes_axis_without_limits() {
        let joint = revolute_joint_data(
            PartialPosition::default(),
            PartialPosition {
                y: Some(1.0),
                ..Default::default()
            },
            [0.0, 2.0, 0.0],
            None,
        )
        .unwrap();

        let axis = joint.data.local_axis1();
        assert_ulps_eq!(axis.x, 0.0);
        assert_ulps_eq!(axis.y, 1.0);
        assert_ulps_eq!(axis.z, 0.0);
        assert_eq!(joint.local_anchor1(), Point::origin());
        assert_eq!(joint.local_anchor2(), Point::new(0.0, 1.0, 0.0));
        assert!(joint.limits().is_none());
    }

    #[test]
    fn arbitrary_axis_has_unit_length() {
        let axes: [[Real; 3]; 3] = [[3.0, 4.0, 0.0], [-0.001, 0.0, 0.002], [10.0, -7.5, 2.25]];
        for axis in axes.iter() {
            let joint = revolute_joint_data([0.0; 3], [0.0; 3], *axis, None).unwrap();
            assert_relative_eq!(joint.data.local_axis1().norm(), 1.0, epsilon = 1.0e-6);
        }
    }

    #[test]
    fn limits_are_forwarded() {
        let joint = revolute_joint_data([0.0; 3], [0.0; 3], Vector::z(), Some([-0.5, 1.25])).unwrap();

        let limits = joint.limits().expect("limits should be enabled");
        assert_ulps_eq!(limits.min, -0.5);
        assert_ulps_eq!(limits.max, 1.25);
        assert!(joint.data.limits(JointAxis::AngX).is_some());
    }

    #[test]
    fn inverted_limits_are_not_rejected() {
        let joint = revolute_joint_data([0.0; 3], [0.0; 3], Vector::x(), Some([1.0, -1.0])).unwrap();

        let limits = joint.limits().unwrap();
        assert_ulps_eq!(limits.min, 1.0);
        assert_ulps_eq!(limits.max, -1.0);
    }

    #[test]
    fn zero_axis_is_rejected() {
        assert_eq!(
            revolute_joint_data([0.0; 3], [0.0; 3], [0.0; 3], None).unwrap_err(),
            JointError::DegenerateAxis
        );
        assert_eq!(
            revolute_joint_data([0.0; 3], [0.0; 3], [Real::NAN, 1.0, 0.0], None).unwrap_err(),
            JointError::DegenerateAxis
        );
    }

    #[test]
    fn create_registers_joint_between_bodies() {
        let (mut world, bodies) = world_with_bodies();

        let handle = create_revolute_joint(
            &mut world,
            bodies,
            [0.0; 3],
            [0.0, 1.0, 0.0],
            [0.0, 2.0, 0.0],
            Some([0.0, 1.0]),
            true,
        )
        .unwrap();

        let joint = world.impulse_joint(handle.0).unwrap();
        assert_eq!(joint.body1, bodies[0]);
        assert_eq!(joint.body2, bodies[1]);

        let revolute = handle.get(&world.impulse_joints).unwrap();
        assert_ulps_eq!(revolute.limits().unwrap().max, 1.0);
    }

    #[test]
    fn repeated_creation_is_not_deduplicated() {
        let (mut world, bodies) = world_with_bodies();
        let factory = RevoluteJointFactory::new([0.0; 3], [0.0, 1.0, 0.0], Vector::y(), None);

        let first = factory.create(bodies, &mut world, true).unwrap();
        let second = factory.create(bodies, &mut world, true).unwrap();

        assert_ne!(first, second);
        assert_eq!(world.impulse_joints.len(), 2);
    }

    #[test]
    fn missing_body_is_reported() {
        let (mut world, bodies) = world_with_bodies();
        world.remove_body(bodies[1]);

        let factory = RevoluteJointFactory::new([0.0; 3], [0.0; 3], Vector::y(), None);
        assert_eq!(
            factory.create(bodies, &mut world, true).unwrap_err(),
            JointError::MissingBody(bodies[1])
        );
        assert_eq!(world.impulse_joints.len(), 0);
    }

    #[test]
    fn removed_joint_is_no_longer_found() {
        let (mut world, bodies) = world_with_bodies();
        let handle =
            create_revolute_joint(&mut world, bodies, [0.0; 3], [0.0; 3], Vector::y(), None, false)
                .unwrap();

        assert!(world.remove_impulse_joint(handle.0, false).is_some());
        assert!(handle.get(&world.impulse_joints).is_none());
    }
}
