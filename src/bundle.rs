use crate::{events::JointEvents, systems::SyncJointsToPhysicsSystem, world::PhysicsWorldRes};
use specs::{DispatcherBuilder, World, WorldExt};

/// Name under which [`JointBundle`] registers the [`SyncJointsToPhysicsSystem`].
pub const SYNC_JOINTS_TO_PHYSICS_SYSTEM: &str = "sync_joints_to_physics_system";

/// Settings applied to every joint the [`SyncJointsToPhysicsSystem`] creates
/// or removes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct JointSettings {
    /// Whether creating or removing a joint wakes up the bodies it connects.
    ///
    /// default: `true`
    pub wake_up: bool,
}

impl Default for JointSettings {
    fn default() -> Self {
        Self { wake_up: true }
    }
}

/// Bundle used to construct and insert the specs-joints System and Resources
/// into a Dispatcher and its World.
#[must_use]
pub struct JointBundle {
    physics_world: PhysicsWorldRes,
    settings: JointSettings,
    // Exercising superfluous allocations at init-time
    // is better than figuring out the lifetimes
    // for the slice version of this at programming-time.
    deps: Vec<Box<str>>,
}

impl JointBundle {
    /// Constructs a new bundle with an empty physics world and system
    /// dependencies for [`SyncJointsToPhysicsSystem`].
    pub fn new(dep: &[&str]) -> Self {
        Self::from_parts(PhysicsWorldRes::new(), JointSettings::default(), dep)
    }

    /// For fine-grained control over initialization, constructs a bundle given
    /// - `physics_world`, holding bodies you already created,
    /// - `settings`, applied to joint creation and removal,
    /// - `dep`, to configure which systems should execute before the
    ///   [`SyncJointsToPhysicsSystem`].
    pub fn from_parts(physics_world: PhysicsWorldRes, settings: JointSettings, dep: &[&str]) -> Self {
        Self {
            physics_world,
            settings,
            deps: dep.iter().map(|s| Box::from(*s)).collect(),
        }
    }

    /// *Adds* to the dependency list configuring which systems should execute
    /// before the [`SyncJointsToPhysicsSystem`].
    pub fn with_deps(mut self, dep: &[&str]) -> Self {
        self.deps.extend(dep.iter().map(|s| Box::from(*s)));
        self
    }

    pub fn with_settings(mut self, settings: JointSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Registers this bundle data to a `world` and dispatcher `builder`.
    pub fn register(self, world: &mut World, builder: &mut DispatcherBuilder) {
        world.insert(self.physics_world);
        world.insert(self.settings);
        world.insert(JointEvents::new());

        builder.add(
            SyncJointsToPhysicsSystem::new(),
            SYNC_JOINTS_TO_PHYSICS_SYSTEM,
            self.deps
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<&str>>()
                .as_slice(),
        );
    }
}

impl Default for JointBundle {
    fn default() -> Self {
        Self::new(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::EntityBuilderExt, joints::JointHandle, rapier::dynamics::RigidBodyBuilder};
    use specs::{Builder, Join, ReadStorage};

    #[test]
    fn registered_bundle_creates_joints() {
        let mut world = World::new();
        let mut builder = DispatcherBuilder::new();
        JointBundle::default()
            .with_settings(JointSettings { wake_up: false })
            .register(&mut world, &mut builder);
        let mut dispatcher = builder.build();
        dispatcher.setup(&mut world);

        assert_eq!(*world.read_resource::<JointSettings>(), JointSettings { wake_up: false });

        let a = world
            .create_entity()
            .with_body(RigidBodyBuilder::fixed().build())
            .build();
        let b = world
            .create_entity()
            .with_body(RigidBodyBuilder::dynamic().build())
            .build();
        world
            .create_entity()
            .with_revolute_joint(a, b, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0], None)
            .build();

        dispatcher.dispatch(&world);

        let handles: ReadStorage<JointHandle> = world.system_data();
        assert_eq!((&handles).join().count(), 1);
        assert_eq!(world.read_resource::<PhysicsWorldRes>().impulse_joints.len(), 1);
    }

    #[test]
    fn deps_accumulate() {
        let bundle = JointBundle::new(&["a"]).with_deps(&["b", "c"]);
        let deps: Vec<&str> = bundle.deps.iter().map(|s| s.as_ref()).collect();
        assert_eq!(deps, vec!["a", "b", "c"]);
    }
}
