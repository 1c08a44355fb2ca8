use crate::{
    bodies::BodyHandle,
    bundle::JointSettings,
    events::{JointEvent, JointEventKind, JointEvents},
    joints::{JointComponent, JointHandle},
    rapier::dynamics::{ImpulseJointHandle, RigidBodyHandle},
    world::PhysicsWorldRes,
};

use specs::{
    storage::ComponentEvent, world::Index, BitSet, Entities, Entity, Join, Read, ReadStorage,
    ReaderId, System, SystemData, World, WorldExt, Write, WriteExpect, WriteStorage,
};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug)]
struct CreatedJoint {
    entity: Entity,
    handle: ImpulseJointHandle,
    bodies: [RigidBodyHandle; 2],
}

/// The `SyncJointsToPhysicsSystem` creates and removes the joints declared by
/// `JointComponent`s in the `PhysicsWorldRes`.
///
/// A joint is created as soon as both of its entities carry a `BodyHandle` to a
/// live rigid body, and a `JointHandle` is attached to the joint entity. It is
/// removed when the `JointComponent` is removed or replaced, or when either body
/// goes away, in which case it waits for both bodies to be available again.
#[derive(Default, new)]
pub struct SyncJointsToPhysicsSystem {
    #[new(default)]
    joints_reader_id: Option<ReaderId<ComponentEvent>>,
    // Joint components waiting for their bodies.
    #[new(default)]
    pending: BitSet,
    #[new(default)]
    created: HashMap<Index, CreatedJoint>,
}

impl<'s> System<'s> for SyncJointsToPhysicsSystem {
    type SystemData = (
        WriteExpect<'s, PhysicsWorldRes>,
        Read<'s, JointSettings>,
        Write<'s, JointEvents>,
        Entities<'s>,
        ReadStorage<'s, JointComponent>,
        ReadStorage<'s, BodyHandle>,
        WriteStorage<'s, JointHandle>,
    );

    fn run(&mut self, data: Self::SystemData) {
        let (mut physics_world, settings, mut events, entities, joints, bodies, mut handles) = data;

        let storage_events: Vec<ComponentEvent> = match self.joints_reader_id.as_mut() {
            Some(reader) => joints.channel().read(reader).cloned().collect(),
            None => {
                error!("SyncJointsToPhysicsSystem has to be set up before running.");
                return;
            }
        };

        let mut teardown = Teardown {
            physics_world: &mut *physics_world,
            events: &mut *events,
            entities: &entities,
            handles: &mut handles,
            wake_up: settings.wake_up,
        };

        for event in storage_events {
            match event {
                ComponentEvent::Inserted(id) | ComponentEvent::Modified(id) => {
                    trace!("Detected inserted or modified joint with id {}", id);

                    if let Some(created) = self.created.remove(&id) {
                        teardown.run(created.entity, created.handle);
                    }
                    self.pending.add(id);
                }
                ComponentEvent::Removed(id) => {
                    trace!("Detected removed joint with id {}", id);

                    if let Some(created) = self.created.remove(&id) {
                        teardown.run(created.entity, created.handle);
                    }
                    self.pending.remove(id);
                }
            }
        }

        // Joints whose bodies changed or disappeared go back to waiting.
        let stale: Vec<Index> = self
            .created
            .iter()
            .filter(|(_, created)| {
                let physics_world = &*teardown.physics_world;
                let joint_exists = physics_world.impulse_joint(created.handle).is_some();
                let current_bodies = joints
                    .get(created.entity)
                    .and_then(|joint| resolve_bodies(joint, &entities, &bodies, physics_world));
                !joint_exists || current_bodies != Some(created.bodies)
            })
            .map(|(id, _)| *id)
            .collect();

        for id in stale {
            if let Some(created) = self.created.remove(&id) {
                trace!("Bodies of joint with id {} are gone, removing it.", id);

                teardown.run(created.entity, created.handle);
                self.pending.add(id);
            }
        }

        let waiting: Vec<_> = (&entities, &joints, &self.pending)
            .join()
            .map(|(entity, _, id)| (entity, id))
            .collect();

        for (entity, id) in waiting {
            let joint = match joints.get(entity) {
                Some(joint) => joint,
                None => continue,
            };
            let rigid_bodies =
                match resolve_bodies(joint, &entities, &bodies, &*teardown.physics_world) {
                    Some(rigid_bodies) => rigid_bodies,
                    None => continue,
                };

            self.pending.remove(id);

            match joint
                .factory
                .create(rigid_bodies, &mut *teardown.physics_world, settings.wake_up)
            {
                Ok(handle) => {
                    trace!("Created joint {:?} for entity {:?}", handle, entity);

                    self.created.insert(
                        id,
                        CreatedJoint {
                            entity,
                            handle,
                            bodies: rigid_bodies,
                        },
                    );
                    if let Err(err) = teardown.handles.insert(entity, JointHandle(handle)) {
                        error!("Failed to attach JointHandle to {:?}: {}", entity, err);
                    }
                    teardown.events.single_write(JointEvent {
                        entity,
                        kind: JointEventKind::Created(handle),
                    });
                }
                Err(err) => {
                    error!("Failed to create joint for entity {:?}: {}", entity, err);

                    teardown.events.single_write(JointEvent {
                        entity,
                        kind: JointEventKind::Failed(err),
                    });
                }
            }
        }
    }

    fn setup(&mut self, world: &mut World) {
        info!("SyncJointsToPhysicsSystem.setup");
        Self::SystemData::setup(world);

        // initialise required resources
        world
            .entry::<PhysicsWorldRes>()
            .or_insert_with(PhysicsWorldRes::default);

        self.joints_reader_id = Some(world.write_storage::<JointComponent>().register_reader());

        // Joints inserted before setup never show up on the reader.
        let joints = world.read_storage::<JointComponent>();
        for id in joints.mask().join() {
            self.pending.add(id);
        }
    }
}

/// Looks up the rigid bodies of both entities named by `joint`. Returns `None`
/// unless both entities are alive and linked to a body in `physics_world`.
fn resolve_bodies(
    joint: &JointComponent,
    entities: &Entities,
    bodies: &ReadStorage<BodyHandle>,
    physics_world: &PhysicsWorldRes,
) -> Option<[RigidBodyHandle; 2]> {
    let mut resolved = [RigidBodyHandle::invalid(); 2];

    for (slot, entity) in resolved.iter_mut().zip(joint.bodies.iter()) {
        if !entities.is_alive(*entity) {
            return None;
        }
        let body = bodies.get(*entity).filter(|body| body.is_alive(physics_world))?;
        *slot = body.0;
    }

    Some(resolved)
}

struct Teardown<'a, 'd> {
    physics_world: &'a mut PhysicsWorldRes,
    events: &'a mut JointEvents,
    entities: &'a Entities<'d>,
    handles: &'a mut WriteStorage<'d, JointHandle>,
    wake_up: bool,
}

impl Teardown<'_, '_> {
    // Removes the joint created for `entity`, if rapier didn't already, and
    // detaches its handle.
    fn run(&mut self, entity: Entity, handle: ImpulseJointHandle) {
        if self
            .physics_world
            .remove_impulse_joint(handle, self.wake_up)
            .is_none()
        {
            trace!("Joint {:?} was already removed from the physics world.", handle);
        }
        if self.entities.is_alive(entity) {
            self.handles.remove(entity);
        }

        self.events.single_write(JointEvent {
            entity,
            kind: JointEventKind::Removed(handle),
        });
    }
}
