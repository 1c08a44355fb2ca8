#[macro_use]
extern crate log;

use simple_logger::SimpleLogger;
use specs::{Builder, DispatcherBuilder, World, WorldExt};
use specs_joints::{
    rapier::{dynamics::RigidBodyBuilder, math::Vector},
    BodyHandle, EntityBuilderExt, JointBundle, JointEvents, PhysicsWorldRes,
};

fn main() {
    // initialise the logger for system logs
    SimpleLogger::new().init().unwrap();

    // initialise the Specs world; this will contain our Resources and Entities
    let mut world = World::new();

    let mut builder = DispatcherBuilder::new();
    JointBundle::default().register(&mut world, &mut builder);
    let mut dispatcher = builder.build();
    dispatcher.setup(&mut world);
    let mut joint_event_reader = world.fetch_mut::<JointEvents>().register_reader();

    // a fixed door frame and a door hanging off it
    let frame = world
        .create_entity()
        .with_body(RigidBodyBuilder::fixed().build())
        .build();
    let door = world.create_entity().build();

    // the hinge is declared before the door has a body; it waits for it
    world
        .create_entity()
        .with_revolute_joint(
            frame,
            door,
            [0.5, 0.0, 0.0],
            [-0.5, 0.0, 0.0],
            [0.0, 3.0, 0.0],
            Some([0.0, std::f32::consts::FRAC_PI_2]),
        )
        .build();

    dispatcher.dispatch(&world);
    info!(
        "Joints before the door exists: {}",
        world.read_resource::<PhysicsWorldRes>().impulse_joints.len()
    );

    let body = world
        .write_resource::<PhysicsWorldRes>()
        .insert_body(RigidBodyBuilder::dynamic().translation(Vector::new(1.0, 0.0, 0.0)).build());
    world
        .write_storage::<BodyHandle>()
        .insert(door, BodyHandle(body))
        .unwrap();

    dispatcher.dispatch(&world);

    // check the JointEvents channel for events
    let joint_events = world.read_resource::<JointEvents>();
    for joint_event in joint_events.read(&mut joint_event_reader) {
        info!("Read JointEvent from channel: {:?}", joint_event);
    }
}
