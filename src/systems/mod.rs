/*!
Systems keeping the physics world in line with the joints declared in Specs.
*/

mod sync_joints_to_physics;

pub use self::sync_joints_to_physics::SyncJointsToPhysicsSystem;
