//! Story milestones. The marker only moves forward.

use game_core::Milestone;

pub const START: Milestone = Milestone(0);
/// The doctor shared his worries at his door.
pub const MET_DOCTOR: Milestone = Milestone(10);
/// Slept at home and woke to find the doctor gone.
pub const WOKE_UP: Milestone = Milestone(15);
pub const QUESTIONED: Milestone = Milestone(20);
/// The slingshot drew the police away from the doctor's door.
pub const POLICE_LURED: Milestone = Milestone(30);
/// The chemical is in the bag; leaving the lab ends in the abduction.
pub const CHEMICAL_FOUND: Milestone = Milestone(40);
pub const TOILET_JAMMED: Milestone = Milestone(50);
pub const GUARD_LURED: Milestone = Milestone(60);
pub const DOOR_CORRODED: Milestone = Milestone(70);
pub const ESCAPED: Milestone = Milestone(80);
