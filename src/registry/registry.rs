use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, info};

use super::models::{ConnectionId, Room};

/// Result of joining a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
    /// True for the first connection to join a fresh room instance
    pub is_mentor: bool,
    /// Member count after the join, for the presence broadcast
    pub member_count: usize,
}

/// Result of removing a connection from its room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// The connection had never completed a join; nothing to do
    NotFound,
    /// The mentor left: the room has been torn down and the listed
    /// members need a mentor-left notification
    MentorLeft {
        room_id: String,
        remaining: Vec<ConnectionId>,
    },
    /// A student left and members remain; broadcast the new count
    StudentLeft {
        room_id: String,
        remaining_count: usize,
    },
    /// The last member left; the room was deleted with no audience
    RoomEmptied { room_id: String },
}

#[derive(Debug, Default)]
struct RegistryInner {
    rooms: HashMap<String, Room>,
    /// Reverse index for O(1) disconnect reconciliation
    memberships: HashMap<ConnectionId, String>,
}

/// Authoritative in-memory table of active rooms and their membership
///
/// Sole owner of shared session state. All mutation goes through the
/// methods below; the lock is never held across an await point, so the
/// per-room event order seen here is exactly server arrival order.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    inner: Mutex<RegistryInner>,
}

impl RoomRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a connection to a room, creating the room if absent
    ///
    /// Never rejects. Role policy is first-join-wins: the joiner becomes
    /// mentor iff the room has no mentor recorded, which in steady state
    /// only happens on room creation.
    pub fn join(&self, room_id: &str, connection_id: ConnectionId) -> JoinOutcome {
        let mut inner = self.inner.lock().unwrap();

        let room = inner
            .rooms
            .entry(room_id.to_string())
            .or_insert_with(|| Room::new(room_id.to_string()));

        room.members.insert(connection_id);
        let is_mentor = room.mentor.is_none();
        if is_mentor {
            room.mentor = Some(connection_id);
        }
        let member_count = room.member_count();

        // Last join wins for the reverse index; duplicate joins are not
        // detected, matching the join contract
        inner.memberships.insert(connection_id, room_id.to_string());

        info!(
            room_id = %room_id,
            connection_id = %connection_id,
            is_mentor = is_mentor,
            member_count = member_count,
            "Connection joined room"
        );

        JoinOutcome {
            is_mentor,
            member_count,
        }
    }

    /// Removes a connection from whichever room contains it
    ///
    /// Mentor departure tears the room down instead of promoting a
    /// student; the torn-down members are purged from the reverse index
    /// so their own later disconnects become no-ops.
    pub fn leave(&self, connection_id: ConnectionId) -> LeaveOutcome {
        let mut inner = self.inner.lock().unwrap();

        let Some(room_id) = inner.memberships.remove(&connection_id) else {
            debug!(connection_id = %connection_id, "Leave for unknown connection");
            return LeaveOutcome::NotFound;
        };

        let Some(room) = inner.rooms.get_mut(&room_id) else {
            // Index entry outlived its room; treat as already gone
            debug!(room_id = %room_id, "Leave for already-deleted room");
            return LeaveOutcome::NotFound;
        };

        room.members.remove(&connection_id);

        if room.is_mentor(connection_id) {
            let remaining: Vec<ConnectionId> = room.members.iter().copied().collect();
            inner.rooms.remove(&room_id);
            for member in &remaining {
                inner.memberships.remove(member);
            }
            info!(
                room_id = %room_id,
                remaining = remaining.len(),
                "Mentor left, room torn down"
            );
            return LeaveOutcome::MentorLeft { room_id, remaining };
        }

        if room.members.is_empty() {
            inner.rooms.remove(&room_id);
            info!(room_id = %room_id, "Room is now empty, deleting");
            return LeaveOutcome::RoomEmptied { room_id };
        }

        let remaining_count = room.member_count();
        info!(
            room_id = %room_id,
            connection_id = %connection_id,
            remaining_count = remaining_count,
            "Student left room"
        );
        LeaveOutcome::StudentLeft {
            room_id,
            remaining_count,
        }
    }

    /// Current member count of a room, 0 if the room does not exist
    pub fn member_count(&self, room_id: &str) -> usize {
        let inner = self.inner.lock().unwrap();
        inner
            .rooms
            .get(room_id)
            .map(Room::member_count)
            .unwrap_or(0)
    }

    /// Snapshot of a room's members, empty if the room does not exist
    pub fn members(&self, room_id: &str) -> Vec<ConnectionId> {
        let inner = self.inner.lock().unwrap();
        inner
            .rooms
            .get(room_id)
            .map(|room| room.members.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Check whether a room currently exists
    pub fn contains_room(&self, room_id: &str) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.rooms.contains_key(room_id)
    }

    /// The room a connection has joined, if any
    pub fn room_of(&self, connection_id: ConnectionId) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner.memberships.get(&connection_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_first_joiner_becomes_mentor() {
        let registry = RoomRegistry::new();
        let first = ConnectionId::new();
        let second = ConnectionId::new();

        let outcome = registry.join("Async Case", first);
        assert!(outcome.is_mentor);
        assert_eq!(outcome.member_count, 1);

        let outcome = registry.join("Async Case", second);
        assert!(!outcome.is_mentor);
        assert_eq!(outcome.member_count, 2);
    }

    #[test]
    fn test_rooms_are_independent() {
        let registry = RoomRegistry::new();
        let a = ConnectionId::new();
        let b = ConnectionId::new();

        assert!(registry.join("room-1", a).is_mentor);
        assert!(registry.join("room-2", b).is_mentor);
        assert_eq!(registry.member_count("room-1"), 1);
        assert_eq!(registry.member_count("room-2"), 1);
    }

    #[test]
    fn test_leave_unknown_connection_is_noop() {
        let registry = RoomRegistry::new();
        let stranger = ConnectionId::new();

        assert_eq!(registry.leave(stranger), LeaveOutcome::NotFound);
    }

    #[test]
    fn test_student_leave_reports_remaining_count() {
        let registry = RoomRegistry::new();
        let mentor = ConnectionId::new();
        let student1 = ConnectionId::new();
        let student2 = ConnectionId::new();

        registry.join("R", mentor);
        registry.join("R", student1);
        registry.join("R", student2);

        let outcome = registry.leave(student1);
        assert_eq!(
            outcome,
            LeaveOutcome::StudentLeft {
                room_id: "R".to_string(),
                remaining_count: 2,
            }
        );
        assert_eq!(registry.member_count("R"), 2);
    }

    #[test]
    fn test_mentor_leave_tears_down_room() {
        let registry = RoomRegistry::new();
        let mentor = ConnectionId::new();
        let student = ConnectionId::new();

        registry.join("R", mentor);
        registry.join("R", student);

        let outcome = registry.leave(mentor);
        match outcome {
            LeaveOutcome::MentorLeft { room_id, remaining } => {
                assert_eq!(room_id, "R");
                assert_eq!(remaining, vec![student]);
            }
            other => panic!("expected MentorLeft, got {:?}", other),
        }
        assert!(!registry.contains_room("R"));

        // Torn-down members are purged; their own disconnect is a no-op
        assert_eq!(registry.leave(student), LeaveOutcome::NotFound);
    }

    #[test]
    fn test_rejoin_after_teardown_creates_fresh_room() {
        let registry = RoomRegistry::new();
        let mentor = ConnectionId::new();
        let student = ConnectionId::new();
        let newcomer = ConnectionId::new();

        registry.join("R", mentor);
        registry.join("R", student);
        registry.leave(mentor);

        let outcome = registry.join("R", newcomer);
        assert!(outcome.is_mentor);
        assert_eq!(outcome.member_count, 1);
    }

    #[test]
    fn test_last_member_leave_deletes_room_silently() {
        let registry = RoomRegistry::new();
        let mentor = ConnectionId::new();
        let student = ConnectionId::new();

        registry.join("R", mentor);
        registry.join("R", student);

        registry.leave(student);
        let outcome = registry.leave(mentor);

        // A lone mentor leaving still counts as mentor departure
        assert!(matches!(outcome, LeaveOutcome::MentorLeft { remaining, .. } if remaining.is_empty()));
        assert!(!registry.contains_room("R"));
    }

    #[test]
    fn test_mentor_is_always_a_member() {
        let registry = RoomRegistry::new();
        let mentor = ConnectionId::new();

        registry.join("R", mentor);
        let members = registry.members("R");
        assert!(members.contains(&mentor));
    }

    #[test]
    fn test_reverse_index_tracks_room() {
        let registry = RoomRegistry::new();
        let conn = ConnectionId::new();

        assert_eq!(registry.room_of(conn), None);
        registry.join("R", conn);
        assert_eq!(registry.room_of(conn), Some("R".to_string()));
        registry.leave(conn);
        assert_eq!(registry.room_of(conn), None);
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(10)]
    fn test_member_count_matches_joins(#[case] joiners: usize) {
        let registry = RoomRegistry::new();
        for _ in 0..joiners {
            registry.join("R", ConnectionId::new());
        }
        assert_eq!(registry.member_count("R"), joiners);
    }
}
