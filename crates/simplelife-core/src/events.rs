//! Local events listing.
//!
//! Static mock data. TODO: replace with a real community-events source.

use serde::Serialize;

/// A local community event.
#[derive(Debug, Clone, Serialize)]
pub struct LocalEvent {
    pub title: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

const LOCAL_EVENTS: [LocalEvent; 4] = [
    LocalEvent {
        title: "Morning Productivity Workshop",
        time: "Tomorrow, 9:00 AM",
        location: "Community Center",
        description: "Learn time management and productivity techniques",
    },
    LocalEvent {
        title: "Yoga in the Park",
        time: "This Weekend, 8:00 AM",
        location: "Central Park",
        description: "Free yoga session for all levels",
    },
    LocalEvent {
        title: "Local Entrepreneurs Meetup",
        time: "Next Tuesday, 6:00 PM",
        location: "Coffee Shop Downtown",
        description: "Network with local business owners",
    },
    LocalEvent {
        title: "Reading Club",
        time: "Next Thursday, 7:00 PM",
        location: "Public Library",
        description: "Discuss this month's book selection",
    },
];

/// The current event listing.
pub fn local_events() -> &'static [LocalEvent] {
    &LOCAL_EVENTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_is_nonempty_and_serializable() {
        let events = local_events();
        assert!(!events.is_empty());
        let json = serde_json::to_string(events).unwrap();
        assert!(json.contains("Yoga in the Park"));
    }
}
