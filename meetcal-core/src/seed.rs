//! Default meetings used to seed an empty store.

use crate::meeting::{Category, Meeting};

fn meeting(
    id: u64,
    date: &str,
    title: &str,
    initiator: &str,
    attendees: &[&str],
    time: &str,
    category: Category,
) -> Meeting {
    Meeting {
        id,
        date: date.to_string(),
        title: title.to_string(),
        initiator: initiator.to_string(),
        attendees: attendees.iter().map(|a| a.to_string()).collect(),
        time: time.to_string(),
        is_synced: false,
        category,
    }
}

/// The built-in meeting set (September to November 2025), all unsynced.
pub fn default_meetings() -> Vec<Meeting> {
    use Category::{Client, Internal};

    vec![
        // September 2025
        meeting(1, "2025-09-29", "Team Sync", "Shubham", &["Rahul", "Rohit"], "10:00 AM - 11:00 AM", Internal),
        meeting(2, "2025-09-29", "Client Meeting", "Akshita", &["Sam"], "2:00 PM - 3:00 PM", Client),
        // October 2025
        meeting(10, "2025-10-01", "Daily Standup", "Shubham", &["Team"], "10:00 AM - 10:30 AM", Internal),
        meeting(11, "2025-10-08", "Sprint Planning", "Shubham", &["Team"], "11:00 AM - 12:30 PM", Internal),
        meeting(12, "2025-10-15", "UI/UX Review", "Kanchan", &["Design Team", "Frontend Team"], "2:00 PM - 3:30 PM", Internal),
        meeting(13, "2025-10-22", "Client Demo", "Akshita", &["Client Team", "Product Owners"], "10:00 AM - 11:30 AM", Client),
        meeting(14, "2025-10-31", "Monthly Review & Planning", "Gautami", &["Entire Team"], "4:00 PM - 5:30 PM", Internal),
        // November 2025
        meeting(26, "2025-11-04", "Client Review", "Shubham", &["Rahul", "Akshita"], "2:00 PM - 3:00 PM", Client),
        meeting(27, "2025-11-07", "Q4 Planning Session", "Shubham", &["Management", "Team Leads"], "10:00 AM - 12:00 PM", Internal),
        meeting(28, "2025-11-14", "Technical Workshop", "Rahul", &["Development Team"], "1:00 PM - 3:00 PM", Internal),
        meeting(29, "2025-11-21", "Product Strategy", "Akshita", &["Product Team", "Stakeholders"], "11:00 AM - 1:00 PM", Internal),
        meeting(30, "2025-11-28", "Team Building Activity", "Kanchan", &["All Employees"], "3:00 PM - 6:00 PM", Internal),
    ]
}
