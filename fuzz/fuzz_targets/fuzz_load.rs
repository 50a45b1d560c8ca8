#![no_main]

//! Fuzz target for loading saved state.
//!
//! Whatever bytes end up under the storage keys (hand edits, truncated writes, other apps),
//! opening the dashboard must fall back to seed data instead of panicking.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use captains_log::gamification::level_for;
use captains_log::store::{
    MemoryStore, COINS_KEY, EVENTS_KEY, LEVEL_KEY, PROJECTS_KEY, TASKS_KEY, XP_KEY,
};
use captains_log::Dashboard;

#[derive(Arbitrary, Debug)]
struct StoredValues {
    tasks: Option<String>,
    projects: Option<String>,
    events: Option<String>,
    level: Option<String>,
    xp: Option<String>,
    coins: Option<String>,
    award: u16,
}

fuzz_target!(|input: StoredValues| {
    let mut store = MemoryStore::new();
    let cells = [
        (TASKS_KEY, &input.tasks),
        (PROJECTS_KEY, &input.projects),
        (EVENTS_KEY, &input.events),
        (LEVEL_KEY, &input.level),
        (XP_KEY, &input.xp),
        (COINS_KEY, &input.coins),
    ];
    for (key, value) in cells {
        if let Some(value) = value {
            store = store.with(key, value);
        }
    }

    let mut dashboard = Dashboard::open(store);
    let _ = dashboard.export().to_json();

    // After any award the level must agree with experience again.
    dashboard.add_experience(u32::from(input.award) + 1);
    let state = dashboard.state();
    assert!(state.captain_level >= level_for(state.experience_points));
});
