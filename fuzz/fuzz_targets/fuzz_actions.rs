#![no_main]

//! Fuzz target for add/toggle/delete with arbitrary form input.
//!
//! Exercises trimming, date parsing and comma splitting with any Unicode, and checks that a
//! rejected draft never changes a collection or the captain's experience.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use captains_log::models::{EventDraft, EventKind, Priority, ProjectDraft, TaskDraft};
use captains_log::store::MemoryStore;
use captains_log::Dashboard;

#[derive(Arbitrary, Debug)]
enum Op {
    AddTask { title: String, due: String, priority: u8 },
    AddProject { title: String, deadline: String, crew: String, milestones: String },
    AddEvent { title: String, date: String, time: String, kind: u8, location: String },
    Toggle(u8),
    DeleteTask(u8),
    DeleteProject(u8),
    DeleteEvent(u8),
}

fn pick<T: Copy>(options: &[T], n: u8) -> T {
    options[n as usize % options.len()]
}

fuzz_target!(|ops: Vec<Op>| {
    let mut d = Dashboard::open(MemoryStore::new());

    for op in ops.into_iter().take(64) {
        let before = (d.tasks().len(), d.projects().len(), d.events().len(), d.state());
        let rejected = match op {
            Op::AddTask { title, due, priority } => d
                .add_task(TaskDraft {
                    title,
                    priority: pick(&Priority::ALL, priority),
                    due_date: due,
                })
                .is_err(),
            Op::AddProject { title, deadline, crew, milestones } => d
                .add_project(ProjectDraft {
                    title,
                    description: String::new(),
                    deadline,
                    team_members: crew,
                    milestones,
                })
                .is_err(),
            Op::AddEvent { title, date, time, kind, location } => d
                .add_event(EventDraft {
                    title,
                    date,
                    time,
                    kind: pick(&EventKind::ALL, kind),
                    location,
                    description: String::new(),
                })
                .is_err(),
            Op::Toggle(n) => {
                let id = d.tasks().get(n as usize).map(|t| t.id.clone());
                if let Some(id) = id {
                    d.toggle_task(&id);
                }
                false
            }
            Op::DeleteTask(n) => {
                let id = d.tasks().get(n as usize).map(|t| t.id.clone());
                d.delete_task(&id.unwrap_or_default());
                false
            }
            Op::DeleteProject(n) => {
                let id = d.projects().get(n as usize).map(|p| p.id.clone());
                d.delete_project(&id.unwrap_or_default());
                false
            }
            Op::DeleteEvent(n) => {
                let id = d.events().get(n as usize).map(|e| e.id.clone());
                d.delete_event(&id.unwrap_or_default());
                false
            }
        };

        if rejected {
            let after = (d.tasks().len(), d.projects().len(), d.events().len(), d.state());
            assert_eq!(before, after);
        }
    }
});
