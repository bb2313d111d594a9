//! Fragment-based list rendering.
//!
//! # Responsibility
//! - Build one `<li>` row per task with toggle and delete controls.
//! - Partition a snapshot into the active and done lists.
//!
//! # Invariants
//! - Rows carry the task id in `data-id`; controls never carry it themselves.
//! - Snapshot order is preserved inside each list.

use crate::model::task::Task;
use crate::view::dom::{Element, Fragment};

pub const ROW_ID_ATTR: &str = "data-id";
pub const TOGGLE_CLASS: &str = "task-toggle";
pub const TITLE_CLASS: &str = "task-title";
pub const DELETE_CLASS: &str = "task-delete";

/// Builds the row for one task.
pub fn render_task_row(task: &Task) -> Element {
    let mut checkbox = Element::new("input")
        .with_attr("type", "checkbox")
        .with_attr("class", TOGGLE_CLASS);
    if task.done {
        checkbox.set_attribute("checked", "");
    }
    checkbox.set_attribute("aria-label", task.title.as_str());

    Element::new("li")
        .with_attr(ROW_ID_ATTR, task.id.as_str())
        .with_child(checkbox)
        .with_child(
            Element::new("span")
                .with_attr("class", TITLE_CLASS)
                .with_text(task.title.as_str()),
        )
        .with_child(
            Element::new("button")
                .with_attr("type", "button")
                .with_attr("class", DELETE_CLASS)
                .with_text("Delete"),
        )
}

/// Builds a detached fragment holding one row per task.
pub fn task_fragment<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Fragment {
    tasks.into_iter().map(render_task_row).collect()
}

/// Splits a snapshot into `(active, done)`, keeping snapshot order in each.
pub fn partition_tasks(tasks: &[Task]) -> (Vec<&Task>, Vec<&Task>) {
    tasks.iter().partition(|task| task.is_active())
}

/// Replaces every row in `list` with rows for `tasks`.
pub fn fill_list(list: &mut Element, tasks: &[&Task]) {
    list.replace_children();
    list.append_fragment(task_fragment(tasks.iter().copied()));
}

/// Replaces the contents of both lists with rows from `tasks`.
pub fn render_lists(tasks: &[Task], active_list: &mut Element, done_list: &mut Element) {
    let (active, done) = partition_tasks(tasks);
    fill_list(active_list, &active);
    fill_list(done_list, &done);
}
