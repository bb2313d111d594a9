//! Page wiring: event handling and full re-render.
//!
//! # Responsibility
//! - Own the page state the host mirrors into its document: title, form
//!   input, validation message, analytics line and the two task lists.
//! - Turn submit/click/change events into store calls, then re-render.
//!
//! # Invariants
//! - Every handler that mutates the store re-renders from a fresh snapshot
//!   before returning.
//! - Blank submissions never reach the store and never write storage.
//! - Click and change targets are resolved against the lists wrapper only.

use crate::config::PageConfig;
use crate::model::task::{is_blank, trim_title, Task, TaskId};
use crate::storage::KeyValueStorage;
use crate::store::task_store::{StoreResult, TaskStore};
use crate::theme::{Theme, ThemePreference};
use crate::view::dom::{Element, NodePath};
use crate::view::render::{fill_list, partition_tasks, DELETE_CLASS, ROW_ID_ATTR, TOGGLE_CLASS};
use crate::view::summary::summarize;
use log::{debug, info};
use std::rc::Rc;

/// Inline message shown when the add form is submitted blank.
pub const BLANK_TITLE_MESSAGE: &str = "Please enter a non-empty task title.";

pub const LISTS_WRAPPER_ID: &str = "lists-wrapper";
pub const ACTIVE_LIST_ID: &str = "active-list";
pub const DONE_LIST_ID: &str = "done-list";

/// User interaction delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The text input changed to the given value.
    Input(String),
    /// The add form was submitted.
    Submit,
    /// A click inside the lists wrapper, addressed relative to it.
    Click(NodePath),
    /// A change event inside the lists wrapper, addressed relative to it.
    ///
    /// Hosts report a checkbox gesture either as a click or as a change,
    /// never both, or the task would flip twice.
    Change(NodePath),
    /// The light/dark switch was pressed.
    ToggleTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowControl {
    Toggle,
    Delete,
}

/// The single page instance a host wires to its document.
pub struct Page<S: KeyValueStorage> {
    storage: Rc<S>,
    store: TaskStore<Rc<S>>,
    theme: ThemePreference<Rc<S>>,
    title: String,
    input_value: String,
    error_message: String,
    analytics_text: String,
    lists: Element,
}

impl<S: KeyValueStorage> Page<S> {
    /// Hydrates task and theme state from `storage` and renders once.
    pub fn mount(storage: S, config: &PageConfig) -> Self {
        let storage = Rc::new(storage);
        let store = TaskStore::open(Rc::clone(&storage), config.storage_key.as_str());
        let theme = ThemePreference::open(Rc::clone(&storage), config.theme_key.as_str());

        let mut page = Self {
            storage,
            store,
            theme,
            title: config.effective_title(),
            input_value: String::new(),
            error_message: String::new(),
            analytics_text: String::new(),
            lists: lists_wrapper(),
        };
        page.rerender();
        info!(
            "event=page_mount module=view status=ok count={} theme={}",
            page.store.len(),
            page.theme.theme().as_str()
        );
        page
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn store(&self) -> &TaskStore<Rc<S>> {
        &self.store
    }

    /// Fresh snapshot of the task collection.
    pub fn tasks(&self) -> Vec<Task> {
        self.store.list()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    /// Current validation message; empty when none is shown.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn analytics_text(&self) -> &str {
        &self.analytics_text
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// The element click and change paths are resolved against.
    pub fn lists(&self) -> &Element {
        &self.lists
    }

    pub fn active_list(&self) -> Option<&Element> {
        self.lists.find_by_id(ACTIVE_LIST_ID)
    }

    pub fn done_list(&self) -> Option<&Element> {
        self.lists.find_by_id(DONE_LIST_ID)
    }

    /// Path to a row control, for hosts and tests that need to address one.
    pub fn control_path(&self, id: &TaskId, control_class: &str) -> Option<NodePath> {
        let row_path = self.lists.find_path(|element| {
            element.tag() == "li" && element.get_attribute(ROW_ID_ATTR) == Some(id.as_str())
        })?;
        let chain = self.lists.resolve(&row_path)?;
        let row = chain.last()?;
        let index = row
            .children()
            .iter()
            .position(|child| child.as_element().is_some_and(|el| el.has_class(control_class)))?;

        let mut indices = row_path.indices().to_vec();
        indices.push(index);
        Some(NodePath::new(indices))
    }

    /// Handles one user event to completion, including re-render.
    ///
    /// # Errors
    /// - Returns the store error when persisting a mutation fails. Tasks,
    ///   lists and the input value stay as they were; a validation message
    ///   shown before the failed submit is already cleared.
    pub fn dispatch(&mut self, event: UiEvent) -> StoreResult<()> {
        match event {
            UiEvent::Input(value) => {
                self.input_value = value;
                Ok(())
            }
            UiEvent::Submit => self.handle_submit(),
            UiEvent::Click(path) => self.handle_click(&path),
            UiEvent::Change(path) => self.handle_change(&path),
            UiEvent::ToggleTheme => {
                self.theme.toggle()?;
                Ok(())
            }
        }
    }

    /// Rebuilds analytics and both lists from a fresh snapshot.
    pub fn rerender(&mut self) {
        let tasks = self.store.list();
        self.analytics_text = summarize(&tasks).analytics_text();

        let (active, done) = partition_tasks(&tasks);
        if let Some(list) = self.lists.find_by_id_mut(ACTIVE_LIST_ID) {
            fill_list(list, &active);
        }
        if let Some(list) = self.lists.find_by_id_mut(DONE_LIST_ID) {
            fill_list(list, &done);
        }
        debug!(
            "event=page_render module=view status=ok active={} done={}",
            active.len(),
            done.len()
        );
    }

    /// Builds the full page tree.
    pub fn document(&self) -> Element {
        Element::new("main")
            .with_attr("data-theme", self.theme.theme().as_str())
            .with_child(
                Element::new("h1")
                    .with_attr("id", "app-title")
                    .with_text(self.title.as_str()),
            )
            .with_child(
                Element::new("form")
                    .with_attr("id", "add-form")
                    .with_child(
                        Element::new("input")
                            .with_attr("id", "task-input")
                            .with_attr("type", "text")
                            .with_attr("value", self.input_value.as_str()),
                    )
                    .with_child(
                        Element::new("button")
                            .with_attr("type", "submit")
                            .with_text("Add"),
                    ),
            )
            .with_child(
                Element::new("p")
                    .with_attr("id", "error")
                    .with_attr("role", "alert")
                    .with_text(self.error_message.as_str()),
            )
            .with_child(
                Element::new("p")
                    .with_attr("id", "analytics")
                    .with_text(self.analytics_text.as_str()),
            )
            .with_child(self.lists.clone())
            .with_child(
                Element::new("button")
                    .with_attr("id", "theme-toggle")
                    .with_attr("type", "button")
                    .with_text(match self.theme.theme() {
                        Theme::Light => "Dark mode",
                        Theme::Dark => "Light mode",
                    }),
            )
    }

    pub fn to_html(&self) -> String {
        self.document().to_html()
    }

    fn handle_submit(&mut self) -> StoreResult<()> {
        if is_blank(&self.input_value) {
            self.error_message = BLANK_TITLE_MESSAGE.to_string();
            info!("event=task_submit module=view status=rejected reason=blank_title");
            return Ok(());
        }

        let task = Task::with_id(TaskId::generate(), trim_title(&self.input_value));
        self.error_message.clear();
        self.store.add(task)?;
        self.input_value.clear();
        self.rerender();
        Ok(())
    }

    fn handle_click(&mut self, path: &NodePath) -> StoreResult<()> {
        let Some((control, id)) = self.row_control_at(path) else {
            return Ok(());
        };

        match control {
            RowControl::Delete => self.store.remove(&id)?,
            RowControl::Toggle => self.store.toggle(&id)?,
        };
        self.rerender();
        Ok(())
    }

    fn handle_change(&mut self, path: &NodePath) -> StoreResult<()> {
        match self.row_control_at(path) {
            Some((RowControl::Toggle, id)) => {
                self.store.toggle(&id)?;
                self.rerender();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Resolves an event target to a row control and the owning row's id.
    fn row_control_at(&self, path: &NodePath) -> Option<(RowControl, TaskId)> {
        let chain = self.lists.resolve(path)?;
        let (target, ancestors) = chain.split_last()?;

        let control = if target.matches("button", DELETE_CLASS) {
            RowControl::Delete
        } else if target.matches("input", TOGGLE_CLASS) {
            RowControl::Toggle
        } else {
            return None;
        };

        let row = ancestors.iter().rev().find(|element| element.tag() == "li")?;
        let id = row.get_attribute(ROW_ID_ATTR)?;
        Some((control, TaskId::from(id)))
    }
}

fn lists_wrapper() -> Element {
    Element::new("div")
        .with_attr("id", LISTS_WRAPPER_ID)
        .with_child(
            Element::new("section")
                .with_child(Element::new("h2").with_text("Active"))
                .with_child(Element::new("ul").with_attr("id", ACTIVE_LIST_ID)),
        )
        .with_child(
            Element::new("section")
                .with_child(Element::new("h2").with_text("Done"))
                .with_child(Element::new("ul").with_attr("id", DONE_LIST_ID)),
        )
}
