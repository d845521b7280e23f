//! Course list sidebar for the evaluation explorer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Items are plain links to `/evaluations/{course_id}`; the router turns a
//! click into a route change, and the explorer page reacts to the new route
//! param. The sidebar never touches the detail state directly.

use leptos::prelude::*;

use crate::net::types::CourseSummary;
use crate::state::evaluations::{CatalogState, evaluation_path};

/// Sidebar listing every public course, highlighting the selected one.
#[component]
pub fn CourseSidebar(catalog: RwSignal<CatalogState>, #[prop(into)] selected: Signal<Option<String>>) -> impl IntoView {
    view! {
        <aside class="course-sidebar">
            <h2 class="course-sidebar__title">"Courses"</h2>
            <Show when=move || catalog.get().error.is_some()>
                <p class="course-sidebar__error">{move || catalog.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !catalog.get().loading
                fallback=move || view! { <p class="course-sidebar__loading">"Loading courses..."</p> }
            >
                <Show
                    when=move || !catalog.get().items.is_empty() || catalog.get().error.is_some()
                    fallback=move || view! { <p class="course-sidebar__empty">"No courses available."</p> }
                >
                    <ul class="course-sidebar__list">
                        {move || {
                            catalog
                                .get()
                                .items
                                .into_iter()
                                .map(|course| view! { <CourseSidebarItem course=course selected=selected/> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </aside>
    }
}

#[component]
fn CourseSidebarItem(course: CourseSummary, selected: Signal<Option<String>>) -> impl IntoView {
    let href = evaluation_path(&course.id);
    let id = course.id.clone();
    let is_active = move || selected.get().as_deref() == Some(id.as_str());
    let status_class = format!("course-sidebar__status course-sidebar__status--{}", course.status.css_modifier());

    view! {
        <li>
            <a class="course-sidebar__item" class:course-sidebar__item--active=is_active href=href>
                <span class="course-sidebar__item-title">{course.title}</span>
                <span class="course-sidebar__item-code">{course.course_code}</span>
                <span class="course-sidebar__item-teacher">{course.teacher_name}</span>
                <span class="course-sidebar__item-footer">
                    <span class=status_class>{course.status.label()}</span>
                    <span class="course-sidebar__item-count">
                        {format!("{} responses", course.evaluation_count)}
                    </span>
                </span>
            </a>
        </li>
    }
}
