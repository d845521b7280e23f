//! Public evaluation explorer: course sidebar plus export detail pane.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two flows share this page:
//! - the course catalog, fetched once on mount;
//! - the export for the course named by the optional `course_id` route
//!   param, fetched on every param change.
//!
//! Route changes between `/evaluations` and `/evaluations/{id}` do not
//! remount this component, so the detail flow is driven by an effect on the
//! route param. Each fetch carries an `EvaluationTicket`; results whose
//! ticket was superseded are dropped.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::course_sidebar::CourseSidebar;
use crate::components::evaluation_table::EvaluationTable;
use crate::net::types::LoadedExport;
use crate::state::evaluations::{CatalogState, DetailPane, EvaluationState, EvaluationTicket};
use crate::util::api_base::ApiConfig;
use crate::util::format::question_count_label;

/// Explorer page; renders instructions until a course is selected.
#[component]
pub fn EvaluationsPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let params = use_params_map();
    let catalog = RwSignal::new(CatalogState::default());
    let evaluation = RwSignal::new(EvaluationState::default());

    let selected = Memo::new(move |_| params.read().get("course_id").filter(|id| !id.is_empty()));

    load_catalog(config.clone(), catalog);

    let detail_config = config.clone();
    Effect::new(move || {
        let next = selected.get();
        if evaluation.with_untracked(|s| s.selected().map(str::to_owned)) == next && next.is_some() {
            return;
        }

        // PHASE: CLEAR BEFORE FETCH
        // WHY: the previous course's export must disappear on the same
        // tick as the route change, even if its fetch is still in flight.
        let mut ticket = None;
        evaluation.update(|s| ticket = s.select(next));
        if let Some(ticket) = ticket {
            load_export(detail_config.clone(), evaluation, ticket);
        }
    });

    view! {
        <div class="evaluations-page">
            <CourseSidebar catalog=catalog selected=selected/>
            <main class="evaluations-page__detail">
                {move || {
                    let route = selected.get();
                    match evaluation.with(|s| s.pane_for(route.as_deref())) {
                        DetailPane::Instructions => view! { <Instructions/> }.into_any(),
                        DetailPane::Loading => {
                            view! { <p class="evaluations-page__loading">"Loading evaluation data..."</p> }.into_any()
                        }
                        DetailPane::Error => {
                            view! {
                                <p class="evaluations-page__error">{evaluation.get().error.unwrap_or_default()}</p>
                            }
                                .into_any()
                        }
                        DetailPane::Loaded => match evaluation.get().export {
                            Some(loaded) => {
                                let api_url = config.evaluation_export_url(route.as_deref().unwrap_or_default());
                                view! { <ExportDetail loaded=loaded api_url=api_url/> }.into_any()
                            }
                            None => ().into_any(),
                        },
                    }
                }}
            </main>
        </div>
    }
}

/// Placeholder pane shown when no course is selected.
#[component]
fn Instructions() -> impl IntoView {
    view! {
        <div class="evaluations-page__instructions">
            <h2>"Course Evaluations"</h2>
            <p>"Select a course from the list to view its evaluation responses."</p>
            <p>"Each export is also available as JSON from the public API."</p>
        </div>
    }
}

/// Header, API affordances and table for a loaded export.
#[component]
fn ExportDetail(loaded: LoadedExport, api_url: String) -> impl IntoView {
    let course = loaded.export.course.clone();
    let total = loaded.export.total_responses;
    let questions = question_count_label(loaded.export.question_count());
    let copied = RwSignal::new(false);

    let copy_url = api_url.clone();
    let on_copy = move |_| {
        let url = crate::util::api_base::absolute_url(&crate::util::api_base::current_origin(), &copy_url);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::util::clipboard::copy_text(&url).await {
                copied.set(true);
                gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                copied.set(false);
            } else {
                leptos::logging::warn!("clipboard write failed");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = url;
    };

    let open_url = api_url.clone();
    let on_open = move |_| crate::util::clipboard::open_in_new_tab(&open_url);

    view! {
        <header class="export-detail__header">
            <div>
                <h2 class="export-detail__title">{course.title}</h2>
                <p class="export-detail__meta">
                    {course.course_code}
                    " · "
                    {course.teacher_name}
                </p>
            </div>
            <div class="export-detail__stats">
                <span class="export-detail__stat">
                    <span class="export-detail__stat-value">{total}</span>
                    <span class="export-detail__stat-label">"Responses"</span>
                </span>
                <span class="export-detail__stat">
                    <span class="export-detail__stat-value">{questions}</span>
                    <span class="export-detail__stat-label">"Questions"</span>
                </span>
            </div>
        </header>
        <div class="export-detail__api">
            <code class="export-detail__url">{api_url}</code>
            <button class="btn" on:click=on_copy>
                {move || if copied.get() { "Copied" } else { "Copy API URL" }}
            </button>
            <button class="btn" on:click=on_open>
                "Open JSON"
            </button>
        </div>
        <EvaluationTable loaded=loaded/>
    }
}

/// Fetch the course catalog once and store the outcome in `catalog`.
fn load_catalog(config: ApiConfig, catalog: RwSignal<CatalogState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_public_courses(&config).await;
            if let Err(e) = &result {
                leptos::logging::warn!("course catalog fetch failed: {e}");
            }
            catalog.update(|s| s.finish(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, catalog);
    }
}

/// Fetch the export for `ticket` and apply it if the ticket is still current.
fn load_export(config: ApiConfig, evaluation: RwSignal<EvaluationState>, ticket: EvaluationTicket) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::evaluations::ExportOutcome;

        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_evaluation_export(&config, ticket.course_id()).await;
            if let Err(e) = &result {
                leptos::logging::warn!("evaluation export fetch failed for {}: {e}", ticket.course_id());
            }
            match crate::state::evaluations::apply_export(evaluation, &ticket, result) {
                ExportOutcome::Applied => {}
                ExportOutcome::Stale => {
                    leptos::logging::log!("dropping stale export for course {}", ticket.course_id());
                }
                ExportOutcome::Disposed => {
                    leptos::logging::log!("explorer unmounted before export for {} arrived", ticket.course_id());
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, evaluation, ticket);
    }
}
