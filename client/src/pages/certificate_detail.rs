//! Certificate view for a single course.
//!
//! Reuses the my-certificates read and picks the certificate whose resolved
//! course id matches the route.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::certificate_card::CertificateSummary;
use crate::pages::certificates::load_certificates;
use crate::state::certificates::CertificatesState;
use crate::util::api_base::ApiConfig;

#[component]
pub fn CertificateDetailPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let params = use_params_map();
    let course_id = move || params.read().get("course_id").unwrap_or_default();
    let certificates = RwSignal::new(CertificatesState::default());

    load_certificates(config, certificates);

    let summary = move || {
        let id = course_id();
        certificates.with(|s| s.find_by_course(&id).map(CertificateSummary::from))
    };

    view! {
        <div class="certificate-detail-page">
            <a class="certificate-detail-page__back" href="/certificates">
                "← All certificates"
            </a>
            <Show when=move || certificates.get().error.is_some()>
                <p class="certificate-detail-page__error">{move || certificates.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !certificates.get().loading
                fallback=move || view! { <p>"Loading certificate..."</p> }
            >
                {move || match summary() {
                    Some(s) => {
                        view! {
                            <article class="certificate-detail">
                                <p class="certificate-detail__eyebrow">"Certificate of Completion"</p>
                                <h1 class="certificate-detail__course">{s.course_name}</h1>
                                <p class="certificate-detail__teacher">{format!("Taught by {}", s.teacher_name)}</p>
                                <dl class="certificate-detail__meta">
                                    <dt>"Certificate No."</dt>
                                    <dd>{s.certificate_number}</dd>
                                    <dt>"Issued"</dt>
                                    <dd>{s.issued_on}</dd>
                                    <dt>"Attendance"</dt>
                                    <dd>{format!("{} ({})", s.attendance, s.attended_days)}</dd>
                                    <dt>"Downloads"</dt>
                                    <dd>{s.downloads}</dd>
                                </dl>
                            </article>
                        }
                            .into_any()
                    }
                    None if certificates.get().error.is_none() => {
                        view! {
                            <p class="certificate-detail-page__missing">
                                "No certificate has been issued for this course."
                            </p>
                        }
                            .into_any()
                    }
                    None => ().into_any(),
                }}
            </Show>
        </div>
    }
}
