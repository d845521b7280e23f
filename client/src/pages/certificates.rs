//! Certificate gallery for the signed-in student.
//!
//! SYSTEM CONTEXT
//! ==============
//! Issues one `GET /certificates/my-certificates` per mount and renders the
//! result as a card grid, an empty-state call-to-action, or an inline error.
//! There is no refresh control; remounting the route is the only retry.

use leptos::prelude::*;

use crate::components::certificate_card::{CertificateCard, gallery_summaries};
use crate::state::certificates::{CertificatesState, GalleryView};
use crate::util::api_base::ApiConfig;

/// Route of the course catalog the empty state points students to.
pub const COURSE_LIST_PATH: &str = "/courses";

/// Gallery page listing every certificate the user has earned.
#[component]
pub fn CertificatesPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let certificates = RwSignal::new(CertificatesState::default());

    load_certificates(config, certificates);

    view! {
        <div class="certificates-page">
            <header class="certificates-page__header">
                <h1>"My Certificates"</h1>
                <p class="certificates-page__subtitle">
                    "Certificates are issued automatically when you complete a course."
                </p>
            </header>
            {move || match certificates.with(CertificatesState::view) {
                GalleryView::Loading => {
                    view! { <p class="certificates-page__loading">"Loading certificates..."</p> }.into_any()
                }
                GalleryView::Error => {
                    view! {
                        <p class="certificates-page__error">
                            {certificates.get().error.unwrap_or_default()}
                        </p>
                    }
                        .into_any()
                }
                GalleryView::Empty => view! { <EmptyGallery/> }.into_any(),
                GalleryView::Grid => {
                    view! {
                        <div class="certificates-page__grid">
                            {certificates
                                .with(|s| gallery_summaries(&s.items))
                                .into_iter()
                                .map(|summary| view! { <CertificateCard summary=summary/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Call-to-action shown when the user has no certificates yet.
#[component]
fn EmptyGallery() -> impl IntoView {
    view! {
        <div class="certificates-page__empty">
            <span class="certificates-page__empty-icon" aria-hidden="true">"📜"</span>
            <h2>"No certificates yet"</h2>
            <p>"Complete a course with sufficient attendance to earn your first certificate."</p>
            <a class="btn btn--primary" href=COURSE_LIST_PATH>
                "Browse Courses"
            </a>
        </div>
    }
}

/// Fetch the certificate list once and store the outcome in `certificates`.
pub(crate) fn load_certificates(config: ApiConfig, certificates: RwSignal<CertificatesState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_my_certificates(&config).await;
            if let Err(e) = &result {
                leptos::logging::warn!("certificate fetch failed: {e}");
            }
            certificates.update(|s| s.finish(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, certificates);
    }
}
