//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    OptionalParamSegment, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    certificate_detail::CertificateDetailPage, certificates::CertificatesPage, evaluations::EvaluationsPage,
};
use crate::util::api_base::ApiConfig;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Resolves the API base address once and provides it to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::from_environment());

    view! {
        <Stylesheet id="leptos" href="/pkg/learnhub-web.css"/>
        <Title text="LearnHub"/>

        <Router>
            <nav class="app-nav">
                <span class="app-nav__brand">"LearnHub"</span>
                <a class="app-nav__link" href="/certificates">"My Certificates"</a>
                <a class="app-nav__link" href="/evaluations">"Evaluations"</a>
            </nav>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("certificates") view=CertificatesPage/>
                <Route path=(StaticSegment("certificates"), ParamSegment("course_id")) view=CertificateDetailPage/>
                <Route path=(StaticSegment("evaluations"), OptionalParamSegment("course_id")) view=EvaluationsPage/>
            </Routes>
        </Router>
    }
}
