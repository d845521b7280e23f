//! Card component for one certificate in the gallery grid.
//!
//! DESIGN
//! ======
//! Display strings are computed once in `CertificateSummary` so the gallery
//! and the detail page format certificates identically.

#[cfg(test)]
#[path = "certificate_card_test.rs"]
mod certificate_card_test;

use leptos::prelude::*;

use crate::net::types::Certificate;
use crate::state::certificates::certificate_detail_path;
use crate::util::format::{format_attendance_days, format_issue_date, format_percentage};

/// Pre-formatted certificate fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateSummary {
    pub course_name: String,
    pub teacher_name: String,
    pub certificate_number: String,
    pub issued_on: String,
    pub attendance: String,
    pub attended_days: String,
    pub downloads: String,
    /// Detail route; `None` when the certificate has no course to key it by.
    pub href: Option<String>,
}

impl From<&Certificate> for CertificateSummary {
    fn from(cert: &Certificate) -> Self {
        Self {
            course_name: cert.course_name.clone(),
            teacher_name: cert.teacher_name.clone(),
            certificate_number: cert.certificate_number.clone(),
            issued_on: format_issue_date(&cert.issued_at),
            attendance: format_percentage(cert.completion_stats.attendance_percentage),
            attended_days: format_attendance_days(&cert.completion_stats),
            downloads: cert.download_count.to_string(),
            href: cert.course_id.as_deref().map(certificate_detail_path),
        }
    }
}

/// One summary per certificate, in list order.
pub fn gallery_summaries(items: &[Certificate]) -> Vec<CertificateSummary> {
    items.iter().map(CertificateSummary::from).collect()
}

/// A certificate card linking to the per-course certificate view.
#[component]
pub fn CertificateCard(summary: CertificateSummary) -> impl IntoView {
    let CertificateSummary {
        course_name,
        teacher_name,
        certificate_number,
        issued_on,
        attendance,
        attended_days,
        downloads,
        href,
    } = summary;

    view! {
        <article class="certificate-card">
            <header class="certificate-card__header">
                <span class="certificate-card__badge" aria-hidden="true">"🎓"</span>
                <h3 class="certificate-card__course">{course_name}</h3>
            </header>
            <dl class="certificate-card__meta">
                <dt>"Teacher"</dt>
                <dd>{teacher_name}</dd>
                <dt>"Certificate No."</dt>
                <dd class="certificate-card__number">{certificate_number}</dd>
                <dt>"Issued"</dt>
                <dd>{issued_on}</dd>
            </dl>
            <div class="certificate-card__stats">
                <span class="certificate-card__stat">
                    <span class="certificate-card__stat-value">{attendance}</span>
                    <span class="certificate-card__stat-label">"Attendance"</span>
                </span>
                <span class="certificate-card__stat">
                    <span class="certificate-card__stat-value">{attended_days}</span>
                    <span class="certificate-card__stat-label">"Attended"</span>
                </span>
                <span class="certificate-card__stat">
                    <span class="certificate-card__stat-value">{downloads}</span>
                    <span class="certificate-card__stat-label">"Downloads"</span>
                </span>
            </div>
            {href
                .map(|href| {
                    view! {
                        <a class="btn btn--primary certificate-card__view" href=href>
                            "View Certificate"
                        </a>
                    }
                })}
        </article>
    }
}
