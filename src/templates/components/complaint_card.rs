use crate::domain::browser::StatusFilter;
use crate::domain::complaint::{relative_time, Complaint, ComplaintStatus};
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub fn status_badge(status: ComplaintStatus) -> Markup {
    html! {
        span class=(format!("badge badge-{}", status.as_str())) { (status.label()) }
    }
}

/// One complaint, with an action per status it can move to.
/// `filter` and `search` are echoed back so the list comes back as it was.
pub fn complaint_card(
    complaint: &Complaint,
    filter: StatusFilter,
    search: &str,
    now: DateTime<Utc>,
) -> Markup {
    html! {
        article class="card complaint-card" id=(format!("complaint-{}", complaint.id)) {
            header class="complaint-card-header" {
                span class=(format!("complaint-type type-{}", complaint.kind.as_str())) {
                    (complaint.kind.label())
                }
                (status_badge(complaint.status))
            }

            div class="card-body" {
                p class="complaint-address" { (complaint.address) }
                p class="complaint-description" { (complaint.description) }
            }

            footer class="complaint-card-footer" {
                span class="complaint-meta" {
                    "Reportado por " strong { (complaint.name) } " · "
                    time datetime=(complaint.created_at.to_rfc3339()) {
                        (relative_time(complaint.created_at, now))
                    }
                }

                div class="complaint-actions" {
                    @for status in ComplaintStatus::ALL {
                        @if status != complaint.status {
                            form
                                method="post"
                                action=(format!("/complaints/{}/status", complaint.id))
                                class="inline"
                            {
                                input type="hidden" name="status" value=(status.as_str());
                                input type="hidden" name="filter" value=(filter.as_str());
                                input type="hidden" name="q" value=(search);
                                button type="submit" class="btn btn-small" {
                                    "Marcar como " (status.label().to_lowercase())
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
